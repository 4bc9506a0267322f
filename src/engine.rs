//=========================================================================
// Prism Engine
//
// Main entry point and game loop.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Game Loop]
//         │                          │
//         ├─ with_config()           ├─ init() / try_init()
//         └─ with_frame_delay()      └─ run_frame() until Stopped,
//                                       then teardown
// ```
//
// Frame sequence (fixed order):
//   1. render active scene      4. update active scene, apply transitions
//   2. keyboard snapshot        5. present
//   3. pump + drain signals     6. sleep frame delay
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{unbounded, Sender};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::config::PrismConfig;
use crate::core::graphics::TextureLoader;
use crate::core::input::Keyboard;
use crate::core::platform_bridge::{
    SignalCollector, StartupError, Surface, SystemSignal, TickControl,
};
use crate::core::resources;
use crate::core::scene::{SceneKey, SceneRegistry, SceneTransition, TransitionQueue};
use crate::platform::WinitSurface;

//=== Constants ===========================================================

/// Sleep at the end of every frame unless configured otherwise.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(16);

//=== LoopState ===========================================================

/// Running flag of the game loop. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Config**: [`PrismConfig::default()`] (800×600 window titled "Prism")
/// - **Frame delay**: 16 ms
///
/// # Examples
///
/// ```no_run
/// use prism_engine::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameScene { Main }
/// impl SceneKey for GameScene {}
///
/// let config = PrismConfig {
///     window_title: "My Game".to_string(),
///     ..PrismConfig::default()
/// };
///
/// let mut engine = EngineBuilder::<GameScene>::new()
///     .with_config(config)
///     .build()?
///     .try_init(|scenes| {
///         scenes.register(GameScene::Main, |_: &TextureLoader| EmptyScene)?;
///         scenes.activate(GameScene::Main)
///     })?;
///
/// engine.run();
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct EngineBuilder<K: SceneKey> {
    config: PrismConfig,
    frame_delay: Duration,
    _phantom: std::marker::PhantomData<K>,
}

impl<K: SceneKey> EngineBuilder<K> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: PrismConfig::default(),
            frame_delay: DEFAULT_FRAME_DELAY,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Replaces the startup configuration.
    pub fn with_config(mut self, config: PrismConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the fixed sleep at the end of every frame.
    ///
    /// No frame-time compensation is applied: a frame takes its work time
    /// plus this delay. `Duration::ZERO` disables the sleep.
    ///
    /// Default: 16 ms
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Opens the window and starts every subsystem.
    ///
    /// # Errors
    ///
    /// Returns a [`StartupError`] naming the subsystem that failed.
    pub fn build(self) -> Result<Engine<K, WinitSurface>, StartupError> {
        self.build_with(WinitSurface::new)
    }

    /// Builds the engine on a custom surface.
    ///
    /// `make_surface` receives the configuration and the sender its OS
    /// events must be delivered on.
    pub fn build_with<S, F>(self, make_surface: F) -> Result<Engine<K, S>, StartupError>
    where
        S: Surface,
        F: FnOnce(&PrismConfig, Sender<SystemSignal>) -> Result<S, StartupError>,
    {
        info!(
            target: "engine",
            "Building engine ({}x{}, frame delay: {:?})",
            self.config.screen_width,
            self.config.screen_height,
            self.frame_delay
        );

        let (tx, rx) = unbounded();
        let mut surface = make_surface(&self.config, tx)?;

        let resource_dir = resources::resource_path(&self.config.resource_locator);
        let textures = match TextureLoader::init(resource_dir) {
            Ok(textures) => textures,
            Err(e) => {
                surface.dispose();
                surface.shutdown();
                return Err(e);
            }
        };

        Ok(Engine {
            scenes: SceneRegistry::new(),
            surface,
            textures,
            keyboard: Keyboard::new(),
            signals: SignalCollector::new(rx),
            transitions: TransitionQueue::new(),
            state: LoopState::Running,
            frame_delay: self.frame_delay,
            torn_down: false,
        })
    }
}

impl<K: SceneKey> Default for EngineBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Prism engine runtime.
///
/// Owns the scene registry, the surface and the image subsystem, and
/// drives the game loop on the calling thread.
///
/// # Architecture
///
/// ```text
/// Engine (calling thread)
///   ├─► SceneRegistry ── active scene (or EmptyScene)
///   ├─► Surface       ── window, renderer, OS events
///   ├─► Keyboard      ← SignalCollector ← Sender<SystemSignal>
///   └─► TextureLoader ── handed to scene factories and updates
/// ```
pub struct Engine<K: SceneKey, S: Surface> {
    scenes: SceneRegistry<K>,
    surface: S,
    textures: TextureLoader,
    keyboard: Keyboard,
    signals: SignalCollector,
    transitions: TransitionQueue<K>,
    state: LoopState,
    frame_delay: Duration,
    torn_down: bool,
}

impl<K: SceneKey, S: Surface> Engine<K, S> {
    //--- Initialization ---------------------------------------------------

    /// Registers and activates scenes before running.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut SceneRegistry<K>),
    {
        info!(target: "engine", "Initializing scenes");
        init_fn(&mut self.scenes);
        self
    }

    /// Like [`init`](Self::init), propagating registry errors.
    pub fn try_init<F, E>(mut self, init_fn: F) -> Result<Self, E>
    where
        F: FnOnce(&mut SceneRegistry<K>) -> Result<(), E>,
    {
        info!(target: "engine", "Initializing scenes");
        init_fn(&mut self.scenes)?;
        Ok(self)
    }

    //--- Accessors --------------------------------------------------------

    pub fn scenes(&self) -> &SceneRegistry<K> {
        &self.scenes
    }

    pub fn scenes_mut(&mut self) -> &mut SceneRegistry<K> {
        &mut self.scenes
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn textures(&self) -> &TextureLoader {
        &self.textures
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    //--- Execution --------------------------------------------------------

    /// Runs frames until the loop stops, then tears everything down.
    ///
    /// # Lifecycle
    ///
    /// 1. Runs [`run_frame`](Self::run_frame) while the state is `Running`
    /// 2. A quit signal, an escape press or a scene quit request stops the
    ///    loop after the current frame completes
    /// 3. Teardown: image subsystem → renderer and window → every
    ///    constructed scene → platform subsystem
    ///
    /// # Panics
    ///
    /// A panic in a scene's render or update propagates unchanged; wrap the
    /// call in `std::panic::catch_unwind` to survive it.
    pub fn run(&mut self) {
        info!(target: "engine", "Starting game loop");

        while self.state == LoopState::Running {
            self.run_frame();
        }

        info!(target: "engine", "Game loop exited");
        self.teardown();
    }

    /// Runs a single frame. Does nothing once the loop has stopped.
    pub fn run_frame(&mut self) -> LoopState {
        if self.state == LoopState::Stopped {
            return self.state;
        }

        //--- 1. Render ----------------------------------------------------
        self.scenes.render_active(self.surface.renderer(), &self.textures);

        //--- 2. Sample input ----------------------------------------------
        self.keyboard.update();

        //--- 3. System signals --------------------------------------------
        self.surface.pump_signals();
        if self.signals.collect_frame(&mut self.keyboard) == TickControl::Exit {
            self.stop();
        }

        //--- 4. Update ----------------------------------------------------
        self.scenes
            .update_active(&self.keyboard, &self.textures, &mut self.transitions);
        self.apply_transitions();

        //--- 5. Present ---------------------------------------------------
        self.surface.present();

        //--- 6. Pace ------------------------------------------------------
        if !self.frame_delay.is_zero() {
            std::thread::sleep(self.frame_delay);
        }

        self.state
    }

    /// Stops the loop after the current frame.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            debug!(target: "engine", "Loop state: Running -> Stopped");
            self.state = LoopState::Stopped;
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn apply_transitions(&mut self) {
        for transition in self.transitions.take() {
            match transition {
                SceneTransition::Activate(key) => {
                    if let Err(e) = self.scenes.activate(key) {
                        warn!(target: "scene", "Ignoring scene switch: {}", e);
                    }
                }
                SceneTransition::Quit => {
                    info!(target: "engine", "Quit requested by scene");
                    self.stop();
                }
            }
        }
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        info!(target: "engine", "Shutting down");

        self.textures.shutdown();
        self.surface.dispose();

        let disposed = self.scenes.dispose_all();
        debug!(target: "engine", "Disposed {} scene(s)", disposed);

        self.surface.shutdown();

        info!(target: "engine", "Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
