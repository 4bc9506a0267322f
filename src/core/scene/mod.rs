//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene lifecycle and keyed scene switching.
//
// Architecture:
//   SceneRegistry
//     ├─ scenes: HashMap<K, SharedScene<K>>  (constructed on first use)
//     └─ active: key + slot handle            (None = EmptyScene)
//
// Flow:
//   render_active() / update_active() → LazyScene::get_or_init()
//     → Scene::render() / Scene::update()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::graphics::{Renderer, TextureLoader};
use crate::core::input::Keyboard;

//=== Module Declarations =================================================

mod lazy;
mod registry;
mod transition_queue;

//=== Public API ==========================================================

pub use lazy::{LazyScene, SceneFactory, SharedScene, SlotState};
pub use registry::{SceneError, SceneKey, SceneRegistry};
pub use transition_queue::{SceneTransition, TransitionQueue};

//=== Disposable Trait ====================================================

/// Objects holding resources that must be released explicitly.
pub trait Disposable {
    /// Releases the resources held by `self`.
    ///
    /// The engine calls this at most once per constructed scene.
    fn dispose(&mut self);
}

//=== Scene Trait =========================================================

/// A unit of renderable, updatable, disposable game state.
///
/// # Minimal Implementation
///
/// ```rust
/// # use prism_engine::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameScene { Main }
/// # impl SceneKey for GameScene {}
/// struct MainScene;
///
/// impl Disposable for MainScene {
///     fn dispose(&mut self) {}
/// }
///
/// impl Scene<GameScene> for MainScene {
///     fn render(&mut self, renderer: &mut dyn Renderer) {
///         renderer.clear(Color::BLACK);
///     }
///
///     fn update(&mut self, _context: &mut SceneContext<'_, GameScene>) {}
/// }
/// ```
pub trait Scene<K: SceneKey>: Disposable {
    /// Draws the scene. Called once per frame before input is sampled.
    fn render(&mut self, renderer: &mut dyn Renderer);

    /// Advances game logic. Called once per frame after signal processing.
    fn update(&mut self, context: &mut SceneContext<'_, K>);
}

//=== SceneContext ========================================================

/// Per-frame data handed to [`Scene::update`].
pub struct SceneContext<'a, K: SceneKey> {
    /// Keyboard state for this frame.
    pub keyboard: &'a Keyboard,

    /// Image subsystem, for scenes that load textures lazily.
    pub textures: &'a TextureLoader,

    transitions: &'a mut TransitionQueue<K>,
}

impl<'a, K: SceneKey> SceneContext<'a, K> {
    pub(crate) fn new(
        keyboard: &'a Keyboard,
        textures: &'a TextureLoader,
        transitions: &'a mut TransitionQueue<K>,
    ) -> Self {
        Self {
            keyboard,
            textures,
            transitions,
        }
    }

    /// Requests activation of `key` once this frame's update completes.
    pub fn switch_to(&mut self, key: K) {
        self.transitions.push(SceneTransition::Activate(key));
    }

    /// Requests the loop to stop once this frame completes.
    pub fn quit(&mut self) {
        self.transitions.push(SceneTransition::Quit);
    }
}

//=== EmptyScene ==========================================================

/// No-op placeholder active until a scene is activated.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyScene;

impl Disposable for EmptyScene {
    fn dispose(&mut self) {}
}

impl<K: SceneKey> Scene<K> for EmptyScene {
    fn render(&mut self, _renderer: &mut dyn Renderer) {}

    fn update(&mut self, _context: &mut SceneContext<'_, K>) {}
}
