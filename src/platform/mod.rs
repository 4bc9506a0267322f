//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS window and events) and softbuffer (pixels on screen)
// with the single-threaded game loop.
//
// Architecture:
// ```text
//  Loop Thread (one thread, one frame at a time):
//  ┌──────────────────────────────────────────────────────────┐
//  │  Engine::run_frame()                                     │
//  │   ├─ renderer()      → Canvas (software framebuffer)     │
//  │   ├─ pump_signals()  → EventLoop::pump_app_events()      │
//  │   │                     └─ WindowHandler                 │
//  │   │                         └─ Sender<SystemSignal> ──┐  │
//  │   │                                                   │  │
//  │   ├─ SignalCollector ← Receiver<SystemSignal> ────────┘  │
//  │   └─ present()       → Presenter (softbuffer) → window   │
//  └──────────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Pump, don't run**: The engine owns the loop, so winit is pumped
//   with a zero timeout once per frame instead of `run_app`
// - **Window created in `resumed()`**: winit only allows window creation
//   from an active event loop; the first pump happens during startup
// - **Close doesn't exit winit**: `CloseRequested` only sends `Quit`;
//   teardown order is decided by the engine
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;
mod presenter;
mod window;

//=== External Crates =====================================================

use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Fullscreen, Window, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::config::{InitMode, PrismConfig};
use crate::core::graphics::{Canvas, Renderer};
use crate::core::platform_bridge::{StartupError, Surface, SystemSignal};
use presenter::Presenter;

pub use window::IconError;

//=== WinitSurface ========================================================

/// Window, software renderer and OS event pump.
///
/// # Lifecycle
///
/// 1. **Construction**: `WinitSurface::new(config, sender)` creates the
///    event loop, pumps once so the window and presenter exist
/// 2. **Frames**: `renderer()` → `pump_signals()` → `present()`
/// 3. **Teardown**: `dispose()` drops presenter then window,
///    `shutdown()` drops the event loop
///
/// # Thread Safety
///
/// Not Send/Sync: winit requires the event loop on the main thread.
pub struct WinitSurface {
    /// OS event loop (None after `shutdown()`).
    event_loop: Option<EventLoop<()>>,

    /// Receives winit callbacks and owns the window.
    handler: WindowHandler,

    /// Software framebuffer at the configured resolution.
    canvas: Canvas,
}

impl WinitSurface {
    //--- Construction -----------------------------------------------------

    /// Opens the window described by `config`.
    ///
    /// Platform signals are sent on `sender`.
    ///
    /// # Errors
    ///
    /// - [`StartupError::Subsystem`] if video or events are not requested
    /// - [`StartupError::EventLoop`] if the OS event loop cannot be created
    /// - [`StartupError::Window`] if window creation fails
    /// - [`StartupError::Renderer`] if the softbuffer surface fails
    pub fn new(config: &PrismConfig, sender: Sender<SystemSignal>) -> Result<Self, StartupError> {
        check_init_mode(config.init_mode)?;

        let mut event_loop =
            EventLoop::new().map_err(|e| StartupError::EventLoop(e.to_string()))?;
        debug!(target: "platform", "Event loop created");

        let flags = config.renderer_flags;
        if flags.accelerated || flags.present_vsync {
            debug!(
                target: "platform",
                "Software renderer: accelerated={} vsync={} are advisory",
                flags.accelerated,
                flags.present_vsync
            );
        }

        let mut handler = WindowHandler::new(config.clone(), sender);

        // Desktop platforms deliver `resumed` on the first pump
        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut handler)
        {
            warn!(target: "platform", "Event loop exited during startup (code {})", code);
        }

        if let Some(e) = handler.startup_error.take() {
            return Err(e);
        }
        if handler.window.is_none() {
            return Err(StartupError::Window(
                "window was not created during startup".to_string(),
            ));
        }

        let canvas = Canvas::new(config.screen_width, config.screen_height, config.scale_quality());

        info!(target: "platform", "Platform subsystem initialized");

        Ok(Self {
            event_loop: Some(event_loop),
            handler,
            canvas,
        })
    }

    //--- Window Operations ------------------------------------------------

    /// The OS window, or `None` after `dispose()`.
    pub fn window(&self) -> Option<&Window> {
        self.handler.window.as_deref()
    }

    pub fn title(&self) -> Option<String> {
        self.window().map(Window::title)
    }

    pub fn set_title(&mut self, title: &str) {
        if let Some(window) = self.window() {
            window.set_title(title);
        }
    }

    /// Switches between windowed and borderless desktop fullscreen.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        if let Some(window) = self.window() {
            debug!(target: "platform", "Fullscreen: {}", fullscreen);
            window.set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.window().is_some_and(|w| w.fullscreen().is_some())
    }

    /// Sets the window icon from a PNG or JPEG file.
    pub fn set_icon(&mut self, path: impl AsRef<Path>) -> Result<(), IconError> {
        let window = self.window().ok_or(IconError::NoWindow)?;
        let icon = window::load_icon(path.as_ref())?;

        window.set_window_icon(Some(icon));
        debug!(target: "platform", "Window icon set from {}", path.as_ref().display());
        Ok(())
    }
}

impl Surface for WinitSurface {
    fn renderer(&mut self) -> &mut dyn Renderer {
        &mut self.canvas
    }

    fn pump_signals(&mut self) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return;
        };

        if let PumpStatus::Exit(code) =
            event_loop.pump_app_events(Some(Duration::ZERO), &mut self.handler)
        {
            debug!(target: "platform", "Event loop exited (code {})", code);
            self.handler.send(SystemSignal::Quit);
        }
    }

    fn present(&mut self) {
        let handler = &mut self.handler;
        let (Some(window), Some(presenter)) = (handler.window.as_ref(), handler.presenter.as_mut())
        else {
            return;
        };

        let size = window.inner_size();
        window.pre_present_notify();

        if let Err(e) = presenter.present(&self.canvas, size.width, size.height) {
            warn!(target: "platform", "Present failed: {}", e);
        }
    }

    fn dispose(&mut self) {
        if self.handler.presenter.take().is_some() {
            debug!(target: "platform", "Renderer destroyed");
        }
        if self.handler.window.take().is_some() {
            info!(target: "platform", "Window destroyed");
        }
    }

    fn shutdown(&mut self) {
        if self.event_loop.take().is_some() {
            info!(target: "platform", "Platform subsystem shut down");
        }
    }
}

//=== Subsystem Checks ====================================================

/// Video and events are required; the timer is optional.
fn check_init_mode(mode: InitMode) -> Result<(), StartupError> {
    if !mode.video {
        return Err(StartupError::Subsystem("video subsystem not requested".to_string()));
    }
    if !mode.events {
        return Err(StartupError::Subsystem("events subsystem not requested".to_string()));
    }
    if !mode.timer {
        debug!(target: "platform", "Timer subsystem not requested");
    }
    Ok(())
}

//=== WindowHandler =======================================================

/// winit callback target: creates the window and turns OS events into
/// [`SystemSignal`]s.
struct WindowHandler {
    config: PrismConfig,

    /// Channel to the loop's signal collector.
    sender: Sender<SystemSignal>,

    /// OS window handle (None until `resumed()` and after dispose).
    window: Option<Rc<Window>>,

    /// softbuffer surface bound to `window`.
    presenter: Option<Presenter>,

    /// First failure during window or presenter creation.
    startup_error: Option<StartupError>,
}

impl WindowHandler {
    fn new(config: PrismConfig, sender: Sender<SystemSignal>) -> Self {
        Self {
            config,
            sender,
            window: None,
            presenter: None,
            startup_error: None,
        }
    }

    fn send(&self, signal: SystemSignal) {
        if self.sender.send(signal).is_err() {
            warn!(target: "platform", "Channel disconnected, dropping {:?}", signal);
        }
    }

    /// Handles events that need no event loop access.
    fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send(SystemSignal::Quit);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match input_processor::process_key_event(key_event) {
                    Some(signal) => self.send(signal),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::Focused(false) => {
                debug!(target: "platform", "Window lost focus");
                self.send(SystemSignal::FocusLost);
            }

            WindowEvent::Resized(size) => {
                trace!(target: "platform", "Window resized to {}x{}", size.width, size.height);
            }

            _ => {
                // Ignore: mouse, redraw requests, etc.
            }
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for WindowHandler {
    /// Creates the window and presenter on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        let monitor = event_loop.primary_monitor();
        let attrs = window::window_attributes(&self.config, monitor.as_ref());

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Rc::new(window),
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.startup_error = Some(StartupError::Window(e.to_string()));
                return;
            }
        };

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        match Presenter::new(Rc::clone(&window)) {
            Ok(presenter) => self.presenter = Some(presenter),
            Err(e) => {
                error!(target: "platform", "{}", e);
                self.startup_error = Some(e);
            }
        }

        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.handle_window_event(&event);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    fn handler() -> (WindowHandler, crossbeam_channel::Receiver<SystemSignal>) {
        let (tx, rx) = unbounded();
        (WindowHandler::new(PrismConfig::default(), tx), rx)
    }

    //=====================================================================
    // WindowHandler Tests
    //=====================================================================

    #[test]
    fn handler_starts_without_window() {
        let (handler, _rx) = handler();
        assert!(handler.window.is_none(), "Window should be created lazily");
        assert!(handler.presenter.is_none());
    }

    #[test]
    fn close_requested_sends_quit() {
        let (mut handler, rx) = handler();

        handler.handle_window_event(&WindowEvent::CloseRequested);

        assert_eq!(rx.try_recv(), Ok(SystemSignal::Quit));
    }

    #[test]
    fn focus_lost_sends_signal() {
        let (mut handler, rx) = handler();

        handler.handle_window_event(&WindowEvent::Focused(true));
        handler.handle_window_event(&WindowEvent::Focused(false));

        assert_eq!(rx.try_recv(), Ok(SystemSignal::FocusLost));
        assert!(rx.try_recv().is_err(), "Focus gain sends nothing");
    }

    #[test]
    fn send_handles_disconnected_channel() {
        let (mut handler, rx) = handler();
        drop(rx);

        // Should not panic, just log warning
        handler.handle_window_event(&WindowEvent::CloseRequested);
    }

    //=====================================================================
    // Subsystem Tests
    //=====================================================================

    #[test]
    fn default_init_mode_is_accepted() {
        assert!(check_init_mode(InitMode::default()).is_ok());
    }

    #[test]
    fn missing_video_is_subsystem_error() {
        let mode = InitMode {
            video: false,
            ..InitMode::EVERYTHING
        };
        assert!(matches!(check_init_mode(mode), Err(StartupError::Subsystem(_))));
    }

    #[test]
    fn missing_events_is_subsystem_error() {
        let mode = InitMode {
            events: false,
            ..InitMode::EVERYTHING
        };
        assert!(matches!(check_init_mode(mode), Err(StartupError::Subsystem(_))));
    }

    #[test]
    fn missing_timer_is_allowed() {
        let mode = InitMode {
            timer: false,
            ..InitMode::EVERYTHING
        };
        assert!(check_init_mode(mode).is_ok());
    }
}
