//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (signals, surface contract, errors).
//
// Defines the contract between a platform backend and the game loop:
// the backend produces `SystemSignal`s and owns the drawing surface.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::graphics::Renderer;
use crate::core::input::Scancode;

//=== SystemSignal ========================================================

/// Signals sent from the platform to the loop while pumping OS events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemSignal {
    /// Window close requested by the user or the OS.
    Quit,

    /// Physical key pressed (also sent for OS key repeat).
    KeyDown(Scancode),

    /// Physical key released.
    KeyUp(Scancode),

    /// Window lost keyboard focus; held keys will never see a release.
    FocusLost,
}

//=== Surface =============================================================

/// Graphics surface owned by the engine: window, renderer and event pump.
///
/// The loop calls these in a fixed order every frame:
/// `renderer()` (render) → `pump_signals()` → `present()`.
/// Teardown calls `dispose()` (renderer then window) and, after every
/// scene has been disposed, `shutdown()`.
pub trait Surface {
    /// Drawing target for the current frame.
    fn renderer(&mut self) -> &mut dyn Renderer;

    /// Pumps pending OS events, sending each as a [`SystemSignal`].
    fn pump_signals(&mut self);

    /// Shows the frame drawn since the last present.
    fn present(&mut self);

    /// Releases the renderer, then the window. Idempotent.
    fn dispose(&mut self);

    /// Shuts down the multimedia subsystem. Idempotent.
    fn shutdown(&mut self);
}

//=== StartupError ========================================================

/// Fatal initialization errors, naming the failing subsystem.
///
/// Each variant carries the underlying library's error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    /// OS event loop could not be created.
    EventLoop(String),

    /// A required subsystem was not requested or is unavailable.
    Subsystem(String),

    /// Window creation failed.
    Window(String),

    /// Renderer creation failed.
    Renderer(String),

    /// Image decoding subsystem unavailable.
    ImageSubsystem(String),
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "Failed to initialise the event loop: {}", e),
            Self::Subsystem(e) => write!(f, "Failed to initialise subsystem: {}", e),
            Self::Window(e) => write!(f, "Failed to create a window: {}", e),
            Self::Renderer(e) => write!(f, "Failed to create a renderer: {}", e),
            Self::ImageSubsystem(e) => {
                write!(f, "Failed to initialise the image subsystem: {}", e)
            }
        }
    }
}

impl std::error::Error for StartupError {}

//=========================================================================
// Unit Tests
//=========================================================================
