//=========================================================================
// Window Setup
//=========================================================================
//
// Translates `PrismConfig` into winit window attributes, and loads
// window icons from image files.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::Path;

use log::debug;
use winit::{
    dpi::{LogicalSize, PhysicalPosition},
    monitor::MonitorHandle,
    window::{BadIcon, Fullscreen, Icon, WindowAttributes, WindowLevel},
};

//=== Internal Dependencies ===============================================

use crate::core::config::{PrismConfig, WindowPosition};
use crate::core::graphics::{decode_rgba8, TextureError};

//=== Attributes ==========================================================

/// Builds the window attributes for `config`.
///
/// `monitor` is used to center the window; without one a centered window
/// is left to the window manager.
pub(crate) fn window_attributes(
    config: &PrismConfig,
    monitor: Option<&MonitorHandle>,
) -> WindowAttributes {
    let flags = config.window_flags;

    let mut attrs = WindowAttributes::default()
        .with_title(config.window_title.as_str())
        .with_inner_size(LogicalSize::new(config.screen_width, config.screen_height))
        .with_resizable(config.resizable)
        .with_decorations(!flags.borderless)
        .with_visible(!flags.hidden)
        .with_maximized(flags.maximized);

    if flags.always_on_top {
        attrs = attrs.with_window_level(WindowLevel::AlwaysOnTop);
    }

    if config.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    match (config.window_position, monitor) {
        (WindowPosition::At { x, y }, _) => {
            attrs = attrs.with_position(PhysicalPosition::new(x, y));
        }
        (WindowPosition::Centered, Some(monitor)) => {
            let scale = monitor.scale_factor();
            let window_size = (
                (config.screen_width as f64 * scale).round() as u32,
                (config.screen_height as f64 * scale).round() as u32,
            );
            let origin = monitor.position();
            let size = monitor.size();
            let (x, y) = centered_position((origin.x, origin.y), (size.width, size.height), window_size);

            debug!(target: "platform", "Centering window at ({}, {})", x, y);
            attrs = attrs.with_position(PhysicalPosition::new(x, y));
        }
        (WindowPosition::Centered, None) | (WindowPosition::Undefined, _) => {}
    }

    attrs
}

/// Top-left corner that centers `window` on a monitor at `origin`.
pub(crate) fn centered_position(
    origin: (i32, i32),
    monitor: (u32, u32),
    window: (u32, u32),
) -> (i32, i32) {
    let offset = |monitor: u32, window: u32| (monitor as i64 - window as i64) / 2;

    (
        (origin.0 as i64 + offset(monitor.0, window.0)) as i32,
        (origin.1 as i64 + offset(monitor.1, window.1)) as i32,
    )
}

//=== Icons ===============================================================

/// Failure to set the window icon.
#[derive(Debug)]
pub enum IconError {
    /// The image could not be read or decoded.
    Load(TextureError),

    /// The decoded pixels are not a valid icon.
    Invalid(BadIcon),

    /// The window has already been disposed.
    NoWindow,
}

impl std::fmt::Display for IconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Failed to load window icon: {}", e),
            Self::Invalid(e) => write!(f, "Invalid window icon: {}", e),
            Self::NoWindow => write!(f, "No window to set the icon on"),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Invalid(e) => Some(e),
            Self::NoWindow => None,
        }
    }
}

/// Decodes an image file into a window icon.
pub(crate) fn load_icon(path: &Path) -> Result<Icon, IconError> {
    let (rgba, width, height) = decode_rgba8(path).map_err(IconError::Load)?;
    Icon::from_rgba(rgba, width, height).map_err(IconError::Invalid)
}

//=========================================================================
// Unit Tests
//=========================================================================
