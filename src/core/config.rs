//=========================================================================
// Engine Configuration
//=========================================================================
//
// Startup options consumed by `EngineBuilder` and the platform surface.
//
// Every field has a default, so `PrismConfig::default()` opens an
// 800×600 centered window titled "Prism" with vsync and linear texture
// filtering.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Window Placement ====================================================

/// Where the window is placed on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPosition {
    /// Centered on the primary monitor.
    #[default]
    Centered,

    /// Left to the platform's window manager.
    Undefined,

    /// Explicit outer position in physical pixels.
    At { x: i32, y: i32 },
}

//=== Window Flags ========================================================

/// Window creation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowFlags {
    /// No title bar or border.
    pub borderless: bool,

    /// Created hidden.
    pub hidden: bool,

    /// Created maximized.
    pub maximized: bool,

    /// Kept above other windows.
    pub always_on_top: bool,
}

//=== Renderer Flags ======================================================

/// Renderer creation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererFlags {
    /// Request a hardware-accelerated renderer.
    pub accelerated: bool,

    /// Synchronize presentation with the display refresh.
    pub present_vsync: bool,
}

impl Default for RendererFlags {
    fn default() -> Self {
        Self {
            accelerated: true,
            present_vsync: true,
        }
    }
}

//=== Initialization Mode =================================================

/// Multimedia subsystems to bring up at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitMode {
    pub video: bool,
    pub events: bool,
    pub timer: bool,
}

impl InitMode {
    /// Every subsystem.
    pub const EVERYTHING: InitMode = InitMode {
        video: true,
        events: true,
        timer: true,
    };
}

impl Default for InitMode {
    fn default() -> Self {
        Self::EVERYTHING
    }
}

//=== Scale Quality =======================================================

/// Texture filtering used when a texture is drawn scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleQuality {
    Nearest,
    #[default]
    Linear,
}

impl ScaleQuality {
    /// Parses a scale-quality hint value.
    ///
    /// Accepts `"nearest"`/`"0"` and `"linear"`/`"1"`/`"best"`/`"2"`
    /// (case-insensitive); anything else is `None`.
    pub fn from_hint(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "nearest" | "0" => Some(Self::Nearest),
            "linear" | "best" | "1" | "2" => Some(Self::Linear),
            _ => None,
        }
    }
}

//=== PrismConfig =========================================================

/// Hint name controlling texture filtering.
pub const HINT_RENDER_SCALE_QUALITY: &str = "render_scale_quality";

/// Startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PrismConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub window_title: String,
    pub window_position: WindowPosition,
    pub window_flags: WindowFlags,
    pub renderer_flags: RendererFlags,
    pub init_mode: InitMode,

    /// Name of the renderer hint to set at startup.
    pub renderer_hint: String,

    /// Value of `renderer_hint`.
    pub hint_value: String,

    pub resizable: bool,
    pub fullscreen: bool,

    /// Name of the resource directory next to the executable.
    pub resource_locator: String,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            window_title: "Prism".to_string(),
            window_position: WindowPosition::default(),
            window_flags: WindowFlags::default(),
            renderer_flags: RendererFlags::default(),
            init_mode: InitMode::default(),
            renderer_hint: HINT_RENDER_SCALE_QUALITY.to_string(),
            hint_value: "linear".to_string(),
            resizable: false,
            fullscreen: false,
            resource_locator: "resources".to_string(),
        }
    }
}

impl PrismConfig {
    /// Texture filtering selected by the renderer hint.
    ///
    /// Unknown hint names or values fall back to linear filtering with a
    /// warning.
    pub fn scale_quality(&self) -> ScaleQuality {
        if self.renderer_hint != HINT_RENDER_SCALE_QUALITY {
            warn!(target: "engine", "Unknown renderer hint {:?} ignored", self.renderer_hint);
            return ScaleQuality::default();
        }

        ScaleQuality::from_hint(&self.hint_value).unwrap_or_else(|| {
            warn!(
                target: "engine",
                "Unknown {} value {:?}, using linear",
                HINT_RENDER_SCALE_QUALITY,
                self.hint_value
            );
            ScaleQuality::default()
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
