//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use prism_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder, LoopState};
pub use crate::platform::WinitSurface;

// Configuration and startup
pub use crate::core::config::{PrismConfig, ScaleQuality, WindowFlags, WindowPosition};
pub use crate::core::platform_bridge::{StartupError, Surface};

// Scene system
pub use crate::core::scene::{
    Disposable, EmptyScene, Scene, SceneContext, SceneError, SceneKey, SceneRegistry,
    SceneTransition, SharedScene,
};

// Input
pub use crate::core::input::{Keyboard, Scancode};

// Graphics
pub use crate::core::graphics::{Canvas, Color, Rect, Renderer, Texture, TextureLoader};

// Math
pub use crate::core::math::{Vector2, Vector2Ext};
