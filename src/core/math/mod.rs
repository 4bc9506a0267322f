//=========================================================================
// Math
//=========================================================================
//
// 2D vector utilities used by the renderer and by game code.
//
// `Vector2` is glam's `Vec2`; the handful of operations glam does not
// name directly live on the `Vector2Ext` extension trait.
//
//=========================================================================

//=== Module Declarations =================================================

mod vector2;

//=== Public API ==========================================================

pub use vector2::{line_angle, Vector2, Vector2Ext};
