//=========================================================================
// Renderer Contract
//=========================================================================
//
// Drawing primitives handed to scenes during the render step.
//
// Scenes receive `&mut dyn Renderer`; the concrete target is the
// software `Canvas` in production and a recording double in tests.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Color, Rect, Texture};
use crate::core::math::Vector2;

//=== Renderer Trait ======================================================

/// 2D drawing surface with SDL-style immediate-mode primitives.
///
/// Coordinates are pixels relative to the current viewport origin.
/// Draws outside the viewport are clipped.
pub trait Renderer {
    /// Fills the whole target with `color`, ignoring the viewport.
    fn clear(&mut self, color: Color);

    fn draw_filled_rect(&mut self, rect: Rect, color: Color);

    /// One-pixel rectangle outline.
    fn draw_rect(&mut self, rect: Rect, color: Color);

    fn draw_line(&mut self, start: Vector2, end: Vector2, color: Color);

    fn draw_point(&mut self, position: Vector2, color: Color);

    /// Draws vertical and horizontal lines every `cell_size` pixels
    /// across the full target. A zero cell size draws nothing.
    fn draw_grid(&mut self, cell_size: u32, color: Color);

    /// Copies `texture` with its top-left corner at `position`.
    ///
    /// `scale` multiplies the texture's native size. A non-positive
    /// component means "native size" on that axis, so `Vector2::ZERO`
    /// and `Vector2::ONE` draw the texture unscaled.
    fn draw_texture(&mut self, texture: &Texture, position: Vector2, scale: Vector2);

    /// Restricts drawing to `viewport`; `None` restores the full target.
    fn set_viewport(&mut self, viewport: Option<Rect>);

    /// Target size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);
}
