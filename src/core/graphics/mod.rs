//=========================================================================
// Graphics
//=========================================================================
//
// Drawing types shared by scenes and platform backends.
//
// Architecture:
//   Renderer (trait) ← Canvas (software framebuffer)
//   Color, Rect      → primitive parameters
//   Texture          ← TextureLoader (image subsystem)
//
//=========================================================================

//=== Module Declarations =================================================

mod canvas;
mod color;
mod rect;
mod renderer;
mod texture;

//=== Public API ==========================================================

pub use canvas::Canvas;
pub use color::Color;
pub use rect::Rect;
pub use renderer::Renderer;
pub use texture::{Texture, TextureError, TextureLoader};

pub(crate) use texture::decode_rgba8;
