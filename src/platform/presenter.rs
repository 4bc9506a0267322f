//=========================================================================
// Presenter
//=========================================================================
//
// Copies the software canvas to the window through softbuffer.
//
// Architecture:
//   Canvas (logical size) ──blit_scaled()──> softbuffer Buffer (window size)
//                                              └─ present()
//
// The canvas keeps the configured resolution; the window may be resized
// or fullscreen, so the blit scales with nearest-neighbour sampling.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::num::NonZeroU32;
use std::rc::Rc;

use log::{debug, trace};
use softbuffer::{Context, SoftBufferError, Surface};
use winit::window::Window;

//=== Internal Dependencies ===============================================

use crate::core::graphics::{Canvas, Renderer};
use crate::core::platform_bridge::StartupError;

//=== Presenter ===========================================================

/// softbuffer surface bound to the engine window.
pub(crate) struct Presenter {
    // Kept alive for the surface's lifetime
    _context: Context<Rc<Window>>,
    surface: Surface<Rc<Window>, Rc<Window>>,
}

impl Presenter {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(window: Rc<Window>) -> Result<Self, StartupError> {
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| StartupError::Renderer(e.to_string()))?;
        let surface =
            Surface::new(&context, window).map_err(|e| StartupError::Renderer(e.to_string()))?;

        debug!(target: "platform", "Software presenter created");

        Ok(Self {
            _context: context,
            surface,
        })
    }

    //--- Presentation -----------------------------------------------------

    /// Shows `canvas` scaled to `width` × `height` window pixels.
    ///
    /// A zero-sized window (minimized) presents nothing.
    pub(crate) fn present(
        &mut self,
        canvas: &Canvas,
        width: u32,
        height: u32,
    ) -> Result<(), SoftBufferError> {
        let (Some(nz_width), Some(nz_height)) = (NonZeroU32::new(width), NonZeroU32::new(height))
        else {
            trace!(target: "platform", "Window has zero size, skipping present");
            return Ok(());
        };

        self.surface.resize(nz_width, nz_height)?;

        let mut buffer = self.surface.buffer_mut()?;
        let (src_width, src_height) = canvas.size();
        blit_scaled(canvas.pixels(), src_width, src_height, &mut buffer, width, height);

        buffer.present()
    }
}

//=== Scaling =============================================================

/// Nearest-neighbour copy of a `src_width` × `src_height` image into a
/// `dst_width` × `dst_height` target.
pub(crate) fn blit_scaled(
    src: &[u32],
    src_width: u32,
    src_height: u32,
    dst: &mut [u32],
    dst_width: u32,
    dst_height: u32,
) {
    if src_width == 0 || src_height == 0 {
        dst.fill(0);
        return;
    }

    let (src_width, src_height) = (src_width as usize, src_height as usize);
    let (dst_width, dst_height) = (dst_width as usize, dst_height as usize);

    for (y, row) in dst.chunks_exact_mut(dst_width).take(dst_height).enumerate() {
        let src_y = y * src_height / dst_height;
        let src_row = &src[src_y * src_width..(src_y + 1) * src_width];

        for (x, px) in row.iter_mut().enumerate() {
            *px = src_row[x * src_width / dst_width];
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_size_blit_copies() {
        let src = [1, 2, 3, 4];
        let mut dst = [0; 4];

        blit_scaled(&src, 2, 2, &mut dst, 2, 2);

        assert_eq!(dst, src);
    }

    #[test]
    fn upscale_repeats_pixels() {
        let src = [1, 2, 3, 4];
        let mut dst = [0; 16];

        blit_scaled(&src, 2, 2, &mut dst, 4, 4);

        assert_eq!(
            dst,
            [
                1, 1, 2, 2, //
                1, 1, 2, 2, //
                3, 3, 4, 4, //
                3, 3, 4, 4,
            ]
        );
    }

    #[test]
    fn downscale_samples_top_left() {
        let src = [
            1, 2, 3, 4, //
            5, 6, 7, 8, //
            9, 10, 11, 12, //
            13, 14, 15, 16,
        ];
        let mut dst = [0; 4];

        blit_scaled(&src, 4, 4, &mut dst, 2, 2);

        assert_eq!(dst, [1, 3, 9, 11]);
    }

    #[test]
    fn empty_source_clears_target() {
        let mut dst = [7; 4];

        blit_scaled(&[], 0, 0, &mut dst, 2, 2);

        assert_eq!(dst, [0; 4]);
    }
}
