//=========================================================================
// Canvas
//=========================================================================
//
// Software implementation of the `Renderer` contract.
//
// Architecture:
//   Scene::render() → Canvas (Vec<u32>, 0x00RRGGBB) → presenter → window
//
// Primitives are clipped against the viewport before rasterizing, so
// their cost follows the visible part only. Lines are clipped as
// segments, outlines are drawn as four clipped spans. `clear` is the
// only operation that ignores the viewport.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Color, Rect, Renderer, Texture};
use crate::core::config::ScaleQuality;
use crate::core::math::Vector2;

//=== Canvas ==============================================================

/// CPU framebuffer with SDL-style drawing primitives.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    viewport: Rect,
    scale_quality: ScaleQuality,
}

impl Canvas {
    //--- Construction -----------------------------------------------------

    /// Creates a black canvas of `width` × `height` pixels.
    pub fn new(width: u32, height: u32, scale_quality: ScaleQuality) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
            viewport: Rect::new(0, 0, width, height),
            scale_quality,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Framebuffer contents, row-major `0x00RRGGBB`.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at absolute target coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .map(|&px| Color::from_xrgb(px))
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn scale_quality(&self) -> ScaleQuality {
        self.scale_quality
    }

    //--- Internal Helpers -------------------------------------------------

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Blends `color` at viewport-relative `(x, y)`, clipping to the viewport.
    fn blend_at(&mut self, x: i32, y: i32, color: Color) {
        let abs_x = self.viewport.x.saturating_add(x);
        let abs_y = self.viewport.y.saturating_add(y);

        if !self.viewport.contains_point(abs_x, abs_y) {
            return;
        }

        let index = abs_y as usize * self.width as usize + abs_x as usize;
        if let Some(dst) = self.pixels.get_mut(index) {
            *dst = color.blend_over(*dst);
        }
    }

    /// Viewport-relative rect mapped to absolute, clipped coordinates.
    fn clip(&self, rect: Rect) -> Option<Rect> {
        let absolute = Rect::new(
            self.viewport.x.saturating_add(rect.x),
            self.viewport.y.saturating_add(rect.y),
            rect.w,
            rect.h,
        );
        absolute.intersection(&self.viewport)
    }

    fn sample(&self, texture: &Texture, u: f32, v: f32) -> Option<Color> {
        match self.scale_quality {
            ScaleQuality::Nearest => texture.pixel(u as u32, v as u32),
            ScaleQuality::Linear => sample_bilinear(texture, u, v),
        }
    }
}

//=== Renderer Implementation =============================================

impl Renderer for Canvas {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_xrgb());
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        let Some(area) = self.clip(rect) else {
            return;
        };

        for y in area.y..area.bottom() {
            let row = y as usize * self.width as usize;
            for x in area.x..area.right() {
                let px = &mut self.pixels[row + x as usize];
                *px = color.blend_over(*px);
            }
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }

        // Four non-overlapping edges, each clipped like a filled rect
        let last_x = saturate_i32(rect.x as i64 + rect.w as i64 - 1);
        let last_y = saturate_i32(rect.y as i64 + rect.h as i64 - 1);

        self.draw_filled_rect(Rect::new(rect.x, rect.y, rect.w, 1), color);
        if rect.h > 1 {
            self.draw_filled_rect(Rect::new(rect.x, last_y, rect.w, 1), color);
        }
        if rect.h > 2 {
            let side = Rect::new(rect.x, rect.y.saturating_add(1), 1, rect.h - 2);
            self.draw_filled_rect(side, color);
            if rect.w > 1 {
                self.draw_filled_rect(Rect { x: last_x, ..side }, color);
            }
        }
    }

    fn draw_line(&mut self, start: Vector2, end: Vector2, color: Color) {
        let Some([x0, y0, x1, y1]) = clip_segment(start, end, self.viewport.w, self.viewport.h)
        else {
            return;
        };

        // Bresenham over the visible span
        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend_at(x as i32, y as i32, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_point(&mut self, position: Vector2, color: Color) {
        self.blend_at(position.x as i32, position.y as i32, color);
    }

    fn draw_grid(&mut self, cell_size: u32, color: Color) {
        if cell_size == 0 {
            return;
        }

        let (width, height) = (self.width as f32, self.height as f32);

        for x in (0..self.width).step_by(cell_size as usize) {
            let x = x as f32;
            self.draw_line(Vector2::new(x, 0.0), Vector2::new(x, height), color);
        }
        for y in (0..self.height).step_by(cell_size as usize) {
            let y = y as f32;
            self.draw_line(Vector2::new(0.0, y), Vector2::new(width, y), color);
        }
    }

    fn draw_texture(&mut self, texture: &Texture, position: Vector2, scale: Vector2) {
        let sx = if scale.x > 0.0 { scale.x } else { 1.0 };
        let sy = if scale.y > 0.0 { scale.y } else { 1.0 };

        let dest_w = (texture.width() as f32 * sx).round() as u32;
        let dest_h = (texture.height() as f32 * sy).round() as u32;
        let dest = Rect::new(position.x as i32, position.y as i32, dest_w, dest_h);

        let Some(area) = self.clip(dest) else {
            return;
        };

        let origin_x = self.viewport.x.saturating_add(dest.x);
        let origin_y = self.viewport.y.saturating_add(dest.y);
        let step_u = texture.width() as f32 / dest_w as f32;
        let step_v = texture.height() as f32 / dest_h as f32;

        for y in area.y..area.bottom() {
            let v = (y - origin_y) as f32 * step_v;
            let row = y as usize * self.width as usize;
            for x in area.x..area.right() {
                let u = (x - origin_x) as f32 * step_u;
                if let Some(texel) = self.sample(texture, u, v) {
                    let px = &mut self.pixels[row + x as usize];
                    *px = texel.blend_over(*px);
                }
            }
        }
    }

    fn set_viewport(&mut self, viewport: Option<Rect>) {
        let bounds = self.bounds();
        self.viewport = match viewport {
            Some(rect) => rect.intersection(&bounds).unwrap_or_default(),
            None => bounds,
        };
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

//=== Clipping ============================================================

fn saturate_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Clips a segment to the pixel box `[0, width) × [0, height)` (Liang–Barsky).
///
/// Endpoints are truncated to pixels first. Returns the visible span as
/// `[x0, y0, x1, y1]`, or `None` when no pixel of it is inside the box.
fn clip_segment(start: Vector2, end: Vector2, width: u32, height: u32) -> Option<[i64; 4]> {
    if width == 0 || height == 0 {
        return None;
    }

    let (x0, y0) = (start.x as i32 as f64, start.y as i32 as f64);
    let (x1, y1) = (end.x as i32 as f64, end.y as i32 as f64);
    let (max_x, max_y) = ((width - 1) as f64, (height - 1) as f64);
    let (dx, dy) = (x1 - x0, y1 - y0);

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
        if p == 0.0 {
            // Parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    let at = |t: f64| {
        [
            (x0 + dx * t).round().clamp(0.0, max_x) as i64,
            (y0 + dy * t).round().clamp(0.0, max_y) as i64,
        ]
    };
    let [cx0, cy0] = at(t0);
    let [cx1, cy1] = at(t1);

    Some([cx0, cy0, cx1, cy1])
}

//=== Sampling ============================================================

/// Bilinear sample at texel-space `(u, v)` measured from the top-left edge.
fn sample_bilinear(texture: &Texture, u: f32, v: f32) -> Option<Color> {
    let max_x = texture.width().checked_sub(1)? as f32;
    let max_y = texture.height().checked_sub(1)? as f32;

    let fx = (u - 0.5).clamp(0.0, max_x);
    let fy = (v - 0.5).clamp(0.0, max_y);
    let (x0, y0) = (fx.floor() as u32, fy.floor() as u32);
    let x1 = (x0 + 1).min(max_x as u32);
    let y1 = (y0 + 1).min(max_y as u32);
    let (tx, ty) = (fx - x0 as f32, fy - y0 as f32);

    let c00 = texture.pixel(x0, y0)?;
    let c10 = texture.pixel(x1, y0)?;
    let c01 = texture.pixel(x0, y1)?;
    let c11 = texture.pixel(x1, y1)?;

    let lerp = |a: u8, b: u8, c: u8, d: u8| -> u8 {
        let top = a as f32 + (b as f32 - a as f32) * tx;
        let bottom = c as f32 + (d as f32 - c as f32) * tx;
        (top + (bottom - top) * ty).round() as u8
    };

    Some(Color::rgba(
        lerp(c00.r, c10.r, c01.r, c11.r),
        lerp(c00.g, c10.g, c01.g, c11.g),
        lerp(c00.b, c10.b, c01.b, c11.b),
        lerp(c00.a, c10.a, c01.a, c11.a),
    ))
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn canvas(width: u32, height: u32) -> Canvas {
        Canvas::new(width, height, ScaleQuality::Nearest)
    }

    fn count(canvas: &Canvas, color: Color) -> usize {
        let needle = color.to_xrgb();
        canvas.pixels().iter().filter(|&&px| px == needle).count()
    }

    //=====================================================================
    // Primitive Tests
    //=====================================================================

    #[test]
    fn clear_fills_every_pixel() {
        let mut canvas = canvas(4, 3);
        canvas.clear(Color::RED);
        assert_eq!(count(&canvas, Color::RED), 12);
    }

    #[test]
    fn filled_rect_is_clipped_to_target() {
        let mut canvas = canvas(10, 10);
        canvas.draw_filled_rect(Rect::new(8, 8, 5, 5), Color::GREEN);
        assert_eq!(count(&canvas, Color::GREEN), 4);
    }

    #[test]
    fn rect_outline_has_hollow_interior() {
        let mut canvas = canvas(10, 10);
        canvas.draw_rect(Rect::new(1, 1, 4, 4), Color::WHITE);

        assert_eq!(count(&canvas, Color::WHITE), 12);
        assert_eq!(canvas.pixel(2, 2), Some(Color::BLACK));
        assert_eq!(canvas.pixel(4, 4), Some(Color::WHITE));
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut canvas = canvas(10, 10);
        canvas.draw_line(Vector2::new(0.0, 0.0), Vector2::new(9.0, 4.0), Color::BLUE);

        assert_eq!(canvas.pixel(0, 0), Some(Color::BLUE));
        assert_eq!(canvas.pixel(9, 4), Some(Color::BLUE));
        assert_eq!(count(&canvas, Color::BLUE), 10);
    }

    #[test]
    fn line_across_huge_range_draws_visible_row() {
        let mut canvas = canvas(8, 8);
        canvas.draw_line(Vector2::new(-3e9, 1.0), Vector2::new(3e9, 1.0), Color::BLUE);

        assert_eq!(count(&canvas, Color::BLUE), 8);
        assert_eq!(canvas.pixel(0, 1), Some(Color::BLUE));
        assert_eq!(canvas.pixel(7, 1), Some(Color::BLUE));
    }

    #[test]
    fn long_line_is_clipped_before_rasterizing() {
        let mut canvas = canvas(8, 8);
        canvas.draw_line(Vector2::new(0.0, 1.0), Vector2::new(2e8, 1.0), Color::BLUE);
        assert_eq!(count(&canvas, Color::BLUE), 8);
    }

    #[test]
    fn diagonal_line_through_target_keeps_its_slope() {
        let mut canvas = canvas(8, 8);
        canvas.draw_line(Vector2::new(-10.0, -10.0), Vector2::new(20.0, 20.0), Color::BLUE);

        assert_eq!(count(&canvas, Color::BLUE), 8);
        for i in 0..8 {
            assert_eq!(canvas.pixel(i, i), Some(Color::BLUE));
        }
    }

    #[test]
    fn line_entirely_offscreen_draws_nothing() {
        let mut canvas = canvas(8, 8);
        canvas.draw_line(Vector2::new(-5.0, -1.0), Vector2::new(20.0, -1.0), Color::BLUE);
        canvas.draw_line(Vector2::new(-20.0, 0.0), Vector2::new(0.0, 20.0), Color::BLUE);
        assert_eq!(count(&canvas, Color::BLUE), 0);
    }

    #[test]
    fn rect_far_below_target_is_ignored() {
        let mut canvas = canvas(8, 8);
        canvas.draw_rect(
            Rect::from_vectors(Vector2::new(0.0, 3e9), Vector2::new(4.0, 4.0)),
            Color::WHITE,
        );
        assert_eq!(count(&canvas, Color::WHITE), 0);
    }

    #[test]
    fn huge_rect_outline_draws_visible_edges() {
        let mut canvas = canvas(8, 8);
        canvas.draw_rect(Rect::new(0, 0, u32::MAX, u32::MAX), Color::WHITE);

        // Top row and left column only
        assert_eq!(count(&canvas, Color::WHITE), 15);
        assert_eq!(canvas.pixel(7, 0), Some(Color::WHITE));
        assert_eq!(canvas.pixel(0, 7), Some(Color::WHITE));
        assert_eq!(canvas.pixel(7, 7), Some(Color::BLACK));
    }

    #[test]
    fn translucent_outline_blends_corners_once() {
        let mut canvas = canvas(4, 4);
        canvas.draw_rect(Rect::new(0, 0, 3, 3), Color::rgba(255, 255, 255, 128));

        let grey = Some(Color::rgb(128, 128, 128));
        assert_eq!(canvas.pixel(0, 0), grey);
        assert_eq!(canvas.pixel(2, 2), grey);
        assert_eq!(canvas.pixel(1, 1), Some(Color::BLACK));
    }

    #[test]
    fn point_outside_target_is_ignored() {
        let mut canvas = canvas(2, 2);
        canvas.draw_point(Vector2::new(-1.0, 5.0), Color::RED);
        canvas.draw_point(Vector2::new(1.0, 1.0), Color::RED);
        assert_eq!(count(&canvas, Color::RED), 1);
    }

    #[test]
    fn grid_lines_every_cell() {
        let mut canvas = canvas(8, 8);
        canvas.draw_grid(4, Color::GRAY);

        assert_eq!(canvas.pixel(0, 5), Some(Color::GRAY));
        assert_eq!(canvas.pixel(4, 7), Some(Color::GRAY));
        assert_eq!(canvas.pixel(5, 4), Some(Color::GRAY));
        assert_eq!(canvas.pixel(2, 2), Some(Color::BLACK));
    }

    #[test]
    fn grid_with_zero_cell_draws_nothing() {
        let mut canvas = canvas(4, 4);
        canvas.draw_grid(0, Color::GRAY);
        assert_eq!(count(&canvas, Color::GRAY), 0);
    }

    #[test]
    fn translucent_fill_blends() {
        let mut canvas = canvas(1, 1);
        canvas.clear(Color::BLACK);
        canvas.draw_filled_rect(Rect::new(0, 0, 1, 1), Color::rgba(255, 255, 255, 128));
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(128, 128, 128)));
    }

    //=====================================================================
    // Texture Tests
    //=====================================================================

    #[test]
    fn texture_drawn_at_native_size_with_zero_scale() {
        let texture = Texture::from_fn(2, 2, |_, _| Color::RED);
        let mut canvas = canvas(6, 6);

        canvas.draw_texture(&texture, Vector2::new(1.0, 1.0), Vector2::ZERO);

        assert_eq!(count(&canvas, Color::RED), 4);
        assert_eq!(canvas.pixel(1, 1), Some(Color::RED));
        assert_eq!(canvas.pixel(3, 3), Some(Color::BLACK));
    }

    #[test]
    fn texture_scaled_nearest() {
        let texture = Texture::from_fn(2, 1, |x, _| if x == 0 { Color::RED } else { Color::BLUE });
        let mut canvas = canvas(8, 8);

        canvas.draw_texture(&texture, Vector2::ZERO, Vector2::new(2.0, 2.0));

        assert_eq!(count(&canvas, Color::RED), 4);
        assert_eq!(count(&canvas, Color::BLUE), 4);
        assert_eq!(canvas.pixel(1, 1), Some(Color::RED));
        assert_eq!(canvas.pixel(2, 0), Some(Color::BLUE));
    }

    #[test]
    fn linear_scaling_of_uniform_texture_is_uniform() {
        let texture = Texture::from_fn(2, 2, |_, _| Color::GREEN);
        let mut canvas = Canvas::new(8, 8, ScaleQuality::Linear);

        canvas.draw_texture(&texture, Vector2::ZERO, Vector2::new(3.0, 3.0));

        assert_eq!(count(&canvas, Color::GREEN), 36);
    }

    #[test]
    fn transparent_texels_leave_background() {
        let texture = Texture::from_fn(1, 1, |_, _| Color::rgba(255, 0, 0, 0));
        let mut canvas = canvas(1, 1);
        canvas.clear(Color::BLUE);

        canvas.draw_texture(&texture, Vector2::ZERO, Vector2::ONE);

        assert_eq!(canvas.pixel(0, 0), Some(Color::BLUE));
    }

    //=====================================================================
    // Viewport Tests
    //=====================================================================

    #[test]
    fn viewport_offsets_and_clips() {
        let mut canvas = canvas(10, 10);
        canvas.set_viewport(Some(Rect::new(5, 5, 3, 3)));

        canvas.draw_filled_rect(Rect::new(0, 0, 10, 10), Color::RED);

        assert_eq!(count(&canvas, Color::RED), 9);
        assert_eq!(canvas.pixel(5, 5), Some(Color::RED));
        assert_eq!(canvas.pixel(4, 4), Some(Color::BLACK));
    }

    #[test]
    fn clear_ignores_viewport() {
        let mut canvas = canvas(4, 4);
        canvas.set_viewport(Some(Rect::new(0, 0, 1, 1)));
        canvas.clear(Color::GREEN);
        assert_eq!(count(&canvas, Color::GREEN), 16);
    }

    #[test]
    fn reset_viewport_restores_full_target() {
        let mut canvas = canvas(4, 4);
        canvas.set_viewport(Some(Rect::new(1, 1, 1, 1)));
        canvas.set_viewport(None);

        assert_eq!(canvas.viewport(), Rect::new(0, 0, 4, 4));
    }

    #[test]
    fn line_is_clipped_to_viewport() {
        let mut canvas = canvas(10, 10);
        canvas.set_viewport(Some(Rect::new(2, 2, 4, 4)));

        canvas.draw_line(Vector2::new(-100.0, 1.0), Vector2::new(100.0, 1.0), Color::GREEN);

        assert_eq!(count(&canvas, Color::GREEN), 4);
        assert_eq!(canvas.pixel(2, 3), Some(Color::GREEN));
        assert_eq!(canvas.pixel(5, 3), Some(Color::GREEN));
    }

    #[test]
    fn viewport_outside_target_blocks_drawing() {
        let mut canvas = canvas(4, 4);
        canvas.set_viewport(Some(Rect::new(10, 10, 2, 2)));
        canvas.draw_point(Vector2::ZERO, Color::RED);
        assert_eq!(count(&canvas, Color::RED), 0);
    }
}
