//=========================================================================
// Rect
//=========================================================================

use crate::core::math::Vector2;

/// Axis-aligned integer rectangle (top-left origin, pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Builds a rectangle from a position and a size, truncating to pixels.
    ///
    /// Negative sizes collapse to zero.
    pub fn from_vectors(position: Vector2, size: Vector2) -> Self {
        Self {
            x: position.x as i32,
            y: position.y as i32,
            w: size.x.max(0.0) as u32,
            h: size.y.max(0.0) as u32,
        }
    }

    /// Exclusive right edge, saturated at `i32::MAX`.
    pub fn right(&self) -> i32 {
        (self.x as i64 + self.w as i64).min(i32::MAX as i64) as i32
    }

    /// Exclusive bottom edge, saturated at `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        (self.y as i64 + self.h as i64).min(i32::MAX as i64) as i32
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Overlapping region of two rectangles, `None` if they do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        (right > left && bottom > top)
            .then(|| Rect::new(left, top, (right - left) as u32, (bottom - top) as u32))
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vectors_keeps_width_and_height_in_order() {
        let rect = Rect::from_vectors(Vector2::new(10.7, 20.2), Vector2::new(30.0, 40.0));
        assert_eq!(rect, Rect::new(10, 20, 30, 40));
    }

    #[test]
    fn edges_saturate_for_oversized_rects() {
        let rect = Rect::new(-10, 5, u32::MAX, u32::MAX);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MAX);

        let clipped = rect.intersection(&Rect::new(0, 0, 8, 8));
        assert_eq!(clipped, Some(Rect::new(0, 5, 8, 3)));
    }

    #[test]
    fn from_vectors_clamps_negative_size() {
        let rect = Rect::from_vectors(Vector2::ZERO, Vector2::new(-5.0, 3.0));
        assert!(rect.is_empty());
    }

    #[test]
    fn intersection_of_overlapping_rects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(Rect::new(5, 5, 5, 5)));
    }

    #[test]
    fn intersection_of_disjoint_rects_is_none() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn contains_point_excludes_far_edges() {
        let rect = Rect::new(0, 0, 4, 4);
        assert!(rect.contains_point(0, 0));
        assert!(rect.contains_point(3, 3));
        assert!(!rect.contains_point(4, 0));
    }
}
