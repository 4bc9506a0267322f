//=========================================================================
// Vector2
//=========================================================================
//
// Architecture:
//   Vector2 = glam::Vec2   (arithmetic, length, dot, lerp, operators)
//   Vector2Ext             (angles, rotation, reflection, stepping)
//
// glam already provides the component-wise operators (`+`, `-`, `*`, `/`,
// `%` and their `*Assign` forms, both vector-vector and vector-scalar),
// so game code writes `position += velocity * dt` directly.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Vector2 =============================================================

/// Two-component `f32` vector used for positions, sizes and scales.
pub type Vector2 = Vec2;

//=== Vector2Ext ==========================================================

/// Extra vector operations used by 2D game code.
pub trait Vector2Ext {
    /// Angle in radians of the line from `self` to `target`.
    fn angle_towards(self, target: Vector2) -> f32;

    /// Reflects `self` about `normal` (expected to be normalized).
    fn mirrored(self, normal: Vector2) -> Vector2;

    /// Rotates `self` counter-clockwise by `angle` radians.
    fn rotated(self, angle: f32) -> Vector2;

    /// Moves `self` towards `target` by at most `max_distance`.
    ///
    /// Returns `target` when it is already within reach.
    fn step_towards(self, target: Vector2, max_distance: f32) -> Vector2;

    /// Component-wise reciprocal (`1/x`, `1/y`).
    fn inverted(self) -> Vector2;

    /// Clamps each component independently between `min` and `max`.
    ///
    /// Unlike `Vec2::clamp`, never asserts on `min > max`; the upper bound
    /// wins in that case.
    fn clamped(self, min: Vector2, max: Vector2) -> Vector2;
}

impl Vector2Ext for Vector2 {
    fn angle_towards(self, target: Vector2) -> f32 {
        (target.y - self.y).atan2(target.x - self.x)
    }

    fn mirrored(self, normal: Vector2) -> Vector2 {
        let dot = self.dot(normal);
        Vector2::new(
            self.x - 2.0 * normal.x * dot,
            self.y - 2.0 * normal.y * dot,
        )
    }

    fn rotated(self, angle: f32) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    fn step_towards(self, target: Vector2, max_distance: f32) -> Vector2 {
        let delta = target - self;
        let distance_sq = delta.length_squared();

        if distance_sq == 0.0
            || (max_distance >= 0.0 && distance_sq <= max_distance * max_distance)
        {
            return target;
        }

        let distance = distance_sq.sqrt();
        self + delta / distance * max_distance
    }

    fn inverted(self) -> Vector2 {
        Vector2::new(1.0 / self.x, 1.0 / self.y)
    }

    fn clamped(self, min: Vector2, max: Vector2) -> Vector2 {
        Vector2::new(
            max.x.min(min.x.max(self.x)),
            max.y.min(min.y.max(self.y)),
        )
    }
}

//=== Free Functions ======================================================

/// Angle in radians between two normalized direction vectors.
///
/// The dot product is clamped to `[-1, 1]` before `acos` so rounding noise
/// on nearly parallel vectors never yields `NaN`.
pub fn line_angle(start: Vector2, end: Vector2) -> f32 {
    start.dot(end).clamp(-1.0, 1.0).acos()
}

//=========================================================================
// Unit Tests
//=========================================================================
