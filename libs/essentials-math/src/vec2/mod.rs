//! # 2D Vector Helpers
//!
//! Rotation and angle measurement for `glam::DVec2`. Angles are in degrees,
//! counter-clockwise positive, matching the conventions UI hosts use for
//! line styling.

use config::constants::DIRECTION_EPSILON;
use glam::DVec2;

/// Rotates a vector counter-clockwise by `degrees`.
///
/// # Examples
/// ```
/// use essentials_math::vec2::rotate;
/// use glam::DVec2;
///
/// let v = rotate(DVec2::X, 90.0);
/// assert!(v.abs_diff_eq(DVec2::Y, 1e-12));
/// ```
pub fn rotate(v: DVec2, degrees: f64) -> DVec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    DVec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Returns `v` rotated by exactly 90 degrees: `(-y, x)`.
#[inline]
pub fn perpendicular(v: DVec2) -> DVec2 {
    DVec2::new(-v.y, v.x)
}

/// Unsigned angle between two vectors in degrees, in `[0, 180]`.
///
/// Returns 0 when either vector is degenerate.
pub fn angle_between(from: DVec2, to: DVec2) -> f64 {
    let denominator = (from.length_squared() * to.length_squared()).sqrt();
    if denominator < DIRECTION_EPSILON {
        return 0.0;
    }
    let cos = (from.dot(to) / denominator).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Signed angle from `from` to `to` in degrees, in `[-180, 180]`.
///
/// Positive when `to` lies counter-clockwise of `from`.
pub fn signed_angle(from: DVec2, to: DVec2) -> f64 {
    let unsigned = angle_between(from, to);
    if from.perp_dot(to) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}
