//! Point queries against a line's triangle cache.

use essentials_math::Triangle;
use glam::DVec2;

/// Returns true if `point` (in the line's local space) lies inside or on any
/// triangle.
///
/// Linear scan; line meshes stay small.
pub fn hit_test(triangles: &[Triangle], point: DVec2) -> bool {
    triangles.iter().any(|t| t.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_inside_and_outside() {
        let triangles = [
            Triangle::new(DVec2::ZERO, DVec2::new(2.0, 0.0), DVec2::new(0.0, 2.0)),
            Triangle::new(DVec2::new(5.0, 5.0), DVec2::new(6.0, 5.0), DVec2::new(5.0, 6.0)),
        ];
        assert!(hit_test(&triangles, DVec2::new(0.5, 0.5)));
        assert!(hit_test(&triangles, DVec2::new(5.2, 5.2)));
        assert!(!hit_test(&triangles, DVec2::new(3.0, 3.0)));
    }

    #[test]
    fn test_empty_cache_never_hits() {
        assert!(!hit_test(&[], DVec2::ZERO));
    }
}
