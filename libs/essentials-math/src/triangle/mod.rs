//! # Triangles
//!
//! 2D triangles used as hit-testing cache entries.

use glam::DVec2;

/// A triangle in 2D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner
    pub a: DVec2,
    /// Second corner
    pub b: DVec2,
    /// Third corner
    pub c: DVec2,
}

impl Triangle {
    /// Creates a triangle from its three corners.
    pub fn new(a: DVec2, b: DVec2, c: DVec2) -> Self {
        Self { a, b, c }
    }

    /// Returns true if `point` lies inside the triangle or on its boundary.
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        point_in_triangle(point, self.a, self.b, self.c)
    }

    /// Returns the centroid (average of the corners).
    pub fn centroid(&self) -> DVec2 {
        (self.a + self.b + self.c) / 3.0
    }

    /// Returns the axis-aligned bounds as (min, max).
    pub fn bounds(&self) -> (DVec2, DVec2) {
        (
            self.a.min(self.b).min(self.c),
            self.a.max(self.b).max(self.c),
        )
    }

    /// Signed area, positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        (self.b - self.a).perp_dot(self.c - self.a) / 2.0
    }
}

/// Sign test for point containment; works for either winding.
///
/// # Examples
/// ```
/// use essentials_math::triangle::point_in_triangle;
/// use glam::DVec2;
///
/// let inside = point_in_triangle(
///     DVec2::new(0.25, 0.25),
///     DVec2::ZERO,
///     DVec2::X,
///     DVec2::Y,
/// );
/// assert!(inside);
/// ```
pub fn point_in_triangle(point: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    let d1 = edge_sign(point, a, b);
    let d2 = edge_sign(point, b, c);
    let d3 = edge_sign(point, c, a);

    let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_negative && has_positive)
}

#[inline]
fn edge_sign(p1: DVec2, p2: DVec2, p3: DVec2) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}
