//! # Edges
//!
//! Undirected 3D line segments with closest-point and distance queries.

use glam::DVec3;

/// A segment between two points. Equality ignores direction.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// Start point
    pub a: DVec3,
    /// End point
    pub b: DVec3,
}

impl Edge {
    /// A degenerate edge at the origin.
    pub const ZERO: Self = Self {
        a: DVec3::ZERO,
        b: DVec3::ZERO,
    };

    /// Creates an edge between two points.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self { a, b }
    }

    /// Projection parameter of `point` along the edge, unclamped.
    ///
    /// Returns `None` for a zero-length edge.
    fn projection(&self, point: DVec3) -> Option<f64> {
        let direction = self.b - self.a;
        let length_squared = direction.length_squared();
        if length_squared <= 0.0 {
            return None;
        }
        Some((point - self.a).dot(direction) / length_squared)
    }

    /// Returns the point on the edge (or on its supporting line when `clamp`
    /// is false) closest to `point`.
    pub fn closest_point(&self, point: DVec3, clamp: bool) -> DVec3 {
        match self.projection(point) {
            None => self.a,
            Some(t) => {
                let t = if clamp { t.clamp(0.0, 1.0) } else { t };
                self.a + (self.b - self.a) * t
            }
        }
    }

    /// Squared distance from `point` to the segment.
    pub fn squared_distance(&self, point: DVec3) -> f64 {
        (point - self.closest_point(point, true)).length_squared()
    }

    /// Squared distance from `point` to the infinite line through the edge.
    pub fn squared_perpendicular_distance(&self, point: DVec3) -> f64 {
        (point - self.closest_point(point, false)).length_squared()
    }

    /// Scales both endpoints.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.a * factor, self.b * factor)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}
