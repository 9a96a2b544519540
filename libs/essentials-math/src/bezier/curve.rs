//! Multi-part Bezier curves.

use super::{Bezier, CurvePoint};
use config::settings::GeometryConfig;
use glam::DVec3;

/// An ordered chain of cubic Bezier segments.
///
/// Arc-length tables are computed on construction so that
/// [`BezierCurve::get_point`] is uniform in distance.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve<P> {
    parts: Vec<Bezier<P>>,
    length: f64,
}

impl<P: CurvePoint> BezierCurve<P> {
    /// Creates a curve from segments, computing checkpoints at the default
    /// precision.
    pub fn new(parts: Vec<Bezier<P>>) -> Self {
        Self::with_config(parts, &GeometryConfig::default())
    }

    /// Creates a curve from segments, sampling each arc-length table
    /// `config.checkpoint_precision` times.
    pub fn with_config(parts: Vec<Bezier<P>>, config: &GeometryConfig) -> Self {
        let mut curve = Self { parts, length: 0.0 };
        curve.calculate_checkpoints(config.checkpoint_precision);
        curve
    }

    /// Recomputes every segment's arc-length table.
    pub fn calculate_checkpoints(&mut self, precision: usize) {
        self.length = 0.0;
        for part in &mut self.parts {
            part.calculate_checkpoints(precision);
            self.length += part.length();
        }
    }

    /// The curve segments.
    pub fn parts(&self) -> &[Bezier<P>] {
        &self.parts
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns true if the curve has no segments.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Point at fraction `t` of the total length.
    ///
    /// `t <= 0` yields the first anchor and `t >= 1` the last anchor exactly.
    /// Returns `None` for an empty curve.
    pub fn get_point(&self, t: f64) -> Option<P> {
        let first = self.parts.first()?;
        let last = self.parts.last()?;
        if t <= 0.0 {
            return Some(first.evaluate(0.0));
        }
        if t >= 1.0 {
            return Some(last.evaluate(1.0));
        }

        let mut remaining = t * self.length;
        for part in &self.parts {
            let part_length = part.length();
            if part_length < remaining {
                remaining -= part_length;
                continue;
            }
            return Some(part.evaluate_at_distance(remaining));
        }
        Some(last.evaluate(1.0))
    }
}

impl BezierCurve<DVec3> {
    /// Builds a smooth curve passing through every point.
    ///
    /// Handles sit at a third of the chord length, perpendicular to the angle
    /// bisector at each anchor. Collinear or doubled-back anchors fall back to
    /// the +Y axis as the bisector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use essentials_math::BezierCurve;
    /// use glam::DVec3;
    ///
    /// let points = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)];
    /// let curve = BezierCurve::through_points(&points);
    /// assert_eq!(curve.parts().len(), 2);
    /// assert_eq!(curve.get_point(1.0), Some(DVec3::new(1.0, 1.0, 0.0)));
    /// ```
    pub fn through_points(points: &[DVec3]) -> Self {
        Self::through_points_with_config(points, &GeometryConfig::default())
    }

    /// [`BezierCurve::through_points`] with the checkpoint precision taken
    /// from `config`.
    pub fn through_points_with_config(points: &[DVec3], config: &GeometryConfig) -> Self {
        let mut parts = Vec::with_capacity(points.len().saturating_sub(1));
        for i in 0..points.len().saturating_sub(1) {
            let b = points[i];
            let c = points[i + 1];
            let a = if i > 0 { points[i - 1] } else { b - (c - b) };
            let d = points.get(i + 2).copied().unwrap_or(c - (b - c));

            let start_handle = handle_direction(b, a, c);
            let end_handle = handle_direction(c, b, d);

            let handle_length = b.distance(c) / 3.0;
            parts.push(Bezier::new(
                b,
                b - start_handle * handle_length,
                c + end_handle * handle_length,
                c,
            ));
        }
        Self::with_config(parts, config)
    }
}

/// Direction perpendicular to the bisector of `anchor → previous` and
/// `anchor → next`, in the plane of the three points.
fn handle_direction(anchor: DVec3, previous: DVec3, next: DVec3) -> DVec3 {
    let to_previous = (previous - anchor).normalize_or_zero();
    let to_next = (next - anchor).normalize_or_zero();

    let mut bisector = to_previous + to_next;
    let mut up = to_previous.cross(to_next).normalize_or_zero();

    if bisector.length_squared() <= 0.0 {
        bisector = DVec3::Y;
    }
    if up.length_squared() <= 0.0 {
        up = to_previous.cross(DVec3::Y).normalize_or_zero();
    }

    bisector.cross(up).normalize_or_zero()
}
