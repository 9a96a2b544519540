//! Line geometry entry point.

use crate::corners::build_corners;
use crate::mesh::LineGeometry;
use crate::style::{LineStyle, RectFrame};
use crate::vertices::Centerline;
use config::settings::GeometryConfig;
use glam::DVec2;

/// Builds the full ribbon geometry of a line.
///
/// Consecutive anchors within `config.tolerance` of each other collapse
/// into one. Fewer than two centerline vertices produce empty geometry.
///
/// # Example
///
/// ```rust
/// use config::settings::GeometryConfig;
/// use essentials_line::{build_line, LineStyle, RectFrame, WidthMode};
/// use glam::DVec2;
///
/// let style = LineStyle {
///     width: 2.0,
///     mode: WidthMode::Fixed,
///     ..LineStyle::default()
/// };
/// let geometry = build_line(
///     &[DVec2::ZERO, DVec2::new(10.0, 0.0)],
///     &[DVec2::X, DVec2::X],
///     &style,
///     &RectFrame::default(),
///     &GeometryConfig::default(),
/// );
/// assert_eq!(geometry.mesh.vertex_count(), 4);
/// assert_eq!(geometry.triangles.len(), 2);
/// ```
pub fn build_line(
    points: &[DVec2],
    tangents: &[DVec2],
    style: &LineStyle,
    frame: &RectFrame,
    config: &GeometryConfig,
) -> LineGeometry {
    let (points, tangents) = collapse_duplicates(points, tangents, config.tolerance);
    let centerline = Centerline::new(&points, &tangents, style, frame);
    if centerline.len() < 2 {
        log::trace!("line has {} vertices, nothing to build", centerline.len());
        return LineGeometry::default();
    }

    let corners = style.effective_corners();
    let geometry = build_corners(corners, &centerline, style, config);
    log::debug!(
        "built {:?} line with {:?} corners: {} vertices, {} triangles",
        style.line_type,
        corners,
        geometry.mesh.vertex_count(),
        geometry.mesh.triangle_count()
    );
    geometry
}

/// Drops anchors within `tolerance` of the last kept anchor.
///
/// Tangents are filtered alongside when there is one per point. Otherwise
/// none are returned, so the centerline derives them from the kept points.
fn collapse_duplicates(
    points: &[DVec2],
    tangents: &[DVec2],
    tolerance: f64,
) -> (Vec<DVec2>, Vec<DVec2>) {
    let paired = tangents.len() == points.len();
    let mut kept_points: Vec<DVec2> = Vec::with_capacity(points.len());
    let mut kept_tangents = Vec::with_capacity(if paired { tangents.len() } else { 0 });

    for (i, &point) in points.iter().enumerate() {
        if let Some(last) = kept_points.last() {
            if last.distance(point) <= tolerance {
                continue;
            }
        }
        kept_points.push(point);
        if let Some(&tangent) = tangents.get(i).filter(|_| paired) {
            kept_tangents.push(tangent);
        }
    }

    if kept_points.len() < points.len() {
        log::trace!("collapsed {} duplicate anchors", points.len() - kept_points.len());
    }
    (kept_points, kept_tangents)
}
