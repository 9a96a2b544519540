//! Unjoined segments.

use super::{push_segment_quad, segment_perpendicular};
use crate::mesh::LineGeometry;
use crate::style::{LineStyle, WidthMode};
use crate::vertices::Centerline;

/// Builds an independent quad per segment, ignoring the vertex normals.
///
/// Gaps at the outside of corners are left open.
pub fn build(line: &Centerline, style: &LineStyle) -> LineGeometry {
    let mut geometry = LineGeometry::default();
    let count = line.len();
    let half = style.width / 2.0;

    for (i, ends) in line.vertices.windows(2).enumerate() {
        let (a, b) = (ends[0], ends[1]);
        let leg = match style.mode {
            WidthMode::Tangent => segment_perpendicular(a, b, half),
            WidthMode::Fixed => style.width_vector * half,
        };
        push_segment_quad(&mut geometry, i, count, (a, b), (leg, leg), style.color);
    }

    geometry
}
