//! Mitered joints.

use super::{miter_factor, push_segment_quad, segment_perpendicular};
use crate::mesh::LineGeometry;
use crate::style::{LineStyle, WidthMode};
use crate::vertices::Centerline;
use config::settings::GeometryConfig;
use essentials_math::angle_between;
use glam::DVec2;

/// Builds one quad per segment whose cross-edges lie along the vertex
/// normals.
///
/// In [`WidthMode::Tangent`] each leg is stretched by `1 / sin` of the angle
/// between normal and segment so that adjacent quads share their outer
/// edges. In [`WidthMode::Fixed`] every leg is `width_vector * width / 2`.
pub fn build(line: &Centerline, style: &LineStyle, config: &GeometryConfig) -> LineGeometry {
    let mut geometry = LineGeometry::default();
    let count = line.len();
    let half = style.width / 2.0;

    let segments = line.vertices.windows(2).zip(line.normals.windows(2));
    for (i, (ends, normals)) in segments.enumerate() {
        let (a, b) = (ends[0], ends[1]);
        let legs = match style.mode {
            WidthMode::Tangent => {
                let perpendicular = segment_perpendicular(a, b, half);
                (
                    miter_leg(perpendicular, normals[0], half, config),
                    miter_leg(perpendicular, normals[1], half, config),
                )
            }
            WidthMode::Fixed => {
                let leg = style.width_vector * half;
                (leg, leg)
            }
        };
        push_segment_quad(&mut geometry, i, count, (a, b), legs, style.color);
    }

    geometry
}

fn miter_leg(perpendicular: DVec2, normal: DVec2, half: f64, config: &GeometryConfig) -> DVec2 {
    let angle = 90.0 - angle_between(perpendicular, normal);
    normal * (miter_factor(angle, config) * half)
}
