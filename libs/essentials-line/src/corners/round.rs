//! Round joints.
//!
//! ```text
//! anchors:   ─── a ───────── b ───────── c
//!
//! vertices:  ─── c_pos ───── f_pos ─────     +perpendicular side
//!            ─ ─ a ─ ─ ─ ─ ─ b ─ ─ ─ ─ ─     centerline
//!            ─── a_pos ───── d_pos ─────     -perpendicular side
//! ```
//!
//! At each joint the inner side uses the mitered leg and the outer side the
//! plain perpendicular, which leaves a wedge-shaped gap on the outside of the
//! turn. A fan around `b` fills it.

use super::{miter_factor, segment_perpendicular, uv_u};
use crate::mesh::LineGeometry;
use crate::style::LineStyle;
use crate::vertices::Centerline;
use config::settings::GeometryConfig;
use essentials_math::{rotate, signed_angle};
use glam::DVec2;

/// Builds a six-vertex quad per segment plus a triangle fan at every interior
/// joint.
///
/// The width mode is not used; cross-sections always follow the segment.
pub fn build(line: &Centerline, style: &LineStyle, config: &GeometryConfig) -> LineGeometry {
    let mut geometry = LineGeometry::default();
    let vertices = &line.vertices;
    let count = vertices.len();
    let half = style.width / 2.0;
    let color = style.color;

    let segments = vertices.windows(2).zip(line.normals.windows(2));
    for (i, (ends, normals)) in segments.enumerate() {
        let (a, b) = (ends[0], ends[1]);
        let delta = b - a;
        let perpendicular = segment_perpendicular(a, b, half);

        let angle_a = 90.0 - signed_angle(perpendicular, normals[0]);
        let angle_b = 90.0 - signed_angle(perpendicular, normals[1]);
        let inner_a = normals[0] * (miter_factor(angle_a, config) * half);
        let inner_b = normals[1] * (miter_factor(angle_b, config) * half);

        let a_pos = a - leg(angle_a > 90.0, perpendicular, inner_a);
        let c_pos = a + leg(angle_a < 90.0, perpendicular, inner_a);
        let d_pos = b - leg(angle_b < 90.0, perpendicular, inner_b);
        let f_pos = b + leg(angle_b > 90.0, perpendicular, inner_b);

        let (u0, u1) = (uv_u(i, count), uv_u(i + 1, count));
        let mesh = &mut geometry.mesh;
        let ia = mesh.add_vertex(a_pos, DVec2::new(u0, 0.0), color);
        let ib = mesh.add_vertex(a, DVec2::new(u0, 0.5), color);
        let ic = mesh.add_vertex(c_pos, DVec2::new(u0, 1.0), color);
        let id = mesh.add_vertex(d_pos, DVec2::new(u1, 0.0), color);
        let ie = mesh.add_vertex(b, DVec2::new(u1, 0.5), color);
        let i_f = mesh.add_vertex(f_pos, DVec2::new(u1, 1.0), color);

        geometry.push_triangle(ia, ib, ie);
        geometry.push_triangle(ia, ie, id);
        geometry.push_triangle(ib, ic, i_f);
        geometry.push_triangle(ib, i_f, ie);

        let Some(&next) = vertices.get(i + 2) else {
            continue;
        };

        let span = signed_angle(delta, next - b);
        let steps = (span.abs() / config.fan_step_degrees).ceil();
        if steps < 1.0 {
            continue;
        }
        let step = span / steps;

        // Turning right leaves the gap on the +perpendicular side.
        let clockwise = angle_b > 90.0;
        let (mut last_pos, mut last_index) = if clockwise {
            (f_pos, i_f)
        } else {
            (d_pos, id)
        };
        for _ in 0..steps as u32 {
            let next_pos = b + rotate(last_pos - b, step);
            let next_index = geometry.mesh.add_vertex(next_pos, DVec2::ZERO, color);
            if clockwise {
                geometry.push_triangle(ie, last_index, next_index);
            } else {
                geometry.push_triangle(ie, next_index, last_index);
            }
            last_pos = next_pos;
            last_index = next_index;
        }
    }

    geometry
}

/// Outer side of a joint takes the plain perpendicular, inner side the miter.
fn leg(outer: bool, perpendicular: DVec2, inner: DVec2) -> DVec2 {
    if outer {
        perpendicular
    } else {
        inner
    }
}
