//! # Corner Builders
//!
//! Extrude a [`Centerline`] into a ribbon of triangles.
//!
//! | Builder | Per segment | Between segments |
//! |---------|-------------|------------------|
//! | [`angle`] | quad with mitered cross-edges | nothing, the miter closes the joint |
//! | [`round`] | six-vertex quad split at the centerline | triangle fan over the outer gap |
//! | [`none`] | quad across the segment itself | nothing, gaps remain |
//!
//! Every builder writes UVs with `u = segment / vertex count` and `v` across
//! the ribbon, and records every triangle for hit testing.
//!
//! ## Miter Clamp
//!
//! Mitered legs scale with `1 / sin(angle)`, where the angle is measured
//! between the segment perpendicular and the vertex normal. The sine is
//! clamped to at least `1 / miter_limit` in magnitude, keeping its sign, so a
//! fold-back joint produces a leg of at most `miter_limit * width / 2`.

pub mod angle;
pub mod none;
pub mod round;


use crate::mesh::LineGeometry;
use crate::style::{CornerType, LineStyle};
use crate::vertices::Centerline;
use config::settings::GeometryConfig;
use essentials_math::perpendicular;
use glam::DVec2;

/// Builds the ribbon with the given corner treatment.
pub fn build_corners(
    corners: CornerType,
    line: &Centerline,
    style: &LineStyle,
    config: &GeometryConfig,
) -> LineGeometry {
    match corners {
        CornerType::Angle => angle::build(line, style, config),
        CornerType::Round => round::build(line, style, config),
        CornerType::None => none::build(line, style),
    }
}

/// `1 / sin(angle)` with the sine clamped away from zero.
pub(crate) fn miter_factor(angle_degrees: f64, config: &GeometryConfig) -> f64 {
    let sine = angle_degrees.to_radians().sin();
    let min = config.min_miter_sine();
    if sine.abs() >= min {
        return 1.0 / sine;
    }
    log::trace!("clamping miter at {angle_degrees:.3} degrees");
    if sine < 0.0 {
        -1.0 / min
    } else {
        1.0 / min
    }
}

/// Unit perpendicular of the segment `a -> b` scaled to `half_width`.
pub(crate) fn segment_perpendicular(a: DVec2, b: DVec2, half_width: f64) -> DVec2 {
    perpendicular((b - a).normalize_or_zero()) * half_width
}

/// `u` coordinate of centerline vertex `index`.
pub(crate) fn uv_u(index: usize, vertex_count: usize) -> f64 {
    index as f64 / vertex_count as f64
}

/// Adds the four corners of a segment quad, `a ± leg_a` and `b ± leg_b`,
/// and its two triangles.
pub(crate) fn push_segment_quad(
    geometry: &mut LineGeometry,
    segment: usize,
    vertex_count: usize,
    (a, b): (DVec2, DVec2),
    (leg_a, leg_b): (DVec2, DVec2),
    color: [f32; 4],
) {
    let (u0, u1) = (uv_u(segment, vertex_count), uv_u(segment + 1, vertex_count));
    let mesh = &mut geometry.mesh;
    let ia = mesh.add_vertex(a - leg_a, DVec2::new(u0, 0.0), color);
    let ib = mesh.add_vertex(b - leg_b, DVec2::new(u1, 0.0), color);
    let ic = mesh.add_vertex(b + leg_b, DVec2::new(u1, 1.0), color);
    let id = mesh.add_vertex(a + leg_a, DVec2::new(u0, 1.0), color);
    geometry.push_triangle(ia, ib, ic);
    geometry.push_triangle(ic, id, ia);
}
