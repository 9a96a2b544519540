//! # Centerline Vertices
//!
//! Turns anchor points and tangents into the centerline vertices and
//! per-vertex normals the corner builders extrude into a ribbon.
//!
//! ## Line Types
//!
//! - **Straight**: anchors are the vertices, normals are the tangents rotated
//!   by 90 degrees
//! - **Bezier**: each anchor pair becomes a cubic segment with handles at
//!   `anchor ± tangent * roundness`, sampled at uniform parameter steps.
//!   Interior normals are the rotated average of the incoming and outgoing
//!   chords; the end normals come from the boundary tangents.


use crate::style::{CoordinateSystem, LineStyle, LineType, RectFrame};
use config::constants::compute_subdivisions;
use essentials_math::{perpendicular, Bezier};
use glam::DVec2;

/// Centerline vertices with one normal per vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Centerline {
    /// Centerline positions in pixels
    pub vertices: Vec<DVec2>,
    /// Unit normals (zero where undefined)
    pub normals: Vec<DVec2>,
}

impl Centerline {
    /// Builds the centerline for a style.
    ///
    /// Relative coordinates are mapped through `frame` first. When the
    /// tangent list does not have one entry per point, tangents are derived
    /// from the (mapped) points with [`automatic_tangents`].
    pub fn new(points: &[DVec2], tangents: &[DVec2], style: &LineStyle, frame: &RectFrame) -> Self {
        let points: Vec<DVec2> = match style.coordinates {
            CoordinateSystem::Pixel => points.to_vec(),
            CoordinateSystem::Relative => points.iter().map(|&p| frame.to_pixels(p)).collect(),
        };

        let tangents: Vec<DVec2> = if tangents.len() != points.len() {
            log::debug!(
                "{} tangents for {} points, deriving tangents from points",
                tangents.len(),
                points.len()
            );
            automatic_tangents(&points)
        } else {
            match style.coordinates {
                CoordinateSystem::Pixel => tangents.to_vec(),
                CoordinateSystem::Relative => {
                    tangents.iter().map(|&t| frame.tangent_to_pixels(t)).collect()
                }
            }
        };

        match style.line_type {
            LineType::Straight => Self::straight(&points, &tangents),
            LineType::Bezier => Self::bezier(&points, &tangents, style.resolution, style.roundness),
        }
    }

    /// Anchors as vertices, normals from the tangents.
    pub fn straight(points: &[DVec2], tangents: &[DVec2]) -> Self {
        Self {
            vertices: points.to_vec(),
            normals: tangents.iter().map(|&t| unit_normal(t)).collect(),
        }
    }

    /// Samples one cubic Bezier per anchor pair.
    ///
    /// `tangents` must have one entry per point. Each segment is sampled
    /// `compute_subdivisions(control polygon length, resolution)` times; the
    /// anchor shared by two segments is emitted once.
    pub fn bezier(points: &[DVec2], tangents: &[DVec2], resolution: u32, roundness: f64) -> Self {
        let mut vertices = Vec::new();

        for (i, (anchors, handles)) in points.windows(2).zip(tangents.windows(2)).enumerate() {
            let (from, to) = (anchors[0], anchors[1]);
            let bezier = Bezier::new(
                from,
                from + handles[0] * roundness,
                to - handles[1] * roundness,
                to,
            );
            let subdivisions = compute_subdivisions(bezier.control_polygon_length(), resolution);
            let first = if i == 0 { 0 } else { 1 };
            for j in first..=subdivisions {
                vertices.push(bezier.evaluate(f64::from(j) / f64::from(subdivisions)));
            }
        }

        let start = tangents.first().copied().unwrap_or(DVec2::ZERO);
        let end = tangents.last().copied().unwrap_or(DVec2::ZERO);
        let normals = smoothed_normals(&vertices, start, end);
        Self { vertices, normals }
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Derives tangents from the anchor points.
///
/// The first and last tangents follow the first and last chords; interior
/// tangents are the normalized average of the adjacent chords. A single
/// point gets `+X`.
///
/// # Example
///
/// ```rust
/// use essentials_line::automatic_tangents;
/// use glam::DVec2;
///
/// let tangents = automatic_tangents(&[DVec2::ZERO, DVec2::new(5.0, 0.0)]);
/// assert_eq!(tangents, vec![DVec2::X, DVec2::X]);
/// ```
pub fn automatic_tangents(points: &[DVec2]) -> Vec<DVec2> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let Some(&second) = rest.first() else {
        return vec![DVec2::X];
    };

    let mut tangents = Vec::with_capacity(points.len());
    tangents.push((second - first).normalize_or_zero());
    for window in points.windows(3) {
        let incoming = window[1] - window[0];
        let outgoing = window[2] - window[1];
        tangents.push(((incoming + outgoing) / 2.0).normalize_or_zero());
    }
    let last = points.len() - 1;
    tangents.push((points[last] - points[last - 1]).normalize_or_zero());
    tangents
}

fn unit_normal(tangent: DVec2) -> DVec2 {
    perpendicular(tangent).normalize_or_zero()
}

fn smoothed_normals(vertices: &[DVec2], start: DVec2, end: DVec2) -> Vec<DVec2> {
    let count = vertices.len();
    (0..count)
        .map(|i| {
            if i == 0 {
                unit_normal(start)
            } else if i == count - 1 {
                unit_normal(end)
            } else {
                let incoming = vertices[i] - vertices[i - 1];
                let outgoing = vertices[i + 1] - vertices[i];
                unit_normal((incoming + outgoing) / 2.0)
            }
        })
        .collect()
}
