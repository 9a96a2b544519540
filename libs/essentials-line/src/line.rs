//! # Line Component
//!
//! Owns a line's inputs and its generated geometry. Every input change marks
//! the line dirty; the next read rebuilds the geometry from scratch.

use crate::builder::build_line;
use crate::hit::hit_test;
use crate::mesh::{LineGeometry, LineMesh};
use crate::style::{LineStyle, RectFrame};
use crate::vertices::automatic_tangents;
use config::settings::GeometryConfig;
use glam::DVec2;

/// A styled line with cached geometry.
///
/// # Example
///
/// ```rust
/// use essentials_line::Line;
/// use glam::DVec2;
///
/// let mut line = Line::default();
/// line.set_points(vec![DVec2::ZERO, DVec2::new(50.0, 0.0), DVec2::new(50.0, 50.0)]);
/// line.recalculate_tangents();
///
/// assert!(line.raycast(DVec2::new(25.0, 0.0)));
/// assert!(!line.raycast(DVec2::new(25.0, 25.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Line {
    points: Vec<DVec2>,
    tangents: Vec<DVec2>,
    style: LineStyle,
    frame: RectFrame,
    config: GeometryConfig,
    geometry: LineGeometry,
    dirty: bool,
}

impl Default for Line {
    fn default() -> Self {
        Self::new(LineStyle::default())
    }
}

impl Line {
    /// Creates a unit line along +X with the given style.
    pub fn new(style: LineStyle) -> Self {
        Self {
            points: vec![DVec2::ZERO, DVec2::X],
            tangents: vec![DVec2::X, DVec2::X],
            style,
            frame: RectFrame::default(),
            config: GeometryConfig::default(),
            geometry: LineGeometry::default(),
            dirty: true,
        }
    }

    /// Anchor points.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Replaces the anchor points.
    pub fn set_points(&mut self, points: Vec<DVec2>) {
        self.points = points;
        self.dirty = true;
    }

    /// Per-point tangents.
    pub fn tangents(&self) -> &[DVec2] {
        &self.tangents
    }

    /// Replaces the tangents.
    pub fn set_tangents(&mut self, tangents: Vec<DVec2>) {
        self.tangents = tangents;
        self.dirty = true;
    }

    /// Line style.
    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// Replaces the style.
    pub fn set_style(&mut self, style: LineStyle) {
        self.style = style;
        self.dirty = true;
    }

    /// Style for in-place edits; marks the line dirty.
    pub fn style_mut(&mut self) -> &mut LineStyle {
        self.dirty = true;
        &mut self.style
    }

    /// Host rect used for relative coordinates.
    pub fn frame(&self) -> &RectFrame {
        &self.frame
    }

    /// Replaces the host rect.
    pub fn set_frame(&mut self, frame: RectFrame) {
        self.frame = frame;
        self.dirty = true;
    }

    /// Geometry settings.
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Replaces the geometry settings.
    pub fn set_config(&mut self, config: GeometryConfig) {
        self.config = config;
        self.dirty = true;
    }

    /// Returns true if the next read will rebuild.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forces a rebuild on the next read.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Derives tangents from the points.
    pub fn recalculate_tangents(&mut self) {
        self.tangents = automatic_tangents(&self.points);
        self.dirty = true;
    }

    /// Current geometry, rebuilt first if dirty.
    pub fn geometry(&mut self) -> &LineGeometry {
        if self.dirty {
            self.geometry = build_line(
                &self.points,
                &self.tangents,
                &self.style,
                &self.frame,
                &self.config,
            );
            self.dirty = false;
        }
        &self.geometry
    }

    /// Current render buffers, rebuilt first if dirty.
    pub fn mesh(&mut self) -> &LineMesh {
        &self.geometry().mesh
    }

    /// Hit-tests a point in the line's local space against the current
    /// geometry.
    pub fn raycast(&mut self, local_point: DVec2) -> bool {
        hit_test(&self.geometry().triangles, local_point)
    }
}
