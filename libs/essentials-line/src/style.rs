//! # Line Style
//!
//! Plain-data records a UI host stores per line and hands to the geometry
//! builders.

use config::constants::{
    DEFAULT_LINE_WIDTH, DEFAULT_RESOLUTION, DEFAULT_ROUNDNESS, DEFAULT_VERTEX_COLOR,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// How the centerline is derived from the anchor points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineType {
    /// Anchors are connected directly.
    #[default]
    Straight,
    /// Consecutive anchors are joined by cubic Bezier segments.
    Bezier,
}

/// Join treatment between consecutive segments.
///
/// Only honored for [`LineType::Straight`]; Bezier lines always use
/// [`CornerType::Angle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CornerType {
    /// Outer edges meet at their intersection (miter join).
    #[default]
    Angle,
    /// The outer gap is filled with a triangle fan.
    Round,
    /// Segments are independent quads; gaps at corners remain.
    None,
}

/// How the ribbon's cross-section is oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WidthMode {
    /// Across the local tangent.
    #[default]
    Tangent,
    /// Along [`LineStyle::width_vector`] everywhere.
    Fixed,
}

/// Space the anchor points and tangents are given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoordinateSystem {
    /// Local pixels.
    #[default]
    Pixel,
    /// Fractions of the host rect, mapped through a [`RectFrame`].
    Relative,
}

/// Styling of one line.
///
/// # Example
///
/// ```rust
/// use essentials_line::{CornerType, LineStyle};
///
/// let style = LineStyle {
///     width: 4.0,
///     corners: CornerType::Round,
///     ..LineStyle::default()
/// };
/// assert_eq!(style.resolution, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    /// Ribbon width in pixels
    pub width: f64,
    /// Bezier samples per 100 pixels of control polygon length
    pub resolution: u32,
    /// Bezier handle length as a multiple of the tangent
    pub roundness: f64,
    /// Cross-section orientation
    pub mode: WidthMode,
    /// Centerline kind
    pub line_type: LineType,
    /// Space of points and tangents
    pub coordinates: CoordinateSystem,
    /// Join treatment
    pub corners: CornerType,
    /// Cross-section direction in [`WidthMode::Fixed`]
    pub width_vector: DVec2,
    /// Vertex color (RGBA)
    pub color: [f32; 4],
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_LINE_WIDTH,
            resolution: DEFAULT_RESOLUTION,
            roundness: DEFAULT_ROUNDNESS,
            mode: WidthMode::Tangent,
            line_type: LineType::Straight,
            coordinates: CoordinateSystem::Pixel,
            corners: CornerType::Angle,
            width_vector: DVec2::Y,
            color: DEFAULT_VERTEX_COLOR,
        }
    }
}

impl LineStyle {
    /// Corner type actually used for this style.
    pub fn effective_corners(&self) -> CornerType {
        match self.line_type {
            LineType::Straight => self.corners,
            LineType::Bezier => CornerType::Angle,
        }
    }
}

/// The host rect relative coordinates are mapped through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectFrame {
    /// Rect width in pixels
    pub width: f64,
    /// Rect height in pixels
    pub height: f64,
    /// Pivot as a fraction of the rect, `(0.5, 0.5)` is the center
    pub pivot: DVec2,
}

impl Default for RectFrame {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            pivot: DVec2::splat(0.5),
        }
    }
}

impl RectFrame {
    /// Creates a frame.
    pub fn new(width: f64, height: f64, pivot: DVec2) -> Self {
        Self {
            width,
            height,
            pivot,
        }
    }

    /// Maps a relative point to pixels around the pivot.
    pub fn to_pixels(&self, point: DVec2) -> DVec2 {
        (point - self.pivot) * DVec2::new(self.width, self.height)
    }

    /// Maps a relative tangent to a unit pixel-space tangent.
    ///
    /// Zero-height frames and zero tangents yield zero.
    pub fn tangent_to_pixels(&self, tangent: DVec2) -> DVec2 {
        if self.height == 0.0 {
            return DVec2::ZERO;
        }
        let aspect = self.width / self.height;
        DVec2::new(tangent.x * aspect, tangent.y).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_style() {
        let style = LineStyle::default();
        assert_eq!(style.width, 1.0);
        assert_eq!(style.resolution, 16);
        assert_eq!(style.roundness, 100.0);
        assert_eq!(style.mode, WidthMode::Tangent);
        assert_eq!(style.line_type, LineType::Straight);
        assert_eq!(style.coordinates, CoordinateSystem::Pixel);
        assert_eq!(style.corners, CornerType::Angle);
        assert_eq!(style.width_vector, DVec2::Y);
        assert_eq!(style.color, [1.0; 4]);
    }

    #[test]
    fn test_bezier_forces_angle_corners() {
        let style = LineStyle {
            line_type: LineType::Bezier,
            corners: CornerType::Round,
            ..LineStyle::default()
        };
        assert_eq!(style.effective_corners(), CornerType::Angle);

        let straight = LineStyle {
            corners: CornerType::None,
            ..LineStyle::default()
        };
        assert_eq!(straight.effective_corners(), CornerType::None);
    }

    #[test]
    fn test_style_deserializes_partial_record() {
        let style: LineStyle =
            serde_json::from_str(r#"{"width": 3.0, "corners": "Round"}"#).unwrap();
        assert_eq!(style.width, 3.0);
        assert_eq!(style.corners, CornerType::Round);
        assert_eq!(style.resolution, DEFAULT_RESOLUTION);
    }

    #[test]
    fn test_style_json_roundtrip_keeps_enums() {
        let style = LineStyle {
            line_type: LineType::Bezier,
            mode: WidthMode::Fixed,
            coordinates: CoordinateSystem::Relative,
            ..LineStyle::default()
        };
        let json = serde_json::to_string(&style).unwrap();
        assert!(json.contains("\"Bezier\""));
        let back: LineStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }

    #[test]
    fn test_frame_maps_points_around_pivot() {
        let frame = RectFrame::new(200.0, 200.0, DVec2::splat(0.5));
        assert_eq!(frame.to_pixels(DVec2::new(0.0, 1.0)), DVec2::new(-100.0, 100.0));
        assert_eq!(frame.to_pixels(DVec2::splat(0.5)), DVec2::ZERO);
    }

    #[test]
    fn test_frame_tangents_follow_aspect_ratio() {
        let frame = RectFrame::new(200.0, 100.0, DVec2::ZERO);
        let tangent = frame.tangent_to_pixels(DVec2::new(1.0, 1.0));
        let expected = DVec2::new(2.0, 1.0).normalize();
        assert_relative_eq!(tangent.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(tangent.y, expected.y, epsilon = 1e-12);

        let flat = RectFrame::new(100.0, 0.0, DVec2::ZERO);
        assert_eq!(flat.tangent_to_pixels(DVec2::X), DVec2::ZERO);
    }
}
