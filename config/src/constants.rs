//! # Configuration Constants
//!
//! Centralized constants for the geometry engines.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Line Defaults**: Defaults for line style records
//! - **Tessellation**: Bezier subdivision and round-corner fan parameters
//! - **Limits**: Maximum values for safety bounds
//! - **Color**: Default vertex color

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance used when deciding whether a direction vector is degenerate
/// (zero length) before normalizing it.
pub const DIRECTION_EPSILON: f64 = 1e-12;

// =============================================================================
// LINE DEFAULTS
// =============================================================================

/// Default ribbon width of a line, in pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Default Bezier resolution setting.
///
/// Interpreted as "subdivisions per [`BEZIER_LENGTH_UNIT`] of control polygon
/// length".
pub const DEFAULT_RESOLUTION: u32 = 16;

/// Default Bezier handle length multiplier applied to anchor tangents.
pub const DEFAULT_ROUNDNESS: f64 = 100.0;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Control polygon length that receives exactly `resolution` subdivisions.
///
/// # Example
///
/// ```rust
/// use config::constants::{BEZIER_LENGTH_UNIT, DEFAULT_RESOLUTION};
///
/// let length = 200.0;
/// let subdivisions = (length / BEZIER_LENGTH_UNIT * DEFAULT_RESOLUTION as f64).round();
/// assert_eq!(subdivisions, 32.0);
/// ```
pub const BEZIER_LENGTH_UNIT: f64 = 100.0;

/// Minimum number of subdivisions for a single Bezier segment.
///
/// Short segments whose computed resolution rounds to zero still emit their
/// end anchor.
pub const MIN_BEZIER_SUBDIVISIONS: u32 = 1;

/// Largest angular span of one wedge in a round-corner triangle fan, in degrees.
pub const ROUND_FAN_STEP_DEGREES: f64 = 15.0;

/// Default miter limit, as a multiple of half the line width.
///
/// Miter legs at sharp corners grow as `1 / sin(angle)`; legs are clamped so
/// they never exceed `miter_limit * width / 2`.
pub const DEFAULT_MITER_LIMIT: f64 = 4.0;

/// Default number of samples used to build a Bezier arc-length table.
pub const DEFAULT_CHECKPOINT_PRECISION: usize = 50;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single combined mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default vertex color when a mesh carries no color channel (opaque white).
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_VERTEX_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the number of subdivisions for one Bezier segment.
///
/// `round(length / BEZIER_LENGTH_UNIT * resolution)`, never below
/// [`MIN_BEZIER_SUBDIVISIONS`].
///
/// # Example
///
/// ```rust
/// use config::constants::compute_subdivisions;
///
/// assert_eq!(compute_subdivisions(100.0, 16), 16);
/// assert_eq!(compute_subdivisions(1.0, 16), 1);
/// ```
pub fn compute_subdivisions(length: f64, resolution: u32) -> u32 {
    let subdivisions = (length / BEZIER_LENGTH_UNIT * resolution as f64).round();
    if subdivisions.is_finite() && subdivisions > MIN_BEZIER_SUBDIVISIONS as f64 {
        subdivisions as u32
    } else {
        MIN_BEZIER_SUBDIVISIONS
    }
}
