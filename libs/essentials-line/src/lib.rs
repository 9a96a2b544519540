//! # Essentials Line
//!
//! Tessellates 2D polylines and Bezier paths into UI ribbon meshes.
//!
//! ## Pipeline
//!
//! ```text
//! points + tangents + LineStyle
//!     → Centerline (straight / Bezier samples, per-vertex normals)
//!     → corner builder (Angle / Round / None)
//!     → LineGeometry { LineMesh, triangle cache }
//!     → hit_test
//! ```
//!
//! The [`Line`] component keeps the inputs, rebuilds lazily after any change
//! and answers hit tests against its latest geometry.
//!
//! ## Usage
//!
//! ```rust
//! use essentials_line::{CornerType, Line, LineStyle};
//! use glam::DVec2;
//!
//! let mut line = Line::new(LineStyle {
//!     width: 4.0,
//!     corners: CornerType::Round,
//!     ..LineStyle::default()
//! });
//! line.set_points(vec![DVec2::ZERO, DVec2::new(40.0, 0.0), DVec2::new(40.0, 40.0)]);
//! line.recalculate_tangents();
//!
//! let mesh = line.mesh();
//! assert!(mesh.triangle_count() > 0);
//! ```

pub mod builder;
pub mod corners;
pub mod hit;
pub mod line;
pub mod mesh;
pub mod style;
pub mod vertices;

pub use builder::build_line;
pub use corners::build_corners;
pub use hit::hit_test;
pub use line::Line;
pub use mesh::{LineGeometry, LineMesh, UiVertex};
pub use style::{CoordinateSystem, CornerType, LineStyle, LineType, RectFrame, WidthMode};
pub use vertices::{automatic_tangents, Centerline};
