//! # Essentials Math
//!
//! Geometry primitives used by the mesh merge engine and the line geometry
//! engine. Everything works on `glam` f64 vectors.
//!
//! ## Modules
//!
//! - [`vec2`]: rotation, perpendiculars and angles between 2D vectors
//! - [`triangle`]: 2D triangles and point containment
//! - [`edge`]: 3D segments with closest-point queries
//! - [`bezier`]: cubic Bezier segments and multi-part curves with
//!   arc-length parameterization

pub mod bezier;
pub mod edge;
pub mod triangle;
pub mod vec2;

pub use bezier::{Bezier, BezierCurve, CurvePoint};
pub use edge::Edge;
pub use triangle::{point_in_triangle, Triangle};
pub use vec2::{angle_between, perpendicular, rotate, signed_angle};
