//! # Config Crate
//!
//! Centralized configuration constants for the mesh merge and line geometry
//! engines. All magic numbers and tunable parameters are defined here so the
//! geometry crates stay declarative.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_LINE_WIDTH};
//! use config::settings::GeometryConfig;
//!
//! let value: f64 = 0.00000000001;
//! assert!(value.abs() < EPSILON);
//!
//! let cfg = GeometryConfig::default();
//! assert!(cfg.miter_limit >= 1.0);
//! assert_eq!(DEFAULT_LINE_WIDTH, 1.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Defaults match the behavior UI hosts expect from a line widget
//! - **Validated Snapshots**: Runtime overrides go through [`settings::GeometryConfig::new`]

pub mod constants;
pub mod settings;
