//! # Mesh Operations
//!
//! Operations that read several mesh sources and rewrite one target.

pub mod combine;

pub use combine::{append, merge, MeshCombiner};
