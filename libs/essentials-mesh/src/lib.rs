//! # Essentials Mesh
//!
//! Combines indexed triangle meshes from heterogeneous sources into one mesh.
//!
//! ## Architecture
//!
//! ```text
//! MeshData (host) ─┐
//! MeshFragment ────┼─→ dyn CombinableMesh ─→ MeshCombiner::{merge, append} ─→ target
//! TransformedMesh ─┘
//! ```
//!
//! ## Algorithms
//!
//! - **Merge**: concatenates vertex channels and re-buckets every submesh by
//!   material, producing one triangle submesh per distinct material
//! - **Append**: concatenates vertex channels and keeps every source submesh
//!   with its own topology and material
//!
//! ## Usage
//!
//! ```rust
//! use essentials_mesh::{merge, CombinableMesh, MaterialHandle, MeshFragment};
//! use glam::DVec3;
//!
//! let stone = MaterialHandle::new(1);
//! let mut target = MeshFragment::from_triangles(
//!     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
//!     vec![0, 1, 2],
//!     Some(stone),
//! );
//! let other = MeshFragment::from_triangles(
//!     vec![DVec3::Z, DVec3::ONE, DVec3::NEG_X],
//!     vec![0, 1, 2],
//!     Some(stone),
//! );
//!
//! merge(&mut target, &[&other]).unwrap();
//! assert_eq!(target.submesh_count(), 1);
//! assert_eq!(target.indices(0), &[0, 1, 2, 3, 4, 5]);
//! ```

pub mod combinable;
pub mod error;
pub mod material;
pub mod mesh;
pub mod ops;
pub mod topology;

pub use combinable::{
    bounds, build_colors, CombinableMesh, HostMesh, MeshFragment, SubmeshPart, TransformedMesh,
};
pub use error::MeshError;
pub use material::MaterialHandle;
pub use mesh::{MeshData, SubmeshData};
pub use ops::combine::{append, merge, MeshCombiner};
pub use topology::{triangulate, Topology};
