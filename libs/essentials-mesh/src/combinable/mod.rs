//! # Combinable Meshes
//!
//! A capability trait over every geometry source the combine engine reads
//! from or writes to.
//!
//! ## Variants
//!
//! | Type | Reads | Writes |
//! |------|-------|--------|
//! | [`HostMesh`] | host buffers | write through to the host buffers |
//! | [`MeshFragment`] | owned buffers | owned buffers |
//! | [`TransformedMesh`] | source, positions/normals transformed on access | `Unsupported` |
//!
//! Absent optional channels are empty slices. Submesh accessors return empty
//! / default values for out-of-range submesh indices; setters return
//! [`MeshError::SubmeshOutOfRange`].

mod fragment;
mod host;
mod transformed;


pub use fragment::{MeshFragment, SubmeshPart};
pub use host::HostMesh;
pub use transformed::TransformedMesh;

use crate::error::MeshError;
use crate::material::MaterialHandle;
use crate::mesh::bounding_box_of;
use crate::topology::{triangulate, Topology};
use glam::{DVec2, DVec3};
use std::borrow::Cow;

/// Read/write surface shared by all mesh sources.
pub trait CombinableMesh {
    /// Vertex positions.
    fn vertices(&self) -> Cow<'_, [DVec3]>;

    /// Vertex normals, empty when absent.
    fn normals(&self) -> Cow<'_, [DVec3]>;

    /// Texture coordinates, empty when absent.
    fn uvs(&self) -> &[DVec2];

    /// Vertex colors, empty when absent.
    fn colors(&self) -> &[[f32; 4]];

    /// Number of submeshes.
    fn submesh_count(&self) -> usize;

    /// Index list of a submesh.
    fn indices(&self, submesh: usize) -> &[u32];

    /// Topology of a submesh.
    fn topology(&self, submesh: usize) -> Topology;

    /// Material of a submesh.
    fn material(&self, submesh: usize) -> Option<MaterialHandle>;

    /// Number of vertices without materializing positions.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Materials of all submeshes, in submesh order.
    fn materials(&self) -> Vec<Option<MaterialHandle>> {
        (0..self.submesh_count()).map(|i| self.material(i)).collect()
    }

    /// All submeshes converted to triangles and concatenated.
    fn triangles(&self) -> Result<Vec<u32>, MeshError> {
        let mut result = Vec::new();
        for submesh in 0..self.submesh_count() {
            result.extend_from_slice(&triangulate(self.indices(submesh), self.topology(submesh))?);
        }
        Ok(result)
    }

    /// Returns true if every write fails with `Unsupported`.
    fn is_read_only(&self) -> bool {
        false
    }

    /// Replaces vertex positions.
    fn set_vertices(&mut self, vertices: &[DVec3]) -> Result<(), MeshError>;

    /// Replaces vertex normals.
    fn set_normals(&mut self, normals: &[DVec3]) -> Result<(), MeshError>;

    /// Replaces texture coordinates.
    fn set_uvs(&mut self, uvs: &[DVec2]) -> Result<(), MeshError>;

    /// Replaces vertex colors.
    fn set_colors(&mut self, colors: &[[f32; 4]]) -> Result<(), MeshError>;

    /// Grows or shrinks the submesh list, keeping existing submeshes.
    fn set_submesh_count(&mut self, count: usize) -> Result<(), MeshError>;

    /// Replaces one submesh's indices, topology and material.
    fn set_indices(
        &mut self,
        submesh: usize,
        indices: &[u32],
        topology: Topology,
        material: Option<MaterialHandle>,
    ) -> Result<(), MeshError>;

    /// Replaces one submesh's material.
    fn set_material(
        &mut self,
        submesh: usize,
        material: Option<MaterialHandle>,
    ) -> Result<(), MeshError>;

    /// Removes all geometry, leaving one empty submesh without material.
    fn clear(&mut self) -> Result<(), MeshError>;
}

/// Axis-aligned bounds of a mesh's (possibly transformed) vertices as
/// (min, max); zeros for an empty mesh.
pub fn bounds(mesh: &dyn CombinableMesh) -> (DVec3, DVec3) {
    bounding_box_of(&mesh.vertices())
}

/// A color channel of `count` copies of `color`.
pub fn build_colors(color: [f32; 4], count: usize) -> Vec<[f32; 4]> {
    vec![color; count]
}

pub(crate) fn out_of_range(index: usize, count: usize) -> MeshError {
    MeshError::SubmeshOutOfRange { index, count }
}
