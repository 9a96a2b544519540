//! Read-only, matrix-transformed views over other meshes.

use super::CombinableMesh;
use crate::error::MeshError;
use crate::material::MaterialHandle;
use crate::topology::Topology;
use glam::{DMat4, DVec2, DVec3};
use std::borrow::Cow;

/// A source mesh seen through a 4x4 transform, e.g. local-to-world.
///
/// Positions go through the full matrix, normals through its inverse
/// transpose and are re-normalized. Every write returns
/// [`MeshError::Unsupported`]; a transformed view can be merged from but never
/// merged into.
#[derive(Clone, Copy)]
pub struct TransformedMesh<'a> {
    source: &'a dyn CombinableMesh,
    matrix: DMat4,
    normal_matrix: DMat4,
    materials: Option<&'a [Option<MaterialHandle>]>,
}

impl<'a> TransformedMesh<'a> {
    /// Views `source` through `matrix`, keeping the source's materials.
    pub fn new(source: &'a dyn CombinableMesh, matrix: DMat4) -> Self {
        Self {
            source,
            matrix,
            normal_matrix: matrix.inverse().transpose(),
            materials: None,
        }
    }

    /// Overrides the materials, typically with a renderer's material list.
    ///
    /// Submeshes without an entry have no material.
    pub fn with_materials(mut self, materials: &'a [Option<MaterialHandle>]) -> Self {
        self.materials = Some(materials);
        self
    }

    /// The view transform.
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }

    fn read_only(operation: &str) -> Result<(), MeshError> {
        Err(MeshError::unsupported(format!(
            "{operation} on a read-only transformed mesh view"
        )))
    }
}

impl std::fmt::Debug for TransformedMesh<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformedMesh")
            .field("vertex_count", &self.source.vertex_count())
            .field("submesh_count", &self.source.submesh_count())
            .field("matrix", &self.matrix)
            .field("materials", &self.materials)
            .finish()
    }
}

impl CombinableMesh for TransformedMesh<'_> {
    fn vertices(&self) -> Cow<'_, [DVec3]> {
        self.source
            .vertices()
            .iter()
            .map(|&v| self.matrix.transform_point3(v))
            .collect()
    }

    fn normals(&self) -> Cow<'_, [DVec3]> {
        self.source
            .normals()
            .iter()
            .map(|&n| self.normal_matrix.transform_vector3(n).normalize_or_zero())
            .collect()
    }

    fn uvs(&self) -> &[DVec2] {
        self.source.uvs()
    }

    fn colors(&self) -> &[[f32; 4]] {
        self.source.colors()
    }

    fn submesh_count(&self) -> usize {
        self.source.submesh_count()
    }

    fn indices(&self, submesh: usize) -> &[u32] {
        self.source.indices(submesh)
    }

    fn topology(&self, submesh: usize) -> Topology {
        self.source.topology(submesh)
    }

    fn material(&self, submesh: usize) -> Option<MaterialHandle> {
        match self.materials {
            Some(materials) => materials.get(submesh).copied().flatten(),
            None => self.source.material(submesh),
        }
    }

    fn vertex_count(&self) -> usize {
        self.source.vertex_count()
    }

    fn is_read_only(&self) -> bool {
        true
    }

    fn set_vertices(&mut self, _vertices: &[DVec3]) -> Result<(), MeshError> {
        Self::read_only("set_vertices")
    }

    fn set_normals(&mut self, _normals: &[DVec3]) -> Result<(), MeshError> {
        Self::read_only("set_normals")
    }

    fn set_uvs(&mut self, _uvs: &[DVec2]) -> Result<(), MeshError> {
        Self::read_only("set_uvs")
    }

    fn set_colors(&mut self, _colors: &[[f32; 4]]) -> Result<(), MeshError> {
        Self::read_only("set_colors")
    }

    fn set_submesh_count(&mut self, _count: usize) -> Result<(), MeshError> {
        Self::read_only("set_submesh_count")
    }

    fn set_indices(
        &mut self,
        _submesh: usize,
        _indices: &[u32],
        _topology: Topology,
        _material: Option<MaterialHandle>,
    ) -> Result<(), MeshError> {
        Self::read_only("set_indices")
    }

    fn set_material(
        &mut self,
        _submesh: usize,
        _material: Option<MaterialHandle>,
    ) -> Result<(), MeshError> {
        Self::read_only("set_material")
    }

    fn clear(&mut self) -> Result<(), MeshError> {
        Self::read_only("clear")
    }
}
