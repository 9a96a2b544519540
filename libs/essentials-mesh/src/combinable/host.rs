//! Live handle over host-owned mesh buffers.

use super::{out_of_range, CombinableMesh};
use crate::error::MeshError;
use crate::material::MaterialHandle;
use crate::mesh::MeshData;
use crate::topology::Topology;
use glam::{DVec2, DVec3};
use std::borrow::Cow;

/// A host mesh paired with the renderer's material list.
///
/// Writes go straight to the borrowed [`MeshData`]. The material list always
/// has one entry per submesh; resizing the submesh count keeps existing
/// entries.
#[derive(Debug)]
pub struct HostMesh<'a> {
    data: &'a mut MeshData,
    materials: Vec<Option<MaterialHandle>>,
}

impl<'a> HostMesh<'a> {
    /// Wraps a host mesh with no materials assigned.
    pub fn new(data: &'a mut MeshData) -> Self {
        let materials = vec![None; data.submesh_count()];
        Self { data, materials }
    }

    /// Wraps a host mesh with the renderer's materials.
    ///
    /// The list is padded with `None` or truncated to the submesh count.
    pub fn with_materials(
        data: &'a mut MeshData,
        mut materials: Vec<Option<MaterialHandle>>,
    ) -> Self {
        materials.resize(data.submesh_count(), None);
        Self { data, materials }
    }

    /// The wrapped host mesh.
    pub fn data(&self) -> &MeshData {
        self.data
    }

    /// Renderer materials, one per submesh.
    pub fn renderer_materials(&self) -> &[Option<MaterialHandle>] {
        &self.materials
    }

    /// Recomputes vertex normals on the host mesh.
    pub fn recalculate_normals(&mut self) {
        self.data.recalculate_normals();
    }
}

impl CombinableMesh for HostMesh<'_> {
    fn vertices(&self) -> Cow<'_, [DVec3]> {
        Cow::Borrowed(self.data.vertices())
    }

    fn normals(&self) -> Cow<'_, [DVec3]> {
        Cow::Borrowed(self.data.normals())
    }

    fn uvs(&self) -> &[DVec2] {
        self.data.uvs()
    }

    fn colors(&self) -> &[[f32; 4]] {
        self.data.colors()
    }

    fn submesh_count(&self) -> usize {
        self.data.submesh_count()
    }

    fn indices(&self, submesh: usize) -> &[u32] {
        self.data
            .submesh(submesh)
            .map(|s| s.indices.as_slice())
            .unwrap_or(&[])
    }

    fn topology(&self, submesh: usize) -> Topology {
        self.data
            .submesh(submesh)
            .map_or(Topology::Triangles, |s| s.topology)
    }

    fn material(&self, submesh: usize) -> Option<MaterialHandle> {
        self.materials.get(submesh).copied().flatten()
    }

    fn vertex_count(&self) -> usize {
        self.data.vertex_count()
    }

    fn set_vertices(&mut self, vertices: &[DVec3]) -> Result<(), MeshError> {
        self.data.set_vertices(vertices.to_vec());
        Ok(())
    }

    fn set_normals(&mut self, normals: &[DVec3]) -> Result<(), MeshError> {
        self.data.set_normals(normals.to_vec());
        Ok(())
    }

    fn set_uvs(&mut self, uvs: &[DVec2]) -> Result<(), MeshError> {
        self.data.set_uvs(uvs.to_vec());
        Ok(())
    }

    fn set_colors(&mut self, colors: &[[f32; 4]]) -> Result<(), MeshError> {
        self.data.set_colors(colors.to_vec());
        Ok(())
    }

    fn set_submesh_count(&mut self, count: usize) -> Result<(), MeshError> {
        self.data.set_submesh_count(count);
        self.materials.resize(count, None);
        Ok(())
    }

    fn set_indices(
        &mut self,
        submesh: usize,
        indices: &[u32],
        topology: Topology,
        material: Option<MaterialHandle>,
    ) -> Result<(), MeshError> {
        let count = self.data.submesh_count();
        let target = self
            .data
            .submesh_mut(submesh)
            .ok_or_else(|| out_of_range(submesh, count))?;
        target.indices = indices.to_vec();
        target.topology = topology;
        self.materials[submesh] = material;
        Ok(())
    }

    fn set_material(
        &mut self,
        submesh: usize,
        material: Option<MaterialHandle>,
    ) -> Result<(), MeshError> {
        let count = self.materials.len();
        let slot = self
            .materials
            .get_mut(submesh)
            .ok_or_else(|| out_of_range(submesh, count))?;
        *slot = material;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), MeshError> {
        self.data.clear();
        self.materials = vec![None; self.data.submesh_count()];
        Ok(())
    }
}
