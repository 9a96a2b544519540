//! Plain in-memory mesh fragments.

use super::{out_of_range, CombinableMesh};
use crate::error::MeshError;
use crate::material::MaterialHandle;
use crate::mesh::bounding_box_of;
use crate::topology::{triangulate, Topology};
use glam::{DVec2, DVec3};
use std::borrow::Cow;

/// One submesh of a [`MeshFragment`]: indices, their topology and a material.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmeshPart {
    /// Vertex references
    pub indices: Vec<u32>,
    /// How `indices` are assembled into primitives
    pub topology: Topology,
    /// Material, if any
    pub material: Option<MaterialHandle>,
}

impl SubmeshPart {
    /// The indices as a triangle list.
    pub fn triangles(&self) -> Result<Cow<'_, [u32]>, MeshError> {
        triangulate(&self.indices, self.topology)
    }

    /// Replaces the indices with a triangle list.
    pub fn set_triangles(&mut self, triangles: Vec<u32>) {
        self.indices = triangles;
        self.topology = Topology::Triangles;
    }
}

/// A free-standing mesh that owns all of its buffers and materials.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshFragment {
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    uvs: Vec<DVec2>,
    colors: Vec<[f32; 4]>,
    submeshes: Vec<SubmeshPart>,
}

impl Default for MeshFragment {
    fn default() -> Self {
        Self::new(1)
    }
}

impl MeshFragment {
    /// Creates an empty fragment with `submesh_count` empty submeshes.
    pub fn new(submesh_count: usize) -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            colors: Vec::new(),
            submeshes: vec![SubmeshPart::default(); submesh_count],
        }
    }

    /// Creates a single-submesh triangle fragment.
    pub fn from_triangles(
        vertices: Vec<DVec3>,
        triangles: Vec<u32>,
        material: Option<MaterialHandle>,
    ) -> Self {
        Self {
            vertices,
            submeshes: vec![SubmeshPart {
                indices: triangles,
                topology: Topology::Triangles,
                material,
            }],
            ..Self::new(0)
        }
    }

    /// Deep copy of any mesh source, including transformed views.
    pub fn from_mesh(mesh: &dyn CombinableMesh) -> Self {
        Self {
            vertices: mesh.vertices().into_owned(),
            normals: mesh.normals().into_owned(),
            uvs: mesh.uvs().to_vec(),
            colors: mesh.colors().to_vec(),
            submeshes: (0..mesh.submesh_count())
                .map(|i| SubmeshPart {
                    indices: mesh.indices(i).to_vec(),
                    topology: mesh.topology(i),
                    material: mesh.material(i),
                })
                .collect(),
        }
    }

    /// Sets normals, builder style.
    pub fn with_normals(mut self, normals: Vec<DVec3>) -> Self {
        self.normals = normals;
        self
    }

    /// Sets texture coordinates, builder style.
    pub fn with_uvs(mut self, uvs: Vec<DVec2>) -> Self {
        self.uvs = uvs;
        self
    }

    /// Sets colors, builder style.
    pub fn with_colors(mut self, colors: Vec<[f32; 4]>) -> Self {
        self.colors = colors;
        self
    }

    /// Appends a submesh and returns its index.
    pub fn push_submesh(&mut self, part: SubmeshPart) -> usize {
        self.submeshes.push(part);
        self.submeshes.len() - 1
    }

    /// The submesh parts.
    pub fn submeshes(&self) -> &[SubmeshPart] {
        &self.submeshes
    }

    /// A submesh part, mutably.
    pub fn submesh_mut(&mut self, index: usize) -> Option<&mut SubmeshPart> {
        self.submeshes.get_mut(index)
    }

    /// Replaces submesh 0 with a triangle list, creating it if needed.
    pub fn set_triangles(&mut self, triangles: Vec<u32>) {
        if self.submeshes.is_empty() {
            self.submeshes.push(SubmeshPart::default());
        }
        self.submeshes[0].set_triangles(triangles);
    }

    /// Assigns materials to submeshes in order; extra entries are ignored.
    pub fn set_materials(&mut self, materials: &[Option<MaterialHandle>]) {
        for (part, material) in self.submeshes.iter_mut().zip(materials) {
            part.material = *material;
        }
    }

    /// Axis-aligned bounds as (min, max).
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        bounding_box_of(&self.vertices)
    }
}

impl CombinableMesh for MeshFragment {
    fn vertices(&self) -> Cow<'_, [DVec3]> {
        Cow::Borrowed(&self.vertices)
    }

    fn normals(&self) -> Cow<'_, [DVec3]> {
        Cow::Borrowed(&self.normals)
    }

    fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    fn indices(&self, submesh: usize) -> &[u32] {
        self.submeshes
            .get(submesh)
            .map(|s| s.indices.as_slice())
            .unwrap_or(&[])
    }

    fn topology(&self, submesh: usize) -> Topology {
        self.submeshes
            .get(submesh)
            .map_or(Topology::Triangles, |s| s.topology)
    }

    fn material(&self, submesh: usize) -> Option<MaterialHandle> {
        self.submeshes.get(submesh).and_then(|s| s.material)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn set_vertices(&mut self, vertices: &[DVec3]) -> Result<(), MeshError> {
        self.vertices = vertices.to_vec();
        Ok(())
    }

    fn set_normals(&mut self, normals: &[DVec3]) -> Result<(), MeshError> {
        self.normals = normals.to_vec();
        Ok(())
    }

    fn set_uvs(&mut self, uvs: &[DVec2]) -> Result<(), MeshError> {
        self.uvs = uvs.to_vec();
        Ok(())
    }

    fn set_colors(&mut self, colors: &[[f32; 4]]) -> Result<(), MeshError> {
        self.colors = colors.to_vec();
        Ok(())
    }

    fn set_submesh_count(&mut self, count: usize) -> Result<(), MeshError> {
        self.submeshes.resize_with(count, SubmeshPart::default);
        Ok(())
    }

    fn set_indices(
        &mut self,
        submesh: usize,
        indices: &[u32],
        topology: Topology,
        material: Option<MaterialHandle>,
    ) -> Result<(), MeshError> {
        let count = self.submeshes.len();
        let part = self
            .submeshes
            .get_mut(submesh)
            .ok_or_else(|| out_of_range(submesh, count))?;
        part.indices = indices.to_vec();
        part.topology = topology;
        part.material = material;
        Ok(())
    }

    fn set_material(
        &mut self,
        submesh: usize,
        material: Option<MaterialHandle>,
    ) -> Result<(), MeshError> {
        let count = self.submeshes.len();
        let part = self
            .submeshes
            .get_mut(submesh)
            .ok_or_else(|| out_of_range(submesh, count))?;
        part.material = material;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), MeshError> {
        *self = Self::new(1);
        Ok(())
    }
}
