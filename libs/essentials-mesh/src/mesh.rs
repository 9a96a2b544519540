//! # Mesh Data Structure
//!
//! Host-side mesh buffers: one shared vertex buffer with parallel normal,
//! UV and color channels, partitioned into independently indexed submeshes.

use crate::topology::{triangulate, Topology};
use glam::{DMat4, DVec2, DVec3};

/// Index list and topology of one submesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmeshData {
    /// Vertex references into the shared buffer
    pub indices: Vec<u32>,
    /// How `indices` are assembled into primitives
    pub topology: Topology,
}

/// A mesh as owned by the host engine.
///
/// Channels other than `vertices` are either empty or exactly as long as
/// `vertices`. Materials are not stored here; the renderer keeps them, see
/// [`crate::HostMesh`].
///
/// # Example
///
/// ```rust
/// use essentials_mesh::MeshData;
/// use glam::DVec3;
///
/// let mut mesh = MeshData::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.submesh_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Display name
    pub name: String,
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    uvs: Vec<DVec2>,
    colors: Vec<[f32; 4]>,
    submeshes: Vec<SubmeshData>,
}

impl Default for MeshData {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshData {
    /// Creates an empty mesh with one empty triangle submesh.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            vertices: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            colors: Vec::new(),
            submeshes: vec![SubmeshData::default()],
        }
    }

    /// Creates an empty mesh with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Appends a triangle to submesh 0.
    ///
    /// Submesh 0 must use triangle topology.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        if self.submeshes.is_empty() {
            self.submeshes.push(SubmeshData::default());
        }
        self.submeshes[0].indices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Vertex normals (empty when absent).
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Texture coordinates (empty when absent).
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Vertex colors (empty when absent).
    #[inline]
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// Replaces vertex positions.
    pub fn set_vertices(&mut self, vertices: Vec<DVec3>) {
        self.vertices = vertices;
    }

    /// Replaces vertex normals.
    pub fn set_normals(&mut self, normals: Vec<DVec3>) {
        self.normals = normals;
    }

    /// Replaces texture coordinates.
    pub fn set_uvs(&mut self, uvs: Vec<DVec2>) {
        self.uvs = uvs;
    }

    /// Replaces vertex colors.
    pub fn set_colors(&mut self, colors: Vec<[f32; 4]>) {
        self.colors = colors;
    }

    /// Sets a uniform color for all vertices.
    pub fn set_uniform_color(&mut self, color: [f32; 4]) {
        self.colors = vec![color; self.vertices.len()];
    }

    /// Number of submeshes.
    #[inline]
    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    /// Grows or shrinks the submesh list. New submeshes are empty triangle
    /// lists.
    pub fn set_submesh_count(&mut self, count: usize) {
        self.submeshes.resize_with(count, SubmeshData::default);
    }

    /// Returns a submesh.
    pub fn submesh(&self, index: usize) -> Option<&SubmeshData> {
        self.submeshes.get(index)
    }

    /// Returns a submesh mutably.
    pub fn submesh_mut(&mut self, index: usize) -> Option<&mut SubmeshData> {
        self.submeshes.get_mut(index)
    }

    /// Removes all vertex data and leaves one empty submesh.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.uvs.clear();
        self.colors.clear();
        self.submeshes.clear();
        self.submeshes.push(SubmeshData::default());
    }

    /// Recomputes smooth vertex normals from the face submeshes.
    ///
    /// Face normals are accumulated unnormalized, so larger faces weigh more.
    /// Line and point submeshes do not contribute.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for submesh in &self.submeshes {
            let Ok(triangles) = triangulate(&submesh.indices, submesh.topology) else {
                continue;
            };
            for tri in triangles.chunks_exact(3) {
                let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
                let (Some(&v0), Some(&v1), Some(&v2)) = (
                    self.vertices.get(i0),
                    self.vertices.get(i1),
                    self.vertices.get(i2),
                ) else {
                    continue;
                };

                let normal = (v1 - v0).cross(v2 - v0);
                normals[i0] += normal;
                normals[i1] += normal;
                normals[i2] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = normals;
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or zeros for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        bounding_box_of(&self.vertices)
    }

    /// Transforms all vertices and normals by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        let normal_matrix = matrix.inverse().transpose();
        for n in &mut self.normals {
            *n = normal_matrix.transform_vector3(*n).normalize_or_zero();
        }
    }

    /// Checks that every index references an existing vertex.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();
        self.submeshes
            .iter()
            .all(|s| s.indices.iter().all(|&i| (i as usize) < vertex_count))
    }
}

/// Bounds of a point set as (min, max); zeros when empty.
pub(crate) fn bounding_box_of(points: &[DVec3]) -> (DVec3, DVec3) {
    let Some((&first, rest)) = points.split_first() else {
        return (DVec3::ZERO, DVec3::ZERO);
    };
    rest.iter()
        .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)))
}
