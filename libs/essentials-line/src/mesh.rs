//! # Line Mesh
//!
//! Output buffers of the line builders: a UI vertex buffer, its triangle
//! index list and the triangle cache used for hit testing.

use essentials_math::Triangle;
use glam::DVec2;

/// A vertex as consumed by a UI renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiVertex {
    /// Local 2D position
    pub position: DVec2,
    /// Texture coordinate: `u` along the line, `v` across it
    pub uv: DVec2,
    /// RGBA color
    pub color: [f32; 4],
}

/// Vertex and index buffer of a line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineMesh {
    /// Vertex buffer
    pub vertices: Vec<UiVertex>,
    /// Triangles as vertex index triples
    pub triangles: Vec<[u32; 3]>,
}

impl LineMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec2, uv: DVec2, color: [f32; 4]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(UiVertex {
            position,
            uv,
            color,
        });
        index
    }

    /// Adds a triangle.
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Position of a vertex, if it exists.
    pub fn position(&self, index: u32) -> Option<DVec2> {
        self.vertices.get(index as usize).map(|v| v.position)
    }

    /// Flat index list, three entries per triangle.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Removes all vertices and triangles.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
    }
}

/// Everything a line rebuild produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGeometry {
    /// Render buffers
    pub mesh: LineMesh,
    /// Every generated triangle in local space, for hit testing
    pub triangles: Vec<Triangle>,
}

impl LineGeometry {
    /// Returns true if nothing was generated.
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Adds a mesh triangle and its hit-test copy.
    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.mesh.add_triangle(a, b, c);
        if let (Some(pa), Some(pb), Some(pc)) =
            (self.mesh.position(a), self.mesh.position(b), self.mesh.position(c))
        {
            self.triangles.push(Triangle::new(pa, pb, pc));
        }
    }

    /// Axis-aligned bounds of the cached triangles as (min, max); zeros when
    /// empty.
    pub fn bounds(&self) -> (DVec2, DVec2) {
        let Some((first, rest)) = self.triangles.split_first() else {
            return (DVec2::ZERO, DVec2::ZERO);
        };
        rest.iter().fold(first.bounds(), |(min, max), t| {
            let (t_min, t_max) = t.bounds();
            (min.min(t_min), max.max(t_max))
        })
    }
}
