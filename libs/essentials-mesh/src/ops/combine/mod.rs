//! # Mesh Combination
//!
//! Merge and append over [`CombinableMesh`] sources.
//!
//! ## Merge
//!
//! 1. The distinct non-null materials of target and sources, in first-seen
//!    order, define the output submesh slots.
//! 2. Vertex channels are concatenated in argument order. A channel that is
//!    absent on a source is filled with zero normals, zero UVs or white.
//! 3. Every submesh is triangulated and its indices, offset by the source's
//!    insertion point, are appended to its material's slot. Submeshes without
//!    a material are dropped.
//!
//! ## Append
//!
//! The same concatenation without normals. Every source submesh becomes one
//! output submesh with its topology and material unchanged.
//!
//! In both operations sources without vertices are skipped, and all
//! validation runs before the target is written.

#[cfg(test)]
mod tests;

use crate::combinable::CombinableMesh;
use crate::error::MeshError;
use crate::material::MaterialHandle;
use crate::topology::{triangulate, Topology};
use config::constants::{DEFAULT_VERTEX_COLOR, MAX_VERTICES};
use glam::{DVec2, DVec3};
use std::collections::HashMap;

/// A submesh carried through `append`, as a range into the shared index
/// scratch.
#[derive(Debug, Clone, Copy)]
struct AppendedPart {
    start: usize,
    end: usize,
    topology: Topology,
    material: Option<MaterialHandle>,
}

/// Reusable scratch buffers for [`merge`](Self::merge) and
/// [`append`](Self::append).
///
/// Every call clears the buffers first, so one combiner can serve any number
/// of unrelated calls while keeping its allocations.
///
/// # Example
///
/// ```rust
/// use essentials_mesh::{CombinableMesh, MaterialHandle, MeshCombiner, MeshFragment};
/// use glam::DVec3;
///
/// let mut combiner = MeshCombiner::new();
/// let glass = MaterialHandle::new(2);
/// let pane = MeshFragment::from_triangles(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![0, 1, 2],
///     Some(glass),
/// );
///
/// // The empty target contributes nothing, not even its empty submesh.
/// let mut target = MeshFragment::default();
/// combiner.append(&mut target, &[&pane, &pane]).unwrap();
/// assert_eq!(target.vertex_count(), 6);
/// assert_eq!(target.submesh_count(), 2);
/// assert_eq!(target.indices(1), &[3, 4, 5]);
/// ```
#[derive(Debug, Default)]
pub struct MeshCombiner {
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    uvs: Vec<DVec2>,
    colors: Vec<[f32; 4]>,
    buckets: Vec<Vec<u32>>,
    materials: Vec<MaterialHandle>,
    slots: HashMap<MaterialHandle, usize>,
    indices: Vec<u32>,
    parts: Vec<AppendedPart>,
}

impl MeshCombiner {
    /// Creates a combiner with empty scratch buffers.
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.uvs.clear();
        self.colors.clear();
        self.buckets.clear();
        self.materials.clear();
        self.slots.clear();
        self.indices.clear();
        self.parts.clear();
    }

    /// Merges `target` and `sources` into `target`, one triangle submesh per
    /// distinct material.
    ///
    /// # Errors
    ///
    /// - `Unsupported` if `target` is read-only
    /// - `ValidationFailed` if a source index is out of its vertex range
    /// - `TooManyVertices` if the result would exceed `MAX_VERTICES`
    /// - `InvalidTopology` for a material-bearing line or point submesh
    ///
    /// The target is left untouched on every error above.
    pub fn merge(
        &mut self,
        target: &mut dyn CombinableMesh,
        sources: &[&dyn CombinableMesh],
    ) -> Result<(), MeshError> {
        ensure_writable(&*target)?;
        self.reset();

        self.gather_merge(&*target)?;
        for source in sources {
            self.gather_merge(*source)?;
        }

        target.set_vertices(&self.vertices)?;
        target.set_normals(&self.normals)?;
        target.set_uvs(&self.uvs)?;
        target.set_colors(&self.colors)?;
        target.set_submesh_count(self.materials.len())?;
        for (slot, (bucket, material)) in self.buckets.iter().zip(&self.materials).enumerate() {
            target.set_indices(slot, bucket, Topology::Triangles, Some(*material))?;
        }

        log::debug!(
            "merged {} meshes: {} vertices in {} material submeshes",
            sources.len() + 1,
            self.vertices.len(),
            self.materials.len()
        );
        Ok(())
    }

    /// Appends `sources` to `target`, keeping every submesh.
    ///
    /// Normals are not carried; the target ends up without normals.
    ///
    /// # Errors
    ///
    /// - `Unsupported` if `target` is read-only
    /// - `ValidationFailed` if a source index is out of its vertex range
    /// - `TooManyVertices` if the result would exceed `MAX_VERTICES`
    pub fn append(
        &mut self,
        target: &mut dyn CombinableMesh,
        sources: &[&dyn CombinableMesh],
    ) -> Result<(), MeshError> {
        ensure_writable(&*target)?;
        self.reset();

        self.gather_append(&*target)?;
        for source in sources {
            self.gather_append(*source)?;
        }

        target.clear()?;
        target.set_submesh_count(self.parts.len())?;
        target.set_vertices(&self.vertices)?;
        target.set_uvs(&self.uvs)?;
        target.set_colors(&self.colors)?;
        for (submesh, part) in self.parts.iter().enumerate() {
            let indices = &self.indices[part.start..part.end];
            target.set_indices(submesh, indices, part.topology, part.material)?;
        }

        log::debug!(
            "appended {} meshes: {} vertices in {} submeshes",
            sources.len() + 1,
            self.vertices.len(),
            self.parts.len()
        );
        Ok(())
    }

    fn gather_merge(&mut self, mesh: &dyn CombinableMesh) -> Result<(), MeshError> {
        let count = mesh.vertex_count();
        if count == 0 {
            log::trace!("skipping mesh without vertices");
            return Ok(());
        }
        let start = self.insertion_point(count)?;
        validate_indices(mesh, count)?;

        for submesh in 0..mesh.submesh_count() {
            let Some(material) = mesh.material(submesh) else {
                log::trace!("dropping submesh {submesh} without material");
                continue;
            };
            let triangles = triangulate(mesh.indices(submesh), mesh.topology(submesh))?;
            let slot = self.slot_for(material);
            self.buckets[slot].extend(triangles.iter().map(|&i| start + i));
        }

        self.push_channels(mesh, count, true);
        Ok(())
    }

    fn gather_append(&mut self, mesh: &dyn CombinableMesh) -> Result<(), MeshError> {
        let count = mesh.vertex_count();
        if count == 0 {
            log::trace!("skipping mesh without vertices");
            return Ok(());
        }
        let start = self.insertion_point(count)?;
        validate_indices(mesh, count)?;

        for submesh in 0..mesh.submesh_count() {
            let first = self.indices.len();
            self.indices
                .extend(mesh.indices(submesh).iter().map(|&i| start + i));
            self.parts.push(AppendedPart {
                start: first,
                end: self.indices.len(),
                topology: mesh.topology(submesh),
                material: mesh.material(submesh),
            });
        }

        self.push_channels(mesh, count, false);
        Ok(())
    }

    /// Index of the first vertex `count` new vertices will occupy.
    fn insertion_point(&self, count: usize) -> Result<u32, MeshError> {
        let total = self.vertices.len() + count;
        if total > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: total,
                max: MAX_VERTICES,
            });
        }
        Ok(self.vertices.len() as u32)
    }

    fn slot_for(&mut self, material: MaterialHandle) -> usize {
        if let Some(&slot) = self.slots.get(&material) {
            return slot;
        }
        let slot = self.materials.len();
        self.materials.push(material);
        self.buckets.push(Vec::new());
        self.slots.insert(material, slot);
        slot
    }

    fn push_channels(&mut self, mesh: &dyn CombinableMesh, count: usize, with_normals: bool) {
        self.vertices.extend_from_slice(&mesh.vertices());

        if with_normals {
            let normals = mesh.normals();
            if normals.len() == count {
                self.normals.extend_from_slice(&normals);
            } else {
                self.normals.resize(self.normals.len() + count, DVec3::ZERO);
            }
        }

        let uvs = mesh.uvs();
        if uvs.len() == count {
            self.uvs.extend_from_slice(uvs);
        } else {
            self.uvs.resize(self.uvs.len() + count, DVec2::ZERO);
        }

        let colors = mesh.colors();
        if colors.len() == count {
            self.colors.extend_from_slice(colors);
        } else {
            self.colors
                .resize(self.colors.len() + count, DEFAULT_VERTEX_COLOR);
        }
    }
}

fn ensure_writable(target: &dyn CombinableMesh) -> Result<(), MeshError> {
    if target.is_read_only() {
        return Err(MeshError::unsupported(
            "cannot combine into a read-only mesh",
        ));
    }
    Ok(())
}

fn validate_indices(mesh: &dyn CombinableMesh, count: usize) -> Result<(), MeshError> {
    for submesh in 0..mesh.submesh_count() {
        if let Some(&index) = mesh.indices(submesh).iter().find(|&&i| i as usize >= count) {
            return Err(MeshError::validation(format!(
                "submesh {submesh} references vertex {index} of {count}"
            )));
        }
    }
    Ok(())
}

/// Merges `sources` into `target` with a fresh [`MeshCombiner`].
///
/// See [`MeshCombiner::merge`].
pub fn merge(
    target: &mut dyn CombinableMesh,
    sources: &[&dyn CombinableMesh],
) -> Result<(), MeshError> {
    MeshCombiner::new().merge(target, sources)
}

/// Appends `sources` to `target` with a fresh [`MeshCombiner`].
///
/// See [`MeshCombiner::append`].
pub fn append(
    target: &mut dyn CombinableMesh,
    sources: &[&dyn CombinableMesh],
) -> Result<(), MeshError> {
    MeshCombiner::new().append(target, sources)
}
