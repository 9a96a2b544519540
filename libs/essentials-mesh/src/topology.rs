//! # Topology
//!
//! How a submesh's index list is assembled into primitives, and conversion of
//! face topologies to plain triangle lists.

use crate::error::MeshError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Primitive topology of a submesh index list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Topology {
    /// Every three indices form a triangle.
    #[default]
    Triangles,
    /// Every four indices form a quad.
    Quads,
    /// Every two indices form a line.
    Lines,
    /// Indices form a connected strip of lines.
    LineStrip,
    /// Each index is a separate point.
    Points,
}

impl Topology {
    /// Returns true for topologies that [`triangulate`] accepts.
    pub fn is_face(self) -> bool {
        matches!(self, Self::Triangles | Self::Quads)
    }
}

/// Converts an index list to triangles.
///
/// Triangle lists are returned borrowed. Each quad `(a, b, c, d)` becomes the
/// two triangles `(a, c, d)` and `(a, b, c)`.
///
/// # Errors
///
/// `InvalidTopology` for line and point topologies, or for a quad list whose
/// length is not a multiple of four.
///
/// # Example
///
/// ```rust
/// use essentials_mesh::{triangulate, Topology};
///
/// let triangles = triangulate(&[0, 1, 2, 3], Topology::Quads).unwrap();
/// assert_eq!(&*triangles, &[0, 2, 3, 0, 1, 2]);
/// ```
pub fn triangulate(indices: &[u32], topology: Topology) -> Result<Cow<'_, [u32]>, MeshError> {
    match topology {
        Topology::Triangles => Ok(Cow::Borrowed(indices)),
        Topology::Quads => {
            if indices.len() % 4 != 0 {
                return Err(MeshError::invalid_topology(format!(
                    "quad index count {} is not a multiple of 4",
                    indices.len()
                )));
            }
            let mut triangles = Vec::with_capacity(indices.len() / 2 * 3);
            for quad in indices.chunks_exact(4) {
                let (a, b, c, d) = (quad[0], quad[1], quad[2], quad[3]);
                triangles.extend_from_slice(&[a, c, d, a, b, c]);
            }
            Ok(Cow::Owned(triangles))
        }
        other => Err(MeshError::invalid_topology(format!(
            "{other:?} cannot be converted to triangles"
        ))),
    }
}
