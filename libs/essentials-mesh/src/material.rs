//! # Materials
//!
//! Materials are owned by the rendering host. The combine engine only needs
//! their identity, so it works on opaque handles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a host material.
///
/// Two submeshes share a material exactly when their handles are equal. An
/// absent material is modelled as `Option::<MaterialHandle>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialHandle(u64);

impl MaterialHandle {
    /// Wraps a host-assigned material id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The host-assigned id.
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MaterialHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "material#{}", self.0)
    }
}
