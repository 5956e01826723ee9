//! Stable identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a shape owned by the document store.
///
/// The selection registry and every notification refer to shapes through this
/// identifier rather than through references, so identity never depends on
/// memory addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

impl ShapeId {
    /// Raw numeric value of the identifier.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ShapeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
