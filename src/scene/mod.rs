//! Scene identity, loading, and the in-memory object database.
//!
//! The scene data service is external: the core only sees a
//! [`SceneLoader`] that resolves a scene identifier into a resource locator
//! for the rendering engine plus an [`ObjectDatabase`] describing the
//! objects in it.

mod database;
mod loader;
mod query;

use std::fmt;

pub use database::{ObjectDatabase, ObjectRecord};
pub use loader::{LoadedScene, MemorySceneLoader, SceneLoadError, SceneLoader};
pub use query::{DatabaseMatches, PropertyPattern};

// ---------------------------------------------------------------------------
// ObjectId
// ---------------------------------------------------------------------------

/// Identifier of a scene object; also its slot in the highlight index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Position of this object in per-object arrays.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object {}", self.0)
    }
}

impl From<u32> for ObjectId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
