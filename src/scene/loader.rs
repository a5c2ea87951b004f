use std::fmt;
use std::future::Future;

use rustc_hash::FxHashMap;

use super::ObjectDatabase;

/// Failure to resolve a scene at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneLoadError {
    /// The identifier does not name a known scene.
    NotFound(String),
    /// The data service reported an error.
    Service(String),
}

impl fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "scene not found: {id:?}"),
            Self::Service(msg) => write!(f, "scene service error: {msg}"),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// A resolved scene.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    /// Locator the rendering engine uses to stream geometry.
    pub resource_locator: String,
    /// Object metadata used for search.
    pub database: ObjectDatabase,
}

/// Resolves scene identifiers through the scene data service.
pub trait SceneLoader {
    /// Load `identifier`. Failure aborts viewer initialization.
    fn load_scene(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<LoadedScene, SceneLoadError>>;
}

/// Loader over scenes already held in memory (offline use and tests).
#[derive(Debug, Clone, Default)]
pub struct MemorySceneLoader {
    scenes: FxHashMap<String, LoadedScene>,
}

impl MemorySceneLoader {
    /// Create an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scene under `identifier`.
    #[must_use]
    pub fn with_scene(
        mut self,
        identifier: impl Into<String>,
        scene: LoadedScene,
    ) -> Self {
        drop(self.scenes.insert(identifier.into(), scene));
        self
    }
}

impl SceneLoader for MemorySceneLoader {
    async fn load_scene(
        &self,
        identifier: &str,
    ) -> Result<LoadedScene, SceneLoadError> {
        self.scenes
            .get(identifier)
            .cloned()
            .ok_or_else(|| SceneLoadError::NotFound(identifier.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn unknown_scene_is_not_found() {
        let loader = MemorySceneLoader::new();
        let err = block_on(loader.load_scene("missing")).unwrap_err();
        assert_eq!(err, SceneLoadError::NotFound("missing".to_owned()));
    }

    #[test]
    fn registered_scene_loads() {
        let loader = MemorySceneLoader::new().with_scene(
            "lobby",
            LoadedScene {
                resource_locator: "scenes/lobby.glb".to_owned(),
                database: ObjectDatabase::new(),
            },
        );
        let scene = block_on(loader.load_scene("lobby")).unwrap();
        assert_eq!(scene.resource_locator, "scenes/lobby.glb");
    }
}
