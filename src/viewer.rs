//! Viewer bootstrap: load a scene and wire the core together.
//!
//! ```no_run
//! # use vantage::scene::MemorySceneLoader;
//! # use vantage::Viewer;
//! # async fn demo(loader: MemorySceneLoader) -> Result<(), vantage::VantageError> {
//! let session = Viewer::builder("warehouse-7").build().start(&loader).await?;
//! let _outcome = session.search().submit("category=pump").await;
//! # Ok(())
//! # }
//! ```

use crate::bookmark::BookmarkBar;
use crate::error::VantageError;
use crate::highlight::{HighlightIndex, HighlightIndexState, HighlightReader};
use crate::options::Options;
use crate::render::{DisplaySurface, ImageOf, RenderLoop, RenderView};
use crate::scene::{ObjectDatabase, SceneLoader};
use crate::search::SearchIsolationController;

/// Search controller type used by a [`ViewerSession`].
pub type SceneSearch = SearchIsolationController<ObjectDatabase, HighlightIndex>;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    scene: String,
    options: Option<Options>,
}

impl ViewerBuilder {
    fn new(scene: String) -> Self {
        Self {
            scene,
            options: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            scene: self.scene,
            options: self.options.unwrap_or_default(),
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A not-yet-started viewer for one scene.
pub struct Viewer {
    scene: String,
    options: Options,
}

impl Viewer {
    /// Start a builder for the scene named `scene`.
    #[must_use]
    pub fn builder(scene: impl Into<String>) -> ViewerBuilder {
        ViewerBuilder::new(scene.into())
    }

    /// Load the scene and assemble the core.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::SceneLoad`] if the scene cannot be loaded;
    /// nothing else is created in that case.
    pub async fn start<L: SceneLoader>(
        self,
        loader: &L,
    ) -> Result<ViewerSession, VantageError> {
        let scene = loader.load_scene(&self.scene).await.map_err(|e| {
            log::error!("failed to load scene {:?}: {e}", self.scene);
            VantageError::SceneLoad(e)
        })?;

        let capacity = scene
            .database
            .capacity()
            .max(self.options.highlight.min_capacity);
        log::info!(
            "scene {:?} loaded from {}: {} object(s), highlight capacity {}",
            self.scene,
            scene.resource_locator,
            scene.database.object_count(),
            capacity
        );

        let (index, reader) = HighlightIndex::new(capacity);
        let search = SearchIsolationController::new(
            scene.database,
            HighlightIndexState::new(index),
        );

        Ok(ViewerSession {
            resource_locator: scene.resource_locator,
            bookmarks: BookmarkBar::new(&self.options.bookmarks),
            search,
            highlight_reader: Some(reader),
            options: self.options,
        })
    }
}

// ── Session ──────────────────────────────────────────────────────────────

/// A started viewer: search, bookmarks, and the highlight hand-off for the
/// renderer.
pub struct ViewerSession {
    resource_locator: String,
    search: SceneSearch,
    bookmarks: BookmarkBar,
    highlight_reader: Option<HighlightReader>,
    options: Options,
}

impl ViewerSession {
    /// Locator the rendering engine should stream the scene from.
    #[must_use]
    pub fn resource_locator(&self) -> &str {
        &self.resource_locator
    }

    /// The search-and-isolate controller.
    #[must_use]
    pub fn search(&self) -> &SceneSearch {
        &self.search
    }

    /// Bookmark slots.
    #[must_use]
    pub fn bookmarks(&self) -> &BookmarkBar {
        &self.bookmarks
    }

    /// Mutable bookmark slots (capture / recall).
    pub fn bookmarks_mut(&mut self) -> &mut BookmarkBar {
        &mut self.bookmarks
    }

    /// Options the session was started with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Hand the highlight reader to the renderer. Returns `None` after the
    /// first call.
    pub fn take_highlight_reader(&mut self) -> Option<HighlightReader> {
        self.highlight_reader.take()
    }

    /// Build the render loop for one view/surface pair.
    pub fn render_loop<V, D>(&self, view: V, surface: D) -> RenderLoop<V, D>
    where
        V: RenderView,
        D: DisplaySurface<ImageOf<V>>,
    {
        RenderLoop::new(view, surface, &self.options.render)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::scene::{
        LoadedScene, MemorySceneLoader, ObjectId, ObjectRecord,
        SceneLoadError,
    };

    fn loader() -> MemorySceneLoader {
        MemorySceneLoader::new().with_scene(
            "yard",
            LoadedScene {
                resource_locator: "https://example.invalid/yard".to_owned(),
                database: ObjectDatabase::from_objects(
                    (0..10).map(|i| (ObjectId(i), ObjectRecord::new())),
                ),
            },
        )
    }

    #[test]
    fn missing_scene_is_fatal() {
        let result = block_on(Viewer::builder("nowhere").build().start(&loader()));
        assert!(matches!(
            result,
            Err(VantageError::SceneLoad(SceneLoadError::NotFound(_)))
        ));
    }

    #[test]
    fn highlight_capacity_respects_minimum() {
        let mut options = Options::default();
        options.highlight.min_capacity = 64;
        let mut session = block_on(
            Viewer::builder("yard")
                .with_options(options)
                .build()
                .start(&loader()),
        )
        .unwrap();
        assert_eq!(session.resource_locator(), "https://example.invalid/yard");
        let mut reader = session.take_highlight_reader().unwrap();
        assert_eq!(reader.read().len(), 64);
        assert!(session.take_highlight_reader().is_none());
    }

    #[test]
    fn bookmark_slots_follow_options() {
        let mut options = Options::default();
        options.bookmarks.slots = 2;
        let session = block_on(
            Viewer::builder("yard")
                .with_options(options)
                .build()
                .start(&loader()),
        )
        .unwrap();
        assert_eq!(session.bookmarks().len(), 2);
    }
}
