use super::PoseBookmark;
use crate::camera::CameraController;
use crate::input::{Activation, BookmarkAction};
use crate::options::{BookmarkOptions, CaptureModifier};

/// A fixed row of independent bookmark slots.
pub struct BookmarkBar {
    slots: Vec<PoseBookmark>,
    capture_modifier: CaptureModifier,
}

impl BookmarkBar {
    /// Create `options.slots` uncaptured bookmarks.
    #[must_use]
    pub fn new(options: &BookmarkOptions) -> Self {
        Self {
            slots: (0..options.slots).map(PoseBookmark::new).collect(),
            capture_modifier: options.capture_modifier,
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the bar has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Borrow a slot.
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<&PoseBookmark> {
        self.slots.get(slot)
    }

    /// Handle one activation of `slot`'s control.
    ///
    /// The modifier state is evaluated exactly once: the activation is
    /// either a capture of `camera`'s current pose or a recall. Returns the
    /// action taken, or `None` if the slot does not exist or the
    /// activation is not a bookmark gesture.
    pub fn activate(
        &mut self,
        slot: usize,
        activation: &Activation,
        camera: &mut impl CameraController,
    ) -> Option<BookmarkAction> {
        let Some(bookmark) = self.slots.get_mut(slot) else {
            log::warn!("bookmark slot {slot} does not exist");
            return None;
        };
        let action =
            BookmarkAction::from_activation(activation, self.capture_modifier)?;
        match action {
            BookmarkAction::Capture => bookmark.capture(camera.current_pose()),
            BookmarkAction::Recall => bookmark.recall(camera),
        }
        Some(action)
    }
}
