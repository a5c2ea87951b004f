//! Camera pose bookmarks.
//!
//! A [`PoseBookmark`] is a plain value holder with two operations: capture
//! the camera's current pose, and recall the stored pose through a
//! [`CameraController`]. [`BookmarkBar`] groups a fixed set of independent
//! slots and routes UI activations to one of the two.

mod bar;

pub use bar::BookmarkBar;

use crate::camera::{CameraController, CameraPose};

/// One remembered camera pose.
///
/// Starts uncaptured at [`CameraPose::ZERO`]; recalling an uncaptured
/// bookmark moves the camera to the origin with identity orientation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoseBookmark {
    slot: usize,
    pose: CameraPose,
    captured: bool,
}

impl PoseBookmark {
    /// Create an uncaptured bookmark for `slot`.
    #[must_use]
    pub fn new(slot: usize) -> Self {
        Self {
            slot,
            pose: CameraPose::ZERO,
            captured: false,
        }
    }

    /// Slot index owning this bookmark.
    #[must_use]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// The stored pose (the zero pose until the first capture).
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Whether `capture` has been called at least once.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Overwrite the stored pose.
    pub fn capture(&mut self, pose: CameraPose) {
        log::debug!(
            "bookmark {} captured at {:?} / {:?}",
            self.slot,
            pose.position,
            pose.orientation
        );
        self.pose = pose;
        self.captured = true;
    }

    /// Move `camera` to the stored pose.
    pub fn recall(&self, camera: &mut impl CameraController) {
        log::debug!(
            "bookmark {} recalled (captured: {})",
            self.slot,
            self.captured
        );
        camera.move_to(self.pose);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use glam::{Quat, Vec3};

    use super::*;

    /// Records every `move_to` call.
    #[derive(Default)]
    pub(crate) struct RecordingCamera {
        pub pose: CameraPose,
        pub moves: Vec<CameraPose>,
    }

    impl CameraController for RecordingCamera {
        fn current_pose(&self) -> CameraPose {
            self.pose
        }

        fn move_to(&mut self, pose: CameraPose) {
            self.moves.push(pose);
            self.pose = pose;
        }
    }

    #[test]
    fn capture_then_recall_moves_to_captured_pose() {
        let pose = CameraPose::new(
            Vec3::new(4.0, -1.0, 8.5),
            Quat::from_rotation_x(0.3),
        );
        let mut bookmark = PoseBookmark::new(0);
        bookmark.capture(pose);

        let mut camera = RecordingCamera::default();
        bookmark.recall(&mut camera);
        assert_eq!(camera.moves, vec![pose]);
    }

    #[test]
    fn recall_without_capture_goes_to_zero_pose() {
        let bookmark = PoseBookmark::new(2);
        assert!(!bookmark.is_captured());

        let mut camera = RecordingCamera {
            pose: CameraPose::new(Vec3::ONE, Quat::from_rotation_z(1.0)),
            moves: Vec::new(),
        };
        bookmark.recall(&mut camera);
        assert_eq!(camera.moves, vec![CameraPose::ZERO]);
    }

    #[test]
    fn capture_overwrites_previous_pose() {
        let mut bookmark = PoseBookmark::new(0);
        bookmark.capture(CameraPose::new(Vec3::X, Quat::IDENTITY));
        bookmark.capture(CameraPose::new(Vec3::Y, Quat::IDENTITY));
        assert_eq!(bookmark.pose().position, Vec3::Y);
    }
}
