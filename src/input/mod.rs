//! Platform-agnostic activation events and the bookmark gesture mapping.
//!
//! A bookmark control receives exactly two distinguishable gestures: a
//! capture (primary press with the configured modifier) and a recall
//! (plain primary press). The decision is made once per activation.

mod event;

pub use event::{Activation, Modifiers, MouseButton};

use crate::options::CaptureModifier;

/// What a single bookmark activation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkAction {
    /// Store the camera's current pose in the slot.
    Capture,
    /// Move the camera to the slot's stored pose.
    Recall,
}

impl BookmarkAction {
    /// Classify an activation. Returns `None` for non-primary buttons.
    #[must_use]
    pub fn from_activation(
        activation: &Activation,
        capture_modifier: CaptureModifier,
    ) -> Option<Self> {
        if activation.button != MouseButton::Left {
            return None;
        }
        let m = activation.modifiers;
        let held = match capture_modifier {
            CaptureModifier::Shift => m.shift,
            CaptureModifier::Ctrl => m.ctrl,
            CaptureModifier::Alt => m.alt,
            CaptureModifier::Meta => m.meta,
        };
        Some(if held { Self::Capture } else { Self::Recall })
    }
}
