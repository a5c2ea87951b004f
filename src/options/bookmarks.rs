use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Modifier key that turns a bookmark activation into a capture.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CaptureModifier {
    /// Shift held during the activation.
    #[default]
    Shift,
    /// Control held during the activation.
    Ctrl,
    /// Alt / Option held during the activation.
    Alt,
    /// Meta / Command held during the activation.
    Meta,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Bookmarks", inline)]
#[serde(default)]
/// Camera bookmark slot configuration.
pub struct BookmarkOptions {
    /// Number of independent bookmark slots.
    #[schemars(title = "Slots", range(min = 0, max = 16))]
    pub slots: usize,
    /// Modifier that selects capture instead of recall.
    #[schemars(title = "Capture Modifier")]
    pub capture_modifier: CaptureModifier,
}

impl Default for BookmarkOptions {
    fn default() -> Self {
        Self {
            slots: 4,
            capture_modifier: CaptureModifier::Shift,
        }
    }
}
