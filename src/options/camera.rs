use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera transition parameters used when recalling a bookmarked pose.
pub struct CameraOptions {
    /// Duration of a `move_to` transition in seconds (0 = snap).
    #[schemars(title = "Transition", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub transition_secs: f32,
    /// Easing curve applied to the transition.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            transition_secs: 0.5,
            easing: EasingFunction::DEFAULT,
        }
    }
}
