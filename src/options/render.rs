use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Render loop parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Render", inline)]
#[serde(default)]
pub struct RenderOptions {
    /// Log a frame statistics summary every N iterations (0 = never).
    #[schemars(title = "Stats Log Interval", range(min = 0, max = 10000))]
    pub stats_log_interval: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            stats_log_interval: 600,
        }
    }
}
