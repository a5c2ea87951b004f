use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Highlight index sizing.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Highlight", inline)]
#[serde(default)]
pub struct HighlightOptions {
    /// Lower bound on the index capacity. The index is always at least as
    /// large as the loaded scene.
    #[schemars(skip)]
    pub min_capacity: usize,
}
