//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (render loop, camera transitions, bookmark slots,
//! highlight sizing) are consolidated here. Options serialize to/from TOML
//! so a host application can keep presets on disk.

mod bookmarks;
mod camera;
mod highlight;
mod render;

use std::path::Path;

pub use bookmarks::{BookmarkOptions, CaptureModifier};
pub use camera::CameraOptions;
pub use highlight::HighlightOptions;
pub use render::RenderOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[bookmarks]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Render loop parameters.
    pub render: RenderOptions,
    /// Camera transition parameters.
    pub camera: CameraOptions,
    /// Bookmark slot configuration.
    pub bookmarks: BookmarkOptions,
    /// Highlight index sizing.
    #[schemars(skip)]
    pub highlight: HighlightOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content =
            std::fs::read_to_string(path).map_err(VantageError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, VantageError> {
        toml::from_str(content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[bookmarks]
capture_modifier = "ctrl"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.bookmarks.capture_modifier, CaptureModifier::Ctrl);
        // Everything else should be default
        assert_eq!(opts.bookmarks.slots, 4);
        assert_eq!(opts.camera.transition_secs, 0.5);
        assert_eq!(opts.render.stats_log_interval, 600);
    }

    #[test]
    fn easing_is_configurable() {
        let toml_str = r#"
[camera]
transition_secs = 0.0
easing = "linear"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.transition_secs, 0.0);
        assert_eq!(opts.camera.easing, EasingFunction::Linear);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[bookmarks]\nslots = \"many\"")
            .unwrap_err();
        assert!(matches!(err, VantageError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("vantage-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.bookmarks.slots = 9;
        opts.save(&dir.join("wide.toml")).unwrap();

        let loaded = Options::load(&dir.join("wide.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["wide".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("render"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("bookmarks"));
        assert!(!props.contains_key("highlight"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("transition_secs").is_some());
        assert!(camera.get("easing").is_none());
    }
}
