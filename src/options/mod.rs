//! Navigation options with TOML preset support.
//!
//! Speeds, step factors, limits and key bindings are consolidated here.
//! Options serialize to/from TOML so an editor can ship navigation presets.

mod keybindings;
mod navigation;

use std::path::Path;

pub use keybindings::KeybindingOptions;
pub use navigation::{NavOptions, SPEED_PRESET_COUNT};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[navigation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Navigation speeds, steps and limits.
    pub navigation: NavOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The JSON Schema as a pretty-printed string, for tooling.
    pub fn json_schema_string() -> Result<String, NavError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| NavError::OptionsParse(e.to_string()))
    }

    /// Parse options from TOML text. Missing fields use defaults; values
    /// that would break navigation invariants are reset with a warning.
    pub fn from_toml_str(content: &str) -> Result<Self, NavError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        opts.keybindings.fill_defaults();
        for field in opts.navigation.sanitize() {
            log::warn!("navigation option '{field}' out of range, using default");
        }
        Ok(opts)
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavError::Io)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NavAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[navigation]
move_speed = 250.0

[keybindings.bindings]
move_forward = "KeyZ"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.navigation.move_speed, 250.0);
        // Everything else should be default
        assert_eq!(opts.navigation.ortho_zoom_step, 1.2);
        assert_eq!(
            opts.keybindings.lookup("KeyZ"),
            Some(NavAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyS"), Some(NavAction::MoveBackward));
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let opts = Options::from_toml_str("[navigation]\nmove_speed = 0.0\n")
            .unwrap();
        assert_eq!(opts.navigation.move_speed, 100.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[navigation\n").unwrap_err();
        assert!(matches!(err, NavError::OptionsParse(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("navigation"));
        assert!(!props.contains_key("keybindings"));

        let nav = &props["navigation"]["properties"];
        assert!(nav.get("move_speed").is_some());
        assert!(nav.get("ortho_zoom_step").is_some());
        assert!(nav.get("speed_presets").is_none());
        assert!(nav.get("pitch_limit").is_none());
    }

    #[test]
    fn save_then_load_keeps_changes() {
        let dir = std::env::temp_dir()
            .join(format!("editcam-options-{}", std::process::id()));
        let path = dir.join("nav.toml");

        let mut opts = Options::default();
        opts.navigation.move_speed = 640.0;
        opts.navigation.ortho_zoom_step = 1.5;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(loaded.keybindings.lookup("KeyW"), Some(NavAction::MoveForward));

        std::fs::remove_dir_all(&dir).unwrap();
        assert!(matches!(Options::load(&path), Err(NavError::Io(_))));
    }

    #[test]
    fn schema_string_is_json() {
        let text = Options::json_schema_string().unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
    }
}
