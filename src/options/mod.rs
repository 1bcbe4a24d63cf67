//! Centralized interaction options with TOML preset support.
//!
//! All tweakable settings (highlight pivot/color, marker appearance and
//! lifetime, playback, camera projection) are consolidated here. Options
//! serialize to/from TOML for presets; every sub-struct uses
//! `#[serde(default)]` so partial files (e.g. only overriding
//! `[marker]`) work correctly.

mod camera;
mod highlight;
mod marker;
mod playback;

use std::path::Path;

pub use camera::CameraOptions;
pub use highlight::HighlightOptions;
pub use marker::MarkerOptions;
pub use playback::PlaybackOptions;
use serde::{Deserialize, Serialize};

use crate::error::CycloError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Symmetric-highlight parameters.
    pub highlight: HighlightOptions,
    /// Click-marker appearance and lifetime.
    pub marker: MarkerOptions,
    /// Initial playback state.
    pub playback: PlaybackOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CycloError> {
        let content = std::fs::read_to_string(path).map_err(CycloError::Io)?;
        toml::from_str(&content)
            .map_err(|e| CycloError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CycloError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CycloError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(CycloError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
            [highlight]
            pivot_name = "Hinge_1"
        "#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.highlight.pivot_name, "Hinge_1");
        // Everything else falls back to defaults.
        assert_eq!(opts.marker, MarkerOptions::default());
        assert_eq!(opts.playback, PlaybackOptions::default());
        assert_eq!(opts.camera, CameraOptions::default());
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let opts: Options = toml::from_str("").unwrap();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn test_defaults_match_model_convention() {
        let opts = Options::default();
        assert_eq!(opts.highlight.pivot_name, "Empty_30");
        assert_eq!(opts.marker.ttl_ms, 1000);
    }
}
