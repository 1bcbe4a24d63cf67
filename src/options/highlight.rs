//! Symmetric-highlight options.

use serde::{Deserialize, Serialize};

use crate::highlight::HighlightConfig;
use crate::scene::Color;

/// Pivot and color for the symmetric sibling highlight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HighlightOptions {
    /// Name of the pivot node delimiting the symmetric group. Must match
    /// the model asset's node naming.
    pub pivot_name: String,
    /// Highlight color, packed `0xRRGGBB`.
    pub color: Color,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            pivot_name: "Empty_30".to_owned(),
            color: Color::HIGHLIGHT,
        }
    }
}

impl HighlightOptions {
    /// Build the runtime highlight configuration.
    #[must_use]
    pub fn to_config(&self) -> HighlightConfig {
        HighlightConfig {
            pivot_name: self.pivot_name.clone(),
            color: self.color,
        }
    }
}
