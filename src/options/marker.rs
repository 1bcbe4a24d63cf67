//! Click-marker options.

use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::highlight::MarkerConfig;
use crate::scene::Color;

/// Appearance and lifetime of the transient click marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarkerOptions {
    /// Sphere radius in world units.
    pub radius: f32,
    /// Marker color, packed `0xRRGGBB`.
    pub color: Color,
    /// Lifetime in milliseconds.
    pub ttl_ms: u64,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            radius: 0.1,
            color: Color::MARKER,
            ttl_ms: 1000,
        }
    }
}

impl MarkerOptions {
    /// Build the runtime marker configuration.
    #[must_use]
    pub fn to_config(&self) -> MarkerConfig {
        MarkerConfig {
            radius: self.radius,
            color: self.color,
            ttl: Duration::from_millis(self.ttl_ms),
        }
    }
}
