//! Initial playback options.

use serde::{Deserialize, Serialize};

use crate::animation::PlaybackState;

/// Playback state applied at engine construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaybackOptions {
    /// Playback rate multiplier.
    pub speed: f32,
    /// Start with the clip clock held.
    pub paused: bool,
    /// Start pinned to the rest pose.
    pub static_pose: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            speed: 1.0,
            paused: false,
            static_pose: false,
        }
    }
}

impl PlaybackOptions {
    /// Build the runtime playback state. Invalid speeds fall back to
    /// the state's default rate.
    #[must_use]
    pub fn to_state(&self) -> PlaybackState {
        let mut state = PlaybackState::new();
        state.set_speed(self.speed);
        state.set_paused(self.paused);
        state.set_static_pose(self.static_pose);
        state
    }
}
