//! Explicit playback state with documented setters.

use serde::Serialize;

/// Clip playback controls: pause, speed, and the static-pose override.
///
/// A plain value consumed by
/// [`AnimationController::advance`](super::AnimationController::advance).
/// Mutation goes through the setters below; there is no shared mutable
/// options object read behind the frame loop's back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaybackState {
    paused: bool,
    speed: f32,
    static_pose: bool,
}

impl PlaybackState {
    /// The speed steps offered by the host's playback widget.
    pub const SPEED_STEPS: [f32; 4] = [0.5, 1.0, 1.5, 2.0];

    /// Playing, 1.0x, animated pose.
    #[must_use]
    pub fn new() -> Self {
        Self {
            paused: false,
            speed: 1.0,
            static_pose: false,
        }
    }

    /// Whether the clip clock is held.
    #[must_use]
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Current playback rate multiplier.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Whether the model is pinned to its rest pose.
    #[must_use]
    pub fn static_pose(&self) -> bool {
        self.static_pose
    }

    /// Pause or resume the clip clock.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Set the playback rate multiplier.
    ///
    /// Non-finite or non-positive rates are ignored; the widget only
    /// offers [`SPEED_STEPS`](Self::SPEED_STEPS) but programmatic
    /// callers may pass any positive value.
    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_finite() && speed > 0.0 {
            self.speed = speed;
        }
    }

    /// Pin the model to its rest pose (or release it back to playback).
    pub fn set_static_pose(&mut self, static_pose: bool) {
        self.static_pose = static_pose;
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
