//! The animation clock.

use web_time::Duration;

use super::playback::PlaybackState;

/// Owns the clip clock: how far into the looping reaction animation the
/// model currently is.
///
/// The host advances the clock once per render tick with the elapsed
/// frame delta and the current [`PlaybackState`]; anything that needs
/// the current animation time (debug overlays, the click log) asks
/// [`time`](Self::time) explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationController {
    /// Seconds into the clip.
    time: f32,
    /// Clip length in seconds; the clock wraps here when set.
    clip_duration: Option<f32>,
}

impl AnimationController {
    /// Create a clock at time zero with no clip loaded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            time: 0.0,
            clip_duration: None,
        }
    }

    /// Set the loaded clip's duration. Non-positive durations clear it
    /// (the clock then runs unbounded).
    pub fn set_clip_duration(&mut self, seconds: f32) {
        self.clip_duration =
            (seconds.is_finite() && seconds > 0.0).then_some(seconds);
    }

    /// Seconds into the clip.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance the clock by one frame delta under the given playback
    /// state.
    ///
    /// The static-pose override rewinds and holds the clock at zero;
    /// pause holds it in place; otherwise the delta is scaled by the
    /// playback speed and the clock wraps on the clip duration.
    pub fn advance(&mut self, dt: Duration, playback: &PlaybackState) {
        if playback.static_pose() {
            self.time = 0.0;
            return;
        }
        if playback.paused() {
            return;
        }
        self.time += dt.as_secs_f32() * playback.speed();
        if let Some(duration) = self.clip_duration {
            if self.time >= duration {
                self.time %= duration;
            }
        }
    }

    /// Rewind to time zero.
    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_at_unit_speed() {
        let mut clock = AnimationController::new();
        clock.advance(Duration::from_millis(500), &PlaybackState::new());
        assert!((clock.time() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_speed_scales_delta() {
        let mut clock = AnimationController::new();
        let mut playback = PlaybackState::new();
        playback.set_speed(2.0);
        clock.advance(Duration::from_millis(500), &playback);
        assert!((clock.time() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pause_holds_clock() {
        let mut clock = AnimationController::new();
        clock.advance(Duration::from_secs(1), &PlaybackState::new());
        let mut playback = PlaybackState::new();
        playback.set_paused(true);
        clock.advance(Duration::from_secs(5), &playback);
        assert!((clock.time() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_static_pose_rewinds_and_holds() {
        let mut clock = AnimationController::new();
        clock.advance(Duration::from_secs(3), &PlaybackState::new());
        let mut playback = PlaybackState::new();
        playback.set_static_pose(true);
        clock.advance(Duration::from_secs(1), &playback);
        assert!(clock.time().abs() < 1e-6);
    }

    #[test]
    fn test_wraps_on_clip_duration() {
        let mut clock = AnimationController::new();
        clock.set_clip_duration(2.0);
        clock.advance(Duration::from_millis(4500), &PlaybackState::new());
        assert!((clock.time() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_unbounded_without_clip() {
        let mut clock = AnimationController::new();
        clock.advance(Duration::from_secs(100), &PlaybackState::new());
        assert!((clock.time() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_reset() {
        let mut clock = AnimationController::new();
        clock.advance(Duration::from_secs(1), &PlaybackState::new());
        clock.reset();
        assert!(clock.time().abs() < f32::EPSILON);
    }
}
