//! Clip playback control and the animation clock.
//!
//! The host's renderer owns the skinned model and its keyframe data;
//! this module owns *when* the clip plays and how fast. Playback state
//! is an explicit value passed into each frame advance, mutated only
//! through its setters — never shared ambient state.

mod controller;
mod playback;

pub use controller::AnimationController;
pub use playback::PlaybackState;
