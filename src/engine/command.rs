//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a pointer event,
//! a playback widget, or a programmatic call — is represented as a
//! `ViewerCommand`. Consumers construct commands and pass them to
//! [`ViewerEngine::execute`](super::ViewerEngine::execute).

use glam::Vec2;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered — pointer,
/// GUI widget, or API all look identical:
///
/// ```ignore
/// engine.execute(ViewerCommand::DismissPanel);
/// engine.execute(ViewerCommand::SetSpeed { speed: 1.5 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    /// Pointer click at a normalized device coordinate.
    Click {
        /// Pointer position in `[-1, 1]` on both axes, +y up.
        ndc: Vec2,
    },

    /// Explicit user dismissal of the annotation panel.
    DismissPanel,

    /// The viewport was resized; updates the camera aspect ratio.
    Resize {
        /// New viewport width in physical pixels.
        width: f32,
        /// New viewport height in physical pixels.
        height: f32,
    },

    /// Pause or resume clip playback.
    SetPaused {
        /// `true` to hold the clip clock.
        paused: bool,
    },

    /// Change the clip playback rate.
    SetSpeed {
        /// Rate multiplier; invalid values are ignored.
        speed: f32,
    },

    /// Pin the model to its rest pose (or release it).
    SetStaticPose {
        /// `true` to pin.
        static_pose: bool,
    },
}
