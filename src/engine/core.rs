//! The engine that owns the interaction core's state.

use web_time::{Duration, Instant};

use super::command::ViewerCommand;
use crate::animation::{AnimationController, PlaybackState};
use crate::camera::Camera;
use crate::interaction::{AnnotationPanel, ClickOutcome, InteractionController};
use crate::options::Options;
use crate::scene::Scene;

/// Owns the scene graph, camera, interaction controller, and playback
/// state, and routes [`ViewerCommand`]s between them.
///
/// Single-threaded and event-driven: the host calls
/// [`execute`](Self::execute) from its input handlers and
/// [`frame`](Self::frame) once per render tick, all on the same thread,
/// so every click-triggered mutation is visible to the very next draw.
/// The host renderer reads the scene (and
/// [`Scene::is_dirty`]/[`Scene::mark_rendered`]) to sync its GPU state,
/// and the presentation layer reads the [`panel`](Self::panel) model.
pub struct ViewerEngine {
    scene: Scene,
    camera: Camera,
    controller: InteractionController,
    animation: AnimationController,
    playback: PlaybackState,
    options: Options,
    last_frame: Option<Instant>,
}

impl ViewerEngine {
    /// Create an engine with an empty scene.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let camera = options.camera.to_camera();
        let controller = InteractionController::with_config(
            options.highlight.to_config(),
            options.marker.to_config(),
        );
        let playback = options.playback.to_state();
        Self {
            scene: Scene::new(),
            camera,
            controller,
            animation: AnimationController::new(),
            playback,
            options,
            last_frame: None,
        }
    }

    /// Execute a command.
    ///
    /// Returns the click outcome for [`ViewerCommand::Click`], `None`
    /// for every other command.
    pub fn execute(&mut self, command: ViewerCommand) -> Option<ClickOutcome> {
        match command {
            ViewerCommand::Click { ndc } => {
                log::debug!(
                    "click at ndc {ndc:?}, animation time {:.3}s",
                    self.animation.time()
                );
                Some(self.controller.handle_click(
                    &mut self.scene,
                    &self.camera,
                    ndc,
                    Instant::now(),
                ))
            }
            ViewerCommand::DismissPanel => {
                self.controller.dismiss_panel();
                None
            }
            ViewerCommand::Resize { width, height } => {
                self.camera.set_aspect(width, height);
                None
            }
            ViewerCommand::SetPaused { paused } => {
                self.playback.set_paused(paused);
                None
            }
            ViewerCommand::SetSpeed { speed } => {
                self.playback.set_speed(speed);
                None
            }
            ViewerCommand::SetStaticPose { static_pose } => {
                self.playback.set_static_pose(static_pose);
                None
            }
        }
    }

    /// Per-tick update: advance the animation clock by the elapsed
    /// frame delta and retire expired click markers. Call once per
    /// render tick, before drawing.
    pub fn frame(&mut self, now: Instant) {
        let dt = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);
        self.animation.advance(dt, &self.playback);
        let _retired = self.controller.tick(&mut self.scene, now);
    }

    // -- Host access --

    /// Read access to the scene graph.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Write access to the scene graph (asset loading, teardown).
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Read access to the camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Write access to the camera (host orbit controls).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The annotation panel read model for the presentation layer.
    #[must_use]
    pub fn panel(&self) -> &AnnotationPanel {
        self.controller.panel()
    }

    /// Current playback state.
    #[must_use]
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Read access to the animation clock.
    #[must_use]
    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    /// Write access to the animation clock (clip loading).
    pub fn animation_mut(&mut self) -> &mut AnimationController {
        &mut self.animation
    }

    /// The options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
