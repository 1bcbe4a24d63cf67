//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns the canvas bounds used to normalize pointer
//! positions. It is the only thing that sits between raw window events
//! and the engine's [`execute`](crate::engine::ViewerEngine::execute)
//! method.

use super::event::{CanvasBounds, InputEvent};
use crate::engine::ViewerCommand;

/// Converts raw window events into [`ViewerCommand`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputProcessor {
    bounds: CanvasBounds,
}

impl InputProcessor {
    /// Create a processor for a canvas of the given bounds.
    #[must_use]
    pub fn new(bounds: CanvasBounds) -> Self {
        Self { bounds }
    }

    /// Current canvas bounds.
    #[must_use]
    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// Replace the canvas bounds (e.g. after the canvas moved within
    /// the page).
    pub fn set_bounds(&mut self, bounds: CanvasBounds) {
        self.bounds = bounds;
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// Clicks are normalized against the stored bounds; a click on a
    /// degenerate canvas produces nothing. Resizes update the stored
    /// bounds and forward to the engine.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::PointerClick { x, y } => self
                .bounds
                .to_ndc(x, y)
                .map(|ndc| ViewerCommand::Click { ndc }),
            InputEvent::Resize { width, height } => {
                self.bounds.width = width;
                self.bounds.height = height;
                Some(ViewerCommand::Resize { width, height })
            }
        }
    }
}
