//! Click handling: pick → decode → annotate or highlight.
//!
//! The [`InteractionController`] owns the annotation panel state and the
//! marker set, and sequences the per-click pipeline over the scene. It
//! is the only writer of [`AnnotationPanel`]; the presentation layer
//! only reads it.

mod controller;
mod panel;

pub use controller::{ClickOutcome, InteractionController};
pub use panel::AnnotationPanel;
