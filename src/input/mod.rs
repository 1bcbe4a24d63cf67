//! Platform-agnostic input plumbing.

mod event;
mod processor;

pub use event::{CanvasBounds, InputEvent};
pub use processor::InputProcessor;
