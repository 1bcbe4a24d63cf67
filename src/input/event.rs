//! Platform-agnostic input events.
//!
//! These are fed into an [`InputProcessor`](super::InputProcessor) which
//! converts them into
//! [`ViewerCommand`](crate::engine::ViewerCommand) values.

use glam::Vec2;

/// A raw input event from the host window.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(
///     InputEvent::PointerClick { x: 100.0, y: 200.0 },
/// ) {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer click at an absolute client position.
    PointerClick {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The canvas was resized.
    Resize {
        /// New canvas width in physical pixels.
        width: f32,
        /// New canvas height in physical pixels.
        height: f32,
    },
}

/// The canvas rectangle in client coordinates, used to normalize
/// pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    /// Left edge in client coordinates.
    pub left: f32,
    /// Top edge in client coordinates.
    pub top: f32,
    /// Canvas width in physical pixels.
    pub width: f32,
    /// Canvas height in physical pixels.
    pub height: f32,
}

impl CanvasBounds {
    /// Full-window bounds of the given size.
    #[must_use]
    pub fn of_size(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Convert a client-coordinate pointer position to normalized device
    /// coordinates (`[-1, 1]` on both axes, +y up).
    ///
    /// Positions outside the canvas map outside the unit square — the
    /// pick ray then simply misses. Returns `None` for degenerate
    /// (zero-area) bounds.
    #[must_use]
    pub fn to_ndc(&self, x: f32, y: f32) -> Option<Vec2> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            ((x - self.left) / self.width) * 2.0 - 1.0,
            -(((y - self.top) / self.height) * 2.0 - 1.0),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_origin() {
        let bounds = CanvasBounds::of_size(800.0, 600.0);
        let ndc = bounds.to_ndc(400.0, 300.0).unwrap();
        assert!(ndc.length() < 1e-6);
    }

    #[test]
    fn test_corners() {
        let bounds = CanvasBounds::of_size(800.0, 600.0);
        let top_left = bounds.to_ndc(0.0, 0.0).unwrap();
        assert!((top_left - Vec2::new(-1.0, 1.0)).length() < 1e-6);
        let bottom_right = bounds.to_ndc(800.0, 600.0).unwrap();
        assert!((bottom_right - Vec2::new(1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_offset_canvas() {
        let bounds = CanvasBounds {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 100.0,
        };
        let ndc = bounds.to_ndc(200.0, 100.0).unwrap();
        assert!(ndc.length() < 1e-6);
    }

    #[test]
    fn test_degenerate_bounds() {
        let bounds = CanvasBounds::of_size(0.0, 600.0);
        assert!(bounds.to_ndc(10.0, 10.0).is_none());
    }
}
