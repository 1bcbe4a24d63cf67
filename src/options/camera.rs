//! Camera projection options.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;

/// Projection parameters for the viewer camera.
///
/// Eye and target placement stay with the host's orbit controls; only
/// the projection is preset-configurable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl CameraOptions {
    /// Build a camera at the viewer's initial vantage point with these
    /// projection parameters.
    #[must_use]
    pub fn to_camera(&self) -> Camera {
        Camera {
            eye: Vec3::new(-10.0, 10.0, 20.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy: self.fovy,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}
