//! Perspective camera and screen-ray construction.
//!
//! The host owns camera animation and controls; the interaction core
//! only needs the view-projection transform to turn a normalized pointer
//! coordinate into a world-space pick ray.

use glam::{Mat4, Vec2, Vec3};

use crate::picking::Ray;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix ([0,1] depth range).
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Construct the world-space ray through a normalized device
    /// coordinate (`[-1, 1]` on both axes, +y up).
    ///
    /// Unprojects the near- and far-plane points of the coordinate
    /// through the inverse view-projection; the ray runs from the near
    /// point toward the far point.
    #[must_use]
    pub fn screen_ray(&self, ndc: Vec2) -> Ray {
        let inverse = self.build_matrix().inverse();
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(near, far - near)
    }

    /// Update the aspect ratio on viewport resize. Ignores degenerate
    /// sizes.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(-10.0, 10.0, 20.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}
