//! World-space ray with analytic shape intersections.

use glam::Vec3;

/// Near-zero determinants and hits this close to the ray origin are
/// treated as numerical noise.
const T_EPSILON: f32 = 1e-6;

/// A world-space ray with unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction.
    #[must_use]
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Nearest non-negative ray parameter hitting a sphere, or `None`.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = radius.mul_add(-radius, oc.length_squared());
        let discriminant = b.mul_add(b, -c);
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let near = -b - sqrt_d;
        if near >= 0.0 {
            return Some(near);
        }
        // Origin inside the sphere: the far root is still in front.
        let far = -b + sqrt_d;
        (far >= 0.0).then_some(far)
    }

    /// Ray parameter hitting a triangle (Möller–Trumbore, both faces),
    /// or `None`.
    #[must_use]
    pub fn intersect_triangle(&self, triangle: &[Vec3; 3]) -> Option<f32> {
        let edge1 = triangle[1] - triangle[0];
        let edge2 = triangle[2] - triangle[0];
        let p = self.dir.cross(edge2);
        let det = edge1.dot(p);
        if det.abs() < T_EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        let s = self.origin - triangle[0];
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let q = s.cross(edge1);
        let v = self.dir.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let t = edge2.dot(q) * inv_det;
        (t > T_EPSILON).then_some(t)
    }
}
