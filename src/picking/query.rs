//! Nearest-hit query over the scene graph.

use glam::Vec3;

use super::ray::Ray;
use crate::scene::{Geometry, NodeId, Scene};

/// A pick result: the hit node and the world-space hit point.
///
/// Ephemeral — produced and consumed within one click handling pass;
/// the id is not kept alive by the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// The intersected node.
    pub node: NodeId,
    /// World-space intersection point.
    pub point: Vec3,
    /// Ray parameter of the intersection (world units along the ray).
    pub t: f32,
}

/// Intersect a ray against every pickable node in the scene and return
/// the closest hit, or `None`.
///
/// All nodes carrying a geometry are tested, descendants included, via
/// the scene's depth-first traversal. Transient marker nodes are
/// skipped. Equal-distance ties resolve to the first node in traversal
/// order — deterministic for a static scene, and accepted as not
/// significant.
#[must_use]
pub fn pick(scene: &Scene, ray: &Ray) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for id in scene.traverse() {
        let Some(node) = scene.node(id) else { continue };
        if node.is_transient() {
            continue;
        }
        let Some(geometry) = node.geometry.as_ref() else {
            continue;
        };
        let Some(origin) = scene.world_position(id) else {
            continue;
        };
        let t = match geometry {
            Geometry::Sphere { radius } => {
                ray.intersect_sphere(origin, *radius)
            }
            Geometry::Triangles { triangles } => triangles
                .iter()
                .filter_map(|tri| {
                    let world =
                        [tri[0] + origin, tri[1] + origin, tri[2] + origin];
                    ray.intersect_triangle(&world)
                })
                .fold(None, |acc: Option<f32>, t| {
                    Some(acc.map_or(t, |best| best.min(t)))
                }),
        };
        if let Some(t) = t {
            if best.as_ref().map_or(true, |b| t < b.t) {
                best = Some(Hit {
                    node: id,
                    point: ray.at(t),
                    t,
                });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneNode;

    fn sphere_node(name: &str, position: Vec3, radius: f32) -> SceneNode {
        SceneNode::new(name)
            .with_position(position)
            .with_geometry(Geometry::Sphere { radius })
    }

    #[test]
    fn test_pick_nearest_of_two() {
        let mut scene = Scene::new();
        let near = scene.insert(sphere_node("near", Vec3::new(0.0, 0.0, 2.0), 0.5));
        let _far = scene.insert(sphere_node("far", Vec3::new(0.0, 0.0, -4.0), 0.5));

        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = pick(&scene, &ray).unwrap();
        assert_eq!(hit.node, near);
        assert!((hit.point.z - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_pick_none_on_miss() {
        let mut scene = Scene::new();
        let _n = scene.insert(sphere_node("n", Vec3::new(50.0, 0.0, 0.0), 0.5));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(pick(&scene, &ray).is_none());
    }

    #[test]
    fn test_pick_empty_scene() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(pick(&scene, &ray).is_none());
    }

    #[test]
    fn test_tie_resolves_to_traversal_order() {
        let mut scene = Scene::new();
        // Two spheres at the same distance from the ray origin.
        let first = scene.insert(sphere_node("first", Vec3::new(0.0, 0.0, 2.0), 0.5));
        let _second =
            scene.insert(sphere_node("second", Vec3::new(0.0, 0.0, 2.0), 0.5));

        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(pick(&scene, &ray).unwrap().node, first);
    }

    #[test]
    fn test_descendants_are_pickable() {
        let mut scene = Scene::new();
        let root =
            scene.insert(SceneNode::new("root").with_position(Vec3::new(0.0, 0.0, 1.0)));
        let child = scene
            .insert_child(root, sphere_node("child", Vec3::new(0.0, 0.0, 1.0), 0.5))
            .unwrap();

        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = pick(&scene, &ray).unwrap();
        // Child world position is (0, 0, 2): parent offset applies.
        assert_eq!(hit.node, child);
        assert!((hit.point.z - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_transient_markers_not_pickable() {
        let mut scene = Scene::new();
        let marker = sphere_node("click_marker", Vec3::new(0.0, 0.0, 5.0), 1.0);
        let _marker = scene.add_transient(marker);
        let solid = scene.insert(sphere_node("solid", Vec3::ZERO, 1.0));

        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        // The marker sits in front but must be skipped.
        assert_eq!(pick(&scene, &ray).unwrap().node, solid);
    }

    #[test]
    fn test_triangle_geometry_pick() {
        let mut scene = Scene::new();
        let quad = vec![
            [
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
            ],
            [
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(-1.0, 1.0, 0.0),
            ],
        ];
        let mesh = scene.insert(
            SceneNode::new("mesh")
                .with_position(Vec3::new(0.0, 0.0, 3.0))
                .with_geometry(Geometry::Triangles { triangles: quad }),
        );

        let ray = Ray::new(Vec3::new(0.5, 0.5, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = pick(&scene, &ray).unwrap();
        assert_eq!(hit.node, mesh);
        assert!((hit.t - 7.0).abs() < 1e-5);
    }
}
