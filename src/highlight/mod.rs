//! Symmetric sibling highlighting for joint/connector geometry.
//!
//! Clicking a mesh whose material name falls outside the `material_<n>`
//! annotation convention recolors the sibling group on the clicked side
//! of a designated pivot node. The model's joint geometry is authored as
//! a bilaterally symmetric set of child groups under that pivot, mirrored
//! across the pivot's local x axis.

mod marker;

pub use marker::{MarkerConfig, MarkerSet};

use crate::picking::Hit;
use crate::scene::{Color, NodeId, Scene};

/// Configuration for the symmetric highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightConfig {
    /// Name of the pivot ancestor delimiting the symmetric group.
    pub pivot_name: String,
    /// Color applied to highlighted meshes.
    pub color: Color,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            pivot_name: "Empty_30".to_owned(),
            color: Color::HIGHLIGHT,
        }
    }
}

/// Recolor the pivot's child groups on the clicked side.
///
/// Walks the hit node's ancestors to the configured pivot; if there is
/// none, the hit lies outside the symmetric group and this is a silent
/// no-op. Otherwise every direct child group whose local x sign matches
/// the world hit point's x sign (`clicked_on_right == child_on_right`)
/// has its first child mesh recolored: the mesh's material is **cloned**
/// and the clone's color overwritten, so meshes elsewhere in the scene
/// that share the original material keep their color.
///
/// Returns the number of meshes recolored.
pub fn apply_symmetric(
    scene: &mut Scene,
    hit: &Hit,
    config: &HighlightConfig,
) -> usize {
    let Some(pivot) =
        scene.find_ancestor(hit.node, |n| n.name == config.pivot_name)
    else {
        return 0;
    };

    let clicked_on_right = hit.point.x > 0.0;
    let groups: Vec<NodeId> = scene
        .node(pivot)
        .map(|n| n.children().to_vec())
        .unwrap_or_default();

    let mut recolored = 0;
    for group in groups {
        let Some((child_on_right, first_child)) = scene
            .node(group)
            .map(|n| (n.local_position.x > 0.0, n.children().first().copied()))
        else {
            continue;
        };
        if child_on_right != clicked_on_right {
            continue;
        }
        let Some(mesh) = first_child else { continue };
        let Some(material) = scene.node(mesh).and_then(|n| n.material) else {
            continue;
        };
        let Some(clone) = scene.clone_material(material) else {
            continue;
        };
        scene.set_material_color(clone, config.color);
        if let Some(node) = scene.node_mut(mesh) {
            node.material = Some(clone);
        }
        recolored += 1;
    }
    recolored
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::{Geometry, Material, MaterialId, SceneNode};

    const GRAY: Color = Color(0x0080_8080);

    /// Pivot with one mesh group per side at local x = ±5, both meshes
    /// sharing one material. Returns (scene, shared material, left mesh,
    /// right mesh, a hittable joint mesh under the left group).
    fn symmetric_scene() -> (Scene, MaterialId, NodeId, NodeId, NodeId) {
        let mut scene = Scene::new();
        let shared = scene.add_material(Material::new("Shape.001", GRAY));

        let pivot = scene.insert(SceneNode::new("Empty_30"));
        let left_group = scene
            .insert_child(
                pivot,
                SceneNode::new("group_l").with_position(Vec3::new(-5.0, 0.0, 0.0)),
            )
            .unwrap();
        let right_group = scene
            .insert_child(
                pivot,
                SceneNode::new("group_r").with_position(Vec3::new(5.0, 0.0, 0.0)),
            )
            .unwrap();
        let left_mesh = scene
            .insert_child(
                left_group,
                SceneNode::new("mesh_l")
                    .with_material(shared)
                    .with_geometry(Geometry::Sphere { radius: 1.0 }),
            )
            .unwrap();
        let right_mesh = scene
            .insert_child(
                right_group,
                SceneNode::new("mesh_r")
                    .with_material(shared)
                    .with_geometry(Geometry::Sphere { radius: 1.0 }),
            )
            .unwrap();
        (scene, shared, left_mesh, right_mesh, left_mesh)
    }

    fn hit_at(node: NodeId, x: f32) -> Hit {
        Hit {
            node,
            point: Vec3::new(x, 0.0, 0.0),
            t: 1.0,
        }
    }

    #[test]
    fn test_left_click_recolors_only_left_group() {
        let (mut scene, shared, left_mesh, right_mesh, joint) =
            symmetric_scene();
        let recolored =
            apply_symmetric(&mut scene, &hit_at(joint, -1.0), &HighlightConfig::default());

        assert_eq!(recolored, 1);
        let left_material = scene.node(left_mesh).unwrap().material.unwrap();
        assert_ne!(left_material, shared);
        assert_eq!(
            scene.material(left_material).unwrap().color,
            Color::HIGHLIGHT
        );
        // Right mesh untouched, still sharing the original.
        assert_eq!(scene.node(right_mesh).unwrap().material, Some(shared));
        assert_eq!(scene.material(shared).unwrap().color, GRAY);
    }

    #[test]
    fn test_right_click_recolors_only_right_group() {
        let (mut scene, shared, left_mesh, right_mesh, joint) =
            symmetric_scene();
        let recolored =
            apply_symmetric(&mut scene, &hit_at(joint, 2.0), &HighlightConfig::default());

        assert_eq!(recolored, 1);
        assert_eq!(scene.node(left_mesh).unwrap().material, Some(shared));
        let right_material = scene.node(right_mesh).unwrap().material.unwrap();
        assert_ne!(right_material, shared);
        assert_eq!(
            scene.material(right_material).unwrap().color,
            Color::HIGHLIGHT
        );
    }

    #[test]
    fn test_shared_material_retains_color_elsewhere() {
        let (mut scene, shared, left_mesh, _right, joint) = symmetric_scene();
        // A mesh elsewhere in the scene sharing the same material.
        let bystander = scene.insert(
            SceneNode::new("bystander")
                .with_material(shared)
                .with_geometry(Geometry::Sphere { radius: 1.0 }),
        );

        let _n = apply_symmetric(
            &mut scene,
            &hit_at(joint, -1.0),
            &HighlightConfig::default(),
        );

        assert_eq!(scene.node(bystander).unwrap().material, Some(shared));
        assert_eq!(scene.material(shared).unwrap().color, GRAY);
        assert_ne!(
            scene.node(left_mesh).unwrap().material,
            Some(shared)
        );
    }

    #[test]
    fn test_missing_pivot_is_noop() {
        let mut scene = Scene::new();
        let material = scene.add_material(Material::new("Shape.001", GRAY));
        let orphan = scene.insert(
            SceneNode::new("orphan")
                .with_material(material)
                .with_geometry(Geometry::Sphere { radius: 1.0 }),
        );

        let recolored = apply_symmetric(
            &mut scene,
            &hit_at(orphan, -1.0),
            &HighlightConfig::default(),
        );
        assert_eq!(recolored, 0);
        assert_eq!(scene.material(material).unwrap().color, GRAY);
    }

    #[test]
    fn test_mesh_without_material_is_skipped() {
        let mut scene = Scene::new();
        let pivot = scene.insert(SceneNode::new("Empty_30"));
        let empty_group = scene
            .insert_child(
                pivot,
                SceneNode::new("group").with_position(Vec3::new(-5.0, 0.0, 0.0)),
            )
            .unwrap();
        let probe = scene
            .insert_child(empty_group, SceneNode::new("probe"))
            .unwrap();
        // probe has no material; the group's first child is probe itself,
        // which also has no material to clone.
        let recolored = apply_symmetric(
            &mut scene,
            &hit_at(probe, -1.0),
            &HighlightConfig::default(),
        );
        assert_eq!(recolored, 0);
    }

    #[test]
    fn test_custom_pivot_name() {
        let mut scene = Scene::new();
        let material = scene.add_material(Material::new("Shape.001", GRAY));
        let pivot = scene.insert(SceneNode::new("Hinge_7"));
        let group = scene
            .insert_child(
                pivot,
                SceneNode::new("group").with_position(Vec3::new(-2.0, 0.0, 0.0)),
            )
            .unwrap();
        let mesh = scene
            .insert_child(group, SceneNode::new("mesh").with_material(material))
            .unwrap();

        let config = HighlightConfig {
            pivot_name: "Hinge_7".to_owned(),
            color: Color::HIGHLIGHT,
        };
        let recolored = apply_symmetric(&mut scene, &hit_at(mesh, -1.0), &config);
        assert_eq!(recolored, 1);
    }
}
