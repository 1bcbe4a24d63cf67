//! Authoritative scene graph: arena-backed named nodes with shared
//! materials.
//!
//! Nodes live in a flat id-keyed arena; parent→children edges own the
//! hierarchy while each child keeps a non-owning parent id for ancestor
//! walks. The host (renderer, asset loader) builds and draws the graph;
//! the interaction core mutates it only through the operations here:
//! material cloning for isolated recolors, transient marker insertion,
//! and idempotent removal.

mod node;

pub use node::{Color, Geometry, Material, MaterialId, NodeId, SceneNode};

use glam::Vec3;
use rustc_hash::FxHashMap;

/// The scene graph arena. Owns all nodes and materials.
pub struct Scene {
    nodes: FxHashMap<NodeId, SceneNode>,
    materials: FxHashMap<MaterialId, Material>,
    /// Top-level nodes in insertion order.
    roots: Vec<NodeId>,
    next_node_id: u32,
    next_material_id: u32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: FxHashMap::default(),
            materials: FxHashMap::default(),
            roots: Vec::new(),
            next_node_id: 0,
            next_material_id: 0,
            generation: 0,
            rendered_generation: 0,
        }
    }

    // -- Dirty tracking --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether scene data changed since the last [`mark_rendered`](Self::mark_rendered).
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark the current generation as rendered (call after a draw sync).
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    // -- Materials --

    /// Register a material and return its id.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.next_material_id);
        self.next_material_id += 1;
        let _prev = self.materials.insert(id, material);
        self.invalidate();
        id
    }

    /// Read access to a material.
    #[must_use]
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(&id)
    }

    /// Clone a material into an independent instance.
    ///
    /// The clone starts with the original's name and color but shares
    /// nothing with it; recoloring the clone leaves every mesh still
    /// referencing the original untouched. Returns `None` if the source
    /// id is unknown.
    pub fn clone_material(&mut self, id: MaterialId) -> Option<MaterialId> {
        let copy = self.materials.get(&id)?.clone();
        Some(self.add_material(copy))
    }

    /// Overwrite a material's color. No-op for an unknown id.
    pub fn set_material_color(&mut self, id: MaterialId, color: Color) {
        if let Some(material) = self.materials.get_mut(&id) {
            material.color = color;
            self.invalidate();
        }
    }

    // -- Node management --

    fn register(&mut self, mut node: SceneNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        node.parent = parent;
        node.children.clear();
        let _prev = self.nodes.insert(id, node);
        self.invalidate();
        id
    }

    /// Insert a top-level node. Returns its id.
    pub fn insert(&mut self, node: SceneNode) -> NodeId {
        let id = self.register(node, None);
        self.roots.push(id);
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// Returns `None` (and discards the node) if the parent id is
    /// unknown.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        node: SceneNode,
    ) -> Option<NodeId> {
        if !self.nodes.contains_key(&parent) {
            return None;
        }
        let id = self.register(node, Some(parent));
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(id);
        }
        Some(id)
    }

    /// Insert a transient marker node at the scene root.
    ///
    /// Transient nodes are rendered like any other but are skipped by
    /// picking and are expected to be removed once their lifetime ends.
    pub fn add_transient(&mut self, mut node: SceneNode) -> NodeId {
        node.transient = true;
        self.insert(node)
    }

    /// Remove a node and its whole subtree.
    ///
    /// Idempotent: removing an id that is no longer in the scene is a
    /// silent no-op. Returns whether anything was removed.
    pub fn remove(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.get(&id) else {
            return false;
        };
        match node.parent {
            Some(parent) => {
                if let Some(parent_node) = self.nodes.get_mut(&parent) {
                    parent_node.children.retain(|&c| c != id);
                }
            }
            None => self.roots.retain(|&r| r != id),
        }
        self.drop_subtree(id);
        self.invalidate();
        true
    }

    fn drop_subtree(&mut self, id: NodeId) {
        let Some(node) = self.nodes.remove(&id) else {
            return;
        };
        for child in node.children {
            self.drop_subtree(child);
        }
    }

    /// Read access to a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Write access to a node (invalidates the rendered generation).
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.invalidate();
        self.nodes.get_mut(&id)
    }

    /// Whether a node exists.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // -- Traversal --

    /// Depth-first pre-order traversal over every node, roots in
    /// insertion order. Deterministic for a static scene.
    #[must_use]
    pub fn traverse(&self) -> Traversal<'_> {
        Traversal {
            scene: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Walk the non-owning parent chain of `id` (excluding `id` itself)
    /// and return the first ancestor matching the predicate.
    pub fn find_ancestor(
        &self,
        id: NodeId,
        predicate: impl Fn(&SceneNode) -> bool,
    ) -> Option<NodeId> {
        let mut current = self.nodes.get(&id)?.parent;
        while let Some(ancestor_id) = current {
            let ancestor = self.nodes.get(&ancestor_id)?;
            if predicate(ancestor) {
                return Some(ancestor_id);
            }
            current = ancestor.parent;
        }
        None
    }

    /// World-space position of a node: the sum of local translations
    /// along its parent chain. `None` for an unknown id.
    #[must_use]
    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        let mut position = Vec3::ZERO;
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.nodes.get(&node_id)?;
            position += node.local_position;
            current = node.parent;
        }
        Some(position)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator state for [`Scene::traverse`].
pub struct Traversal<'a> {
    scene: &'a Scene,
    stack: Vec<NodeId>,
}

impl Iterator for Traversal<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.scene.nodes.get(&id) {
            self.stack.extend(node.children.iter().rev().copied());
        }
        Some(id)
    }
}
