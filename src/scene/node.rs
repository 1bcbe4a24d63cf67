//! Node, material, and geometry value types for the scene arena.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Identity of a node in the scene arena.
///
/// Copyable, non-owning. Holding a `NodeId` never keeps a node alive;
/// lookups on a removed id simply return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

/// Identity of a material in the scene arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub(crate) u32);

/// Packed `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// The fixed highlight color applied to symmetric-sibling meshes.
    pub const HIGHLIGHT: Self = Self(0x00ff_0000);
    /// The fixed click-marker color.
    pub const MARKER: Self = Self(0x00ff_ff00);
    /// Pure white.
    pub const WHITE: Self = Self(0x00ff_ffff);

    /// Red channel.
    #[must_use]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    /// Green channel.
    #[must_use]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

/// A surface material: a name carrying the asset naming convention plus
/// a display color.
///
/// Materials are shared by default — any number of meshes may reference
/// the same instance. Region-specific recoloring must go through
/// [`Scene::clone_material`](super::Scene::clone_material); the clone is
/// an independent instance with no back-reference to the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    /// Material name, e.g. `material_9` or `Shape.001`.
    pub name: String,
    /// Display color.
    pub color: Color,
}

impl Material {
    /// Create a material with the given name and color.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Pickable shape attached to a node, in node-local space.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Sphere centered on the node origin.
    Sphere {
        /// Sphere radius.
        radius: f32,
    },
    /// Triangle soup; each triangle is three local-space vertices.
    Triangles {
        /// Triangle list.
        triangles: Vec<[Vec3; 3]>,
    },
}

/// A node in the scene graph.
///
/// Carries identity (name), a local translation, an optional shared
/// material reference, and an optional pickable geometry. The owning
/// parent→children edges and the non-owning child→parent back-reference
/// are managed exclusively by the [`Scene`](super::Scene); the arena
/// never exposes a way to re-parent, so the link structure cannot form
/// cycles.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Node name, e.g. `Empty_30` for the symmetric-group pivot.
    pub name: String,
    /// Translation relative to the parent node.
    pub local_position: Vec3,
    /// Shared material reference, if the node is a mesh.
    pub material: Option<MaterialId>,
    /// Pickable shape, if the node is renderable.
    pub geometry: Option<Geometry>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) transient: bool,
}

impl SceneNode {
    /// Create a node with the given name at the parent origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local_position: Vec3::ZERO,
            material: None,
            geometry: None,
            parent: None,
            children: Vec::new(),
            transient: false,
        }
    }

    /// Set the local translation.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.local_position = position;
        self
    }

    /// Attach a shared material reference.
    #[must_use]
    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }

    /// Attach a pickable geometry.
    #[must_use]
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Non-owning back-reference to the parent node.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether this is a transient node (a click marker). Transient
    /// nodes are rendered but never pickable.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.transient
    }
}
