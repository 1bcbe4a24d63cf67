//! Transient click markers with a fixed time-to-live.
//!
//! A marker is a small sphere inserted at the clicked point, visible on
//! the next render, and removed once its TTL elapses. Removal happens in
//! the per-frame [`sweep`](MarkerSet::sweep); there is no deferred timer
//! to cancel — a marker whose node has already left the scene (teardown,
//! external clear) is a silent no-op, never an error.

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::scene::{Color, Geometry, Material, MaterialId, NodeId, Scene, SceneNode};

/// Marker appearance and lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerConfig {
    /// Sphere radius in world units.
    pub radius: f32,
    /// Marker color.
    pub color: Color,
    /// Time the marker stays in the scene.
    pub ttl: Duration,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: 0.1,
            color: Color::MARKER,
            ttl: Duration::from_secs(1),
        }
    }
}

/// A live marker and its insertion timestamp.
#[derive(Debug, Clone, Copy)]
struct ActiveMarker {
    node: NodeId,
    spawned: Instant,
}

/// Owns every click marker currently in the scene.
///
/// The only component allowed to insert or remove marker nodes. All
/// markers share one material instance, which is never mutated.
#[derive(Debug)]
pub struct MarkerSet {
    config: MarkerConfig,
    active: Vec<ActiveMarker>,
    /// Lazily created shared marker material.
    material: Option<MaterialId>,
}

impl MarkerSet {
    /// Create an empty marker set.
    #[must_use]
    pub fn new(config: MarkerConfig) -> Self {
        Self {
            config,
            active: Vec::new(),
            material: None,
        }
    }

    /// Number of markers currently alive.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Whether no markers are alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    fn marker_material(&mut self, scene: &mut Scene) -> MaterialId {
        // Revalidate against the scene: a cached id from a torn-down
        // scene must not leak into a fresh one.
        if let Some(id) = self.material {
            if scene.material(id).is_some() {
                return id;
            }
        }
        let id = scene
            .add_material(Material::new("click_marker", self.config.color));
        self.material = Some(id);
        id
    }

    /// Insert a marker sphere at a world-space point.
    ///
    /// The node is in the scene synchronously — visible on the very next
    /// render tick — and is removed by [`sweep`](Self::sweep) once the
    /// configured TTL has elapsed.
    pub fn spawn(
        &mut self,
        scene: &mut Scene,
        point: Vec3,
        now: Instant,
    ) -> NodeId {
        let material = self.marker_material(scene);
        let node = scene.add_transient(
            SceneNode::new("click_marker")
                .with_position(point)
                .with_material(material)
                .with_geometry(Geometry::Sphere {
                    radius: self.config.radius,
                }),
        );
        self.active.push(ActiveMarker {
            node,
            spawned: now,
        });
        node
    }

    /// Remove every marker whose TTL has elapsed at `now`.
    ///
    /// Idempotent per marker: a node already removed from the scene is
    /// skipped without error. Returns the number of markers retired.
    pub fn sweep(&mut self, scene: &mut Scene, now: Instant) -> usize {
        let ttl = self.config.ttl;
        let before = self.active.len();
        self.active.retain(|marker| {
            if now.saturating_duration_since(marker.spawned) < ttl {
                return true;
            }
            let _removed = scene.remove(marker.node);
            false
        });
        before - self.active.len()
    }

    /// Remove all markers immediately (scene teardown).
    pub fn clear(&mut self, scene: &mut Scene) {
        for marker in self.active.drain(..) {
            let _removed = scene.remove(marker.node);
        }
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new(MarkerConfig::default())
    }
}
