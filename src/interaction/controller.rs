//! Sequences the per-click pipeline.

use glam::Vec2;
use web_time::Instant;

use super::panel::AnnotationPanel;
use crate::camera::Camera;
use crate::highlight::{apply_symmetric, HighlightConfig, MarkerConfig, MarkerSet};
use crate::picking::{pick, Hit};
use crate::scene::{NodeId, Scene};
use crate::semantics::{is_annotation_family, resolve, SemanticToken};

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The pick ray hit nothing.
    Missed,
    /// An annotateable region resolved to a payload; the panel now shows
    /// it.
    PanelShown,
    /// A neutral-tint region was hit: click acknowledged, panel state
    /// untouched.
    Acknowledged,
    /// Joint/connector geometry was hit: the symmetric siblings were
    /// recolored and a marker placed at the hit point.
    Highlighted {
        /// Number of sibling meshes recolored (0 when the hit lies
        /// outside the pivot's symmetric group).
        recolored: usize,
        /// The marker node inserted at the hit point.
        marker: NodeId,
    },
}

/// Owns the click pipeline: pick, decode, annotate or highlight.
///
/// All scene mutation driven by input flows through here, serialized on
/// the host's event thread — no other writer touches the panel or the
/// markers.
#[derive(Debug, Default)]
pub struct InteractionController {
    panel: AnnotationPanel,
    markers: MarkerSet,
    highlight: HighlightConfig,
}

impl InteractionController {
    /// Create a controller with default highlight and marker settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with explicit highlight and marker settings.
    #[must_use]
    pub fn with_config(highlight: HighlightConfig, marker: MarkerConfig) -> Self {
        Self {
            panel: AnnotationPanel::hidden(),
            markers: MarkerSet::new(marker),
            highlight,
        }
    }

    /// The annotation panel read model.
    #[must_use]
    pub fn panel(&self) -> &AnnotationPanel {
        &self.panel
    }

    /// The live marker set.
    #[must_use]
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Explicit user dismissal of the panel.
    pub fn dismiss_panel(&mut self) {
        self.panel.dismiss();
    }

    /// Handle a click at a normalized device coordinate.
    ///
    /// Runs the pick query; on a miss, stops. On a hit, decodes the
    /// mesh's material name: the `material_*` family goes through the
    /// semantic resolver and updates the panel (neutral tints leave it
    /// untouched); any other naming family is joint/connector geometry
    /// and triggers the symmetric highlight plus a marker at the hit
    /// point. A hit mesh without a material cannot carry the annotation
    /// convention and routes to the highlight path.
    pub fn handle_click(
        &mut self,
        scene: &mut Scene,
        camera: &Camera,
        ndc: Vec2,
        now: Instant,
    ) -> ClickOutcome {
        let ray = camera.screen_ray(ndc);
        let Some(hit) = pick(scene, &ray) else {
            return ClickOutcome::Missed;
        };

        let material_name = scene
            .node(hit.node)
            .and_then(|n| n.material)
            .and_then(|id| scene.material(id))
            .map(|m| m.name.clone())
            .unwrap_or_default();

        if is_annotation_family(&material_name) {
            let token = SemanticToken::parse(&material_name);
            match resolve(token, &material_name) {
                Some(payload) => {
                    log::debug!(
                        "annotating {material_name:?} at {:?}",
                        hit.point
                    );
                    self.panel.show(payload);
                    ClickOutcome::PanelShown
                }
                None => ClickOutcome::Acknowledged,
            }
        } else {
            self.highlight_at(scene, &hit, now)
        }
    }

    fn highlight_at(
        &mut self,
        scene: &mut Scene,
        hit: &Hit,
        now: Instant,
    ) -> ClickOutcome {
        let recolored = apply_symmetric(scene, hit, &self.highlight);
        let marker = self.markers.spawn(scene, hit.point, now);
        log::debug!(
            "highlighted {recolored} sibling mesh(es) at {:?}",
            hit.point
        );
        ClickOutcome::Highlighted { recolored, marker }
    }

    /// Per-frame maintenance: retire expired markers. Call once per
    /// render tick.
    pub fn tick(&mut self, scene: &mut Scene, now: Instant) -> usize {
        self.markers.sweep(scene, now)
    }
}
