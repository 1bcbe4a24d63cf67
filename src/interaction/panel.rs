//! Annotation panel read model.

use serde::Serialize;

use crate::semantics::AnnotationPayload;

/// The annotation panel's visibility and content.
///
/// A two-state machine over the visibility axis: created hidden, shown
/// when a click resolves to a payload, hidden again only by explicit
/// dismissal. Re-showing while visible replaces the content in place
/// with no intermediate hidden state. There is exactly one instance,
/// owned by the
/// [`InteractionController`](super::InteractionController) — its only
/// writer — so at most one panel is ever visible.
///
/// Serializable so the host presentation layer can consume it as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationPanel {
    visible: bool,
    title: String,
    description: String,
}

impl AnnotationPanel {
    /// Create the panel in its hidden state.
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Whether the panel should be displayed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Panel title (empty while hidden).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Panel description (empty while hidden).
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Show the panel with the given payload, replacing any content
    /// already on display.
    pub(crate) fn show(&mut self, payload: AnnotationPayload) {
        self.visible = true;
        self.title = payload.title;
        self.description = payload.description;
    }

    /// Hide the panel and clear its content.
    pub(crate) fn dismiss(&mut self) {
        self.visible = false;
        self.title.clear();
        self.description.clear();
    }

    /// Serialize the read model for a JSON-consuming presentation layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, description: &str) -> AnnotationPayload {
        AnnotationPayload {
            title: title.to_owned(),
            description: description.to_owned(),
        }
    }

    #[test]
    fn test_starts_hidden() {
        let panel = AnnotationPanel::hidden();
        assert!(!panel.is_visible());
        assert!(panel.title().is_empty());
        assert!(panel.description().is_empty());
    }

    #[test]
    fn test_show_then_dismiss() {
        let mut panel = AnnotationPanel::hidden();
        panel.show(payload("material_2", "poor in alder"));
        assert!(panel.is_visible());
        assert_eq!(panel.title(), "material_2");

        panel.dismiss();
        assert!(!panel.is_visible());
        assert!(panel.title().is_empty());
    }

    #[test]
    fn test_reshow_replaces_in_place() {
        let mut panel = AnnotationPanel::hidden();
        panel.show(payload("material_2", "a"));
        panel.show(payload("material_9", "b"));
        assert!(panel.is_visible());
        assert_eq!(panel.title(), "material_9");
        assert_eq!(panel.description(), "b");
    }

    #[test]
    fn test_json_read_model() {
        let mut panel = AnnotationPanel::hidden();
        panel.show(payload("material_9", "second stage"));
        let json = panel.to_json().unwrap();
        assert!(json.contains("\"visible\":true"));
        assert!(json.contains("material_9"));
    }
}
