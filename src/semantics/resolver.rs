//! Maps decoded semantic tokens to annotation-panel payloads.

use super::token::SemanticToken;

/// Per-stage descriptions for the three protective-layer regions.
///
/// Indexed directly by `stage - 1`. Each stage has its own distinct text;
/// the selection is a table lookup, never a sequential match cascade.
const LAYER_DESCRIPTIONS: [&str; 3] = [
    "This is the protective layer part of the diels rich in alder.",
    "This is the protective layer part of the diels poor in alder.",
    "This is the protective layer part of both alders linked.",
];

/// Generic overview text shown for material names outside the decodable
/// index ranges.
const LEGEND_DESCRIPTION: &str =
    "This is a table of the levels of protection class.";

/// Annotation content for the panel: the material name as title plus a
/// stage description.
///
/// Produced by [`resolve`] and consumed once by the annotation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationPayload {
    /// Panel title — the raw material name.
    pub title: String,
    /// Free-text stage description.
    pub description: String,
}

/// Resolve a decoded token (plus the original material name) into an
/// annotation payload.
///
/// Pure function; the same token and name always yield the same result.
/// Returns `None` only for [`SemanticToken::Neutral`] — the click is
/// acknowledged but the panel must not open. All other variants produce
/// a payload:
///
/// - `LayerStage(i)` — the i-th protective-layer description (distinct
///   per stage).
/// - `OffsetStage(i)` — a process-stage sentence embedding the ordinal
///   word for `i` ("first", "second", "third", then "4th", "5th", …).
///   Handles any index value, including ones the codec never produces.
/// - `Unparsed` — the generic protection-class legend.
#[must_use]
pub fn resolve(
    token: SemanticToken,
    material_name: &str,
) -> Option<AnnotationPayload> {
    let description = match token {
        SemanticToken::Neutral => return None,
        SemanticToken::Unparsed => LEGEND_DESCRIPTION.to_owned(),
        SemanticToken::LayerStage(stage) => {
            let index = usize::from(stage).checked_sub(1)?;
            (*LAYER_DESCRIPTIONS.get(index)?).to_owned()
        }
        SemanticToken::OffsetStage(stage) => format!(
            "This is the {} stage of the diels alder regiochemistry \
             reaction process.",
            ordinal_word(stage)
        ),
    };
    Some(AnnotationPayload {
        title: material_name.to_owned(),
        description,
    })
}

/// Ordinal-word form of a stage index: 1 → "first", 2 → "second",
/// 3 → "third", anything larger → "{n}th".
fn ordinal_word(n: u8) -> String {
    match n {
        1 => "first".to_owned(),
        2 => "second".to_owned(),
        3 => "third".to_owned(),
        n => format!("{n}th"),
    }
}
