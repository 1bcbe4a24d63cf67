//! Decoding of the `material_<n>` naming convention.

/// A material name decoded into its domain meaning.
///
/// Derived purely from the name string and immutable once produced.
/// The index ranges match the asset authoring convention: `material_1`
/// through `material_3` are protective-layer regions, `material_7` is the
/// neutral connector tint, and `material_8` through `material_12` are the
/// five reaction stages (stored here with the offset already removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticToken {
    /// Protective-layer region, stage index in `1..=3`.
    LayerStage(u8),
    /// Reaction-process stage, index in `1..=5` (`material_8` → 1).
    OffsetStage(u8),
    /// The neutral connector tint (`material_7`): click acknowledged,
    /// nothing to annotate.
    Neutral,
    /// Name outside the decodable ranges of the convention.
    Unparsed,
}

impl SemanticToken {
    /// Decode a material name.
    ///
    /// Splits on `_`; the first segment must be the literal tag
    /// `material` and the second must parse as a non-negative integer,
    /// otherwise the result is [`Unparsed`](Self::Unparsed). Any trailing
    /// segments are ignored.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let mut segments = name.split('_');
        if segments.next() != Some("material") {
            return Self::Unparsed;
        }
        let Some(index) = segments.next().and_then(|s| s.parse::<u32>().ok())
        else {
            return Self::Unparsed;
        };
        match index {
            1..=3 => Self::LayerStage(index as u8),
            7 => Self::Neutral,
            8..=12 => Self::OffsetStage((index - 7) as u8),
            _ => Self::Unparsed,
        }
    }
}

/// Whether a material name belongs to the annotateable `material_*`
/// family.
///
/// This is a broader test than [`SemanticToken::parse`] returning a
/// decoded variant: `material_99` is in the family (and resolves to the
/// generic legend panel) even though its index is out of range, while
/// `Shape.001` is joint/connector geometry.
#[must_use]
pub fn is_annotation_family(name: &str) -> bool {
    name.split('_').next() == Some("material")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_stage_range() {
        for n in 1..=3u8 {
            assert_eq!(
                SemanticToken::parse(&format!("material_{n}")),
                SemanticToken::LayerStage(n)
            );
        }
    }

    #[test]
    fn test_offset_stage_range() {
        for n in 8..=12u32 {
            assert_eq!(
                SemanticToken::parse(&format!("material_{n}")),
                SemanticToken::OffsetStage((n - 7) as u8)
            );
        }
    }

    #[test]
    fn test_neutral() {
        assert_eq!(SemanticToken::parse("material_7"), SemanticToken::Neutral);
    }

    #[test]
    fn test_out_of_range_indices_unparsed() {
        for name in
            ["material_0", "material_4", "material_6", "material_13", "material_99"]
        {
            assert_eq!(SemanticToken::parse(name), SemanticToken::Unparsed);
        }
    }

    #[test]
    fn test_non_integer_index_unparsed() {
        assert_eq!(SemanticToken::parse("material_x"), SemanticToken::Unparsed);
        assert_eq!(SemanticToken::parse("material_2x"), SemanticToken::Unparsed);
        assert_eq!(SemanticToken::parse("material_-1"), SemanticToken::Unparsed);
        assert_eq!(SemanticToken::parse("material_"), SemanticToken::Unparsed);
        assert_eq!(SemanticToken::parse("material"), SemanticToken::Unparsed);
    }

    #[test]
    fn test_wrong_tag_unparsed() {
        assert_eq!(SemanticToken::parse("Shape.001"), SemanticToken::Unparsed);
        assert_eq!(
            SemanticToken::parse("Shape_Copy.036"),
            SemanticToken::Unparsed
        );
        assert_eq!(SemanticToken::parse("materials_2"), SemanticToken::Unparsed);
        assert_eq!(SemanticToken::parse(""), SemanticToken::Unparsed);
    }

    #[test]
    fn test_trailing_segments_ignored() {
        assert_eq!(
            SemanticToken::parse("material_2_extra"),
            SemanticToken::LayerStage(2)
        );
    }

    #[test]
    fn test_annotation_family() {
        assert!(is_annotation_family("material_2"));
        assert!(is_annotation_family("material_99"));
        assert!(is_annotation_family("material_abc"));
        assert!(!is_annotation_family("Shape.001"));
        assert!(!is_annotation_family("materials_2"));
        assert!(!is_annotation_family(""));
    }
}
