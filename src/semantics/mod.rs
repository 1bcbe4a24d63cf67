//! Material-name semantics: the naming codec and the annotation resolver.
//!
//! Model assets encode domain meaning in material names. The
//! `material_<n>` convention marks annotateable reaction-stage regions;
//! every other name denotes joint/connector geometry, which is routed to
//! the highlight path instead of the annotation path. This module decodes
//! the convention ([`SemanticToken`]) and maps decoded tokens to
//! presentation payloads ([`resolve`]).
//!
//! Both halves are pure and total: unparsable input is a valid output
//! state, not an error.

mod resolver;
mod token;

pub use resolver::{resolve, AnnotationPayload};
pub use token::{is_annotation_family, SemanticToken};
