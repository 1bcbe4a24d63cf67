// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math allowances — casts and float compares are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! Interaction core for an interactive 3D cycloaddition reaction model
//! viewer.
//!
//! The host application renders an animated reaction model and forwards
//! clicks here; this crate resolves each click against the scene graph,
//! decodes the hit material's naming convention into a reaction-stage
//! meaning, drives the annotation panel, and — for joint/connector
//! geometry — highlights the symmetric sibling group and drops a
//! transient marker at the hit point.
//!
//! # Key entry points
//!
//! - [`engine::ViewerEngine`] — command routing and the frame tick
//! - [`scene::Scene`] — the arena-backed scene graph
//! - [`semantics`] — the `material_<n>` naming codec and resolver
//! - [`options::Options`] — runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything is single-threaded and event-driven: input handlers and
//! the per-frame tick are serialized onto the host's render thread, so
//! scene mutations need no locking and are visible to the next draw.
//! Rendering, asset loading, camera controls, and the presentation
//! component are external collaborators — the crate mutates the scene
//! and exposes read models; the host draws them.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod input;
pub mod interaction;
pub mod options;
pub mod picking;
pub mod scene;
pub mod semantics;
