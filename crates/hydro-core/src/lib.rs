//! # Hydroplot Core Library
//!
//! Residue-level hydropathy profiles for protein sequences. A sequence is
//! projected through a fixed hydrophobicity scale, the per-residue signal is
//! smoothed with three sliding-window filters, and the result is rendered as an
//! annotated line chart.
//!
//! ## Architecture
//!
//! The library follows a layered layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`SequenceRecord`,
//!   `AminoAcidType`), the hydropathy scale tables, and sequence file I/O.
//!
//! - **[`engine`]: The Signal Layer.** Weight-vector construction, the sliding
//!   weighted smoother, highlight spans, the validated `ProfileConfig`, and
//!   progress reporting.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into a
//!   complete profile computation.
//!
//! - **[`render`]: The Output Layer.** Draws a computed profile to a bitmap or
//!   SVG image.

pub mod core;
pub mod engine;
pub mod render;
pub mod workflows;
