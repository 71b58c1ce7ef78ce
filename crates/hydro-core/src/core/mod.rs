//! # Core Module
//!
//! Fundamental building blocks shared by the rest of the library.
//!
//! - **Sequence Representation** ([`models`]) - Sequence records and the amino-acid alphabet
//! - **Hydropathy Scales** ([`scales`]) - Fixed per-residue hydrophobicity tables
//! - **File I/O** ([`io`]) - Reading sequence file formats

pub mod io;
pub mod models;
pub mod scales;
