//! Provides input functionality for sequence file formats.
//!
//! This module contains a trait-based interface for reading sequence records
//! and the FASTA implementation used by the profile pipeline.

pub mod fasta;
pub mod traits;
