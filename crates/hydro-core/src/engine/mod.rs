//! # Engine Module
//!
//! The signal-processing layer: weight vectors for the three smoothing kernels,
//! the sliding weighted smoother, highlight spans, validated profile
//! configuration, and progress reporting.

pub mod config;
pub mod error;
pub mod progress;
pub mod smoothing;
pub mod spans;
pub mod weights;
