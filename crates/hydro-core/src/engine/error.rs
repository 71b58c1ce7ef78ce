use thiserror::Error;

use super::config::ConfigError;
use super::smoothing::SmoothingError;
use super::weights::{WeightError, WeightKernel};
use crate::core::scales::ScaleError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Sequence projection failed: {source}")]
    Projection {
        #[from]
        source: ScaleError,
    },

    #[error("Failed to build {kernel} weights: {source}")]
    Weights {
        kernel: WeightKernel,
        #[source]
        source: WeightError,
    },

    #[error("Smoothing with the {kernel} kernel failed: {source}")]
    Smoothing {
        kernel: WeightKernel,
        #[source]
        source: SmoothingError,
    },
}
