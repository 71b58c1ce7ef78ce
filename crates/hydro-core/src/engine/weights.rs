use nalgebra::DMatrix;
use std::fmt;
use thiserror::Error;

/// Degree of the local polynomial fitted by the Savitzky-Golay kernel.
const SAVITZKY_GOLAY_ORDER: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightKernel {
    Average,
    Triangle,
    SavitzkyGolay,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WeightError {
    #[error("Window size must be a positive odd number (got {0})")]
    InvalidWindow(usize),
    #[error("Window of size {window} is too small for a degree-{order} least-squares fit")]
    WindowTooSmall { window: usize, order: usize },
}

impl WeightKernel {
    pub const ALL: [WeightKernel; 3] = [
        WeightKernel::Average,
        WeightKernel::Triangle,
        WeightKernel::SavitzkyGolay,
    ];

    /// Legend label for curves smoothed with this kernel.
    pub fn label(&self) -> &'static str {
        match self {
            WeightKernel::Average => "average",
            WeightKernel::Triangle => "triangle",
            WeightKernel::SavitzkyGolay => "Savitzky-Golay",
        }
    }

    /// Builds the weight vector of this kernel for an odd `window`.
    pub fn weights(&self, window: usize) -> Result<Vec<f64>, WeightError> {
        if window == 0 || window % 2 == 0 {
            return Err(WeightError::InvalidWindow(window));
        }
        match self {
            WeightKernel::Average => Ok(average_weights(window)),
            WeightKernel::Triangle => Ok(triangle_weights(window)),
            WeightKernel::SavitzkyGolay => savitzky_golay_weights(window),
        }
    }
}

impl fmt::Display for WeightKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn average_weights(window: usize) -> Vec<f64> {
    vec![1.0; window]
}

fn triangle_weights(window: usize) -> Vec<f64> {
    let peak = (window - 1) / 2 + 1;
    (1..=peak)
        .chain((1..peak).rev())
        .map(|w| w as f64)
        .collect()
}

/// Smoothing coefficients of a centred quadratic least-squares fit.
///
/// With `A` the Vandermonde matrix of the window offsets `-m..=m`, the fitted
/// value at the centre is the first row of `(AᵀA)⁻¹Aᵀ` applied to the window.
fn savitzky_golay_weights(window: usize) -> Result<Vec<f64>, WeightError> {
    let too_small = WeightError::WindowTooSmall {
        window,
        order: SAVITZKY_GOLAY_ORDER,
    };
    if window <= SAVITZKY_GOLAY_ORDER {
        return Err(too_small);
    }

    let half = (window / 2) as f64;
    let design = DMatrix::from_fn(window, SAVITZKY_GOLAY_ORDER + 1, |row, col| {
        (row as f64 - half).powi(col as i32)
    });
    let normal = design.transpose() * &design;
    let inverse = normal.try_inverse().ok_or(too_small)?;
    let projection = inverse * design.transpose();

    Ok(projection.row(0).iter().copied().collect())
}
