use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SmoothingError {
    #[error("Invalid filter: smoothing requires an odd number of weights (got {0})")]
    EvenWindow(usize),
    #[error("Invalid filter: the weight vector is empty")]
    EmptyWeights,
}

/// Number of positions dropped at each end of a series smoothed with `window` weights.
#[inline]
pub fn half_window(window: usize) -> usize {
    window.saturating_sub(1) / 2
}

/// Smooths `values` with a sliding filter whose centre weight sits in the middle of `weights`.
///
/// Each output is the weighted sum over a full window divided by the raw sum
/// of the weights. Boundary positions without a full window are dropped, so the
/// result has `values.len() - (weights.len() - 1)` entries, or none when the
/// input is shorter than the window. A weight vector summing to zero produces
/// non-finite output.
///
/// # Errors
///
/// Returns [`SmoothingError`] if `weights` is empty or has an even length.
pub fn smooth_values(values: &[f64], weights: &[f64]) -> Result<Vec<f64>, SmoothingError> {
    let window = weights.len();
    if window == 0 {
        return Err(SmoothingError::EmptyWeights);
    }
    if window % 2 != 1 {
        return Err(SmoothingError::EvenWindow(window));
    }

    let total_weight: f64 = weights.iter().sum();
    trace!(
        window,
        total_weight,
        input_len = values.len(),
        "Applying sliding filter"
    );

    Ok(values
        .windows(window)
        .map(|segment| {
            let weighted: f64 = segment.iter().zip(weights).map(|(v, w)| v * w).sum();
            weighted / total_weight
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_window_averages_neighbours() {
        let smoothed = smooth_values(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(smoothed, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn flat_window_over_constant_signal_returns_the_constant() {
        let values = vec![-1.25; 40];
        for window in (1..=19).step_by(2) {
            let smoothed = smooth_values(&values, &vec![1.0; window]).unwrap();
            assert!(smoothed.iter().all(|v| (v + 1.25).abs() < 1e-12));
        }
    }

    #[test]
    fn output_length_is_input_length_minus_window_plus_one() {
        let values: Vec<f64> = (0..50).map(|i| (i as f64).sin()).collect();
        for window in (1..=19).step_by(2) {
            let smoothed = smooth_values(&values, &vec![1.0; window]).unwrap();
            assert_eq!(smoothed.len(), values.len() - (window - 1));
        }
    }

    #[test]
    fn weights_are_normalised_by_their_raw_sum() {
        let smoothed = smooth_values(&[0.0, 6.0, 0.0], &[1.0, 2.0, 1.0]).unwrap();
        assert_eq!(smoothed, vec![3.0]);
    }

    #[test]
    fn weights_align_with_window_positions() {
        let smoothed = smooth_values(&[10.0, 0.0, 0.0, 0.0], &[1.0, 0.0, 0.0]).unwrap();
        assert_eq!(smoothed, vec![10.0, 0.0]);
    }

    #[test]
    fn input_shorter_than_window_yields_empty_output() {
        let smoothed = smooth_values(&[1.0, 2.0], &[1.0, 1.0, 1.0]).unwrap();
        assert!(smoothed.is_empty());
        assert!(smooth_values(&[], &[1.0]).unwrap().is_empty());
    }

    #[test]
    fn input_equal_to_window_yields_single_value() {
        let smoothed = smooth_values(&[1.0, 2.0, 6.0], &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(smoothed, vec![3.0]);
    }

    #[test]
    fn even_weight_vector_is_rejected() {
        assert_eq!(
            smooth_values(&[1.0, 2.0, 3.0, 4.0], &[1.0, 1.0]),
            Err(SmoothingError::EvenWindow(2))
        );
    }

    #[test]
    fn even_weight_vector_is_rejected_even_for_short_input() {
        assert_eq!(
            smooth_values(&[], &[1.0, 1.0, 1.0, 1.0]),
            Err(SmoothingError::EvenWindow(4))
        );
    }

    #[test]
    fn empty_weight_vector_is_rejected() {
        assert_eq!(
            smooth_values(&[1.0], &[]),
            Err(SmoothingError::EmptyWeights)
        );
    }

    #[test]
    fn zero_sum_weights_produce_non_finite_output() {
        let smoothed = smooth_values(&[1.0, 2.0, 3.0], &[1.0, 0.0, -1.0]).unwrap();
        assert_eq!(smoothed.len(), 1);
        assert!(!smoothed[0].is_finite());
    }

    #[test]
    fn half_window_drops_centre() {
        assert_eq!(half_window(19), 9);
        assert_eq!(half_window(5), 2);
        assert_eq!(half_window(1), 0);
        assert_eq!(half_window(0), 0);
    }
}
