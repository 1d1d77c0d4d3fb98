//! Moving average of comb lengths along a path.

use crate::sampler::Sample;

/// Number of neighbors on each side taken into the average (a 5 point window).
pub const SMOOTHING_RADIUS: usize = 2;

/// Box filter over `values`.
///
/// Each output value is the mean of the input values within `radius` positions,
/// the window being truncated at both ends of the slice. The sequence is never
/// treated as cyclic.
pub fn moving_average(values: &[f64], radius: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = Vec::with_capacity(n);
    for idx in 0..n {
        let start = idx.saturating_sub(radius);
        let end = (idx + radius).min(n - 1);

        let mut sum = 0.0;
        for value in &values[start..=end] {
            sum += *value;
        }
        result.push(sum / (end - start + 1) as f64);
    }

    result
}

/// Smoothed comb lengths of the samples of a single path.
///
/// Straight and curved samples are averaged together.
pub fn smooth_samples(samples: &[Sample]) -> Vec<f64> {
    let lengths: Vec<f64> = samples.iter().map(|s| s.length).collect();
    moving_average(&lengths, SMOOTHING_RADIUS)
}

#[test]
fn empty_and_single() {
    assert!(moving_average(&[], SMOOTHING_RADIUS).is_empty());
    assert_eq!(moving_average(&[4.0], SMOOTHING_RADIUS), vec![4.0]);
}

#[test]
fn window_of_five() {
    let values = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0];
    let smoothed = moving_average(&values, SMOOTHING_RADIUS);

    assert_eq!(smoothed.len(), values.len());
    assert_eq!(smoothed[2], (1.0 + 2.0 + 4.0 + 8.0 + 16.0) / 5.0);
    assert_eq!(smoothed[3], (2.0 + 4.0 + 8.0 + 16.0 + 32.0) / 5.0);
}

#[test]
fn truncated_at_boundaries() {
    let values = [3.0, 6.0, 9.0, 12.0, 15.0, 100.0];
    let smoothed = moving_average(&values, SMOOTHING_RADIUS);

    assert_eq!(smoothed[0], (3.0 + 6.0 + 9.0) / 3.0);
    assert_eq!(smoothed[1], (3.0 + 6.0 + 9.0 + 12.0) / 4.0);
    // No wrap around: the last value only sees its left neighbors.
    assert_eq!(smoothed[5], (12.0 + 15.0 + 100.0) / 3.0);
}

#[test]
fn constant_input_is_unchanged() {
    let values = vec![2.5; 9];
    assert_eq!(moving_average(&values, SMOOTHING_RADIUS), values);
}
