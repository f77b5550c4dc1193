//! Local co-movement of two feature channels.

use crate::libs::features::{BiophysicalFeatures, Feature};
use crate::libs::model::EPS;

/// Number of consecutive windows per correlation sample
pub const MOVING_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationPoint {
    /// Index of the first window of the span
    pub index: usize,
    pub correlation: f64,
}

/// Pearson correlation of two equally long series.
///
/// Returns 0.0 for empty input or when either series is (nearly) constant.
///
/// ```
/// use dnatopo::libs::correlation::pearson;
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((pearson(&a, &a) - 1.0).abs() < 1e-12);
/// let b = [5.0, 4.0, 3.0, 2.0, 1.0];
/// assert!((pearson(&a, &b) + 1.0).abs() < 1e-12);
/// assert_eq!(pearson(&[2.0; 5], &[3.0; 5]), 0.0);
/// ```
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let (a, b) = (&a[..n], &b[..n]);

    let avg_a = a.iter().sum::<f64>() / n as f64;
    let avg_b = b.iter().sum::<f64>() / n as f64;

    let mut num = 0.0;
    let mut den_a = 0.0;
    let mut den_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let da = x - avg_a;
        let db = y - avg_b;
        num += da * db;
        den_a += da * da;
        den_b += db * db;
    }

    let den = (den_a * den_b).sqrt();
    if den < EPS {
        0.0
    } else {
        num / den
    }
}

/// Sliding correlation between two channels over spans of [`MOVING_WINDOW`] windows.
///
/// `indices` and `features` are parallel slices, one entry per window. Fewer
/// than [`MOVING_WINDOW`] windows give an empty map.
pub fn cross_correlation(
    indices: &[usize],
    features: &[BiophysicalFeatures],
    first: Feature,
    second: Feature,
) -> Vec<CorrelationPoint> {
    let n = indices.len().min(features.len());
    if n < MOVING_WINDOW {
        return vec![];
    }

    (0..=n - MOVING_WINDOW)
        .map(|i| {
            let span = &features[i..i + MOVING_WINDOW];
            let a: Vec<f64> = span.iter().map(|f| f.get(first)).collect();
            let b: Vec<f64> = span.iter().map(|f| f.get(second)).collect();
            CorrelationPoint {
                index: indices[i],
                correlation: pearson(&a, &b),
            }
        })
        .collect()
}
