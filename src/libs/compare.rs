//! Position-wise comparison of two analysed sequences.

use crate::libs::error::ScanError;
use crate::libs::features::BiophysicalFeatures;
use crate::libs::scan::ScanResult;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisWindowDelta {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    /// B - A
    pub diff: BiophysicalFeatures,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub deltas: Vec<AnalysisWindowDelta>,
    pub avg_delta: BiophysicalFeatures,
}

/// Pairs windows by position and subtracts A from B.
///
/// No alignment is attempted: trailing windows of the longer result are
/// ignored. Coordinates of each delta come from A.
///
/// ```
/// use dnatopo::libs::compare::compare;
/// use dnatopo::libs::scan::{analyze, ScanOptions};
/// let seq = b"ACGTTGCAAGGCTTAGCATCGATCGGCTAGCTAGGATCCAAGTCGATCGATGC";
/// let a = analyze(seq, &ScanOptions::default()).unwrap();
/// let cmp = compare(&a, &a).unwrap();
/// assert_eq!(cmp.deltas.len(), a.windows.len());
/// assert_eq!(cmp.avg_delta.gc, 0.0);
/// ```
pub fn compare(a: &ScanResult, b: &ScanResult) -> Result<ComparisonResult, ScanError> {
    let len = a.windows.len().min(b.windows.len());
    if len == 0 {
        return Err(ScanError::EmptyComparison);
    }

    let deltas: Vec<AnalysisWindowDelta> = a
        .windows
        .iter()
        .zip(b.windows.iter())
        .enumerate()
        .map(|(i, (wa, wb))| AnalysisWindowDelta {
            index: i,
            start: wa.start(),
            end: wa.end(),
            diff: wb.features().sub(wa.features()),
        })
        .collect();

    let n = len as f64;
    let avg_delta = BiophysicalFeatures::from_fn(|f| {
        deltas.iter().map(|d| d.diff.get(f)).sum::<f64>() / n
    });

    Ok(ComparisonResult { deltas, avg_delta })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::scan::{analyze, ScanOptions};

    const SEQ: &[u8] = b"ATGCGTACGTTAGCCGATAAAAATCGGCGCGCGATATCGGCTAGCTTGACAGCTAGGC";

    #[test]
    fn test_self_comparison_is_zero() {
        let a = analyze(SEQ, &ScanOptions::default()).unwrap();
        let b = analyze(SEQ, &ScanOptions::default()).unwrap();
        let cmp = compare(&a, &b).unwrap();
        assert!(cmp.avg_delta.values().iter().all(|v| *v == 0.0));
        for d in &cmp.deltas {
            assert!(d.diff.values().iter().all(|v| *v == 0.0));
        }
    }

    #[test]
    fn test_truncates_to_shorter() {
        let a = analyze(SEQ, &ScanOptions::default()).unwrap();
        let b = analyze(&SEQ[..30], &ScanOptions::default()).unwrap();
        let cmp = compare(&a, &b).unwrap();
        assert_eq!(cmp.deltas.len(), b.windows.len());
        assert_eq!(cmp.deltas.len(), 4);
        assert_eq!(cmp.deltas[1].start, 5);
        assert_eq!(cmp.deltas[1].end, 20);
    }

    #[test]
    fn test_single_point_shift() {
        let mut mutant = SEQ.to_vec();
        mutant[0] = b'G';
        let a = analyze(SEQ, &ScanOptions::default()).unwrap();
        let b = analyze(&mutant, &ScanOptions::default()).unwrap();
        let cmp = compare(&a, &b).unwrap();
        // only the first window covers position 0
        assert!(cmp.deltas[0].diff.gc > 0.0);
        assert!(cmp.deltas[1..]
            .iter()
            .all(|d| d.diff.values().iter().all(|v| *v == 0.0)));
    }

    #[test]
    fn test_empty() {
        let a = analyze(SEQ, &ScanOptions::default()).unwrap();
        let mut empty = a.clone();
        empty.windows.clear();
        assert_eq!(compare(&a, &empty), Err(ScanError::EmptyComparison));
    }
}
