//! Caller-level policies built on [`analyze`].

use crate::libs::error::ScanError;
use crate::libs::nt::{normalize, BASES};
use crate::libs::scan::{analyze, ScanOptions, ScanResult};

/// Threshold used by the adaptive retry
pub const FALLBACK_THRESHOLD: f64 = 2.5;

/// Result of [`adaptive_analyze`].
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveScan {
    pub result: ScanResult,
    /// True when anomalies appeared only after lowering the threshold
    pub low_confidence: bool,
}

/// Runs [`analyze`]; when nothing is anomalous and the threshold is above
/// 2.0, runs again at [`FALLBACK_THRESHOLD`].
///
/// The retried result is kept even if it still has no anomalies.
pub fn adaptive_analyze(seq: &[u8], opts: &ScanOptions) -> Result<AdaptiveScan, ScanError> {
    let result = analyze(seq, opts)?;
    if !result.anomalies().is_empty() || opts.threshold <= 2.0 {
        return Ok(AdaptiveScan {
            result,
            low_confidence: false,
        });
    }

    let retry = ScanOptions {
        threshold: FALLBACK_THRESHOLD,
        ..*opts
    };
    let result = analyze(seq, &retry)?;
    let low_confidence = !result.anomalies().is_empty();
    if low_confidence {
        log::warn!(
            "Low confidence: zero anomalies at {}σ, lowered threshold to {}σ",
            opts.threshold,
            FALLBACK_THRESHOLD
        );
    }

    Ok(AdaptiveScan {
        result,
        low_confidence,
    })
}

/// Replaces the base at 0-based `pos` of the normalized sequence.
///
/// Without `base`, the first of A, C, G, T differing from the original is used.
///
/// ```
/// use dnatopo::libs::policy::point_mutation;
/// assert_eq!(point_mutation(b"acgt", 0, None).unwrap(), b"CCGT".to_vec());
/// assert_eq!(point_mutation(b"ACGT", 3, Some(b'm')).unwrap(), b"ACGM".to_vec());
/// assert!(point_mutation(b"ACGT", 4, None).is_err());
/// ```
pub fn point_mutation(seq: &[u8], pos: usize, base: Option<u8>) -> Result<Vec<u8>, ScanError> {
    let (mut seq, _) = normalize(seq);
    let original = *seq.get(pos).ok_or_else(|| {
        ScanError::InvalidParameter(format!(
            "mutation position {} outside sequence of length {}",
            pos,
            seq.len()
        ))
    })?;

    let new_base = match base {
        Some(b) => {
            let b = b.to_ascii_uppercase();
            if !BASES.contains(&b) {
                return Err(ScanError::InvalidParameter(format!(
                    "mutation base {} is not one of ACGTM",
                    b as char
                )));
            }
            b
        }
        None => BASES[..4]
            .iter()
            .copied()
            .find(|&b| b != original)
            .unwrap_or(b'A'),
    };

    seq[pos] = new_base;
    Ok(seq)
}
