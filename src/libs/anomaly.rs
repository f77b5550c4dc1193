//! Threshold-based anomaly typing.
//!
//! Rules are tried in order and the first hit wins, even when later rules
//! would also match.

use crate::libs::stats::ScoredWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnomalyType {
    ThermalDip,
    StructuralShift,
    StackingAnchor,
    MultivariateDeviation,
    None,
}

impl AnomalyType {
    pub fn label(&self) -> &'static str {
        match self {
            AnomalyType::ThermalDip => "Thermal Dip",
            AnomalyType::StructuralShift => "Structural Shift",
            AnomalyType::StackingAnchor => "Stacking Anchor",
            AnomalyType::MultivariateDeviation => "Multivariate Deviation",
            AnomalyType::None => "None",
        }
    }

    pub fn is_anomalous(&self) -> bool {
        *self != AnomalyType::None
    }
}

impl std::fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named test against a scored window and the sigma threshold.
pub struct AnomalyRule {
    pub name: &'static str,
    pub test: fn(&ScoredWindow, f64) -> Option<AnomalyType>,
}

pub const ANOMALY_RULES: &[AnomalyRule] = &[
    AnomalyRule {
        name: "free-energy",
        test: |w, threshold| {
            let z = w.z_scores.dg_per_base;
            if z.abs() > threshold {
                Some(if z < 0.0 {
                    AnomalyType::ThermalDip
                } else {
                    AnomalyType::StructuralShift
                })
            } else {
                None
            }
        },
    },
    AnomalyRule {
        name: "stacking",
        test: |w, threshold| {
            (w.z_scores.stack_per_base.abs() > threshold).then_some(AnomalyType::StackingAnchor)
        },
    },
    AnomalyRule {
        name: "multivariate",
        test: |w, threshold| {
            (w.combined_score > 2.0 * threshold).then_some(AnomalyType::MultivariateDeviation)
        },
    },
];

/// ```
/// use dnatopo::libs::anomaly::{classify_anomaly, AnomalyType};
/// # use dnatopo::libs::features::{BiophysicalFeatures, FeaturedWindow};
/// # use dnatopo::libs::stats::ScoredWindow;
/// # use dnatopo::libs::window::Window;
/// # let featured = FeaturedWindow {
/// #     window: Window { index: 0, start: 0, end: 1, seq: b"A".to_vec() },
/// #     features: BiophysicalFeatures::default(),
/// #     tm: 0.0,
/// # };
/// let w = ScoredWindow {
///     featured,
///     z_scores: BiophysicalFeatures { dg_per_base: -3.5, ..Default::default() },
///     combined_score: 3.5,
///     contributions: vec![],
/// };
/// assert_eq!(classify_anomaly(&w, 3.0), AnomalyType::ThermalDip);
/// assert_eq!(classify_anomaly(&w, 4.0), AnomalyType::None);
/// ```
pub fn classify_anomaly(w: &ScoredWindow, threshold: f64) -> AnomalyType {
    ANOMALY_RULES
        .iter()
        .find_map(|rule| (rule.test)(w, threshold))
        .unwrap_or(AnomalyType::None)
}
