//! Population statistics, z-scores and per-feature attribution.

use crate::libs::error::ScanError;
use crate::libs::features::{BiophysicalFeatures, Feature, FeaturedWindow};
use crate::libs::model::EPS;

/// Population mean and standard deviation (divisor N) of every feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisStats {
    pub mean: BiophysicalFeatures,
    pub std: BiophysicalFeatures,
}

/// Share of one feature in a window's multivariate deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureContribution {
    pub feature: Feature,
    pub score: f64,
    pub percentage: f64,
}

/// A featured window placed against its sequence's population.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWindow {
    pub featured: FeaturedWindow,
    pub z_scores: BiophysicalFeatures,
    /// Euclidean norm of the z-score vector
    pub combined_score: f64,
    /// Sorted by descending score
    pub contributions: Vec<FeatureContribution>,
}

/// ```
/// use dnatopo::libs::features::BiophysicalFeatures;
/// use dnatopo::libs::stats::population_stats;
/// let a = BiophysicalFeatures { gc: 0.2, ..Default::default() };
/// let b = BiophysicalFeatures { gc: 0.6, ..Default::default() };
/// let stats = population_stats(&[a, b]).unwrap();
/// assert!((stats.mean.gc - 0.4).abs() < 1e-12);
/// assert!((stats.std.gc - 0.2).abs() < 1e-12);
/// assert!(population_stats(&[]).is_err());
/// ```
pub fn population_stats(features: &[BiophysicalFeatures]) -> Result<AnalysisStats, ScanError> {
    if features.is_empty() {
        return Err(ScanError::EmptyWindowSet);
    }
    let n = features.len() as f64;

    let mean = BiophysicalFeatures::from_fn(|f| {
        features.iter().map(|e| e.get(f)).sum::<f64>() / n
    });
    let std = BiophysicalFeatures::from_fn(|f| {
        let avg = mean.get(f);
        let variance = features
            .iter()
            .map(|e| (e.get(f) - avg).powi(2))
            .sum::<f64>()
            / n;
        variance.sqrt()
    });

    Ok(AnalysisStats { mean, std })
}

/// Standardizes one window against the population.
pub fn score(featured: FeaturedWindow, stats: &AnalysisStats) -> ScoredWindow {
    let z_scores = BiophysicalFeatures::from_fn(|f| {
        let sd = stats.std.get(f).max(EPS);
        (featured.features.get(f) - stats.mean.get(f)) / sd
    });

    let dist_sq: f64 = z_scores.values().iter().map(|z| z * z).sum();
    let combined_score = dist_sq.sqrt();
    let contributions = attribute(&z_scores, dist_sq, combined_score);

    ScoredWindow {
        featured,
        z_scores,
        combined_score,
        contributions,
    }
}

fn attribute(
    z_scores: &BiophysicalFeatures,
    dist_sq: f64,
    combined_score: f64,
) -> Vec<FeatureContribution> {
    let denom = dist_sq.max(EPS);
    let mut contributions: Vec<FeatureContribution> = Feature::ALL
        .iter()
        .map(|&feature| {
            let share = z_scores.get(feature).powi(2) / denom;
            FeatureContribution {
                feature,
                score: share * combined_score,
                percentage: share * 100.0,
            }
        })
        .collect();
    // stable, so ties keep feature order
    contributions.sort_by(|a, b| b.score.total_cmp(&a.score));
    contributions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::features::extract;
    use crate::libs::features::featurize;
    use crate::libs::model::NnModel;
    use crate::libs::thermo::Conditions;
    use crate::libs::window::segment;
    use approx::assert_relative_eq;

    fn scored(seq: &[u8]) -> Vec<ScoredWindow> {
        let model = NnModel::default();
        let cond = Conditions::default();
        let featured: Vec<_> = segment(seq, 6, 3)
            .unwrap()
            .into_iter()
            .map(|w| featurize(w, &model, &cond))
            .collect();
        let feats: Vec<_> = featured.iter().map(|f| f.features).collect();
        let stats = population_stats(&feats).unwrap();
        featured.into_iter().map(|f| score(f, &stats)).collect()
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(population_stats(&[]), Err(ScanError::EmptyWindowSet));
    }

    #[test]
    fn test_zero_std_is_floored() {
        // identical windows: std is 0, z-scores stay finite
        let windows = scored(b"AAAAAAAAAAAAAAAAAAAA");
        for w in &windows {
            assert!(w.z_scores.values().iter().all(|z| *z == 0.0));
            assert_eq!(w.combined_score, 0.0);
            assert!(w.contributions.iter().all(|c| c.percentage == 0.0));
        }

        let one = extract(b"ACGTAC", &NnModel::default(), &Conditions::default());
        let stats = population_stats(&[one]).unwrap();
        assert_eq!(stats.std.gc, 0.0);
        assert_eq!(stats.mean, one);
    }

    #[test]
    fn test_mean_value_gives_zero() {
        let a = BiophysicalFeatures {
            gc: 0.2,
            ..Default::default()
        };
        let b = BiophysicalFeatures {
            gc: 0.4,
            ..Default::default()
        };
        let c = BiophysicalFeatures {
            gc: 0.6,
            ..Default::default()
        };
        let stats = population_stats(&[a, b, c]).unwrap();
        let fw = FeaturedWindow {
            window: crate::libs::window::Window {
                index: 1,
                start: 0,
                end: 1,
                seq: b"A".to_vec(),
            },
            features: b,
            tm: 0.0,
        };
        let sw = score(fw, &stats);
        assert_relative_eq!(sw.z_scores.gc, 0.0, epsilon = 1e-9);
        assert_eq!(sw.z_scores.zx, 0.0);
    }

    #[test]
    fn test_contributions_sum_to_100() {
        let windows = scored(b"AAAAAAGCGCGCTATATAMMGGCCATATTTTTGGGG");
        for w in &windows {
            let dist_sq: f64 = w.z_scores.values().iter().map(|z| z * z).sum();
            assert_relative_eq!(w.combined_score, dist_sq.sqrt());
            assert_eq!(w.contributions.len(), 9);
            if dist_sq > EPS {
                let total: f64 = w.contributions.iter().map(|c| c.percentage).sum();
                assert_relative_eq!(total, 100.0, epsilon = 1e-9);
                let score_total: f64 = w.contributions.iter().map(|c| c.score).sum();
                // scores are shares of the norm
                assert_relative_eq!(score_total, w.combined_score, epsilon = 1e-9);
            }
            for pair in w.contributions.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}
