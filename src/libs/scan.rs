//! Whole-sequence analysis.
//!
//! A window moves through a chain of records, each stage returning a new,
//! more complete one:
//!
//! `Window` -> `FeaturedWindow` -> `ScoredWindow` -> `AnalysisWindow`
//!
//! Population statistics sit between the second and third stage and need
//! every window of the sequence.

use itertools::Itertools;

use crate::libs::anomaly::{classify_anomaly, AnomalyType};
use crate::libs::archetype::{classify_archetype, Archetype};
use crate::libs::correlation::{cross_correlation, CorrelationPoint};
use crate::libs::error::ScanError;
use crate::libs::features::{featurize, BiophysicalFeatures, Feature};
use crate::libs::model::NnModel;
use crate::libs::nt::normalize;
use crate::libs::stats::{population_stats, score, AnalysisStats, FeatureContribution, ScoredWindow};
use crate::libs::summary::{summarize, BiologicalSummary};
use crate::libs::thermo::Conditions;
use crate::libs::window::segment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanOptions {
    /// Anomaly threshold in standard deviations
    pub threshold: f64,
    pub width: usize,
    pub stride: usize,
    pub conditions: Conditions,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            threshold: 3.0,
            width: 15,
            stride: 5,
            conditions: Conditions::default(),
        }
    }
}

/// A fully classified window.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisWindow {
    pub scored: ScoredWindow,
    pub is_anomalous: bool,
    pub anomaly_type: AnomalyType,
    pub archetype: Archetype,
}

impl AnalysisWindow {
    pub fn index(&self) -> usize {
        self.scored.featured.window.index
    }

    pub fn start(&self) -> usize {
        self.scored.featured.window.start
    }

    pub fn end(&self) -> usize {
        self.scored.featured.window.end
    }

    pub fn seq(&self) -> &[u8] {
        &self.scored.featured.window.seq
    }

    pub fn features(&self) -> &BiophysicalFeatures {
        &self.scored.featured.features
    }

    pub fn z_scores(&self) -> &BiophysicalFeatures {
        &self.scored.z_scores
    }

    pub fn combined_score(&self) -> f64 {
        self.scored.combined_score
    }

    pub fn contributions(&self) -> &[FeatureContribution] {
        &self.scored.contributions
    }

    /// Melting temperature, Celsius
    pub fn tm(&self) -> f64 {
        self.scored.featured.tm
    }
}

/// Classifies a scored window. `mg` is the Mg2+ concentration of the scan.
pub fn classify(scored: ScoredWindow, threshold: f64, mg: f64) -> AnalysisWindow {
    let anomaly_type = classify_anomaly(&scored, threshold);
    let is_anomalous = anomaly_type.is_anomalous();
    let archetype = classify_archetype(&scored, is_anomalous, mg);
    AnalysisWindow {
        scored,
        is_anomalous,
        anomaly_type,
        archetype,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub windows: Vec<AnalysisWindow>,
    pub stats: AnalysisStats,
    /// Local correlation of hydrogen bonding against stacking
    pub correlation_map: Vec<CorrelationPoint>,
    pub threshold_used: f64,
    /// `combined_score` of every window, in window order
    pub multivariate_scores: Vec<f64>,
    pub summary: BiologicalSummary,
    /// Input characters replaced by the wildcard
    pub wildcards: usize,
}

impl ScanResult {
    /// Indices of anomalous windows.
    pub fn anomalies(&self) -> Vec<usize> {
        self.windows
            .iter()
            .filter(|w| w.is_anomalous)
            .map(|w| w.index())
            .collect()
    }
}

/// Analyzes one sequence with the default model.
///
/// ```
/// use dnatopo::libs::scan::{analyze, ScanOptions};
/// let seq = b"TTGACAGCTAGCTCAGTCCTAGGTATAATGCTAGCGGCCGCGGGGCGGGGCTA";
/// let res = analyze(seq, &ScanOptions::default()).unwrap();
/// assert_eq!(res.windows.len(), (seq.len() - 15) / 5 + 1);
/// assert_eq!(res.threshold_used, 3.0);
/// assert_eq!(res.windows[0].archetype.label(), "Putative Promoter");
///
/// assert!(analyze(b"ACGT", &ScanOptions::default()).is_err());
/// ```
pub fn analyze(seq: &[u8], opts: &ScanOptions) -> Result<ScanResult, ScanError> {
    analyze_with(seq, opts, &NnModel::default())
}

pub fn analyze_with(
    seq: &[u8],
    opts: &ScanOptions,
    model: &NnModel,
) -> Result<ScanResult, ScanError> {
    let (seq, wildcards) = normalize(seq);
    let windows = segment(&seq, opts.width, opts.stride)?;

    let featured: Vec<_> = windows
        .into_iter()
        .map(|w| featurize(w, model, &opts.conditions))
        .collect();

    let feature_set: Vec<BiophysicalFeatures> = featured.iter().map(|f| f.features).collect();
    let stats = population_stats(&feature_set)?;
    log::debug!(
        "{} windows, mean dG/base {:.4}, sd {:.4}",
        feature_set.len(),
        stats.mean.dg_per_base,
        stats.std.dg_per_base
    );

    let windows: Vec<AnalysisWindow> = featured
        .into_iter()
        .map(|f| classify(score(f, &stats), opts.threshold, opts.conditions.mg))
        .collect();

    let indices: Vec<usize> = windows.iter().map(|w| w.index()).collect();
    let correlation_map = cross_correlation(
        &indices,
        &feature_set,
        Feature::HbPerBase,
        Feature::StackPerBase,
    );
    let multivariate_scores = windows.iter().map(|w| w.combined_score()).collect();
    let summary = summarize(&windows);

    Ok(ScanResult {
        windows,
        stats,
        correlation_map,
        threshold_used: opts.threshold,
        multivariate_scores,
        summary,
        wildcards,
    })
}

/// Column names of the tabular export, in order.
pub const CSV_FIELDS: [&str; 16] = [
    "Index",
    "Start",
    "End",
    "Sequence",
    "GC",
    "HBond_Per_Base",
    "Stacking_E",
    "dG_Per_Base",
    "Zx",
    "Zy",
    "Zz",
    "Bendability",
    "Tm_Celsius",
    "M_Distance",
    "Archetype",
    "AnomalyType",
];

pub fn csv_header() -> String {
    CSV_FIELDS.join(",")
}

/// One export row, without the trailing newline.
///
/// Feature scalars have 4 decimals, Tm has 2.
pub fn csv_row(w: &AnalysisWindow) -> String {
    let feat = w.features();
    let scalars = [
        feat.gc,
        feat.hb_per_base,
        feat.stack_per_base,
        feat.dg_per_base,
        feat.zx,
        feat.zy,
        feat.zz,
        feat.bendability,
    ];

    format!(
        "{},{},{},{},{},{:.2},{:.4},{},{}",
        w.index(),
        w.start(),
        w.end(),
        String::from_utf8_lossy(w.seq()),
        scalars.iter().map(|v| format!("{:.4}", v)).join(","),
        w.tm(),
        w.combined_score(),
        w.archetype,
        w.anomaly_type,
    )
}
