//! Biological archetype assignment.
//!
//! Like anomaly typing, the rule list is ordered and the first hit wins. A
//! window matching none of the rules is `Unknown Anomaly` when it was flagged
//! anomalous, `Stable Helix` otherwise.

use crate::libs::motif::{any_of_class, MotifClass};
use crate::libs::stats::ScoredWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    PutativePromoter,
    ZDnaCandidate,
    GQuadruplex,
    FlexibleLinker,
    MechanicalAnchor,
    TriplexPotential,
    UnknownAnomaly,
    StableHelix,
}

impl Archetype {
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::PutativePromoter => "Putative Promoter",
            Archetype::ZDnaCandidate => "Z-DNA Candidate",
            Archetype::GQuadruplex => "G-Quadruplex",
            Archetype::FlexibleLinker => "Flexible Linker",
            Archetype::MechanicalAnchor => "Mechanical Anchor",
            Archetype::TriplexPotential => "Triplex Potential",
            Archetype::UnknownAnomaly => "Unknown Anomaly",
            Archetype::StableHelix => "Stable Helix",
        }
    }

    /// Mechanical anchors, G-quadruplexes and triplexes
    pub fn is_structural_anchor(&self) -> bool {
        matches!(
            self,
            Archetype::MechanicalAnchor | Archetype::GQuadruplex | Archetype::TriplexPotential
        )
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

const MIN_TRIPLEX_LEN: usize = 12;

/// Z-DNA propensity: alternation boosted by high GC and by Mg2+.
pub fn z_dna_likelihood(alternation: f64, gc: f64, mg: f64) -> f64 {
    let gc_boost = if gc > 0.6 { 1.2 } else { 1.0 };
    let mg_boost = if mg > 0.001 { 1.5 } else { 1.0 };
    alternation * gc_boost * mg_boost
}

/// Homopurine or homopyrimidine tract; M fits either strand class.
pub fn is_triplex_tract(seq: &[u8]) -> bool {
    let purine_only = seq.iter().all(|b| matches!(b, b'A' | b'G' | b'M'));
    let pyrimidine_only = seq.iter().all(|b| matches!(b, b'C' | b'T' | b'M'));
    seq.len() >= MIN_TRIPLEX_LEN && (purine_only || pyrimidine_only)
}

/// A test against a scored window and the Mg2+ concentration (M).
pub struct ArchetypeRule {
    pub archetype: Archetype,
    pub test: fn(&ScoredWindow, f64) -> bool,
}

pub const ARCHETYPE_RULES: &[ArchetypeRule] = &[
    ArchetypeRule {
        archetype: Archetype::ZDnaCandidate,
        test: |w, mg| {
            let feat = &w.featured.features;
            z_dna_likelihood(feat.purine_pyrimidine_alt, feat.gc, mg) > 0.88
        },
    },
    ArchetypeRule {
        archetype: Archetype::TriplexPotential,
        test: |w, _| is_triplex_tract(&w.featured.window.seq),
    },
    ArchetypeRule {
        archetype: Archetype::MechanicalAnchor,
        test: |w, _| {
            any_of_class(&w.featured.window.seq, MotifClass::Anchor)
                || (w.z_scores.stack_per_base < -2.1 && w.featured.features.bendability < 0.08)
        },
    },
    ArchetypeRule {
        archetype: Archetype::PutativePromoter,
        test: |w, _| {
            any_of_class(&w.featured.window.seq, MotifClass::Promoter)
                || (w.z_scores.dg_per_base < -2.3 && w.featured.features.bendability > 0.38)
        },
    },
    ArchetypeRule {
        archetype: Archetype::GQuadruplex,
        test: |w, _| {
            any_of_class(&w.featured.window.seq, MotifClass::Quadruplex)
                && w.featured.features.gc > 0.75
        },
    },
    ArchetypeRule {
        archetype: Archetype::FlexibleLinker,
        test: |w, _| w.featured.features.bendability > 0.48 && w.z_scores.dg_per_base.abs() < 1.0,
    },
];

pub fn classify_archetype(w: &ScoredWindow, is_anomalous: bool, mg: f64) -> Archetype {
    ARCHETYPE_RULES
        .iter()
        .find(|rule| (rule.test)(w, mg))
        .map(|rule| rule.archetype)
        .unwrap_or(if is_anomalous {
            Archetype::UnknownAnomaly
        } else {
            Archetype::StableHelix
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::features::{extract, BiophysicalFeatures, FeaturedWindow};
    use crate::libs::model::NnModel;
    use crate::libs::thermo::Conditions;
    use crate::libs::window::Window;

    // z-scores default to 0 so only sequence-driven rules fire
    fn window(seq: &[u8], z_scores: BiophysicalFeatures) -> ScoredWindow {
        let features = extract(seq, &NnModel::default(), &Conditions::default());
        ScoredWindow {
            featured: FeaturedWindow {
                window: Window {
                    index: 0,
                    start: 0,
                    end: seq.len(),
                    seq: seq.to_vec(),
                },
                features,
                tm: 50.0,
            },
            z_scores,
            combined_score: 0.0,
            contributions: vec![],
        }
    }

    fn classify(seq: &[u8]) -> Archetype {
        classify_archetype(&window(seq, Default::default()), false, 0.0)
    }

    #[test]
    fn test_rule_order() {
        let order: Vec<_> = ARCHETYPE_RULES.iter().map(|r| r.archetype).collect();
        assert_eq!(
            order,
            vec![
                Archetype::ZDnaCandidate,
                Archetype::TriplexPotential,
                Archetype::MechanicalAnchor,
                Archetype::PutativePromoter,
                Archetype::GQuadruplex,
                Archetype::FlexibleLinker,
            ]
        );
    }

    #[test]
    fn test_triplex() {
        assert_eq!(classify(b"AGAGAGAGAGAG"), Archetype::TriplexPotential);
        assert_eq!(classify(b"CTTCMCTTCCTC"), Archetype::TriplexPotential);
        assert!(is_triplex_tract(b"MMMMMMMMMMMM"));
        assert!(!is_triplex_tract(b"AGAGAGAGAGA"));
        assert!(!is_triplex_tract(b"AGAGAGAGAGAC"));
    }

    #[test]
    fn test_z_dna_beats_triplex() {
        // perfect GC alternation
        assert_eq!(classify(b"GCGCGCGCGCGCGCG"), Archetype::ZDnaCandidate);
        // Mg2+ lifts a moderate alternation over the bar
        let w = window(b"ACGTTACCGATG", Default::default());
        let alt = w.featured.features.purine_pyrimidine_alt;
        assert!(alt * 1.5 > 0.88 && alt <= 0.88);
        assert_eq!(classify_archetype(&w, false, 0.0015), Archetype::ZDnaCandidate);
        assert_ne!(classify_archetype(&w, false, 0.0), Archetype::ZDnaCandidate);
    }

    #[test]
    fn test_anchor_paths() {
        // cruciform: GAATC ... GATTC
        assert_eq!(classify(b"GAATCGCCGATTC"), Archetype::MechanicalAnchor);
        assert_eq!(classify(b"GCAAAAAGC"), Archetype::MechanicalAnchor);
        // rigid by statistics alone
        let z = BiophysicalFeatures {
            stack_per_base: -2.5,
            ..Default::default()
        };
        let w = window(b"AACAACAACAA", z);
        assert!(w.featured.features.bendability < 0.08);
        assert_eq!(classify_archetype(&w, false, 0.0), Archetype::MechanicalAnchor);
    }

    #[test]
    fn test_promoter_and_quadruplex() {
        assert_eq!(classify(b"GCTTGACAGC"), Archetype::PutativePromoter);
        assert_eq!(classify(b"GGGGCGGGCCGC"), Archetype::GQuadruplex);
        // G-run with low GC is not a quadruplex
        assert_eq!(classify(b"GGGGACTACTTGAC"), Archetype::StableHelix);
    }

    #[test]
    fn test_fallbacks() {
        let w = window(b"GGACTTGAC", Default::default());
        assert_eq!(classify_archetype(&w, false, 0.0), Archetype::StableHelix);
        assert_eq!(classify_archetype(&w, true, 0.0), Archetype::UnknownAnomaly);
    }
}
