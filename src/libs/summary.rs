use crate::libs::archetype::Archetype;
use crate::libs::scan::AnalysisWindow;

/// Archetype counts and mean melting temperature of one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BiologicalSummary {
    pub promoter_potential: usize,
    /// Mechanical anchors, G-quadruplexes and triplexes
    pub structural_anchors: usize,
    pub z_dna_sites: usize,
    pub avg_tm: f64,
}

pub fn summarize(windows: &[AnalysisWindow]) -> BiologicalSummary {
    let count = |pred: &dyn Fn(&Archetype) -> bool| {
        windows.iter().filter(|w| pred(&w.archetype)).count()
    };

    let avg_tm = if windows.is_empty() {
        0.0
    } else {
        windows.iter().map(|w| w.tm()).sum::<f64>() / windows.len() as f64
    };

    BiologicalSummary {
        promoter_potential: count(&|a| *a == Archetype::PutativePromoter),
        structural_anchors: count(&|a| a.is_structural_anchor()),
        z_dna_sites: count(&|a| *a == Archetype::ZDnaCandidate),
        avg_tm,
    }
}
