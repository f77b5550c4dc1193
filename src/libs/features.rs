//! Per-window biophysical descriptors.

use crate::libs::model::NnModel;
use crate::libs::nt::{base_index, is_gc, is_purine};
use crate::libs::thermo::{free_energy, melting_temp, salt_correction, Conditions};
use crate::libs::window::Window;

/// The nine scalar channels computed for every window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Gc,
    HbPerBase,
    StackPerBase,
    DgPerBase,
    Zx,
    Zy,
    Zz,
    Bendability,
    PurinePyrimidineAlt,
}

impl Feature {
    pub const ALL: [Feature; 9] = [
        Feature::Gc,
        Feature::HbPerBase,
        Feature::StackPerBase,
        Feature::DgPerBase,
        Feature::Zx,
        Feature::Zy,
        Feature::Zz,
        Feature::Bendability,
        Feature::PurinePyrimidineAlt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::Gc => "gc",
            Feature::HbPerBase => "hb_per_base",
            Feature::StackPerBase => "stack_per_base",
            Feature::DgPerBase => "dG_per_base",
            Feature::Zx => "zx",
            Feature::Zy => "zy",
            Feature::Zz => "zz",
            Feature::Bendability => "bendability",
            Feature::PurinePyrimidineAlt => "purine_pyrimidine_alt",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One value per [`Feature`]. Also used for z-scores, means, deviations and deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BiophysicalFeatures {
    pub gc: f64,
    pub hb_per_base: f64,
    pub stack_per_base: f64,
    pub dg_per_base: f64,
    pub zx: f64,
    pub zy: f64,
    pub zz: f64,
    pub bendability: f64,
    pub purine_pyrimidine_alt: f64,
}

impl BiophysicalFeatures {
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Gc => self.gc,
            Feature::HbPerBase => self.hb_per_base,
            Feature::StackPerBase => self.stack_per_base,
            Feature::DgPerBase => self.dg_per_base,
            Feature::Zx => self.zx,
            Feature::Zy => self.zy,
            Feature::Zz => self.zz,
            Feature::Bendability => self.bendability,
            Feature::PurinePyrimidineAlt => self.purine_pyrimidine_alt,
        }
    }

    /// Builds a record by evaluating `f` once per feature.
    pub fn from_fn<F: FnMut(Feature) -> f64>(mut f: F) -> Self {
        BiophysicalFeatures {
            gc: f(Feature::Gc),
            hb_per_base: f(Feature::HbPerBase),
            stack_per_base: f(Feature::StackPerBase),
            dg_per_base: f(Feature::DgPerBase),
            zx: f(Feature::Zx),
            zy: f(Feature::Zy),
            zz: f(Feature::Zz),
            bendability: f(Feature::Bendability),
            purine_pyrimidine_alt: f(Feature::PurinePyrimidineAlt),
        }
    }

    /// Per-feature `self - other`.
    pub fn sub(&self, other: &BiophysicalFeatures) -> BiophysicalFeatures {
        Self::from_fn(|f| self.get(f) - other.get(f))
    }

    pub fn values(&self) -> [f64; 9] {
        Feature::ALL.map(|f| self.get(f))
    }
}

/// Computes the nine descriptors of one window sequence.
///
/// Per-base channels are averaged over `n` bases, dinucleotide channels over
/// `max(n - 1, 1)` pairs.
///
/// ```
/// use dnatopo::libs::features::extract;
/// use dnatopo::libs::model::NnModel;
/// use dnatopo::libs::thermo::Conditions;
/// let feat = extract(b"GCGCGC", &NnModel::default(), &Conditions::default());
/// assert_eq!(feat.gc, 1.0);
/// assert_eq!(feat.hb_per_base, 3.0);
/// assert_eq!(feat.purine_pyrimidine_alt, 1.0);
/// ```
pub fn extract(seq: &[u8], model: &NnModel, cond: &Conditions) -> BiophysicalFeatures {
    let len = seq.len();

    let mut gc_count = 0usize;
    let mut hb_sum = 0.0;
    let mut z_sum = [0.0f64; 3];
    let mut stack_sum = 0.0;
    let mut bend_sum = 0.0;
    let mut dh_sum = 0.0;
    let mut ds_sum = 0.0;
    let mut alt_count = 0usize;

    for (i, &b) in seq.iter().enumerate() {
        let id = base_index(b);
        if is_gc(b) {
            gc_count += 1;
        }
        hb_sum += model.hbond[id];
        for (acc, v) in z_sum.iter_mut().zip(model.z_vec[id].iter()) {
            *acc += v;
        }

        if let Some(&next) = seq.get(i + 1) {
            let next_id = base_index(next);
            stack_sum += model.stack[id][next_id];
            bend_sum += model.bend[id][next_id];
            dh_sum += model.delta_h[id][next_id];
            ds_sum += model.delta_s[id][next_id];

            if is_purine(b) != is_purine(next) {
                alt_count += 1;
            }
        }
    }

    let n = len.max(1) as f64;
    let n_pairs = len.saturating_sub(1).max(1);
    let np = n_pairs as f64;

    let dg_raw = free_energy(dh_sum, ds_sum, model.t_kelvin);
    let dg_corr = dg_raw - salt_correction(n_pairs, cond.effective_salt(), model.k_salt);

    BiophysicalFeatures {
        gc: gc_count as f64 / n,
        hb_per_base: hb_sum / n,
        stack_per_base: stack_sum / np,
        dg_per_base: dg_corr / np,
        zx: z_sum[0] / n,
        zy: z_sum[1] / n,
        zz: z_sum[2] / n,
        bendability: bend_sum / np,
        purine_pyrimidine_alt: alt_count as f64 / np,
    }
}

/// A window with its descriptors and melting temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedWindow {
    pub window: Window,
    pub features: BiophysicalFeatures,
    /// Melting temperature, Celsius
    pub tm: f64,
}

pub fn featurize(window: Window, model: &NnModel, cond: &Conditions) -> FeaturedWindow {
    let features = extract(&window.seq, model, cond);
    let tm = melting_temp(features.gc, cond.effective_salt());
    FeaturedWindow {
        window,
        features,
        tm,
    }
}
