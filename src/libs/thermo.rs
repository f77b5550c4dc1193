//! Salt-corrected nearest-neighbor thermodynamics.

/// Lower bound applied to salt concentrations before taking a logarithm
const MIN_SALT: f64 = 1e-5;

/// Ionic conditions of a scan, in molar units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    /// Monovalent cation (Na+)
    pub salt: f64,
    /// Divalent cation (Mg2+)
    pub mg: f64,
}

impl Default for Conditions {
    fn default() -> Self {
        Conditions {
            salt: 0.1,
            mg: 0.0015,
        }
    }
}

impl Conditions {
    /// Monovalent-equivalent concentration: `salt + 120 * sqrt(mg)`.
    ///
    /// ```
    /// use dnatopo::libs::thermo::Conditions;
    /// let cond = Conditions { salt: 0.1, mg: 0.0 };
    /// assert_eq!(cond.effective_salt(), 0.1);
    /// let cond = Conditions { salt: 0.1, mg: -1.0 };
    /// assert_eq!(cond.effective_salt(), 0.1);
    /// ```
    pub fn effective_salt(&self) -> f64 {
        self.salt + 120.0 * self.mg.max(0.0).sqrt()
    }
}

/// Free energy in kcal/mol from enthalpy (kcal/mol) and entropy (cal/mol K).
pub fn free_energy(dh_sum: f64, ds_sum: f64, t_kelvin: f64) -> f64 {
    (dh_sum * 1000.0 - t_kelvin * ds_sum) / 1000.0
}

/// Salt correction of a duplex with `n_pairs` stacked pairs.
pub fn salt_correction(n_pairs: usize, effective_salt: f64, k_salt: f64) -> f64 {
    n_pairs as f64 * 0.114 * k_salt * effective_salt.max(MIN_SALT).ln()
}

/// Empirical melting temperature in Celsius.
///
/// ```
/// use dnatopo::libs::thermo::melting_temp;
/// let tm = melting_temp(0.5, 0.1);
/// assert!((tm - 48.3).abs() < 1e-9);
/// ```
pub fn melting_temp(gc: f64, effective_salt: f64) -> f64 {
    64.9 + 41.0 * (gc - 0.5) + 16.6 * effective_salt.max(MIN_SALT).log10()
}
