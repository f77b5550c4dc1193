//! Nearest-neighbor model constants.
//!
//! All tables are indexed by [`base_index`](crate::libs::nt::base_index)
//! in the order A, C, G, T, M. Dinucleotide tables are row = current base,
//! column = next base.

pub const T_KELVIN: f64 = 310.15;
pub const K_SALT: f64 = 0.368;
pub const EPS: f64 = 1e-12;

/// Lookup tables of the structural and thermodynamic model.
///
/// The engine only ever reads a model; concurrent analyses can share one.
#[derive(Debug, Clone, PartialEq)]
pub struct NnModel {
    /// Hydrogen bonds per base
    pub hbond: [f64; 5],
    /// Electronic topology vector per base
    pub z_vec: [[f64; 3]; 5],
    /// Stacking energy, kcal/mol
    pub stack: [[f64; 5]; 5],
    /// Bendability index (Gabrielian & Bolshoy); higher is more flexible
    pub bend: [[f64; 5]; 5],
    /// Enthalpy, kcal/mol
    pub delta_h: [[f64; 5]; 5],
    /// Entropy, cal/(mol K)
    pub delta_s: [[f64; 5]; 5],
    pub t_kelvin: f64,
    pub k_salt: f64,
}

impl Default for NnModel {
    fn default() -> Self {
        NnModel {
            hbond: [2.0, 3.0, 3.0, 2.0, 3.1],
            z_vec: [
                [1.0, 1.0, 1.0],
                [-1.0, 1.0, -1.0],
                [1.0, -1.0, -1.0],
                [-1.0, -1.0, 1.0],
                [-1.1, 1.2, -0.9],
            ],
            //     A      C      G      T      M
            stack: [
                [-1.00, -1.44, -1.28, -0.88, -1.50],
                [-1.07, -2.17, -2.24, -1.44, -2.30],
                [-1.30, -2.24, -2.36, -1.28, -2.40],
                [-0.93, -1.45, -1.30, -1.00, -1.55],
                [-1.10, -2.20, -2.30, -1.50, -2.50],
            ],
            bend: [
                [0.01, 0.20, 0.10, 0.20, 0.15],
                [-0.10, 0.10, 0.50, 0.10, 0.30],
                [0.10, 0.30, 0.10, 0.10, 0.25],
                [0.05, 0.10, 0.10, 0.01, 0.10],
                [-0.05, 0.20, 0.40, 0.15, 0.20],
            ],
            delta_h: [
                [-7.9, -8.4, -7.8, -7.2, -8.6],
                [-8.5, -8.0, -10.6, -8.9, -8.8],
                [-8.2, -10.6, -12.2, -8.0, -11.5],
                [-7.2, -8.2, -8.5, -7.9, -8.5],
                [-8.7, -9.0, -11.0, -8.8, -9.5],
            ],
            delta_s: [
                [-22.2, -22.4, -21.0, -20.4, -22.8],
                [-22.7, -19.9, -27.2, -24.0, -21.0],
                [-22.2, -27.2, -29.7, -19.9, -28.5],
                [-20.4, -21.0, -22.7, -22.2, -22.0],
                [-23.0, -21.5, -28.0, -23.0, -23.0],
            ],
            t_kelvin: T_KELVIN,
            k_salt: K_SALT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::nt::base_index;

    #[test]
    fn test_default_tables() {
        let m = NnModel::default();
        assert_eq!(m.hbond[base_index(b'M')], 3.1);
        assert_eq!(m.stack[base_index(b'G')][base_index(b'C')], -2.24);
        assert_eq!(m.bend[base_index(b'C')][base_index(b'G')], 0.50);
        assert_eq!(m.delta_h[base_index(b'G')][base_index(b'G')], -12.2);
        assert_eq!(m.delta_s[base_index(b'M')][base_index(b'G')], -28.0);
        assert_eq!(m.z_vec[base_index(b'M')], [-1.1, 1.2, -0.9]);
        assert_eq!(m.t_kelvin, 310.15);
    }
}
