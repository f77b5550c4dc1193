//! Nucleotide alphabet: A, C, G, T and M (5-methylcytosine).
//!
//! Anything else is folded into the wildcard `N`, which every lookup table
//! resolves to the row of `A`.

/// Symbol substituted for characters outside the alphabet
pub const WILDCARD: u8 = b'N';

/// Base order of every lookup table
pub const BASES: [u8; 5] = [b'A', b'C', b'G', b'T', b'M'];

/// Table row of a base; unknown symbols share the row of `A`.
///
/// ```
/// use dnatopo::libs::nt::base_index;
/// assert_eq!(base_index(b'A'), 0);
/// assert_eq!(base_index(b'M'), 4);
/// assert_eq!(base_index(b'N'), 0);
/// ```
pub fn base_index(b: u8) -> usize {
    match b {
        b'A' => 0,
        b'C' => 1,
        b'G' => 2,
        b'T' => 3,
        b'M' => 4,
        _ => 0,
    }
}

pub fn is_valid(b: u8) -> bool {
    BASES.contains(&b)
}

/// Upper-cases the input and replaces every character outside the alphabet with `N`.
///
/// Returns the normalized sequence and the number of replaced characters.
///
/// ```
/// use dnatopo::libs::nt::normalize;
/// let (seq, replaced) = normalize(b"acgtm-x");
/// assert_eq!(seq, b"ACGTMNN".to_vec());
/// assert_eq!(replaced, 2);
/// ```
pub fn normalize(seq: &[u8]) -> (Vec<u8>, usize) {
    let mut replaced = 0;
    let out = seq
        .iter()
        .map(|b| {
            let up = b.to_ascii_uppercase();
            if is_valid(up) {
                up
            } else {
                replaced += 1;
                WILDCARD
            }
        })
        .collect();
    (out, replaced)
}

/// Only A and G; C, T, M and the wildcard are not purines here
pub fn is_purine(b: u8) -> bool {
    b == b'A' || b == b'G'
}

/// Strong (3 H-bond) bases: C, G and M
pub fn is_gc(b: u8) -> bool {
    matches!(b, b'C' | b'G' | b'M')
}

/// Watson-Crick partner; M pairs with G. Other symbols map to themselves.
pub fn complement(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'M' => b'G',
        _ => b,
    }
}

pub fn rev_comp(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}
