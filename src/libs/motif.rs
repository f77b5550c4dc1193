//! Sequence motifs used by the archetype rules.
//!
//! Fixed motifs are written as position-class patterns: each position lists
//! the accepted bases, an empty class accepts any symbol.

use crate::libs::nt::rev_comp;

type Pattern = &'static [&'static [u8]];

const ANY: &[u8] = b"";

const TATA_BOX: Pattern = &[b"T", b"A", b"T", b"A", b"AT", b"A", b"AT"];
const PRIBNOW_BOX: Pattern = &[b"T", b"A", b"T", b"A", b"A", b"T"];
const MINUS_35_BOX: Pattern = &[b"T", b"T", b"G", b"A", b"C", b"A"];
const INITIATOR: Pattern = &[b"CT", b"CT", b"A", b"AT", b"CT", b"CT"];
const CTCF_CORE: Pattern = &[b"C", b"C", b"GC", ANY, b"GC", b"G", b"GC", b"G", b"G"];
const POLY_A: Pattern = &[b"A", b"A", b"A", b"A", b"A"];
const POLY_T: Pattern = &[b"T", b"T", b"T", b"T", b"T"];
const G_RUN: Pattern = &[b"G", b"G", b"G", b"G"];

/// Arm length of an inverted repeat
const ARM_LEN: usize = 5;
const MIN_SPACER: usize = 3;
const MAX_SPACER: usize = 12;

/// Does `pattern` occur anywhere in `seq`?
///
/// ```
/// use dnatopo::libs::motif::contains_pattern;
/// assert!(contains_pattern(b"GGTATAAAGG", &[b"T", b"A", b"T", b"A", b"AT"]));
/// assert!(contains_pattern(b"CCGAC", &[b"C", b"", b"G"]));
/// assert!(!contains_pattern(b"TA", &[b"T", b"A", b"T"]));
/// ```
pub fn contains_pattern(seq: &[u8], pattern: &[&[u8]]) -> bool {
    if pattern.is_empty() || pattern.len() > seq.len() {
        return false;
    }
    seq.windows(pattern.len()).any(|part| {
        part.iter()
            .zip(pattern.iter())
            .all(|(b, class)| class.is_empty() || class.contains(b))
    })
}

/// Inverted repeat: a 5-base arm whose reverse complement reappears after a
/// 3 to 12 base spacer.
///
/// ```
/// use dnatopo::libs::motif::has_cruciform;
/// // GAATC + spacer TTT + GATTC
/// assert!(has_cruciform(b"GAATCTTTGATTC"));
/// assert!(!has_cruciform(b"GAATCTTTGATTA"));
/// ```
pub fn has_cruciform(seq: &[u8]) -> bool {
    let len = seq.len();
    if len < 2 * ARM_LEN + MIN_SPACER {
        return false;
    }

    for i in 0..=len - (2 * ARM_LEN + MIN_SPACER) {
        let left = &seq[i..i + ARM_LEN];
        for spacer in MIN_SPACER..=MAX_SPACER {
            let j = i + ARM_LEN + spacer;
            if j + ARM_LEN > len {
                break;
            }
            if left == rev_comp(&seq[j..j + ARM_LEN]).as_slice() {
                return true;
            }
        }
    }
    false
}

fn has_tata_box(seq: &[u8]) -> bool {
    contains_pattern(seq, TATA_BOX) || contains_pattern(seq, PRIBNOW_BOX)
}

fn has_rigid_tract(seq: &[u8]) -> bool {
    contains_pattern(seq, POLY_A) || contains_pattern(seq, POLY_T)
}

/// Which archetype rule consults a motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotifClass {
    Anchor,
    Promoter,
    Quadruplex,
}

pub struct Motif {
    pub name: &'static str,
    pub class: MotifClass,
    pub predicate: fn(&[u8]) -> bool,
}

pub const MOTIFS: &[Motif] = &[
    Motif {
        name: "CTCF-like",
        class: MotifClass::Anchor,
        predicate: |seq| contains_pattern(seq, CTCF_CORE),
    },
    Motif {
        name: "cruciform",
        class: MotifClass::Anchor,
        predicate: has_cruciform,
    },
    Motif {
        name: "rigid poly(A/T)",
        class: MotifClass::Anchor,
        predicate: has_rigid_tract,
    },
    Motif {
        name: "TATA box",
        class: MotifClass::Promoter,
        predicate: has_tata_box,
    },
    Motif {
        name: "-35 box",
        class: MotifClass::Promoter,
        predicate: |seq| contains_pattern(seq, MINUS_35_BOX),
    },
    Motif {
        name: "initiator",
        class: MotifClass::Promoter,
        predicate: |seq| contains_pattern(seq, INITIATOR),
    },
    Motif {
        name: "G-run",
        class: MotifClass::Quadruplex,
        predicate: |seq| contains_pattern(seq, G_RUN),
    },
];

/// Does any motif of `class` occur in `seq`?
pub fn any_of_class(seq: &[u8], class: MotifClass) -> bool {
    MOTIFS
        .iter()
        .filter(|m| m.class == class)
        .any(|m| (m.predicate)(seq))
}

/// Names of every motif found in `seq`, in table order.
///
/// ```
/// use dnatopo::libs::motif::motif_hits;
/// assert_eq!(motif_hits(b"GCTTGACAGC"), vec!["-35 box"]);
/// ```
pub fn motif_hits(seq: &[u8]) -> Vec<&'static str> {
    MOTIFS
        .iter()
        .filter(|m| (m.predicate)(seq))
        .map(|m| m.name)
        .collect()
}
