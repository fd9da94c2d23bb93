//! Common helpers shared by the scanner and the seed counter: the crate error
//! type, nucleotide pair classification, and parsing of the selected
//! transcript list.
//!
//! ## Pairing
//! The [`Pairing`] enum describes how a miRNA base pairs with a target base.
//! Classification is case-insensitive and treats `T` as `U`, so DNA and RNA
//! alphabets can be mixed freely.
//!
//! ## Examples
//! ```rust
//! use mirseed::{classify_pair, Pairing, parse_selected_transcripts};
//! assert_eq!(classify_pair('a', 'T'), Pairing::WatsonCrick);
//! assert_eq!(classify_pair('G', 'u'), Pairing::Wobble);
//! let sel = parse_selected_transcripts("tx1\n\n  tx2 \ntx1\n");
//! assert_eq!(sel.len(), 2);
//! ```
//!
use std::collections::HashSet;

/// Errors that can be returned by the library.
#[derive(thiserror::Error, Debug)]
pub enum SeedError {
    /// Returned if the seed window starts at 0 or `start` > `end`.
    #[error("invalid seed window: start={start}, end={end}")]
    InvalidWindow { start: usize, end: usize },
    /// Returned if a report header pattern fails to compile.
    #[error("invalid report pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// How a miRNA base pairs with the aligned target base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pairing {
    /// Canonical A–U or C–G pair (either order).
    WatsonCrick,
    /// G–U wobble pair (either order).
    Wobble,
    /// Anything else, including unknown symbols.
    Mismatch,
}

/// Fold a nucleotide to uppercase RNA (`T` becomes `U`).
fn fold_base(c: char) -> char {
    match c.to_ascii_uppercase() {
        'T' => 'U',
        other => other,
    }
}

/// Classify the pair `(a, b)`. The result does not depend on argument order.
pub fn classify_pair(a: char, b: char) -> Pairing {
    match (fold_base(a), fold_base(b)) {
        ('A','U') | ('U','A') | ('C','G') | ('G','C') => Pairing::WatsonCrick,
        ('G','U') | ('U','G') => Pairing::Wobble,
        _ => Pairing::Mismatch,
    }
}

/// `true` if `a` and `b` form a Watson–Crick pair.
pub fn is_perfect_match(a: char, b: char) -> bool {
    classify_pair(a, b) == Pairing::WatsonCrick
}

/// `true` if `a` and `b` form a G–U wobble pair.
pub fn is_wobble_pair(a: char, b: char) -> bool {
    classify_pair(a, b) == Pairing::Wobble
}

/// Parse a selected-transcripts list: one identifier per line, surrounding
/// whitespace trimmed, blank lines skipped. Duplicates collapse.
pub fn parse_selected_transcripts(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASES: [char; 10] = ['A','C','G','U','T','a','c','g','u','t'];

    #[test]
    fn classification_is_symmetric() {
        for &x in &BASES {
            for &y in &BASES {
                assert_eq!(is_perfect_match(x, y), is_perfect_match(y, x), "{x}{y}");
                assert_eq!(is_wobble_pair(x, y), is_wobble_pair(y, x), "{x}{y}");
            }
        }
    }

    #[test]
    fn dna_and_case_fold_to_rna() {
        assert_eq!(classify_pair('A', 't'), Pairing::WatsonCrick);
        assert_eq!(classify_pair('c', 'G'), Pairing::WatsonCrick);
        assert_eq!(classify_pair('T', 'g'), Pairing::Wobble);
        assert_eq!(classify_pair('A', 'A'), Pairing::Mismatch);
        assert_eq!(classify_pair('G', 'A'), Pairing::Mismatch);
        assert_eq!(classify_pair('N', 'U'), Pairing::Mismatch);
        assert_eq!(classify_pair('-', 'U'), Pairing::Mismatch);
    }

    #[test]
    fn selection_trims_and_dedups() {
        let sel = parse_selected_transcripts("  ENST1\n\nENST2\r\n\t\nENST1\n");
        assert_eq!(sel.len(), 2);
        assert!(sel.contains("ENST1"));
        assert!(sel.contains("ENST2"));
        assert!(parse_selected_transcripts("").is_empty());
    }
}
