//! Seed-region complementarity between a miRNA and its target.
//!
//! Takes the `Query:` (miRNA) and `Ref:` (target) lines of one alignment
//! block, normalizes both, and counts Watson–Crick and wobble pairs over the
//! miRNA seed window (positions 2–8 by default, 1‑based from the 5′ end).
//!
//! ### Example
//! ```rust
//! use mirseed::count_seed_pairs;
//! let c = count_seed_pairs("Query: 3' ACGUACGUAC 5'", "Ref: 5' UGCAUGCAUG 3'");
//! assert_eq!((c.perfect, c.wobble), (7, 0));
//! ```
//!
//! ---
//! ## Details
//! - **Normalization:** the `Query:`/`Ref:` label and `5'`/`3'` markers are
//!   removed, then the line is reversed so index 0 is the miRNA 5′ end.
//! - **Padding:** a space in either line only advances that line's cursor.
//! - **Gaps:** a `-` in the miRNA does not consume a position. Inside the
//!   window, a column with a gap on either side is skipped (both cursors move).
//! - **Positions:** only the miRNA drives the window; target gaps and padding
//!   never shift it.
//!
use crate::common::{classify_pair, Pairing, SeedError};

const GAP: char = '-';
const PAD: char = ' ';

/// Inclusive range of miRNA positions (1‑based) that make up the seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedWindow {
    start: usize,
    end: usize,
}

impl SeedWindow {
    /// Build a window over positions `start..=end`.
    pub fn new(start: usize, end: usize) -> Result<Self, SeedError> {
        if start == 0 || start > end {
            return Err(SeedError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize { self.start }
    pub fn end(&self) -> usize { self.end }

    /// `true` if miRNA position `pos` falls in the window.
    pub fn contains(&self, pos: usize) -> bool {
        (self.start..=self.end).contains(&pos)
    }
}

impl Default for SeedWindow {
    fn default() -> Self { Self { start: 2, end: 8 } }
}

/// Pair counts over the seed window of one alignment block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedCount {
    /// Watson–Crick pairs (A–U, C–G).
    pub perfect: usize,
    /// G–U wobble pairs.
    pub wobble: usize,
}

/// Strip a leading `Query:`/`Ref:` label and any `5'`/`3'` orientation
/// markers from one alignment line, then reverse it.
///
/// Interior spaces and gaps are kept; they are handled by the counter.
pub fn normalize_alignment_line(line: &str) -> Vec<char> {
    let line = line.trim();
    let body = line.strip_prefix("Query:")
        .or_else(|| line.strip_prefix("Ref:"))
        .unwrap_or(line)
        .trim();
    let body = match body.strip_prefix("5'").or_else(|| body.strip_prefix("3'")) {
        Some(rest) => rest.trim_start(),
        None => body,
    };
    let body = match body.strip_suffix("5'").or_else(|| body.strip_suffix("3'")) {
        Some(rest) => rest.trim_end(),
        None => body,
    };
    body.chars().rev().collect()
}

/// Count seed pairs over the default window (positions 2–8).
pub fn count_seed_pairs(query_line: &str, ref_line: &str) -> SeedCount {
    count_seed_pairs_in(query_line, ref_line, &SeedWindow::default())
}

/// Count seed pairs between a `Query:` line and a `Ref:` line over `window`.
pub fn count_seed_pairs_in(query_line: &str, ref_line: &str, window: &SeedWindow) -> SeedCount {
    let query = normalize_alignment_line(query_line);
    let target = normalize_alignment_line(ref_line);
    let mut count = SeedCount::default();
    let (mut i, mut j) = (0usize, 0usize);
    let mut mirna_pos = 0usize;

    while i < query.len() && j < target.len() {
        let q = query[i];
        let r = target[j];
        // padding moves one cursor only
        if q == PAD { i += 1; continue; }
        if r == PAD { j += 1; continue; }

        if q != GAP { mirna_pos += 1; }
        if window.contains(mirna_pos) && q != GAP && r != GAP {
            match classify_pair(q, r) {
                Pairing::WatsonCrick => count.perfect += 1,
                Pairing::Wobble => count.wobble += 1,
                Pairing::Mismatch => {}
            }
        }
        i += 1;
        j += 1;
    }
    count
}
