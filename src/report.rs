//! Seed report: scanner and counter composed over a whole miRanda output.
//!
//! Every alignment block of a selected transcript becomes one [`SeedHit`],
//! whose `Display` form is the report line:
//!
//! ```text
//! Read Sequence:<id> gene=<name>(<length> nt) - Complementary nucleotides in Seed: <perfect> (Wobble pairings in Seed: <wobble>)
//! ```
//!
//! ### Example
//! ```rust
//! use mirseed::{parse_selected_transcripts, seed_report, SeedWindow};
//! let report = "Read Sequence:tx1 gene=geneA(500 nt)\nForward:\nQuery: 3' ACGUACGUAC 5'\nRef: 5' UGCAUGCAUG 3'\n";
//! let selected = parse_selected_transcripts("tx1");
//! let lines: Vec<String> = seed_report(report, &selected, SeedWindow::default())
//!     .unwrap()
//!     .map(|hit| hit.to_string())
//!     .collect();
//! assert_eq!(lines, vec![
//!     "Read Sequence:tx1 gene=geneA(500 nt) - Complementary nucleotides in Seed: 7 (Wobble pairings in Seed: 0)"
//! ]);
//! ```
//!
use std::collections::HashSet;
use std::fmt;
use crate::common::SeedError;
use crate::scanner::{AlignmentBlocks, RecordHeader, RecordScanner, ScanStats};
use crate::seed::{count_seed_pairs_in, SeedCount, SeedWindow};

/// Seed counts for one alignment block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedHit<'a> {
    pub header: RecordHeader<'a>,
    pub count: SeedCount,
}

impl fmt::Display for SeedHit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Read Sequence:{} gene={}({} nt) - Complementary nucleotides in Seed: {} (Wobble pairings in Seed: {})",
            self.header.transcript, self.header.gene_name, self.header.gene_length,
            self.count.perfect, self.count.wobble,
        )
    }
}

/// Lazy iterator of [`SeedHit`]s in input order.
pub struct SeedReport<'a> {
    blocks: AlignmentBlocks<'a, 'a>,
    window: SeedWindow,
}

impl<'a> SeedReport<'a> {
    /// Scan counters; complete once the iterator is exhausted.
    pub fn stats(&self) -> ScanStats { self.blocks.stats() }
}

impl<'a> Iterator for SeedReport<'a> {
    type Item = SeedHit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.blocks.next()?;
        Some(SeedHit {
            header: block.header,
            count: count_seed_pairs_in(block.query, block.reference, &self.window),
        })
    }
}

/// Compute seed counts for every block of every selected transcript in `report`.
pub fn seed_report<'a>(
    report: &'a str,
    selected: &'a HashSet<String>,
    window: SeedWindow,
) -> Result<SeedReport<'a>, SeedError> {
    let scanner = RecordScanner::new(selected)?;
    Ok(SeedReport { blocks: scanner.blocks(report), window })
}
