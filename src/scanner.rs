//! Record scanner for miRanda alignment reports.
//!
//! A report is a sequence of records, each opened by a line starting with
//! `Read Sequence:<id>`. Inside a selected record, every line containing
//! `Forward:` or `Reverse:` opens an alignment block whose `Query:` and `Ref:`
//! lines are extracted verbatim (trimmed).
//!
//! ### Example
//! ```rust
//! use mirseed::{parse_selected_transcripts, RecordScanner};
//! let report = "Read Sequence:tx1 gene=geneA(500 nt)\n   Forward:\n   Query: 3' ACGU 5'\n\n   Ref:   5' UGCA 3'\n";
//! let selected = parse_selected_transcripts("tx1\n");
//! let scanner = RecordScanner::new(&selected).unwrap();
//! let blocks: Vec<_> = scanner.blocks(report).collect();
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].header.gene_name, "geneA");
//! assert_eq!(blocks[0].reference, "Ref:   5' UGCA 3'");
//! ```
//!
//! Records whose id is missing or not selected, and blocks without both a
//! `Query:` and a `Ref:` line before the next record (or end of input), are
//! skipped silently; [`ScanStats`] keeps track of how many.
//!
use std::collections::HashSet;
use log::debug;
use regex::Regex;
use crate::common::SeedError;

const RECORD_MARKER: &str = "Read Sequence:";

/// Header fields of one selected record, shared by all of its blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordHeader<'a> {
    /// Transcript id (token right after `Read Sequence:`).
    pub transcript: &'a str,
    /// Gene name from `gene=<name>(<length> nt)`, or empty.
    pub gene_name: &'a str,
    /// Gene length in nt from the same annotation, or empty.
    pub gene_length: &'a str,
}

/// One alignment block of a selected record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignmentBlock<'a> {
    pub header: RecordHeader<'a>,
    /// Trimmed `Query:` (miRNA) line.
    pub query: &'a str,
    /// Trimmed `Ref:` (target) line.
    pub reference: &'a str,
    /// 1‑based line number of the `Forward:`/`Reverse:` marker.
    pub line: usize,
}

/// Counters collected while scanning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// `Read Sequence:` lines seen.
    pub records: usize,
    /// Records whose transcript id is in the selection.
    pub selected: usize,
    /// Complete blocks yielded.
    pub blocks: usize,
    /// Blocks dropped for lack of a `Query:`/`Ref:` pair.
    pub incomplete: usize,
}

/// Compiled header patterns plus the transcript selection.
#[derive(Clone, Debug)]
pub struct RecordScanner<'s> {
    selected: &'s HashSet<String>,
    id_re: Regex,
    gene_re: Regex,
}

impl<'s> RecordScanner<'s> {
    pub fn new(selected: &'s HashSet<String>) -> Result<Self, SeedError> {
        Ok(Self {
            selected,
            id_re: Regex::new(r"Read Sequence:(\S+)")?,
            gene_re: Regex::new(r"gene=(\S+)\((\d+) nt\)")?,
        })
    }

    /// Lazily walk `report`, yielding blocks in input order.
    pub fn blocks<'a>(&self, report: &'a str) -> AlignmentBlocks<'a, 's> {
        AlignmentBlocks {
            scanner: self.clone(),
            lines: report.lines().collect(),
            pos: 0,
            current: None,
            stats: ScanStats::default(),
        }
    }

    /// Parse a `Read Sequence:` line; `None` if it has no id or is not selected.
    fn open_record<'a>(&self, line: &'a str) -> Option<RecordHeader<'a>> {
        let Some(caps) = self.id_re.captures(line) else {
            debug!("record header without transcript id: {line:?}");
            return None;
        };
        let transcript = caps.get(1)?.as_str();
        if !self.selected.contains(transcript) {
            return None;
        }
        let (gene_name, gene_length) = match self.gene_re.captures(line) {
            Some(g) => (
                g.get(1).map_or("", |m| m.as_str()),
                g.get(2).map_or("", |m| m.as_str()),
            ),
            None => ("", ""),
        };
        Some(RecordHeader { transcript, gene_name, gene_length })
    }
}

/// Single-pass iterator over the alignment blocks of selected records.
pub struct AlignmentBlocks<'a, 's> {
    scanner: RecordScanner<'s>,
    lines: Vec<&'a str>,
    pos: usize,
    current: Option<RecordHeader<'a>>,
    stats: ScanStats,
}

impl<'a, 's> AlignmentBlocks<'a, 's> {
    /// Counters so far; complete once the iterator is exhausted.
    pub fn stats(&self) -> ScanStats { self.stats }

    /// From `self.pos`, find the next line whose trimmed text starts with
    /// `marker`, without crossing into the next record. Leaves `pos` on the
    /// line after the match, or on the record boundary / end if not found.
    fn find_marker(&mut self, marker: &str) -> Option<&'a str> {
        while let Some(&line) = self.lines.get(self.pos) {
            if line.starts_with(RECORD_MARKER) {
                return None;
            }
            self.pos += 1;
            let t = line.trim();
            if t.starts_with(marker) {
                return Some(t);
            }
        }
        None
    }
}

impl<'a, 's> Iterator for AlignmentBlocks<'a, 's> {
    type Item = AlignmentBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = *self.lines.get(self.pos)?;
            if line.starts_with(RECORD_MARKER) {
                self.pos += 1;
                self.stats.records += 1;
                self.current = self.scanner.open_record(line);
                if self.current.is_some() { self.stats.selected += 1; }
                continue;
            }
            let Some(header) = self.current else {
                self.pos += 1;
                continue;
            };
            if !(line.contains("Forward:") || line.contains("Reverse:")) {
                self.pos += 1;
                continue;
            }
            // the marker line itself is the first Query: candidate
            let line_no = self.pos + 1;
            let pair = match self.find_marker("Query:") {
                Some(query) => self.find_marker("Ref:").map(|reference| (query, reference)),
                None => None,
            };
            match pair {
                Some((query, reference)) => {
                    self.stats.blocks += 1;
                    return Some(AlignmentBlock { header, query, reference, line: line_no });
                }
                None => {
                    debug!("dropping incomplete block for {} at line {}", header.transcript, line_no);
                    self.stats.incomplete += 1;
                    self.current = None;
                }
            }
        }
    }
}
