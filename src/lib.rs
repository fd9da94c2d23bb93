//! # mirseed
//!
//! Seed-region complementarity for miRanda alignment reports.
//!
//! For every alignment block of a caller-selected set of transcripts, this
//! crate counts how many miRNA seed bases (positions 2–8 from the 5′ end)
//! pair with the target as Watson–Crick (A–U, C–G) and as G–U wobble pairs.
//!
//! The work is split in two passes:
//! - [`RecordScanner`] walks the report and lazily yields [`AlignmentBlock`]s
//!   (header fields plus the raw `Query:` and `Ref:` lines).
//! - [`count_seed_pairs`] maps one `Query:`/`Ref:` pair to a [`SeedCount`].
//!
//! [`seed_report`] composes both and yields [`SeedHit`]s whose `Display` is
//! the report line.
//!
//! ### Example
//! ```
//! use mirseed::{parse_selected_transcripts, seed_report, SeedWindow};
//! let report = "\
//! Read Sequence:tx1 gene=geneA(500 nt)
//!    Forward:
//!    Query:    3' ACGUACGUAC 5'
//!    Ref:      5' UGCAUGCAUG 3'
//! ";
//! let selected = parse_selected_transcripts("tx1\n");
//! let hit = seed_report(report, &selected, SeedWindow::default()).unwrap().next().unwrap();
//! assert_eq!((hit.count.perfect, hit.count.wobble), (7, 0));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod common;
pub mod report;
pub mod scanner;
pub mod seed;

pub use common::{classify_pair, is_perfect_match, is_wobble_pair, parse_selected_transcripts, Pairing, SeedError};
pub use report::{seed_report, SeedHit, SeedReport};
pub use scanner::{AlignmentBlock, AlignmentBlocks, RecordHeader, RecordScanner, ScanStats};
pub use seed::{count_seed_pairs, count_seed_pairs_in, normalize_alignment_line, SeedCount, SeedWindow};
