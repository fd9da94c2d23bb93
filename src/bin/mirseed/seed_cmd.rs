//! CLI for `mirseed` (seed complementarity per alignment block).
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Args;
use log::info;
use mirseed::*;

/// Options for the seed count.
#[derive(Debug, Args)]
pub struct SeedCmd {
    /// miRanda output file (`-` reads stdin).
    #[arg(value_name="MIRANDA_OUTPUT")]
    pub miranda_output: PathBuf,
    /// Selected transcript ids, one per line.
    #[arg(value_name="SELECTED_TRANSCRIPTS")]
    pub selected_transcripts: PathBuf,
    /// First miRNA position of the seed window (1-based, inclusive).
    #[arg(long, default_value_t=2)]
    pub seed_start: usize,
    /// Last miRNA position of the seed window (inclusive).
    #[arg(long, default_value_t=8)]
    pub seed_end: usize,
    /// Also write the counts as a TSV table.
    #[arg(long, value_name="FILE")]
    pub tsv: Option<PathBuf>,
}

pub fn run(cmd: SeedCmd) -> Result<()> {
    let window = SeedWindow::new(cmd.seed_start, cmd.seed_end)?;

    let selected_text = std::fs::read_to_string(&cmd.selected_transcripts)
        .with_context(|| format!("open selected transcripts: {}", cmd.selected_transcripts.display()))?;
    let selected = parse_selected_transcripts(&selected_text);
    info!("Loaded {} selected transcripts", selected.len());

    let mut text = String::new();
    if cmd.miranda_output.as_os_str() == "-" {
        io::stdin().read_to_string(&mut text).context("read miRanda output from stdin")?;
    } else {
        File::open(&cmd.miranda_output)
            .with_context(|| format!("open miRanda output: {}", cmd.miranda_output.display()))?
            .read_to_string(&mut text)
            .with_context(|| format!("read miRanda output: {}", cmd.miranda_output.display()))?;
    }

    let mut tsv = match &cmd.tsv {
        Some(p) => {
            let mut w = csv::WriterBuilder::new().delimiter(b'\t').from_path(p)
                .with_context(|| format!("create {}", p.display()))?;
            w.write_record(["transcript","gene","gene_length","perfect","wobble"])?;
            Some(w)
        }
        None => None,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut report = seed_report(&text, &selected, window)?;
    for hit in report.by_ref() {
        writeln!(out, "{}", hit)?;
        if let Some(w) = tsv.as_mut() {
            let (perfect, wobble) = (hit.count.perfect.to_string(), hit.count.wobble.to_string());
            w.write_record([
                hit.header.transcript,
                hit.header.gene_name,
                hit.header.gene_length,
                perfect.as_str(),
                wobble.as_str(),
            ])?;
        }
    }
    out.flush()?;
    if let Some(mut w) = tsv { w.flush()?; }

    let stats = report.stats();
    info!(
        "Scanned {} records ({} selected): {} blocks reported, {} incomplete blocks skipped",
        stats.records, stats.selected, stats.blocks, stats.incomplete,
    );
    Ok(())
}
