//! Command-line interface for the `mirseed` crate.
//!
//! The seed command lives in `src/bin/mirseed/seed_cmd.rs`; this file only
//! parses arguments and sets up logging.
//!
use clap::Parser;
use anyhow::Result;

#[derive(Debug, Parser)]
#[command(name="mirseed", version=env!("CARGO_PKG_VERSION"), about="Count complementary and wobble pairs in the miRNA seed region of miRanda alignments")]
struct Cli {
    #[command(flatten)]
    seed: seed_cmd::SeedCmd,
    /// Verbosity level (0 = error, 1 = info, 2 = debug). Repeat -v to raise it.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[path = "mirseed/seed_cmd.rs"] mod seed_cmd;

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();
    seed_cmd::run(cli.seed)
}
