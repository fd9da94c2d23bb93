//! End-to-end tests for the `mirseed` binary.
//! Inputs are written to a temp directory and the built binary is run on them.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const REPORT: &str = "\
Read Sequence:tx1 gene=geneA(500 nt)
Performing Scan: hsa-miR-1 vs tx1
   Forward:\tScore: 150.000000  Q:2 to 10  R:100 to 110
   Query:    3' ACGUACGUAC 5'
                ||||||||||
   Ref:      5' UGCAUGCAUG 3'
Read Sequence:tx2 gene=geneB(42 nt)
   Reverse:\tScore: 120.000000
   Query:    3' ACGUACGUAC 5'
Read Sequence:tx3 gene=geneC(77 nt)
   Forward:
   Query:    3' ACGUACGUAC 5'
   Ref:      5' UGCAUGUAUG 3'
";

fn mirseed() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mirseed"))
}

fn write_inputs(dir: &Path, selected: &str) -> (PathBuf, PathBuf) {
    let report = dir.join("miranda.out");
    let sel = dir.join("selected.txt");
    fs::write(&report, REPORT).unwrap();
    fs::write(&sel, selected).unwrap();
    (report, sel)
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout).lines().map(str::to_string).collect()
}

#[test]
fn reports_selected_blocks_in_order() -> std::io::Result<()> {
    let tmp = TempDir::new()?;
    let (report, sel) = write_inputs(tmp.path(), "tx1\n\n tx2 \ntx3\ntx1\n");
    let out = mirseed().arg(&report).arg(&sel).output()?;
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout_lines(&out), vec![
        "Read Sequence:tx1 gene=geneA(500 nt) - Complementary nucleotides in Seed: 7 (Wobble pairings in Seed: 0)",
        "Read Sequence:tx3 gene=geneC(77 nt) - Complementary nucleotides in Seed: 6 (Wobble pairings in Seed: 1)",
    ]);
    Ok(())
}

#[test]
fn unselected_transcripts_produce_no_output() -> std::io::Result<()> {
    let tmp = TempDir::new()?;
    let (report, sel) = write_inputs(tmp.path(), "txZ\n");
    let out = mirseed().arg(&report).arg(&sel).output()?;
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    Ok(())
}

#[test]
fn missing_report_is_fatal() -> std::io::Result<()> {
    let tmp = TempDir::new()?;
    let (_, sel) = write_inputs(tmp.path(), "tx1\n");
    let out = mirseed().arg(tmp.path().join("nope.out")).arg(&sel).output()?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("open miRanda output"));
    Ok(())
}

#[test]
fn writes_tsv_table() -> std::io::Result<()> {
    let tmp = TempDir::new()?;
    let (report, sel) = write_inputs(tmp.path(), "tx1\ntx3\n");
    let tsv = tmp.path().join("seed.tsv");
    let out = mirseed().arg(&report).arg(&sel).arg("--tsv").arg(&tsv).output()?;
    assert!(out.status.success());
    let table = fs::read_to_string(&tsv)?;
    let rows: Vec<&str> = table.lines().collect();
    assert_eq!(rows, vec![
        "transcript\tgene\tgene_length\tperfect\twobble",
        "tx1\tgeneA\t500\t7\t0",
        "tx3\tgeneC\t77\t6\t1",
    ]);
    Ok(())
}

#[test]
fn custom_seed_window() -> std::io::Result<()> {
    let tmp = TempDir::new()?;
    let (report, sel) = write_inputs(tmp.path(), "tx1\n");
    let out = mirseed().arg(&report).arg(&sel).args(["--seed-start", "1", "--seed-end", "8"]).output()?;
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), vec![
        "Read Sequence:tx1 gene=geneA(500 nt) - Complementary nucleotides in Seed: 8 (Wobble pairings in Seed: 0)",
    ]);

    let bad = mirseed().arg(&report).arg(&sel).args(["--seed-start", "9"]).output()?;
    assert!(!bad.status.success());
    assert!(String::from_utf8_lossy(&bad.stderr).contains("invalid seed window"));
    Ok(())
}

#[test]
fn reads_report_from_stdin() -> std::io::Result<()> {
    let tmp = TempDir::new()?;
    let (_, sel) = write_inputs(tmp.path(), "tx3\n");
    let mut child = mirseed()
        .arg("-")
        .arg(&sel)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child.stdin.take().unwrap().write_all(REPORT.as_bytes())?;
    let out = child.wait_with_output()?;
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out).len(), 1);
    Ok(())
}
