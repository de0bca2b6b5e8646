//! Command-line interface for presence-typer.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **call**: Type a sample's coverage summary and report present genes
//! - **rank**: Show every candidate version per gene in selection order
//!
//! ## Usage
//!
//! ```text
//! # Call present genes from a JSON coverage summary
//! presence-typer call sample.json
//!
//! # Pipe JSON from an upstream coverage step
//! coverage-summarize sample.bam | presence-typer call -
//!
//! # TSV input, JSON output for scripting
//! presence-typer call sample.tsv --format json
//!
//! # Inspect how versions were ranked for each gene
//! presence-typer rank sample.json
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::candidates::GeneCandidates;
use crate::parsing;

pub mod call;
pub mod rank;

#[derive(Parser)]
#[command(name = "presence-typer")]
#[command(version)]
#[command(about = "Call gene presence from aligned-read coverage statistics")]
#[command(
    long_about = "presence-typer decides which genes (e.g. antimicrobial-resistance genes) are confidently present in a sequenced sample.\n\nFor each gene it selects a single representative version from the candidate alleles (highest coverage, ties broken by higher median depth) and reports the gene as present when the selection clears the coverage threshold."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Call which genes are present in a sample
    Call(call::CallArgs),

    /// Rank the candidate versions of each gene
    Rank(rank::RankArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum InputFormat {
    Json,
    Tsv,
    Csv,
}

/// Read gene candidates from a file or stdin (`-`, JSON only)
pub(crate) fn parse_input(
    input: &Path,
    input_format: Option<InputFormat>,
) -> anyhow::Result<GeneCandidates> {
    use std::io::Read;

    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(parsing::json::parse_json_text(&buffer)?);
    }

    let format = input_format.unwrap_or_else(|| detect_format(input));

    match format {
        InputFormat::Json => Ok(parsing::json::parse_json_file(input)?),
        InputFormat::Tsv => Ok(parsing::tsv::parse_tsv_file(input, '\t')?),
        InputFormat::Csv => Ok(parsing::tsv::parse_tsv_file(input, ',')?),
    }
}

/// Detect input format from file extension
fn detect_format(path: &Path) -> InputFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("tsv") | Some("tab") | Some("txt") => InputFormat::Tsv,
        Some("csv") => InputFormat::Csv,
        _ => InputFormat::Json, // Default to JSON for unknown extensions
    }
}

/// Resolve a possibly relative input path for error messages
pub(crate) fn display_input(input: &PathBuf) -> String {
    input.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert!(matches!(
            detect_format(Path::new("sample.tsv")),
            InputFormat::Tsv
        ));
        assert!(matches!(
            detect_format(Path::new("sample.csv")),
            InputFormat::Csv
        ));
        assert!(matches!(
            detect_format(Path::new("sample.json")),
            InputFormat::Json
        ));
        assert!(matches!(detect_format(Path::new("sample")), InputFormat::Json));
    }
}
