use std::path::PathBuf;

use clap::Args;

use crate::cli::{display_input, parse_input, InputFormat, OutputFormat};
use crate::core::candidates::{version_count, GeneCandidates};
use crate::typing::{GenePresenceTyper, TyperConfig, TypingOutcome, DEFAULT_MIN_COVERAGE};

#[derive(Args)]
pub struct CallArgs {
    /// Input coverage summary (JSON, TSV, or CSV)
    /// Use '-' for stdin (expects JSON)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (auto-detected by default)
    #[arg(long)]
    pub input_format: Option<InputFormat>,

    /// Minimum percent coverage for a present call (strict comparison)
    #[arg(long, default_value_t = DEFAULT_MIN_COVERAGE)]
    pub min_coverage: f64,

    /// Expected sample depth(s), passed through to the typer configuration
    #[arg(long = "depth")]
    pub depths: Vec<f64>,

    /// Suspected contamination depth(s), passed through to the typer
    /// configuration
    #[arg(long = "contamination-depth")]
    pub contamination_depths: Vec<f64>,
}

/// Execute call subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed. Per-gene typing errors
/// are reported on stderr without failing the whole sample.
pub fn run(args: &CallArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let candidates = parse_input(&args.input, args.input_format)?;

    if verbose {
        eprintln!(
            "Parsed {} genes ({} candidate versions) from {}",
            candidates.len(),
            version_count(&candidates),
            display_input(&args.input),
        );
    }

    let config =
        TyperConfig::new(args.depths.clone()).with_contamination_depths(args.contamination_depths.clone());
    let typer = GenePresenceTyper::new(config).with_min_coverage(args.min_coverage);

    let outcome = typer.type_genes(&candidates);

    for error in &outcome.errors {
        eprintln!("Warning: {error}");
    }

    match format {
        OutputFormat::Text => print_text_results(&outcome, &candidates, args.min_coverage),
        OutputFormat::Json => print_json_results(&outcome, args.min_coverage)?,
        OutputFormat::Tsv => print_tsv_results(&outcome),
    }

    Ok(())
}

fn print_text_results(outcome: &TypingOutcome, candidates: &GeneCandidates, min_coverage: f64) {
    println!(
        "{} of {} genes called present (coverage > {min_coverage}%)",
        outcome.present.len(),
        candidates.len(),
    );

    if outcome.present.is_empty() {
        return;
    }

    let gene_width = outcome
        .present
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(4)
        .max(4);

    println!();
    for (gene, call) in &outcome.present {
        println!(
            "{gene:<gene_width$}  {}  coverage {:.1}%  median depth {}",
            call.version, call.stats.percent_coverage, call.stats.median_depth,
        );
    }
}

fn print_json_results(outcome: &TypingOutcome, min_coverage: f64) -> anyhow::Result<()> {
    let present: serde_json::Map<String, serde_json::Value> = outcome
        .present
        .iter()
        .map(|(gene, call)| {
            (
                gene.clone(),
                serde_json::json!({
                    "version": call.version,
                    "percent_coverage": call.stats.percent_coverage,
                    "median_depth": call.stats.median_depth,
                }),
            )
        })
        .collect();

    let output = serde_json::json!({
        "min_coverage": min_coverage,
        "present": present,
        "errors": outcome
            .errors
            .iter()
            .map(std::string::ToString::to_string)
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(outcome: &TypingOutcome) {
    println!("gene\tversion\tpercent_coverage\tmedian_depth");
    for (gene, call) in &outcome.present {
        println!(
            "{gene}\t{}\t{:.4}\t{:.4}",
            call.version, call.stats.percent_coverage, call.stats.median_depth,
        );
    }
}
