use std::path::PathBuf;

use clap::Args;

use crate::cli::{display_input, parse_input, InputFormat, OutputFormat};
use crate::core::stats::GeneVersionStats;
use crate::typing::select_best_version;

#[derive(Args)]
pub struct RankArgs {
    /// Input coverage summary (JSON, TSV, or CSV)
    /// Use '-' for stdin (expects JSON)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (auto-detected by default)
    #[arg(long)]
    pub input_format: Option<InputFormat>,
}

struct RankedVersion<'a> {
    gene: &'a str,
    version: &'a str,
    stats: &'a GeneVersionStats,
    selected: bool,
}

/// Execute rank subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed.
pub fn run(args: &RankArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let candidates = parse_input(&args.input, args.input_format)?;

    if verbose {
        eprintln!(
            "Parsed {} genes from {}",
            candidates.len(),
            display_input(&args.input),
        );
    }

    let mut rows: Vec<RankedVersion<'_>> = Vec::new();
    for (gene, versions) in &candidates {
        let Some((best_key, _)) = select_best_version(versions) else {
            eprintln!("Warning: gene '{gene}' has no candidate versions");
            continue;
        };

        let mut ordered: Vec<(&str, &GeneVersionStats)> = versions
            .iter()
            .map(|(key, stats)| (key.as_str(), stats))
            .collect();
        // Display order: coverage descending, depth breaking ties, the
        // same ordering selection walks
        ordered.sort_by(|a, b| {
            b.1.percent_coverage
                .partial_cmp(&a.1.percent_coverage)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(
                    b.1.median_depth
                        .partial_cmp(&a.1.median_depth)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
        });

        for (version, stats) in ordered {
            rows.push(RankedVersion {
                gene: gene.as_str(),
                version,
                stats,
                selected: version == best_key,
            });
        }
    }

    match format {
        OutputFormat::Text => print_text_results(&rows),
        OutputFormat::Json => print_json_results(&rows)?,
        OutputFormat::Tsv => print_tsv_results(&rows),
    }

    Ok(())
}

fn print_text_results(rows: &[RankedVersion<'_>]) {
    let mut previous_gene = "";
    for row in rows {
        if row.gene != previous_gene {
            if !previous_gene.is_empty() {
                println!();
            }
            println!("{}:", row.gene);
            previous_gene = row.gene;
        }
        let marker = if row.selected { "*" } else { " " };
        println!(
            " {marker} {}  coverage {:.1}%  median depth {}",
            row.version, row.stats.percent_coverage, row.stats.median_depth,
        );
    }
}

fn print_json_results(rows: &[RankedVersion<'_>]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "gene": row.gene,
                "version": row.version,
                "percent_coverage": row.stats.percent_coverage,
                "median_depth": row.stats.median_depth,
                "selected": row.selected,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(rows: &[RankedVersion<'_>]) {
    println!("gene\tversion\tpercent_coverage\tmedian_depth\tselected");
    for row in rows {
        println!(
            "{}\t{}\t{:.4}\t{:.4}\t{}",
            row.gene, row.version, row.stats.percent_coverage, row.stats.median_depth, row.selected,
        );
    }
}
