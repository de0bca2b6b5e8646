use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::candidates::GeneCandidates;
use crate::core::stats::GeneVersionStats;
use crate::typing::config::TyperConfig;

/// Default minimum percent coverage for a gene to be called present.
///
/// The comparison is strict: a selected version at exactly this coverage
/// is not reported.
pub const DEFAULT_MIN_COVERAGE: f64 = 30.0;

/// Per-gene typing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    #[error("gene '{gene}' has no candidate versions")]
    NoVersions { gene: String },
}

impl TypingError {
    /// The gene the error applies to
    pub fn gene(&self) -> &str {
        match self {
            Self::NoVersions { gene } => gene,
        }
    }
}

/// A gene called present, with the version selected to represent it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresenceCall {
    /// Version key of the selected candidate
    pub version: String,

    /// The selected candidate's stats, exactly one of the input values
    pub stats: GeneVersionStats,
}

/// Result of typing one sample.
///
/// A gene with an empty version map is a precondition violation; it is
/// reported in `errors` rather than aborting typing of the other genes,
/// so callers can aggregate both.
#[derive(Debug, Clone, Default)]
pub struct TypingOutcome {
    /// Genes confidently present, keyed by gene name
    pub present: BTreeMap<String, PresenceCall>,

    /// Per-gene failures, in gene-name order
    pub errors: Vec<TypingError>,
}

/// Presence/absence typing from coverage evidence.
///
/// For each gene, selects a single representative version among the
/// candidates (highest coverage, ties broken by higher median depth) and
/// reports the gene as present iff the selection clears the coverage
/// threshold.
#[derive(Debug, Clone)]
pub struct GenePresenceTyper {
    config: TyperConfig,
    min_coverage: f64,
}

impl GenePresenceTyper {
    /// Create a typer with the default coverage threshold
    pub fn new(config: TyperConfig) -> Self {
        Self {
            config,
            min_coverage: DEFAULT_MIN_COVERAGE,
        }
    }

    /// Override the coverage threshold (still a strict comparison)
    #[must_use]
    pub fn with_min_coverage(mut self, min_coverage: f64) -> Self {
        self.min_coverage = min_coverage;
        self
    }

    /// The shared base-typer configuration this strategy was built with
    pub fn config(&self) -> &TyperConfig {
        &self.config
    }

    pub fn min_coverage(&self) -> f64 {
        self.min_coverage
    }

    /// Type every gene in the sample independently.
    ///
    /// The input is read-only; calling this twice on the same candidates
    /// yields identical outcomes.
    pub fn type_genes(&self, genes: &GeneCandidates) -> TypingOutcome {
        debug!(
            genes = genes.len(),
            depths = self.config.depths.len(),
            contamination_depths = self.config.contamination_depths.len(),
            min_coverage = self.min_coverage,
            "typing gene presence"
        );

        let mut outcome = TypingOutcome::default();
        for (gene, versions) in genes {
            let Some((version, stats)) = select_best_version(versions) else {
                outcome.errors.push(TypingError::NoVersions { gene: gene.clone() });
                continue;
            };
            if stats.percent_coverage > self.min_coverage {
                outcome.present.insert(
                    gene.clone(),
                    PresenceCall {
                        version: version.to_string(),
                        stats: *stats,
                    },
                );
            }
        }
        outcome
    }
}

/// Select the representative version for one gene, or `None` when there
/// are no candidates.
///
/// Sorts a copied sequence of candidates by coverage descending (the
/// caller's map is never mutated), then scans the ties at the top: among
/// versions whose coverage exactly equals the maximum, the one with the
/// strictly highest median depth wins; ties on both keys keep the first
/// encountered. The scan stops at the first strict coverage decrease,
/// since nothing past it can beat the maximum on the primary key.
///
/// Tie detection uses exact floating-point equality, matching how
/// upstream produces these values; near-equal coverages from rounding
/// noise are not treated as ties.
pub fn select_best_version(
    versions: &BTreeMap<String, GeneVersionStats>,
) -> Option<(&str, &GeneVersionStats)> {
    let mut ordered: Vec<(&str, &GeneVersionStats)> = versions
        .iter()
        .map(|(key, stats)| (key.as_str(), stats))
        .collect();
    ordered.sort_by(|a, b| {
        b.1.percent_coverage
            .partial_cmp(&a.1.percent_coverage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let (mut best_key, mut best) = *ordered.first()?;
    for &(key, stats) in &ordered[1..] {
        if stats.percent_coverage < best.percent_coverage {
            break;
        }
        if stats.median_depth > best.median_depth {
            best_key = key;
            best = stats;
        }
    }
    Some((best_key, best))
}
