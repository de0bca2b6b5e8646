//! Typing strategies that turn coverage evidence into calls.
//!
//! This module provides the presence/absence strategy:
//!
//! - [`GenePresenceTyper`]: Main entry point, typing a whole sample
//! - [`TyperConfig`]: Construction contract shared by typing strategies
//! - [`TypingOutcome`]: Present genes plus per-gene errors
//!
//! ## Selection Algorithm
//!
//! For each gene, independently:
//!
//! 1. Order the candidate versions by `percent_coverage`, descending
//! 2. Among versions tied (exact equality) for the top coverage, pick the
//!    one with the highest `median_depth`; ties on both keys keep the
//!    first encountered
//! 3. Report the gene as present iff the selected version's coverage is
//!    strictly above the threshold (30% by default)
//!
//! A gene with no candidate versions is a precondition violation reported
//! per gene; it never aborts typing of the rest of the sample.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use presence_typer::core::GeneVersionStats;
//! use presence_typer::typing::{GenePresenceTyper, TyperConfig};
//!
//! let mut genes = BTreeMap::new();
//! let mut versions = BTreeMap::new();
//! versions.insert("allele-1".to_string(), GeneVersionStats::new(97.5, 42.0));
//! versions.insert("allele-2".to_string(), GeneVersionStats::new(97.5, 11.0));
//! genes.insert("mecA".to_string(), versions);
//!
//! let typer = GenePresenceTyper::new(TyperConfig::new(vec![80.0]));
//! let outcome = typer.type_genes(&genes);
//!
//! assert_eq!(outcome.present["mecA"].version, "allele-1");
//! ```

pub mod config;
pub mod presence;

pub use config::TyperConfig;
pub use presence::{
    select_best_version, GenePresenceTyper, PresenceCall, TypingError, TypingOutcome,
    DEFAULT_MIN_COVERAGE,
};
