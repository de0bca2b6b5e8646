//! # presence-typer
//!
//! A library for calling gene presence from aligned-read coverage
//! statistics.
//!
//! In panel-based sequencing analysis (e.g. antimicrobial-resistance
//! prediction), reads are aligned against several candidate versions of
//! each gene — different alleles or variant sequences — and each
//! candidate comes back with a percent coverage and a median depth.
//! Deciding which genes to report as present means picking one
//! representative version per gene and holding it to a coverage
//! threshold.
//!
//! `presence-typer` implements that decision deterministically: the
//! version with the highest coverage wins, exact coverage ties go to the
//! higher median depth, and a gene is reported present only when its
//! selected version covers strictly more than 30% of the reference by
//! default.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use presence_typer::{GenePresenceTyper, GeneVersionStats, TyperConfig};
//!
//! let mut versions = BTreeMap::new();
//! versions.insert("allele-1".to_string(), GeneVersionStats::new(97.5, 42.0));
//! versions.insert("allele-2".to_string(), GeneVersionStats::new(97.5, 11.0));
//!
//! let mut genes = BTreeMap::new();
//! genes.insert("mecA".to_string(), versions);
//!
//! let typer = GenePresenceTyper::new(TyperConfig::default());
//! let outcome = typer.type_genes(&genes);
//!
//! assert_eq!(outcome.present["mecA"].version, "allele-1");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Data types for gene version stats and candidate collections
//! - [`typing`]: The presence typing engine and its configuration
//! - [`parsing`]: Parsers for JSON and TSV/CSV coverage summaries
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod typing;

// Re-export commonly used types for convenience
pub use crate::core::candidates::GeneCandidates;
pub use crate::core::stats::GeneVersionStats;
pub use typing::{GenePresenceTyper, PresenceCall, TyperConfig, TypingError, TypingOutcome};
