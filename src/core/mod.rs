//! Core data types for gene presence typing.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`GeneVersionStats`]: Coverage and depth summary for one candidate
//!   version (allele/variant sequence) of a gene
//! - [`GeneCandidates`]: The per-sample input collection, gene name →
//!   version key → stats
//!
//! ## Versions
//!
//! A gene may have been aligned against several candidate sequence
//! versions, each producing its own coverage/depth outcome. Versions are
//! identified by opaque keys (e.g. allele ids); typing only needs the
//! association between a gene and its candidate stats.

pub mod candidates;
pub mod stats;

pub use candidates::GeneCandidates;
pub use stats::{GeneVersionStats, StatsError};
