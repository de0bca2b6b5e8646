//! Parsers that build [`GeneCandidates`](crate::core::GeneCandidates)
//! from coverage summary files.
//!
//! Two formats are supported:
//!
//! - **JSON**: nested object, gene → version → stats record
//! - **TSV/CSV**: one row per candidate version with columns
//!   `gene, version, percent_coverage, median_depth`
//!
//! Both validate every stats record on the way in, so malformed coverage
//! values fail at the boundary rather than inside the typing engine.
//!
//! ## Example
//!
//! ```rust
//! use presence_typer::parsing::json::parse_json_text;
//!
//! let text = r#"{"mecA": {"allele-1": {"percent_coverage": 97.5, "median_depth": 42.0}}}"#;
//! let candidates = parse_json_text(text).unwrap();
//! assert_eq!(candidates["mecA"].len(), 1);
//! ```

use thiserror::Error;

use crate::core::stats::StatsError;

pub mod json;
pub mod tsv;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid stats for gene '{gene}' version '{version}': {source}")]
    InvalidStats {
        gene: String,
        version: String,
        source: StatsError,
    },

    #[error("Duplicate entry for gene '{gene}' version '{version}'")]
    DuplicateVersion { gene: String, version: String },
}
