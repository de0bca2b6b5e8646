use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures for a single stats record
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("percent_coverage {0} is outside [0, 100]")]
    CoverageOutOfRange(f64),

    #[error("median_depth {0} is negative")]
    NegativeDepth(f64),

    #[error("{0} is not a number")]
    NotANumber(&'static str),
}

/// Coverage/depth summary for one candidate version of a gene.
///
/// Built upstream from alignment results; the typing engine reads these
/// values but never mutates them. A version is identified within its gene
/// by an opaque version key held in the surrounding collection, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneVersionStats {
    /// Fraction of the reference gene length covered by aligned reads,
    /// expressed as a percentage in [0, 100]
    pub percent_coverage: f64,

    /// Median per-base read depth across covered positions
    pub median_depth: f64,
}

impl GeneVersionStats {
    pub fn new(percent_coverage: f64, median_depth: f64) -> Self {
        Self {
            percent_coverage,
            median_depth,
        }
    }

    /// Check that both fields are well-formed.
    ///
    /// The typing engine itself assumes well-formed inputs; parsers call
    /// this so malformed files fail at the boundary instead of producing
    /// silent nonsense downstream. NaN comparisons are undefined past
    /// this point.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::NotANumber` if either field is NaN,
    /// `StatsError::CoverageOutOfRange` if coverage is outside [0, 100],
    /// or `StatsError::NegativeDepth` if depth is below zero.
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.percent_coverage.is_nan() {
            return Err(StatsError::NotANumber("percent_coverage"));
        }
        if self.median_depth.is_nan() {
            return Err(StatsError::NotANumber("median_depth"));
        }
        if !(0.0..=100.0).contains(&self.percent_coverage) {
            return Err(StatsError::CoverageOutOfRange(self.percent_coverage));
        }
        if self.median_depth < 0.0 {
            return Err(StatsError::NegativeDepth(self.median_depth));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(GeneVersionStats::new(0.0, 0.0).validate().is_ok());
        assert!(GeneVersionStats::new(100.0, 0.0).validate().is_ok());
        assert!(GeneVersionStats::new(52.5, 18.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_coverage() {
        assert!(GeneVersionStats::new(100.1, 10.0).validate().is_err());
        assert!(GeneVersionStats::new(-0.5, 10.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_depth() {
        assert!(GeneVersionStats::new(50.0, -1.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(GeneVersionStats::new(f64::NAN, 10.0).validate().is_err());
        assert!(GeneVersionStats::new(50.0, f64::NAN).validate().is_err());
    }
}
