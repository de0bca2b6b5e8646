use std::collections::BTreeMap;

use crate::core::stats::GeneVersionStats;

/// Gene candidates for one sample: gene name → version key → stats.
///
/// Built by the parsers in [`crate::parsing`] (or directly by library
/// callers) and consumed read-only by the typing engine. `BTreeMap` keeps
/// report output deterministic; the typing algorithm itself does not
/// depend on iteration order.
pub type GeneCandidates = BTreeMap<String, BTreeMap<String, GeneVersionStats>>;

/// Total number of candidate versions across all genes
pub fn version_count(candidates: &GeneCandidates) -> usize {
    candidates.values().map(BTreeMap::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_count() {
        let mut candidates = GeneCandidates::new();
        candidates
            .entry("mecA".to_string())
            .or_default()
            .insert("v1".to_string(), GeneVersionStats::new(95.0, 20.0));
        candidates
            .entry("mecA".to_string())
            .or_default()
            .insert("v2".to_string(), GeneVersionStats::new(88.0, 30.0));
        candidates
            .entry("blaZ".to_string())
            .or_default()
            .insert("v1".to_string(), GeneVersionStats::new(40.0, 5.0));

        assert_eq!(version_count(&candidates), 3);
    }
}
