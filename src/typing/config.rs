/// Shared construction contract for typing strategies.
///
/// Every typing strategy is built from the sample's expected depth model
/// and, when cross-sample contamination is suspected, the depths
/// attributed to the contaminant. Presence typing stores this state for
/// interface parity with sibling strategies (e.g. genotype-confidence
/// typing) but never reads it; it is opaque pass-through configuration
/// here.
#[derive(Debug, Clone, Default)]
pub struct TyperConfig {
    /// Expected per-sample read depths
    pub depths: Vec<f64>,

    /// Depths attributed to suspected cross-sample contamination
    pub contamination_depths: Vec<f64>,
}

impl TyperConfig {
    pub fn new(depths: Vec<f64>) -> Self {
        Self {
            depths,
            contamination_depths: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_contamination_depths(mut self, contamination_depths: Vec<f64>) -> Self {
        self.contamination_depths = contamination_depths;
        self
    }
}
