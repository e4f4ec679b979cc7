use serde::{Deserialize, Serialize};

use crate::scoring::ScoringWeights;
use crate::supplier::SupplierRecord;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Overrides the default weights table when present
    #[serde(default)]
    pub weights: Option<ScoringWeights>,

    #[serde(default)]
    pub suppliers: Vec<SupplierRecord>,
}

impl Config {
    /// Weights to score with: the configured table, or the default one
    pub fn effective_weights(&self) -> ScoringWeights {
        self.weights.unwrap_or_default()
    }
}
