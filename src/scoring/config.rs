use serde::{Deserialize, Serialize};

use super::factors::Criterion;

/// Points available to each criterion.
///
/// The default table sums to 100. A config file may override it, in which
/// case [`crate::scoring::validate_weights`] must accept the result before
/// it is used.
///
/// Example YAML:
/// ```yaml
/// weights:
///   risk: 20
///   performance: 25
///   innovation: 15
///   criticality: 15
///   relationship: 10
///   market: 10
///   complexity: 5
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ScoringWeights {
    pub risk: f64,
    pub performance: f64,
    pub innovation: f64,
    pub criticality: f64,
    pub relationship: f64,
    pub market: f64,
    pub complexity: f64,
}

impl ScoringWeights {
    pub const DEFAULT: ScoringWeights = ScoringWeights {
        risk: 20.0,
        performance: 25.0,
        innovation: 15.0,
        criticality: 15.0,
        relationship: 10.0,
        market: 10.0,
        complexity: 5.0,
    };

    pub fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Risk => self.risk,
            Criterion::Performance => self.performance,
            Criterion::Innovation => self.innovation,
            Criterion::Criticality => self.criticality,
            Criterion::Relationship => self.relationship,
            Criterion::Market => self.market,
            Criterion::Complexity => self.complexity,
        }
    }

    pub fn total(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.weight(*c)).sum()
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
