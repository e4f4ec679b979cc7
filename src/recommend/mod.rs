mod reasoning;

pub use reasoning::build_reasoning;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scoring::{
    calculate_score_with, score_breakdown, ScoreBreakdown, ScoringWeights, SupplierCriteria,
};
use crate::segment::{classify_scored, SegmentType};

/// How decisive the total score is: extremes are high, the middle is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Bands are checked in order and the first hit wins, so 80 and 20 are
    /// high even though they also fall inside the medium bands.
    pub fn from_score(total_score: f64) -> Self {
        if total_score >= 80.0 || total_score <= 20.0 {
            Confidence::High
        } else if total_score >= 65.0 || total_score <= 35.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score, segment and explanation for one supplier. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRecommendation {
    pub segment: SegmentType,
    pub total_score: f64,
    pub confidence: Confidence,
    pub reasoning: String,
    pub score_breakdown: ScoreBreakdown,
}

/// Build a recommendation with explicit weights.
pub fn recommend_with(
    criteria: &SupplierCriteria,
    weights: &ScoringWeights,
) -> SegmentRecommendation {
    let total_score = calculate_score_with(criteria, weights);
    let segment = classify_scored(criteria, total_score);
    let score_breakdown = score_breakdown(criteria, weights);

    SegmentRecommendation {
        segment,
        total_score,
        confidence: Confidence::from_score(total_score),
        reasoning: build_reasoning(segment, total_score, &score_breakdown),
        score_breakdown,
    }
}

/// Build a recommendation with the default weights.
pub fn recommend(criteria: &SupplierCriteria) -> SegmentRecommendation {
    recommend_with(criteria, &ScoringWeights::DEFAULT)
}
