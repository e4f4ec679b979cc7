use crate::scoring::ScoreBreakdown;
use crate::segment::SegmentType;

const HIGH_PERFORMANCE_POINTS: f64 = 20.0;
const LOW_PERFORMANCE_POINTS: f64 = 10.0;
const LOW_RISK_POINTS: f64 = 16.0;
const HIGH_RISK_POINTS: f64 = 8.0;
const HIGH_INNOVATION_POINTS: f64 = 12.0;
const STRATEGIC_IMPORTANCE_POINTS: f64 = 12.0;
const STRONG_PARTNERSHIP_POINTS: f64 = 8.0;

/// Key-factor clauses drawn from the rounded breakdown, in fixed order.
/// The relationship clause is always present.
fn key_factors(breakdown: &ScoreBreakdown) -> Vec<&'static str> {
    let mut factors = Vec::new();

    if breakdown.performance >= HIGH_PERFORMANCE_POINTS {
        factors.push("High Performance");
    } else if breakdown.performance <= LOW_PERFORMANCE_POINTS {
        factors.push("Low Performance");
    }

    if breakdown.risk >= LOW_RISK_POINTS {
        factors.push("Low Risk");
    } else if breakdown.risk <= HIGH_RISK_POINTS {
        factors.push("High Risk");
    }

    if breakdown.innovation >= HIGH_INNOVATION_POINTS {
        factors.push("High Innovation");
    }

    if breakdown.criticality >= STRATEGIC_IMPORTANCE_POINTS {
        factors.push("Strategic Importance");
    }

    if breakdown.relationship >= STRONG_PARTNERSHIP_POINTS {
        factors.push("Strong Partnership");
    } else {
        factors.push("Transactional Relationship");
    }

    factors
}

/// One-sentence explanation of a recommendation.
pub fn build_reasoning(
    segment: SegmentType,
    total_score: f64,
    breakdown: &ScoreBreakdown,
) -> String {
    let text = format!(
        "Assigned to {} based on total score of {}/100. Key factors: {}",
        segment.label(),
        total_score,
        key_factors(breakdown).join(", ")
    );
    // Never end on a dangling separator
    text.trim_end_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string()
}
