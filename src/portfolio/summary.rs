use serde::Serialize;

use super::{EvaluatedSupplier, Portfolio};
use crate::scoring::round_to_tenth;
use crate::segment::SegmentType;
use crate::supplier::RiskLevel;

/// Per-segment totals. Averages and risk level are `None` for an empty segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentCount {
    pub segment: SegmentType,
    pub count: usize,
    pub total_spend: f64,
    pub avg_risk_score: Option<f64>,
    pub avg_performance: Option<f64>,
    /// Banding of the average risk score
    pub risk_level: Option<RiskLevel>,
}

impl SegmentCount {
    fn from_members(segment: SegmentType, members: &[&EvaluatedSupplier]) -> Self {
        // Band the unrounded mean so 3.96 stays low
        let mean_risk = mean(members.iter().map(|s| s.criteria.risk_score));
        Self {
            segment,
            count: members.len(),
            total_spend: members.iter().filter_map(|s| s.record.annual_spend).sum(),
            avg_risk_score: mean_risk.map(round_to_tenth),
            avg_performance: average(members.iter().map(|s| s.criteria.performance_score)),
            risk_level: mean_risk.map(RiskLevel::from_score),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskCount {
    pub level: RiskLevel,
    pub count: usize,
}

/// Aggregate metrics over the evaluated suppliers of a portfolio.
///
/// Averages are `None` when nothing was evaluated. Spend only sums
/// suppliers that report one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_suppliers: usize,
    pub rejected_suppliers: usize,
    pub total_spend: f64,
    pub avg_risk_score: Option<f64>,
    pub avg_performance: Option<f64>,
    pub avg_total_score: Option<f64>,
    pub drifted_suppliers: usize,
    /// One entry per segment, in catalog order
    pub segments: Vec<SegmentCount>,
    pub risk_levels: Vec<RiskCount>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Mean rounded to one decimal
fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    mean(values).map(round_to_tenth)
}

impl PortfolioSummary {
    pub fn from_portfolio(portfolio: &Portfolio) -> Self {
        let evaluated = &portfolio.evaluated;

        let segments = SegmentType::ALL
            .iter()
            .map(|segment| {
                let members: Vec<&EvaluatedSupplier> = evaluated
                    .iter()
                    .filter(|s| s.recommendation.segment == *segment)
                    .collect();
                SegmentCount::from_members(*segment, &members)
            })
            .collect();

        let risk_levels = RiskLevel::ALL
            .iter()
            .map(|level| RiskCount {
                level: *level,
                count: evaluated
                    .iter()
                    .filter(|s| RiskLevel::from_score(s.criteria.risk_score) == *level)
                    .count(),
            })
            .collect();

        Self {
            total_suppliers: evaluated.len(),
            rejected_suppliers: portfolio.rejected.len(),
            total_spend: evaluated.iter().filter_map(|s| s.record.annual_spend).sum(),
            avg_risk_score: average(evaluated.iter().map(|s| s.criteria.risk_score)),
            avg_performance: average(evaluated.iter().map(|s| s.criteria.performance_score)),
            avg_total_score: average(evaluated.iter().map(|s| s.recommendation.total_score)),
            drifted_suppliers: evaluated.iter().filter(|s| s.drifted()).count(),
            segments,
            risk_levels,
        }
    }

    pub fn segment(&self, segment: SegmentType) -> Option<&SegmentCount> {
        self.segments.iter().find(|c| c.segment == segment)
    }

    pub fn count(&self, segment: SegmentType) -> usize {
        self.segment(segment).map(|c| c.count).unwrap_or(0)
    }
}
