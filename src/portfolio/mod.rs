mod filter;
mod summary;

pub use filter::{filter_suppliers, SupplierFilter};
pub use summary::{PortfolioSummary, RiskCount, SegmentCount};

use std::cmp::Ordering;
use tracing::{debug, warn};

use crate::error::CriteriaError;
use crate::recommend::{recommend_with, SegmentRecommendation};
use crate::scoring::{ScoringWeights, SupplierCriteria};
use crate::segment::matched_rule;
use crate::supplier::SupplierRecord;

/// A supplier that passed validation, with its recommendation
#[derive(Debug, Clone)]
pub struct EvaluatedSupplier {
    /// 1-based position in the full ranking
    pub rank: usize,
    pub record: SupplierRecord,
    pub criteria: SupplierCriteria,
    pub recommendation: SegmentRecommendation,
}

impl EvaluatedSupplier {
    /// The stored segment disagrees with the computed one
    pub fn drifted(&self) -> bool {
        self.record
            .segment_type
            .is_some_and(|stored| stored != self.recommendation.segment)
    }
}

/// A supplier that failed validation
#[derive(Debug, Clone)]
pub struct RejectedSupplier {
    pub name: String,
    pub errors: Vec<CriteriaError>,
}

/// Evaluation of a whole supplier list.
///
/// `evaluated` is ranked: total score descending, ties by name ascending.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub evaluated: Vec<EvaluatedSupplier>,
    pub rejected: Vec<RejectedSupplier>,
}

impl Portfolio {
    pub fn is_empty(&self) -> bool {
        self.evaluated.is_empty() && self.rejected.is_empty()
    }

    pub fn summary(&self) -> PortfolioSummary {
        PortfolioSummary::from_portfolio(self)
    }

    /// Narrow the evaluated suppliers. Ranks and rejects are kept as they are.
    pub fn filter(self, filter: &SupplierFilter) -> Portfolio {
        Portfolio {
            evaluated: filter_suppliers(self.evaluated, filter),
            rejected: self.rejected,
        }
    }
}

fn by_rank(a: &EvaluatedSupplier, b: &EvaluatedSupplier) -> Ordering {
    // Primary: score descending
    let score_cmp = b
        .recommendation
        .total_score
        .partial_cmp(&a.recommendation.total_score)
        .unwrap_or(Ordering::Equal);
    if score_cmp != Ordering::Equal {
        return score_cmp;
    }
    a.record.name.cmp(&b.record.name)
}

/// Validate and recommend every record.
///
/// Invalid records do not abort the run; they are collected in
/// `rejected` with every error found.
pub fn evaluate(records: Vec<SupplierRecord>, weights: &ScoringWeights) -> Portfolio {
    let mut portfolio = Portfolio::default();

    for record in records {
        match record.criteria() {
            Ok(criteria) => {
                let recommendation = recommend_with(&criteria, weights);
                let (rule, rule_name) = matched_rule(&criteria, recommendation.total_score)
                    .map(|r| (r.number.to_string(), r.name))
                    .unwrap_or_else(|| ("fallback".to_string(), "no rule matched"));
                debug!(
                    supplier = %record.name,
                    score = recommendation.total_score,
                    segment = recommendation.segment.as_str(),
                    rule = %rule,
                    rule_name,
                    "evaluated supplier"
                );
                portfolio.evaluated.push(EvaluatedSupplier {
                    rank: 0,
                    record,
                    criteria,
                    recommendation,
                });
            }
            Err(errors) => {
                warn!(supplier = %record.name, errors = errors.len(), "rejected supplier");
                portfolio.rejected.push(RejectedSupplier {
                    name: record.name,
                    errors,
                });
            }
        }
    }

    portfolio.evaluated.sort_by(by_rank);
    for (idx, supplier) in portfolio.evaluated.iter_mut().enumerate() {
        supplier.rank = idx + 1;
    }
    portfolio
}
