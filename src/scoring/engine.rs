use serde::{Deserialize, Serialize};

use super::config::ScoringWeights;
use super::factors::{Criterion, SupplierCriteria};

/// Points contributed by each criterion.
///
/// Returned unrounded by [`weighted_components`] and rounded per field by
/// [`score_breakdown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub risk: f64,
    pub performance: f64,
    pub innovation: f64,
    pub criticality: f64,
    pub relationship: f64,
    pub market: f64,
    pub complexity: f64,
}

impl ScoreBreakdown {
    pub fn get(&self, criterion: Criterion) -> f64 {
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

    fn set(&mut self, criterion: Criterion, points: f64) {
        let slot = match criterion {
            Criterion::Risk => &mut self.risk,
            Criterion::Performance => &mut self.performance,
            Criterion::Innovation => &mut self.innovation,
            Criterion::Criticality => &mut self.criticality,
            Criterion::Relationship => &mut self.relationship,
            Criterion::Market => &mut self.market,
            Criterion::Complexity => &mut self.complexity,
        };
        *slot = points;
    }

    /// (criterion, points) pairs in summation order
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, points)| points).sum()
    }

    fn rounded(&self) -> Self {
        let mut out = *self;
        for criterion in Criterion::ALL {
            out.set(criterion, round_to_tenth(self.get(criterion)));
        }
        out
    }
}

/// Round half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Normalized value times weight, per criterion, without rounding.
pub fn weighted_components(
    criteria: &SupplierCriteria,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let mut components = ScoreBreakdown::default();
    for criterion in Criterion::ALL {
        components.set(criterion, criterion.normalize(criteria) * weights.weight(criterion));
    }
    components
}

/// Per-criterion points, each rounded to one decimal for display.
///
/// Fields are rounded independently, so their sum can differ from the
/// total score by a tenth or so.
pub fn score_breakdown(criteria: &SupplierCriteria, weights: &ScoringWeights) -> ScoreBreakdown {
    weighted_components(criteria, weights).rounded()
}

/// Composite 0-100 score with explicit weights, rounded to one decimal.
///
/// No validation: out-of-domain numerics flow through the arithmetic.
pub fn calculate_score_with(criteria: &SupplierCriteria, weights: &ScoringWeights) -> f64 {
    round_to_tenth(weighted_components(criteria, weights).sum())
}

/// Composite 0-100 score with the default weights.
pub fn calculate_score(criteria: &SupplierCriteria) -> f64 {
    calculate_score_with(criteria, &ScoringWeights::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{
        BusinessCriticality, MarketAvailability, RelationshipType, SupplierComplexity,
    };

    fn sample_criteria() -> SupplierCriteria {
        SupplierCriteria {
            risk_score: 1.0,
            performance_score: 95.0,
            innovation_potential: 2.0,
            supplier_complexity: SupplierComplexity::Low,
            market_availability: MarketAvailability::ManyAlternatives,
            business_criticality: BusinessCriticality::Routine,
            relationship_type: RelationshipType::Transactional,
        }
    }

    fn weakest_criteria() -> SupplierCriteria {
        SupplierCriteria {
            risk_score: 10.0,
            performance_score: 5.0,
            innovation_potential: 1.0,
            supplier_complexity: SupplierComplexity::High,
            market_availability: MarketAvailability::Monopolistic,
            business_criticality: BusinessCriticality::Routine,
            relationship_type: RelationshipType::Transactional,
        }
    }

    #[test]
    fn test_low_risk_high_performer_components() {
        let components = weighted_components(&sample_criteria(), &ScoringWeights::DEFAULT);
        assert!((components.risk - 20.0).abs() < 1e-9);
        assert!((components.performance - 23.75).abs() < 1e-9);
        assert!((components.innovation - 3.0).abs() < 1e-9);
        assert!((components.complexity - 5.0).abs() < 1e-9);
        assert!((components.market - 10.0).abs() < 1e-9);
        assert!((components.criticality - 3.0).abs() < 1e-9);
        assert!((components.relationship - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_low_risk_high_performer_total() {
        // 20 + 23.75 + 3 + 3 + 2 + 10 + 5 = 66.75
        assert_eq!(calculate_score(&sample_criteria()), 66.8);
    }

    #[test]
    fn test_weakest_supplier_total() {
        // 2 + 1.25 + 1.5 + 3 + 2 + 1 + 1 = 11.75
        assert_eq!(calculate_score(&weakest_criteria()), 11.8);
    }

    #[test]
    fn test_breakdown_rounds_each_field() {
        let breakdown = score_breakdown(&sample_criteria(), &ScoringWeights::DEFAULT);
        assert_eq!(breakdown.performance, 23.8);
        assert_eq!(breakdown.risk, 20.0);
        assert_eq!(breakdown.relationship, 2.0);
    }

    #[test]
    fn test_breakdown_sums_within_tolerance() {
        let criteria = [sample_criteria(), weakest_criteria()];
        for c in &criteria {
            let total = calculate_score(c);
            let breakdown = score_breakdown(c, &ScoringWeights::DEFAULT);
            assert!((breakdown.sum() - total).abs() <= 0.1 + 1e-9);
        }
    }

    #[test]
    fn test_score_bounds_for_in_domain_inputs() {
        let best = SupplierCriteria {
            risk_score: 1.0,
            performance_score: 100.0,
            innovation_potential: 10.0,
            supplier_complexity: SupplierComplexity::Low,
            market_availability: MarketAvailability::ManyAlternatives,
            business_criticality: BusinessCriticality::Strategic,
            relationship_type: RelationshipType::Integration,
        };
        let worst = SupplierCriteria {
            risk_score: 10.0,
            performance_score: 0.0,
            innovation_potential: 1.0,
            ..weakest_criteria()
        };
        assert_eq!(calculate_score(&best), 100.0);
        let low = calculate_score(&worst);
        assert!((0.0..=100.0).contains(&low));
    }

    #[test]
    fn test_score_is_deterministic() {
        let criteria = sample_criteria();
        let first = calculate_score(&criteria);
        for _ in 0..10 {
            assert_eq!(calculate_score(&criteria), first);
        }
    }

    #[test]
    fn test_performance_is_monotonic() {
        let mut criteria = sample_criteria();
        let mut previous = f64::MIN;
        for performance in (0..=100).step_by(5) {
            criteria.performance_score = performance as f64;
            let score = calculate_score(&criteria);
            assert!(score >= previous, "score dropped at performance {}", performance);
            previous = score;
        }
    }

    #[test]
    fn test_risk_is_antitonic() {
        let mut criteria = sample_criteria();
        let mut previous = f64::MAX;
        for risk in 1..=10 {
            criteria.risk_score = risk as f64;
            let score = calculate_score(&criteria);
            assert!(score <= previous, "score rose at risk {}", risk);
            previous = score;
        }
    }

    #[test]
    fn test_out_of_range_propagates() {
        let mut criteria = sample_criteria();
        criteria.risk_score = 15.0;
        // Risk component becomes (11 - 15) / 10 * 20 = -8
        let components = weighted_components(&criteria, &ScoringWeights::DEFAULT);
        assert!((components.risk + 8.0).abs() < 1e-9);
        assert!(calculate_score(&criteria) < calculate_score(&sample_criteria()));
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            risk: 0.0,
            performance: 100.0,
            innovation: 0.0,
            criticality: 0.0,
            relationship: 0.0,
            market: 0.0,
            complexity: 0.0,
        };
        assert_eq!(calculate_score_with(&sample_criteria(), &weights), 95.0);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(66.75), 66.8);
        assert_eq!(round_to_tenth(11.75), 11.8);
        assert_eq!(round_to_tenth(70.0), 70.0);
        assert_eq!(round_to_tenth(33.33), 33.3);
    }
}
