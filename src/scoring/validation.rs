use super::config::ScoringWeights;
use super::factors::{Criterion, SupplierCriteria};
use crate::error::CriteriaError;

pub const RISK_RANGE: (f64, f64) = (1.0, 10.0);
pub const PERFORMANCE_RANGE: (f64, f64) = (0.0, 100.0);
pub const INNOVATION_RANGE: (f64, f64) = (1.0, 10.0);

const WEIGHT_TOTAL: f64 = 100.0;
const WEIGHT_TOLERANCE: f64 = 0.001;

/// Check a numeric criterion against its domain. NaN and infinities fail.
pub fn check_range(
    field: &'static str,
    value: f64,
    range: (f64, f64),
) -> Result<f64, CriteriaError> {
    let (min, max) = range;
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(CriteriaError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Validate the numeric fields of already-typed criteria.
/// Returns all validation errors at once (not just the first).
pub fn validate_ranges(criteria: &SupplierCriteria) -> Result<(), Vec<CriteriaError>> {
    let errors: Vec<CriteriaError> = [
        check_range("risk_score", criteria.risk_score, RISK_RANGE),
        check_range("performance_score", criteria.performance_score, PERFORMANCE_RANGE),
        check_range("innovation_potential", criteria.innovation_potential, INNOVATION_RANGE),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a weights table at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(weights: &ScoringWeights) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for criterion in Criterion::ALL {
        let weight = weights.weight(criterion);
        if !weight.is_finite() {
            errors.push(format!(
                "weights.{}: must be a finite number",
                criterion.label().to_lowercase()
            ));
        } else if weight < 0.0 {
            errors.push(format!(
                "weights.{}: must be non-negative",
                criterion.label().to_lowercase()
            ));
        }
    }

    let total = weights.total();
    if errors.is_empty() && (total - WEIGHT_TOTAL).abs() > WEIGHT_TOLERANCE {
        errors.push(format!("weights: must sum to 100 (got {})", total));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
