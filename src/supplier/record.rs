use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CriteriaError;
use crate::scoring::validation::{check_range, INNOVATION_RANGE, PERFORMANCE_RANGE, RISK_RANGE};
use crate::scoring::{
    BusinessCriticality, MarketAvailability, RelationshipType, SupplierComplexity,
    SupplierCriteria,
};
use crate::segment::SegmentType;

/// A supplier as it arrives from storage or a form.
///
/// Criteria are kept raw (optional numbers and free strings) so that every
/// problem can be reported by [`SupplierRecord::criteria`] instead of failing
/// on the first bad field during parsing.
///
/// Example YAML:
/// ```yaml
/// name: Acme Metals
/// category: Raw Materials
/// annual_spend: 1250000
/// segment_type: trusted_suppliers
/// risk_score: 2
/// performance_score: 92
/// innovation_potential: 6
/// supplier_complexity: low
/// market_availability: many_alternatives
/// business_criticality: important
/// relationship_type: collaborative
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SupplierRecord {
    pub name: String,

    pub category: String,

    #[serde(default)]
    pub annual_spend: Option<f64>,

    /// Segment previously persisted for this supplier, if any
    #[serde(default)]
    pub segment_type: Option<SegmentType>,

    #[serde(default)]
    pub risk_score: Option<f64>,

    #[serde(default)]
    pub performance_score: Option<f64>,

    #[serde(default)]
    pub innovation_potential: Option<f64>,

    #[serde(default)]
    pub supplier_complexity: Option<String>,

    #[serde(default)]
    pub market_availability: Option<String>,

    #[serde(default)]
    pub business_criticality: Option<String>,

    #[serde(default)]
    pub relationship_type: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub notes: Option<String>,
}

fn numeric(
    field: &'static str,
    value: Option<f64>,
    range: (f64, f64),
    errors: &mut Vec<CriteriaError>,
) -> Option<f64> {
    let Some(value) = value else {
        errors.push(CriteriaError::Missing { field });
        return None;
    };
    check_range(field, value, range)
        .map_err(|e| errors.push(e))
        .ok()
}

fn categorical<T>(
    field: &'static str,
    value: Option<&str>,
    errors: &mut Vec<CriteriaError>,
) -> Option<T>
where
    T: FromStr<Err = CriteriaError>,
{
    match value {
        None => {
            errors.push(CriteriaError::Missing { field });
            None
        }
        Some(s) if s.trim().is_empty() => {
            errors.push(CriteriaError::Missing { field });
            None
        }
        Some(s) => s.parse::<T>().map_err(|e| errors.push(e)).ok(),
    }
}

impl SupplierRecord {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    /// Validate the raw fields and build engine input.
    /// Returns all validation errors at once (not just the first).
    pub fn criteria(&self) -> Result<SupplierCriteria, Vec<CriteriaError>> {
        let mut errors = Vec::new();

        let risk_score = numeric("risk_score", self.risk_score, RISK_RANGE, &mut errors);
        let performance_score = numeric(
            "performance_score",
            self.performance_score,
            PERFORMANCE_RANGE,
            &mut errors,
        );
        let innovation_potential = numeric(
            "innovation_potential",
            self.innovation_potential,
            INNOVATION_RANGE,
            &mut errors,
        );
        let supplier_complexity: Option<SupplierComplexity> = categorical(
            "supplier_complexity",
            self.supplier_complexity.as_deref(),
            &mut errors,
        );
        let market_availability: Option<MarketAvailability> = categorical(
            "market_availability",
            self.market_availability.as_deref(),
            &mut errors,
        );
        let business_criticality: Option<BusinessCriticality> = categorical(
            "business_criticality",
            self.business_criticality.as_deref(),
            &mut errors,
        );
        let relationship_type: Option<RelationshipType> = categorical(
            "relationship_type",
            self.relationship_type.as_deref(),
            &mut errors,
        );

        // Every None above pushed an error, so this only matches a clean record
        match (
            risk_score,
            performance_score,
            innovation_potential,
            supplier_complexity,
            market_availability,
            business_criticality,
            relationship_type,
        ) {
            (
                Some(risk_score),
                Some(performance_score),
                Some(innovation_potential),
                Some(supplier_complexity),
                Some(market_availability),
                Some(business_criticality),
                Some(relationship_type),
            ) => Ok(SupplierCriteria {
                risk_score,
                performance_score,
                innovation_potential,
                supplier_complexity,
                market_availability,
                business_criticality,
                relationship_type,
            }),
            _ => Err(errors),
        }
    }
}
