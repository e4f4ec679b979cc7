use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CriteriaError;

/// Generates the string plumbing shared by every categorical criterion:
/// canonical names, `Display`, and a lenient `FromStr` that rejects
/// anything outside the closed set.
macro_rules! categorical {
    ($ty:ident, $field:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// All variants, in ascending order of the underlying axis
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Canonical snake_case name, as stored on supplier records
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CriteriaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| CriteriaError::UnknownValue {
                        field: $field,
                        value: s.to_string(),
                        expected: $ty::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierComplexity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketAvailability {
    ManyAlternatives,
    LimitedAlternatives,
    FewAlternatives,
    Monopolistic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessCriticality {
    Routine,
    Important,
    Critical,
    Strategic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    Transactional,
    Collaborative,
    Partnership,
    Integration,
}

categorical!(SupplierComplexity, "supplier_complexity", {
    Low => "low",
    Medium => "medium",
    High => "high",
});

categorical!(MarketAvailability, "market_availability", {
    ManyAlternatives => "many_alternatives",
    LimitedAlternatives => "limited_alternatives",
    FewAlternatives => "few_alternatives",
    Monopolistic => "monopolistic",
});

categorical!(BusinessCriticality, "business_criticality", {
    Routine => "routine",
    Important => "important",
    Critical => "critical",
    Strategic => "strategic",
});

categorical!(RelationshipType, "relationship_type", {
    Transactional => "transactional",
    Collaborative => "collaborative",
    Partnership => "partnership",
    Integration => "integration",
});

impl SupplierComplexity {
    /// Unit-interval score, decreasing with complexity
    pub fn normalized(&self) -> f64 {
        match self {
            SupplierComplexity::Low => 1.0,
            SupplierComplexity::Medium => 0.6,
            SupplierComplexity::High => 0.2,
        }
    }
}

impl MarketAvailability {
    /// Unit-interval score, decreasing with scarcity
    pub fn normalized(&self) -> f64 {
        match self {
            MarketAvailability::ManyAlternatives => 1.0,
            MarketAvailability::LimitedAlternatives => 0.7,
            MarketAvailability::FewAlternatives => 0.4,
            MarketAvailability::Monopolistic => 0.1,
        }
    }
}

impl BusinessCriticality {
    /// Unit-interval score, increasing with criticality
    pub fn normalized(&self) -> f64 {
        match self {
            BusinessCriticality::Routine => 0.2,
            BusinessCriticality::Important => 0.5,
            BusinessCriticality::Critical => 0.8,
            BusinessCriticality::Strategic => 1.0,
        }
    }

    /// Critical or strategic
    pub fn is_high(&self) -> bool {
        matches!(self, BusinessCriticality::Critical | BusinessCriticality::Strategic)
    }
}

impl RelationshipType {
    /// Unit-interval score, increasing with relationship depth
    pub fn normalized(&self) -> f64 {
        match self {
            RelationshipType::Transactional => 0.2,
            RelationshipType::Collaborative => 0.5,
            RelationshipType::Partnership => 0.8,
            RelationshipType::Integration => 1.0,
        }
    }

    /// Partnership or integration
    pub fn is_partnership(&self) -> bool {
        matches!(self, RelationshipType::Partnership | RelationshipType::Integration)
    }
}

/// The seven inputs of one supplier evaluation.
///
/// Numeric fields are taken as-is; range checks belong to the boundary
/// (see [`crate::scoring::validate_ranges`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierCriteria {
    /// 1-10, higher is riskier
    pub risk_score: f64,
    /// 0-100
    pub performance_score: f64,
    /// 1-10
    pub innovation_potential: f64,
    pub supplier_complexity: SupplierComplexity,
    pub market_availability: MarketAvailability,
    pub business_criticality: BusinessCriticality,
    pub relationship_type: RelationshipType,
}

/// Scored criteria, in the order their components are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Risk,
    Performance,
    Innovation,
    Criticality,
    Relationship,
    Market,
    Complexity,
}

impl Criterion {
    pub const ALL: [Criterion; 7] = [
        Criterion::Risk,
        Criterion::Performance,
        Criterion::Innovation,
        Criterion::Criticality,
        Criterion::Relationship,
        Criterion::Market,
        Criterion::Complexity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Risk => "Risk",
            Criterion::Performance => "Performance",
            Criterion::Innovation => "Innovation",
            Criterion::Criticality => "Criticality",
            Criterion::Relationship => "Relationship",
            Criterion::Market => "Market",
            Criterion::Complexity => "Complexity",
        }
    }

    /// Map a criterion onto [0, 1] for in-domain inputs.
    ///
    /// Out-of-domain numerics are not clamped and fall outside the unit interval.
    pub fn normalize(&self, criteria: &SupplierCriteria) -> f64 {
        match self {
            // Inverted: lower risk contributes more
            Criterion::Risk => (11.0 - criteria.risk_score) / 10.0,
            Criterion::Performance => criteria.performance_score / 100.0,
            Criterion::Innovation => criteria.innovation_potential / 10.0,
            Criterion::Criticality => criteria.business_criticality.normalized(),
            Criterion::Relationship => criteria.relationship_type.normalized(),
            Criterion::Market => criteria.market_availability.normalized(),
            Criterion::Complexity => criteria.supplier_complexity.normalized(),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_criteria() -> SupplierCriteria {
        SupplierCriteria {
            risk_score: 3.0,
            performance_score: 80.0,
            innovation_potential: 5.0,
            supplier_complexity: SupplierComplexity::Medium,
            market_availability: MarketAvailability::LimitedAlternatives,
            business_criticality: BusinessCriticality::Important,
            relationship_type: RelationshipType::Collaborative,
        }
    }

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!("low".parse::<SupplierComplexity>().unwrap(), SupplierComplexity::Low);
        assert_eq!(
            "few_alternatives".parse::<MarketAvailability>().unwrap(),
            MarketAvailability::FewAlternatives
        );
        assert_eq!(
            "strategic".parse::<BusinessCriticality>().unwrap(),
            BusinessCriticality::Strategic
        );
        assert_eq!(
            "integration".parse::<RelationshipType>().unwrap(),
            RelationshipType::Integration
        );
    }

    #[test]
    fn test_parse_trims_and_ignores_case() {
        assert_eq!(
            "  Monopolistic ".parse::<MarketAvailability>().unwrap(),
            MarketAvailability::Monopolistic
        );
        assert_eq!("HIGH".parse::<SupplierComplexity>().unwrap(), SupplierComplexity::High);
    }

    #[test]
    fn test_parse_unknown_value_is_rejected() {
        let err = "oligopoly".parse::<MarketAvailability>().unwrap_err();
        match err {
            CriteriaError::UnknownValue {
                field,
                value,
                expected,
            } => {
                assert_eq!(field, "market_availability");
                assert_eq!(value, "oligopoly");
                assert!(expected.contains("many_alternatives"));
                assert!(expected.contains("monopolistic"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for v in RelationshipType::ALL {
            assert_eq!(v.to_string(), v.as_str());
            assert_eq!(v.as_str().parse::<RelationshipType>().unwrap(), *v);
        }
    }

    #[test]
    fn test_complexity_lookup_decreasing() {
        let scores: Vec<f64> = SupplierComplexity::ALL.iter().map(|c| c.normalized()).collect();
        assert_eq!(scores, vec![1.0, 0.6, 0.2]);
    }

    #[test]
    fn test_market_lookup_decreasing() {
        let scores: Vec<f64> = MarketAvailability::ALL.iter().map(|m| m.normalized()).collect();
        assert_eq!(scores, vec![1.0, 0.7, 0.4, 0.1]);
    }

    #[test]
    fn test_criticality_and_relationship_lookups_increasing() {
        let crit: Vec<f64> = BusinessCriticality::ALL.iter().map(|c| c.normalized()).collect();
        assert_eq!(crit, vec![0.2, 0.5, 0.8, 1.0]);
        let rel: Vec<f64> = RelationshipType::ALL.iter().map(|r| r.normalized()).collect();
        assert_eq!(rel, vec![0.2, 0.5, 0.8, 1.0]);
    }

    #[test]
    fn test_high_criticality_and_partnership_groups() {
        assert!(!BusinessCriticality::Routine.is_high());
        assert!(!BusinessCriticality::Important.is_high());
        assert!(BusinessCriticality::Critical.is_high());
        assert!(BusinessCriticality::Strategic.is_high());

        assert!(!RelationshipType::Collaborative.is_partnership());
        assert!(RelationshipType::Partnership.is_partnership());
        assert!(RelationshipType::Integration.is_partnership());
    }

    #[test]
    fn test_normalize_numeric_criteria() {
        let criteria = sample_criteria();
        assert!((Criterion::Risk.normalize(&criteria) - 0.8).abs() < 1e-9);
        assert!((Criterion::Performance.normalize(&criteria) - 0.8).abs() < 1e-9);
        assert!((Criterion::Innovation.normalize(&criteria) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_does_not_clamp() {
        let mut criteria = sample_criteria();
        criteria.risk_score = 15.0;
        assert!(Criterion::Risk.normalize(&criteria) < 0.0);
    }

    #[test]
    fn test_criteria_json_uses_camel_case() {
        let json = serde_json::to_value(sample_criteria()).unwrap();
        assert_eq!(json["riskScore"], 3.0);
        assert_eq!(json["marketAvailability"], "limited_alternatives");
        assert_eq!(json["relationshipType"], "collaborative");
    }
}
