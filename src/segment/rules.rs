use super::types::SegmentType;
use crate::scoring::{calculate_score_with, RelationshipType, ScoringWeights, SupplierCriteria};

/// Segment used when no rule matches
pub const FALLBACK_SEGMENT: SegmentType = SegmentType::CommodityPartnerships;

/// One step of the segmentation cascade.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// 1-based position in the cascade
    pub number: u8,
    pub name: &'static str,
    pub segment: SegmentType,
    applies: fn(&SupplierCriteria, f64) -> bool,
}

impl Rule {
    pub fn matches(&self, criteria: &SupplierCriteria, total_score: f64) -> bool {
        (self.applies)(criteria, total_score)
    }
}

// Order is significant: the first matching rule wins, and the
// switch-candidate rule overrides everything after it.
const RULES: [Rule; 5] = [
    Rule {
        number: 1,
        name: "poor score, or high risk with weak performance",
        segment: SegmentType::SwitchCandidates,
        applies: is_switch_candidate,
    },
    Rule {
        number: 2,
        name: "integration relationship on a critical supply",
        segment: SegmentType::SupplierIntegration,
        applies: is_supplier_integration,
    },
    Rule {
        number: 3,
        name: "critical supply with solid score and contained risk",
        segment: SegmentType::ProprietaryInformation,
        applies: is_proprietary_information,
    },
    Rule {
        number: 4,
        name: "innovative partner with strong score",
        segment: SegmentType::InnovativePartnerships,
        applies: is_innovative_partnership,
    },
    Rule {
        number: 5,
        name: "high performance, low risk, strong score",
        segment: SegmentType::TrustedSuppliers,
        applies: is_trusted_supplier,
    },
];

fn is_switch_candidate(c: &SupplierCriteria, total: f64) -> bool {
    total < 35.0 || (c.risk_score >= 8.0 && c.performance_score < 60.0)
}

fn is_supplier_integration(c: &SupplierCriteria, _total: f64) -> bool {
    c.relationship_type == RelationshipType::Integration
        && c.business_criticality.is_high()
}

fn is_proprietary_information(c: &SupplierCriteria, total: f64) -> bool {
    c.business_criticality.is_high() && total >= 60.0 && c.risk_score <= 6.0
}

fn is_innovative_partnership(c: &SupplierCriteria, total: f64) -> bool {
    c.innovation_potential >= 7.0 && c.relationship_type.is_partnership() && total >= 65.0
}

fn is_trusted_supplier(c: &SupplierCriteria, total: f64) -> bool {
    c.performance_score >= 85.0 && c.risk_score <= 4.0 && total >= 70.0
}

/// The cascade in evaluation order (the fallback is implicit)
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// First rule that matches against a precomputed total score.
pub fn matched_rule(criteria: &SupplierCriteria, total_score: f64) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matches(criteria, total_score))
}

/// Classify against a total score that was already computed for these criteria.
pub fn classify_scored(criteria: &SupplierCriteria, total_score: f64) -> SegmentType {
    matched_rule(criteria, total_score)
        .map(|rule| rule.segment)
        .unwrap_or(FALLBACK_SEGMENT)
}

/// Score once with the given weights, then run the cascade.
pub fn classify_with(criteria: &SupplierCriteria, weights: &ScoringWeights) -> SegmentType {
    let total_score = calculate_score_with(criteria, weights);
    classify_scored(criteria, total_score)
}

/// Classify with the default weights.
pub fn classify(criteria: &SupplierCriteria) -> SegmentType {
    classify_with(criteria, &ScoringWeights::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{
        calculate_score, BusinessCriticality, MarketAvailability, SupplierComplexity,
    };

    fn low_risk_high_performer() -> SupplierCriteria {
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

    fn weakest_supplier() -> SupplierCriteria {
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
    fn test_high_performer_below_trusted_threshold_is_commodity() {
        // Scores 66.8, so the trusted rule's >= 70 check fails
        let criteria = low_risk_high_performer();
        assert_eq!(calculate_score(&criteria), 66.8);
        assert_eq!(classify(&criteria), SegmentType::CommodityPartnerships);
        assert!(matched_rule(&criteria, 66.8).is_none());
    }

    #[test]
    fn test_low_total_is_switch_candidate() {
        assert_eq!(classify(&weakest_supplier()), SegmentType::SwitchCandidates);
    }

    #[test]
    fn test_high_risk_weak_performance_is_switch_candidate() {
        let criteria = SupplierCriteria {
            risk_score: 8.0,
            performance_score: 50.0,
            innovation_potential: 10.0,
            supplier_complexity: SupplierComplexity::Low,
            market_availability: MarketAvailability::ManyAlternatives,
            business_criticality: BusinessCriticality::Strategic,
            relationship_type: RelationshipType::Integration,
        };
        assert!(calculate_score(&criteria) >= 35.0);
        assert_eq!(classify(&criteria), SegmentType::SwitchCandidates);
        assert_eq!(matched_rule(&criteria, calculate_score(&criteria)).unwrap().number, 1);
    }

    #[test]
    fn test_rules_carry_distinct_names() {
        let names: Vec<&str> = rules().iter().map(|r| r.name).collect();
        assert!(names.iter().all(|n| !n.is_empty()));
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate rule name {}", name);
        }
        let rule = matched_rule(&weakest_supplier(), calculate_score(&weakest_supplier())).unwrap();
        assert_eq!(rule.name, "poor score, or high risk with weak performance");
    }

    #[test]
    fn test_switch_rule_overrides_integration() {
        let criteria = SupplierCriteria {
            business_criticality: BusinessCriticality::Strategic,
            relationship_type: RelationshipType::Integration,
            ..weakest_supplier()
        };
        assert!(calculate_score(&criteria) < 35.0);
        assert_eq!(classify(&criteria), SegmentType::SwitchCandidates);
    }

    #[test]
    fn test_integration_on_strategic_supply() {
        let criteria = SupplierCriteria {
            risk_score: 5.0,
            performance_score: 65.0,
            innovation_potential: 4.0,
            supplier_complexity: SupplierComplexity::Medium,
            market_availability: MarketAvailability::FewAlternatives,
            business_criticality: BusinessCriticality::Strategic,
            relationship_type: RelationshipType::Integration,
        };
        assert_eq!(classify(&criteria), SegmentType::SupplierIntegration);
    }

    #[test]
    fn test_integration_on_important_supply_falls_through() {
        let criteria = SupplierCriteria {
            risk_score: 5.0,
            performance_score: 65.0,
            innovation_potential: 4.0,
            supplier_complexity: SupplierComplexity::Medium,
            market_availability: MarketAvailability::FewAlternatives,
            business_criticality: BusinessCriticality::Important,
            relationship_type: RelationshipType::Integration,
        };
        assert_ne!(classify(&criteria), SegmentType::SupplierIntegration);
    }

    #[test]
    fn test_proprietary_information() {
        // 14 + 20 + 7.5 + 12 + 8 + 7 + 3 = 71.5
        let criteria = SupplierCriteria {
            risk_score: 4.0,
            performance_score: 80.0,
            innovation_potential: 5.0,
            supplier_complexity: SupplierComplexity::Medium,
            market_availability: MarketAvailability::LimitedAlternatives,
            business_criticality: BusinessCriticality::Critical,
            relationship_type: RelationshipType::Partnership,
        };
        assert_eq!(calculate_score(&criteria), 71.5);
        assert_eq!(classify(&criteria), SegmentType::ProprietaryInformation);
    }

    #[test]
    fn test_proprietary_requires_contained_risk() {
        let criteria = SupplierCriteria {
            risk_score: 7.0,
            performance_score: 95.0,
            innovation_potential: 9.0,
            supplier_complexity: SupplierComplexity::Low,
            market_availability: MarketAvailability::ManyAlternatives,
            business_criticality: BusinessCriticality::Critical,
            relationship_type: RelationshipType::Partnership,
        };
        assert!(calculate_score(&criteria) >= 65.0);
        // Critical but too risky for rule 3; innovative rule picks it up
        assert_eq!(classify(&criteria), SegmentType::InnovativePartnerships);
    }

    #[test]
    fn test_innovative_partnership() {
        // 16 + 22.5 + 13.5 + 7.5 + 8 + 10 + 5 = 82.5
        let criteria = SupplierCriteria {
            risk_score: 3.0,
            performance_score: 90.0,
            innovation_potential: 9.0,
            supplier_complexity: SupplierComplexity::Low,
            market_availability: MarketAvailability::ManyAlternatives,
            business_criticality: BusinessCriticality::Important,
            relationship_type: RelationshipType::Partnership,
        };
        assert_eq!(calculate_score(&criteria), 82.5);
        assert_eq!(classify(&criteria), SegmentType::InnovativePartnerships);
    }

    #[test]
    fn test_trusted_supplier() {
        // 18 + 23.75 + 7.5 + 7.5 + 5 + 10 + 5 = 76.75
        let criteria = SupplierCriteria {
            risk_score: 2.0,
            performance_score: 95.0,
            innovation_potential: 5.0,
            supplier_complexity: SupplierComplexity::Low,
            market_availability: MarketAvailability::ManyAlternatives,
            business_criticality: BusinessCriticality::Important,
            relationship_type: RelationshipType::Collaborative,
        };
        assert!(calculate_score(&criteria) >= 70.0);
        assert_eq!(classify(&criteria), SegmentType::TrustedSuppliers);
    }

    #[test]
    fn test_classify_scored_uses_given_score() {
        // Same criteria, forced score below the switch threshold
        let criteria = low_risk_high_performer();
        assert_eq!(classify_scored(&criteria, 34.9), SegmentType::SwitchCandidates);
        assert_eq!(classify_scored(&criteria, 35.0), SegmentType::CommodityPartnerships);
    }

    #[test]
    fn test_rules_are_numbered_in_order() {
        let numbers: Vec<u8> = rules().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(rules()[0].segment, SegmentType::SwitchCandidates);
    }

    #[test]
    fn test_classify_is_total() {
        for complexity in SupplierComplexity::ALL {
            for market in MarketAvailability::ALL {
                for criticality in BusinessCriticality::ALL {
                    for relationship in RelationshipType::ALL {
                        for risk in [1.0, 4.0, 6.0, 8.0, 10.0] {
                            let criteria = SupplierCriteria {
                                risk_score: risk,
                                performance_score: 70.0,
                                innovation_potential: 7.0,
                                supplier_complexity: *complexity,
                                market_availability: *market,
                                business_criticality: *criticality,
                                relationship_type: *relationship,
                            };
                            assert!(SegmentType::ALL.contains(&classify(&criteria)));
                        }
                    }
                }
            }
        }
    }
}
