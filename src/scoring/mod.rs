pub mod config;
pub mod engine;
pub mod factors;
pub mod validation;

pub use config::ScoringWeights;
pub use engine::{
    calculate_score, calculate_score_with, round_to_tenth, score_breakdown, weighted_components,
    ScoreBreakdown,
};
pub use factors::{
    BusinessCriticality, Criterion, MarketAvailability, RelationshipType, SupplierComplexity,
    SupplierCriteria,
};
pub use validation::{check_range, validate_ranges, validate_weights};
