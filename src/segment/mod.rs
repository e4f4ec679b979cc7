pub mod rules;
pub mod types;

pub use rules::{classify, classify_scored, classify_with, matched_rule, rules, Rule};
pub use types::SegmentType;
