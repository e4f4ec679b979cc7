//! Supplier scoring and segmentation.
//!
//! The engine ([`scoring`], [`segment`], [`recommend`]) is a set of pure
//! functions over [`scoring::SupplierCriteria`]. Everything else validates
//! raw supplier records on the way in and renders results on the way out.

pub mod config;
pub mod error;
pub mod output;
pub mod portfolio;
pub mod recommend;
pub mod scoring;
pub mod segment;
pub mod supplier;

pub use error::CriteriaError;
pub use recommend::{recommend, recommend_with, Confidence, SegmentRecommendation};
pub use scoring::{calculate_score, calculate_score_with, ScoringWeights, SupplierCriteria};
pub use segment::{classify, classify_with, SegmentType};
