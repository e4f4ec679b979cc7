use thiserror::Error;

/// Boundary errors raised while turning raw supplier data into criteria.
///
/// The scoring engine never produces these. They are raised before it runs,
/// so that nothing out of range or unrecognized reaches the arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    /// A required criterion was not supplied
    #[error("{field}: missing value")]
    Missing { field: &'static str },

    /// A numeric criterion outside its documented domain (or not finite)
    #[error("{field}: {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A categorical criterion with no lookup entry
    #[error("{field}: unrecognized value '{value}' (expected one of: {expected})")]
    UnknownValue {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl CriteriaError {
    /// Field name the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            CriteriaError::Missing { field }
            | CriteriaError::OutOfRange { field, .. }
            | CriteriaError::UnknownValue { field, .. } => *field,
        }
    }
}
