//! Validation errors raised while constructing entities.
//!
//! Uses `thiserror` so the server crate can wrap these into its own
//! error types without losing the original message.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was not provided
    #[error("{} can't be null", capitalize(.field))]
    Missing { field: &'static str },
}

/// Result type alias for entity construction
pub type Result<T> = std::result::Result<T, ValidationError>;

impl ValidationError {
    /// Create a missing field error
    pub fn missing(field: &'static str) -> Self {
        Self::Missing { field }
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } => *field,
        }
    }
}

/// Unwrap a required field or report it as missing.
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(ValidationError::Missing { field })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
