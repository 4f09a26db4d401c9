use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Range bounds were negative or inverted.
    InvalidRange { start: i64, end: i64, reason: &'static str },
    /// A textual enum value did not match any known variant.
    UnknownVariant { kind: &'static str, value: String },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidRange { start, end, reason } => {
                write!(f, "invalid range [{start}, {end}): {reason}")
            }
            ModelError::UnknownVariant { kind, value } => {
                write!(f, "unknown {kind} '{value}'")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
