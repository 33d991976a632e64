//! Error types for date-range resolution.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// No registered pattern matched the whole input.
    #[error("bad input: {input}")]
    Parse { input: String },

    /// The count embedded in a keyword is zero or too large to represent.
    #[error("Invalid count '{count}' in '{input}': must be a positive integer")]
    InvalidCount { input: String, count: String },

    /// The resolved range falls outside the representable calendar.
    #[error("Out of range: '{input}' resolves outside the supported calendar")]
    OutOfRange { input: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl RangeError {
    /// The keyword that caused the failure, if the error came from resolution.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Parse { input }
            | Self::InvalidCount { input, .. }
            | Self::OutOfRange { input } => Some(input),
            Self::InvalidDate(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RangeError>;
