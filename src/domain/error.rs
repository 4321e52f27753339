// ============================================================================
// Lookup Errors
// Failure kinds surfaced by a window lookup
// ============================================================================

use super::window::DegreeRange;
use crate::numeric::{DecimalLiteral, NumericError};
use thiserror::Error;

/// Failure reported by a storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("point store error: {message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Coarse classification so the request layer can choose a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupErrorKind {
    /// The caller's input is invalid (4xx)
    InvalidRequest,
    /// A stored record is unusable (5xx)
    DataIntegrity,
    /// The storage collaborator failed (5xx)
    Storage,
}

/// Errors that abort a lookup. A lookup never returns partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A request literal is not a valid decimal
    #[error("malformed number in {field}: {source}")]
    MalformedNumber {
        field: &'static str,
        source: NumericError,
    },

    /// A stored record lacks `lon` or `lat`
    #[error("record {record} is missing required field `{field}`")]
    MissingField { record: usize, field: &'static str },

    /// A stored record has a `lon`/`lat` that is not a decimal
    #[error("record {record} has an invalid `{field}`: {source}")]
    InvalidField {
        record: usize,
        field: &'static str,
        source: NumericError,
    },

    /// The longitude window cannot hold a projected point
    #[error("longitude window [{min}, {max}] is out of range: {reason}")]
    OutOfRange {
        min: DecimalLiteral,
        max: DecimalLiteral,
        reason: &'static str,
    },

    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] NumericError),

    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The lookup task did not run to completion
    #[error("lookup aborted: {0}")]
    Aborted(String),
}

impl LookupError {
    /// A raw window whose minimum exceeds its maximum.
    pub(crate) fn inverted_window(window: &DegreeRange) -> Self {
        LookupError::OutOfRange {
            min: window.min.clone(),
            max: window.max.clone(),
            reason: "window minimum exceeds its maximum",
        }
    }

    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::MalformedNumber { .. }
            | LookupError::OutOfRange { .. }
            | LookupError::Arithmetic(_) => LookupErrorKind::InvalidRequest,
            LookupError::MissingField { .. } | LookupError::InvalidField { .. } => {
                LookupErrorKind::DataIntegrity
            }
            LookupError::Storage(_) | LookupError::Aborted(_) => LookupErrorKind::Storage,
        }
    }

    /// Suggested HTTP status for the request layer.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            LookupErrorKind::InvalidRequest => 400,
            LookupErrorKind::DataIntegrity => 500,
            LookupErrorKind::Storage => 503,
        }
    }
}
