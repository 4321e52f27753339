// ============================================================================
// Numeric Errors
// Error types for exact decimal parsing and arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur while parsing or combining decimal literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Input text is not a plain decimal literal
    #[error("malformed decimal literal {input:?}: {reason}")]
    Malformed { input: String, reason: &'static str },

    /// Input is syntactically valid but has more digits than the decimal can hold
    #[error("decimal literal {input:?} exceeds the supported precision")]
    Unrepresentable { input: String },

    /// Result left the representable decimal range
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,

    /// Result could not keep the operand's fractional digits
    #[error("precision loss: result would drop fractional digits")]
    PrecisionLoss,
}

impl NumericError {
    pub(crate) fn malformed(input: &str, reason: &'static str) -> Self {
        NumericError::Malformed {
            input: input.to_string(),
            reason,
        }
    }

    /// True when the error stems from the caller's text rather than arithmetic.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            NumericError::Malformed { .. } | NumericError::Unrepresentable { .. }
        )
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(
            NumericError::malformed("1e5", "exponent notation is not supported").to_string(),
            "malformed decimal literal \"1e5\": exponent notation is not supported"
        );
    }

    #[test]
    fn test_parse_error_classification() {
        assert!(NumericError::malformed("x", "bad").is_parse_error());
        assert!(NumericError::Unrepresentable {
            input: "1".repeat(40)
        }
        .is_parse_error());
        assert!(!NumericError::Overflow.is_parse_error());
        assert!(!NumericError::PrecisionLoss.is_parse_error());
    }
}
