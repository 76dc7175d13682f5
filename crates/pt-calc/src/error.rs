//! Calculator errors.

use crate::input::Field;
use pt_core::PtError;
use thiserror::Error;

/// Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that abort a calculation. Both are terminal for the invocation;
/// the caller corrects the input and re-submits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A required field was left empty; reported per-field, before parsing.
    #[error("Enter the {field}")]
    MissingField { field: Field },

    /// A provided field is not numeric. Single generic message, no partial
    /// result.
    #[error("Input data could not be read as a number")]
    InputFormat,

    /// A typed-API caller passed NaN or an infinity.
    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },
}

impl From<PtError> for CalcError {
    fn from(err: PtError) -> Self {
        match err {
            PtError::NonFinite { what, .. } => CalcError::NonFinite { what },
            PtError::InvalidArg { .. } | PtError::UnknownUnit { .. } => CalcError::InputFormat,
        }
    }
}
