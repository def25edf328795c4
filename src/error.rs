//! Error types for the overlap engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions in date parsing, record validation, and
//! dataset ingestion.

use thiserror::Error;

/// Error raised when a raw date string cannot be parsed.
///
/// # Example
///
/// ```
/// use overlap_engine::error::DateFormatError;
///
/// let error = DateFormatError::Structure {
///     raw: "not a date".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "No three-token date structure found in 'not a date'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum DateFormatError {
    /// The string does not contain three alphanumeric tokens separated by
    /// at most three separator characters each.
    #[error("No three-token date structure found in '{raw}'")]
    Structure {
        /// The raw input string.
        raw: String,
    },

    /// No pattern in the ordered format list parsed the normalized
    /// candidate; carries the last attempted pattern's failure.
    #[error("Unable to parse date '{candidate}': {message}")]
    Unparsed {
        /// The normalized `token-token-token` candidate string.
        candidate: String,
        /// A description of the last pattern's parse failure.
        message: String,
    },
}

/// The underlying cause of a field validation failure.
#[derive(Debug, Error)]
pub enum ValidationCause {
    /// The field was not a valid integer literal.
    #[error(transparent)]
    Integer(#[from] std::num::ParseIntError),

    /// The field was not a parseable date.
    #[error(transparent)]
    Date(#[from] DateFormatError),

    /// The raw record did not carry the expected column at all.
    #[error("column '{column}' is missing from the record")]
    MissingColumn {
        /// The external column name that was absent.
        column: String,
    },
}

/// Error raised when a raw record field fails validation.
///
/// Carries the internal field name, the raw value, and the underlying
/// cause, so bulk ingestion can log exactly which field of which row was
/// rejected.
#[derive(Debug, Error)]
#[error("Unable to validate {field} with value '{value}': {cause}")]
pub struct ValidationError {
    /// The internal name of the field that failed.
    pub field: &'static str,
    /// The raw value that was rejected.
    pub value: String,
    /// The underlying parse failure.
    #[source]
    pub cause: ValidationCause,
}

impl ValidationError {
    /// Creates a validation error for the given field and raw value.
    pub fn new(
        field: &'static str,
        value: impl Into<String>,
        cause: impl Into<ValidationCause>,
    ) -> Self {
        Self {
            field,
            value: value.into(),
            cause: cause.into(),
        }
    }
}

/// Error raised when a dataset's header makes ingestion impossible.
///
/// Data rows never produce this error; invalid rows are skipped during
/// ingestion and only reduce the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset text contained no header row.
    #[error("Dataset has no header row")]
    Empty,

    /// A required column was absent from the header row.
    #[error("Dataset header is missing required column '{column}'")]
    MissingHeader {
        /// The external column name that was not found.
        column: String,
    },
}

/// A type alias for Results that return ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A type alias for Results that return DatasetError.
pub type DatasetResult<T> = Result<T, DatasetError>;
