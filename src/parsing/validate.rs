//! Field validation for raw assignment records.
//!
//! The original one-class-per-field validators collapse to a small set of
//! pure functions keyed by field kind. Each function reports the failing
//! field by its internal name and wraps the underlying parse error.

use chrono::NaiveDate;

use crate::error::{ValidationError, ValidationResult};

use super::date::parse_date;

/// Validates an identifier field: the string must hold only an integer
/// literal (surrounding whitespace is tolerated).
pub fn validate_id(field: &'static str, value: &str) -> ValidationResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|cause| ValidationError::new(field, value, cause))
}

/// Validates a required date field.
pub fn validate_date(field: &'static str, value: &str) -> ValidationResult<NaiveDate> {
    parse_date(value).map_err(|cause| ValidationError::new(field, value, cause))
}

/// Validates an optional end-date field.
///
/// An empty string or the literal token `null` (case-insensitive) yields
/// `None`; the caller substitutes the current processing date. Anything else
/// must parse as a date.
pub fn validate_end_date(field: &'static str, value: &str) -> ValidationResult<Option<NaiveDate>> {
    if value.is_empty() || value.eq_ignore_ascii_case("null") {
        return Ok(None);
    }

    validate_date(field, value).map(Some)
}

/// Validates and coerces one raw record's four fields.
///
/// Checks run in field order `emp_id`, `project_id`, `date_from`, `date_to`;
/// the first failure is returned and identifies its field.
///
/// # Examples
///
/// ```
/// use overlap_engine::parsing::validate_record;
///
/// let (emp_id, project_id, date_from, date_to) =
///     validate_record("143", "12", "2013-11-01", "null").unwrap();
/// assert_eq!(emp_id, 143);
/// assert_eq!(project_id, 12);
/// assert_eq!(date_from.to_string(), "2013-11-01");
/// assert!(date_to.is_none());
/// ```
pub fn validate_record(
    emp_id: &str,
    project_id: &str,
    date_from: &str,
    date_to: &str,
) -> ValidationResult<(i64, i64, NaiveDate, Option<NaiveDate>)> {
    let emp_id = validate_id("emp_id", emp_id)?;
    let project_id = validate_id("project_id", project_id)?;
    let date_from = validate_date("date_from", date_from)?;
    let date_to = validate_end_date("date_to", date_to)?;

    Ok((emp_id, project_id, date_from, date_to))
}
