//! Assignment record model.
//!
//! One validated employee-project-interval record, constructed from a raw
//! roster row and immutable thereafter.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationCause, ValidationError, ValidationResult};
use crate::parsing::validate_record;

/// Rename table from the external roster column names to internal field
/// names. Raw rows are keyed by the external names.
pub const FIELD_MAP: [(&str, &str); 4] = [
    ("EmpID", "emp_id"),
    ("ProjectID", "project_id"),
    ("DateFrom", "date_from"),
    ("DateTo", "date_to"),
];

/// One employee's tenure on one project.
///
/// `days` is derived at construction as `date_to - date_from` in whole days
/// and may be negative for inverted intervals; such records carry no
/// workable time but are kept in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// The employee identifier.
    pub emp_id: i64,
    /// The project identifier.
    pub project_id: i64,
    /// The first day of the assignment.
    pub date_from: NaiveDate,
    /// The last day of the assignment. Open-ended assignments get the
    /// processing date supplied at construction.
    pub date_to: NaiveDate,
    /// Whole days between `date_from` and `date_to`.
    pub days: i64,
}

impl AssignmentRecord {
    /// Creates a record from already-validated fields.
    ///
    /// An absent end date defaults to `today`, giving open-ended
    /// assignments "still active" semantics: their duration depends on the
    /// processing date the caller injects.
    pub fn new(
        emp_id: i64,
        project_id: i64,
        date_from: NaiveDate,
        date_to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let date_to = date_to.unwrap_or(today);

        Self {
            emp_id,
            project_id,
            date_from,
            date_to,
            days: (date_to - date_from).num_days(),
        }
    }

    /// Builds a record from a raw roster row keyed by external column names.
    ///
    /// The row's fields are renamed per [`FIELD_MAP`], validated in field
    /// order, and coerced. The processing date is an explicit parameter so
    /// repeated runs over the same roster are reproducible.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] identifying the first field that is
    /// missing or fails to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use chrono::NaiveDate;
    /// use overlap_engine::models::AssignmentRecord;
    ///
    /// let raw: HashMap<String, String> = [
    ///     ("EmpID", "143"),
    ///     ("ProjectID", "12"),
    ///     ("DateFrom", "2013-11-01"),
    ///     ("DateTo", "2014-01-05"),
    /// ]
    /// .into_iter()
    /// .map(|(k, v)| (k.to_string(), v.to_string()))
    /// .collect();
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    /// let record = AssignmentRecord::from_raw_record(&raw, today).unwrap();
    /// assert_eq!(record.emp_id, 143);
    /// assert_eq!(record.days, 65);
    /// ```
    pub fn from_raw_record(
        raw: &HashMap<String, String>,
        today: NaiveDate,
    ) -> ValidationResult<Self> {
        let emp_id = raw_field(raw, 0)?;
        let project_id = raw_field(raw, 1)?;
        let date_from = raw_field(raw, 2)?;
        let date_to = raw_field(raw, 3)?;

        let (emp_id, project_id, date_from, date_to) =
            validate_record(emp_id, project_id, date_from, date_to)?;

        Ok(Self::new(emp_id, project_id, date_from, date_to, today))
    }
}

/// Looks up one external column in a raw row by its [`FIELD_MAP`] slot.
fn raw_field(raw: &HashMap<String, String>, slot: usize) -> Result<&str, ValidationError> {
    let (external, internal) = FIELD_MAP[slot];

    raw.get(external).map(String::as_str).ok_or_else(|| {
        ValidationError::new(
            internal,
            "",
            ValidationCause::MissingColumn {
                column: external.to_string(),
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn raw_row(emp: &str, project: &str, from: &str, to: &str) -> HashMap<String, String> {
        [
            ("EmpID", emp),
            ("ProjectID", project),
            ("DateFrom", from),
            ("DateTo", to),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_from_raw_record_builds_full_record() {
        let record =
            AssignmentRecord::from_raw_record(&raw_row("143", "12", "2013-11-01", "2014-01-05"), date(2026, 8, 7))
                .unwrap();

        assert_eq!(record.emp_id, 143);
        assert_eq!(record.project_id, 12);
        assert_eq!(record.date_from, date(2013, 11, 1));
        assert_eq!(record.date_to, date(2014, 1, 5));
        assert_eq!(record.days, 65);
    }

    #[test]
    fn test_open_ended_record_defaults_to_processing_date() {
        let today = date(2014, 1, 1);
        let record =
            AssignmentRecord::from_raw_record(&raw_row("218", "10", "2013-12-01", "null"), today).unwrap();

        assert_eq!(record.date_to, today);
        assert_eq!(record.days, 31);
    }

    #[test]
    fn test_empty_end_date_defaults_to_processing_date() {
        let today = date(2014, 1, 1);
        let record =
            AssignmentRecord::from_raw_record(&raw_row("218", "10", "2013-12-01", ""), today).unwrap();

        assert_eq!(record.date_to, today);
    }

    #[test]
    fn test_inverted_interval_yields_negative_days() {
        let record =
            AssignmentRecord::from_raw_record(&raw_row("1", "1", "2020-01-10", "2020-01-01"), date(2026, 8, 7))
                .unwrap();

        assert_eq!(record.days, -9);
    }

    #[test]
    fn test_zero_length_interval_yields_zero_days() {
        let record =
            AssignmentRecord::from_raw_record(&raw_row("1", "1", "2020-01-10", "2020-01-10"), date(2026, 8, 7))
                .unwrap();

        assert_eq!(record.days, 0);
    }

    #[test]
    fn test_missing_column_fails_with_field_name() {
        let mut raw = raw_row("1", "1", "2020-01-01", "2020-01-02");
        raw.remove("DateTo");

        let error = AssignmentRecord::from_raw_record(&raw, date(2026, 8, 7)).unwrap_err();
        assert_eq!(error.field, "date_to");
        assert!(matches!(error.cause, ValidationCause::MissingColumn { .. }));
    }

    #[test]
    fn test_invalid_field_propagates_validation_error() {
        let error = AssignmentRecord::from_raw_record(
            &raw_row("abc", "1", "2020-01-01", ""),
            date(2026, 8, 7),
        )
        .unwrap_err();

        assert_eq!(error.field, "emp_id");
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = AssignmentRecord::new(143, 12, date(2013, 11, 1), Some(date(2014, 1, 5)), date(2026, 8, 7));

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: AssignmentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_record_serializes_expected_field_names() {
        let record = AssignmentRecord::new(143, 12, date(2013, 11, 1), Some(date(2014, 1, 5)), date(2026, 8, 7));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["emp_id"], 143);
        assert_eq!(value["project_id"], 12);
        assert_eq!(value["date_from"], "2013-11-01");
        assert_eq!(value["date_to"], "2014-01-05");
        assert_eq!(value["days"], 65);
    }
}
