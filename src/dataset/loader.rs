//! CSV roster ingestion.
//!
//! Parses CSV text with an `EmpID,ProjectID,DateFrom,DateTo` header into
//! assignment records. Ingestion is best-effort: a row that fails
//! validation is logged and skipped, never aborting the load. Only a
//! missing or garbled header fails the whole dataset.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{DatasetError, DatasetResult};
use crate::models::{AssignmentRecord, FIELD_MAP};

/// The outcome of loading one dataset.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// The records built from valid rows, in row order.
    pub records: Vec<AssignmentRecord>,
    /// Number of rows that produced a record.
    pub loaded: usize,
    /// Number of rows dropped by validation.
    pub skipped: usize,
}

/// Loads assignment records from CSV text.
///
/// The first non-empty line must be a header containing the four external
/// column names; column order is free and extra columns are ignored. Each
/// following non-empty line is validated and coerced into an
/// [`AssignmentRecord`]. Invalid rows are skipped with a warning and
/// counted in the outcome.
///
/// `today` is the processing date substituted for open-ended assignments;
/// the caller reads the clock once so a single load is internally
/// consistent.
///
/// Fields are comma-separated with surrounding whitespace trimmed. Quoted
/// fields are not interpreted: ids and dates never contain commas.
///
/// # Errors
///
/// Returns a [`DatasetError`] when the text has no header row or the
/// header lacks a required column.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use overlap_engine::dataset::load_records;
///
/// let csv = "\
/// EmpID,ProjectID,DateFrom,DateTo
/// 143,12,2013-11-01,2014-01-05
/// 218,12,2013-12-06,null
/// ";
///
/// let today = NaiveDate::from_ymd_opt(2014, 4, 29).unwrap();
/// let outcome = load_records(csv, today).unwrap();
/// assert_eq!(outcome.loaded, 2);
/// assert_eq!(outcome.skipped, 0);
/// assert_eq!(outcome.records[1].date_to, today);
/// ```
pub fn load_records(csv_text: &str, today: NaiveDate) -> DatasetResult<LoadOutcome> {
    let mut lines = csv_text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines.next().ok_or(DatasetError::Empty)?;
    let indices = column_indices(header)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line_number, line) in lines {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        let mut raw: HashMap<String, String> = HashMap::new();
        for ((external, _), index) in FIELD_MAP.iter().zip(indices) {
            if let Some(value) = fields.get(index) {
                raw.insert((*external).to_string(), (*value).to_string());
            }
        }

        match AssignmentRecord::from_raw_record(&raw, today) {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(row = line_number + 1, error = %error, "Skipping invalid row");
                skipped += 1;
            }
        }
    }

    Ok(LoadOutcome {
        loaded: records.len(),
        records,
        skipped,
    })
}

/// Resolves the position of each required external column in the header.
fn column_indices(header: &str) -> DatasetResult<[usize; 4]> {
    let columns: Vec<&str> = header
        .trim_start_matches('\u{feff}')
        .split(',')
        .map(str::trim)
        .collect();

    let mut indices = [0usize; 4];
    for (slot, (external, _)) in indices.iter_mut().zip(FIELD_MAP) {
        *slot = columns
            .iter()
            .position(|column| *column == external)
            .ok_or_else(|| DatasetError::MissingHeader {
                column: external.to_string(),
            })?;
    }

    Ok(indices)
}
