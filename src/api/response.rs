//! Response types for the overlap engine API.
//!
//! This module defines the JSON payloads returned by the query endpoints
//! and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::models::{AssignmentRecord, PairOverlap};

/// Summary of one dataset upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestSummary {
    /// Rows that produced a record.
    pub loaded: usize,
    /// Rows dropped by validation.
    pub skipped: usize,
}

/// A longest-pair payload.
///
/// All fields are `null` when no dataset is loaded or the scope holds no
/// pair, so clients always receive the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairPayload {
    /// Employee id of the pair's first member.
    pub employee_1: Option<i64>,
    /// Employee id of the pair's second member.
    pub employee_2: Option<i64>,
    /// Whole days the pair overlapped.
    pub days: Option<i64>,
}

impl PairPayload {
    /// The placeholder payload with every field `null`.
    pub fn empty() -> Self {
        Self {
            employee_1: None,
            employee_2: None,
            days: None,
        }
    }

    /// Builds the payload for an optional pair result.
    pub fn from_pair(pair: Option<&PairOverlap<'_>>) -> Self {
        match pair {
            Some(pair) => Self {
                employee_1: Some(pair.employee_1.emp_id),
                employee_2: Some(pair.employee_2.emp_id),
                days: Some(pair.days),
            },
            None => Self::empty(),
        }
    }
}

/// Records and longest pair for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectView {
    /// The project's assignment records in dataset order.
    pub records: Vec<AssignmentRecord>,
    /// The project's longest pair.
    pub pair: PairPayload,
}

/// One project's entry in the per-project pair listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPairPayload {
    /// The project identifier.
    pub project_id: i64,
    /// The project's longest pair.
    pub pair: PairPayload,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an invalid path-identifier error response.
    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::new("INVALID_ID", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<DatasetError> for ApiErrorResponse {
    fn from(error: DatasetError) -> Self {
        match error {
            DatasetError::Empty => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_DATASET", "Dataset has no header row"),
            },
            DatasetError::MissingHeader { column } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATASET",
                    format!("Dataset header is missing required column '{}'", column),
                    format!("The header row must contain the column '{}'", column),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_empty_pair_payload_serializes_nulls() {
        let json = serde_json::to_value(PairPayload::empty()).unwrap();
        assert!(json["employee_1"].is_null());
        assert!(json["employee_2"].is_null());
        assert!(json["days"].is_null());
    }

    #[test]
    fn test_pair_payload_carries_employee_ids_and_days() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let today = date(2026, 8, 7);
        let first = AssignmentRecord::new(143, 12, date(2013, 11, 1), Some(date(2014, 1, 5)), today);
        let second = AssignmentRecord::new(218, 12, date(2013, 12, 6), Some(date(2014, 4, 29)), today);
        let pair = PairOverlap::new(&first, &second);

        let payload = PairPayload::from_pair(Some(&pair));
        assert_eq!(payload.employee_1, Some(143));
        assert_eq!(payload.employee_2, Some(218));
        assert_eq!(payload.days, Some(30));
    }

    #[test]
    fn test_missing_header_maps_to_bad_request() {
        let response: ApiErrorResponse = DatasetError::MissingHeader {
            column: "EmpID".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_DATASET");
    }

    #[test]
    fn test_api_error_skips_absent_details() {
        let json = serde_json::to_value(ApiError::new("INVALID_ID", "bad id")).unwrap();
        assert!(json.get("details").is_none());
    }
}
