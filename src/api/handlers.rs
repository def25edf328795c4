//! HTTP request handlers for the overlap engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! handlers own dataset lifetime (upload replaces the previous dataset)
//! and delegate every computation to the pure engine functions.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dataset::load_records;
use crate::engine::{
    by_employee_id, by_project_id, global_longest_pair, longest_pair_among,
    longest_pair_per_project,
};
use crate::models::AssignmentRecord;

use super::response::{
    ApiError, ApiErrorResponse, IngestSummary, PairPayload, ProjectPairPayload, ProjectView,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/dataset", post(upload_dataset))
        .route("/records", get(list_records))
        .route("/employees/:id", get(records_by_employee))
        .route("/projects/:id", get(project_view))
        .route("/pair", get(longest_pair))
        .route("/pairs", get(pairs_by_project))
        .with_state(state)
}

/// Handler for POST /dataset.
///
/// Accepts CSV text, loads it into records, and replaces the current
/// dataset. Invalid rows reduce the dataset; only a bad header is an
/// error.
async fn upload_dataset(State(state): State<AppState>, body: String) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing dataset upload");

    let today = Local::now().date_naive();
    let outcome = match load_records(&body, today) {
        Ok(outcome) => outcome,
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "Rejected dataset");
            let response: ApiErrorResponse = error.into();
            return response.into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        loaded = outcome.loaded,
        skipped = outcome.skipped,
        "Dataset replaced"
    );

    let summary = IngestSummary {
        loaded: outcome.loaded,
        skipped: outcome.skipped,
    };
    state.replace(outcome.records).await;

    (StatusCode::OK, Json(summary)).into_response()
}

/// Handler for GET /records.
///
/// Returns every loaded record; an empty list when no dataset is loaded.
async fn list_records(State(state): State<AppState>) -> Json<Vec<AssignmentRecord>> {
    let guard = state.records().await;
    Json(guard.as_ref().cloned().unwrap_or_default())
}

/// Handler for GET /employees/:id.
///
/// Returns the records for one employee in dataset order.
async fn records_by_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<AssignmentRecord>>, ApiErrorResponse> {
    let Path(emp_id) = id.map_err(invalid_id)?;

    let guard = state.records().await;
    let records = match guard.as_deref() {
        Some(records) => by_employee_id(records, emp_id)
            .into_iter()
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    Ok(Json(records))
}

/// Handler for GET /projects/:id.
///
/// Returns the records for one project together with that project's
/// longest pair.
async fn project_view(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProjectView>, ApiErrorResponse> {
    let Path(project_id) = id.map_err(invalid_id)?;

    let guard = state.records().await;
    let view = match guard.as_deref() {
        Some(records) => {
            let members = by_project_id(records, project_id);
            let pair = longest_pair_among(&members);
            ProjectView {
                pair: PairPayload::from_pair(pair.as_ref()),
                records: members.into_iter().cloned().collect(),
            }
        }
        None => ProjectView {
            records: Vec::new(),
            pair: PairPayload::empty(),
        },
    };

    Ok(Json(view))
}

/// Handler for GET /pair.
///
/// Returns the global longest pair, with null placeholders when no dataset
/// is loaded or no pair exists.
async fn longest_pair(State(state): State<AppState>) -> Json<PairPayload> {
    let guard = state.records().await;
    let payload = match guard.as_deref() {
        Some(records) => PairPayload::from_pair(global_longest_pair(records).as_ref()),
        None => PairPayload::empty(),
    };

    Json(payload)
}

/// Handler for GET /pairs.
///
/// Returns each project's longest pair, projects in first-occurrence
/// order.
async fn pairs_by_project(State(state): State<AppState>) -> Json<Vec<ProjectPairPayload>> {
    let guard = state.records().await;
    let payload = match guard.as_deref() {
        Some(records) => longest_pair_per_project(records)
            .into_iter()
            .map(|(project_id, pair)| ProjectPairPayload {
                project_id,
                pair: PairPayload::from_pair(pair.as_ref()),
            })
            .collect(),
        None => Vec::new(),
    };

    Json(payload)
}

/// Maps a path-extractor rejection to a JSON error response.
fn invalid_id(rejection: PathRejection) -> ApiErrorResponse {
    warn!(error = %rejection, "Invalid path identifier");
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error: ApiError::invalid_id(rejection.body_text()),
    }
}
