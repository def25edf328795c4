//! HTTP API module for the overlap engine.
//!
//! This module provides the REST endpoints for uploading an assignment
//! roster and querying records and longest working pairs.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, IngestSummary, PairPayload, ProjectPairPayload, ProjectView};
pub use state::AppState;
