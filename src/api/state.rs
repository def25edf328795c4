//! Application state for the overlap engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};

use crate::models::AssignmentRecord;

/// Shared application state.
///
/// Holds the currently loaded dataset, if any. One dataset is held at a
/// time; uploading a new one replaces the previous dataset wholesale.
#[derive(Clone, Default)]
pub struct AppState {
    records: Arc<RwLock<Option<Vec<AssignmentRecord>>>>,
}

impl AppState {
    /// Creates an application state with no dataset loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current dataset with freshly loaded records.
    pub async fn replace(&self, records: Vec<AssignmentRecord>) {
        *self.records.write().await = Some(records);
    }

    /// Returns a read guard over the current dataset.
    pub async fn records(&self) -> RwLockReadGuard<'_, Option<Vec<AssignmentRecord>>> {
        self.records.read().await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_state_starts_with_no_dataset() {
        let state = AppState::new();
        assert!(state.records().await.is_none());
    }

    #[tokio::test]
    async fn test_replace_swaps_dataset_wholesale() {
        let state = AppState::new();
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        state
            .replace(vec![
                AssignmentRecord::new(1, 10, date, Some(date), today),
                AssignmentRecord::new(2, 10, date, Some(date), today),
            ])
            .await;
        assert_eq!(state.records().await.as_ref().map(Vec::len), Some(2));

        state
            .replace(vec![AssignmentRecord::new(3, 20, date, Some(date), today)])
            .await;

        let guard = state.records().await;
        let records = guard.as_ref().expect("dataset loaded");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].emp_id, 3);
    }
}
