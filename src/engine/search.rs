//! Longest-pair search.
//!
//! The pair search is intentionally quadratic per project group. The
//! reported pair on ties depends on the enumeration order of candidates,
//! so the scan order below is part of the contract and must not be
//! replaced by a sweep or interval tree without redefining the tie-break.

use crate::models::{AssignmentRecord, PairOverlap};

use super::grouping::group_by_project;

/// Finds the longest-overlapping pair among records of one project group.
///
/// The group is stable-sorted by `(date_from, days)` ascending, then every
/// pair `(i, j)` with `i < j` is examined in order. A candidate replaces
/// the current maximum only when its overlap is strictly greater, so ties
/// keep the first-encountered pair.
///
/// Returns `None` for groups of fewer than two records.
pub fn longest_pair_among<'a>(records: &[&'a AssignmentRecord]) -> Option<PairOverlap<'a>> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| (record.date_from, record.days));

    let mut longest: Option<PairOverlap<'a>> = None;

    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            let candidate = PairOverlap::new(sorted[i], sorted[j]);

            match &longest {
                Some(current) if *current >= candidate => {}
                _ => longest = Some(candidate),
            }
        }
    }

    longest
}

/// Computes the longest pair for every project group.
///
/// Groups appear in first-occurrence order of their project id; groups with
/// fewer than two records yield `None`.
pub fn longest_pair_per_project(
    records: &[AssignmentRecord],
) -> Vec<(i64, Option<PairOverlap<'_>>)> {
    group_by_project(records)
        .into_iter()
        .map(|(project_id, members)| (project_id, longest_pair_among(&members)))
        .collect()
}

/// Finds the longest pair across all projects.
///
/// Iterates the per-project results in group order and keeps the maximum;
/// ties keep the earlier group's pair.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use overlap_engine::engine::global_longest_pair;
/// use overlap_engine::models::AssignmentRecord;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let records = vec![
///     AssignmentRecord::new(143, 12, date(2013, 11, 1), Some(date(2014, 1, 5)), today),
///     AssignmentRecord::new(218, 12, date(2013, 12, 6), Some(date(2014, 4, 29)), today),
/// ];
///
/// let pair = global_longest_pair(&records).unwrap();
/// assert_eq!((pair.employee_1.emp_id, pair.employee_2.emp_id, pair.days), (143, 218, 30));
/// ```
pub fn global_longest_pair(records: &[AssignmentRecord]) -> Option<PairOverlap<'_>> {
    let mut longest: Option<PairOverlap<'_>> = None;

    for (_, pair) in longest_pair_per_project(records) {
        let Some(candidate) = pair else { continue };

        match &longest {
            Some(current) if *current >= candidate => {}
            _ => longest = Some(candidate),
        }
    }

    longest
}
