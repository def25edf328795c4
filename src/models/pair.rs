//! Pair overlap model.
//!
//! A computed overlap between two assignment records on the same project,
//! ordered by its day count so the engine can keep the maximal pair.

use super::AssignmentRecord;

/// The overlap between two assignment records.
///
/// Borrows the two records it was computed from; only the maximal pair per
/// scope outlives the search that produced it.
///
/// Ordering and equality consider `days` alone: two pairs with the same day
/// count compare equal regardless of which records they reference. The
/// engine relies on this when applying its first-encountered tie-break.
#[derive(Debug, Clone, Copy)]
pub struct PairOverlap<'a> {
    /// The record appearing first in the engine's sorted order.
    pub employee_1: &'a AssignmentRecord,
    /// The record appearing second in the engine's sorted order.
    pub employee_2: &'a AssignmentRecord,
    /// Whole days the two assignments overlapped.
    pub days: i64,
}

impl<'a> PairOverlap<'a> {
    /// Computes the overlap between two records.
    ///
    /// The formula is direction-sensitive and callers pass records in the
    /// engine's sorted order (`date_from` ascending, then `days`):
    ///
    /// - `employee_1` ends before `employee_2` starts: 0 days;
    /// - `employee_1` ends within `employee_2`'s interval: days from
    ///   `employee_2.date_from` to `employee_1.date_to`;
    /// - otherwise: `employee_2`'s own full duration.
    ///
    /// With sorted inputs the result equals the calendar intersection of
    /// the two intervals; with unsorted inputs the final branch reports
    /// `employee_2`'s duration even where the intervals intersect for
    /// fewer days.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use overlap_engine::models::{AssignmentRecord, PairOverlap};
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    /// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    ///
    /// let first = AssignmentRecord::new(1, 10, date(2020, 1, 1), Some(date(2020, 1, 6)), today);
    /// let second = AssignmentRecord::new(2, 10, date(2020, 1, 2), Some(date(2020, 1, 8)), today);
    ///
    /// let pair = PairOverlap::new(&first, &second);
    /// assert_eq!(pair.days, 4);
    /// ```
    pub fn new(employee_1: &'a AssignmentRecord, employee_2: &'a AssignmentRecord) -> Self {
        let days = if employee_1.date_to < employee_2.date_from {
            0
        } else if employee_1.date_to <= employee_2.date_to {
            (employee_1.date_to - employee_2.date_from).num_days()
        } else {
            (employee_2.date_to - employee_2.date_from).num_days()
        };

        Self {
            employee_1,
            employee_2,
            days,
        }
    }
}

impl PartialEq for PairOverlap<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.days == other.days
    }
}

impl Eq for PairOverlap<'_> {}

impl PartialOrd for PairOverlap<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PairOverlap<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.days.cmp(&other.days)
    }
}
