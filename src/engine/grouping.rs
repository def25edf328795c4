//! Record grouping and lookup helpers.

use crate::models::AssignmentRecord;

/// Groups records by project id.
///
/// Records keep their first-seen order within each group, and the groups
/// themselves are sequenced by first occurrence of their project id. The
/// group sequence is a `Vec` of pairs rather than a hash map so downstream
/// tie-breaks see a stable iteration order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use overlap_engine::engine::group_by_project;
/// use overlap_engine::models::AssignmentRecord;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let records = vec![
///     AssignmentRecord::new(1, 12, date(2020, 1, 1), Some(date(2020, 2, 1)), today),
///     AssignmentRecord::new(2, 10, date(2020, 1, 1), Some(date(2020, 2, 1)), today),
///     AssignmentRecord::new(3, 12, date(2020, 1, 1), Some(date(2020, 2, 1)), today),
/// ];
///
/// let groups = group_by_project(&records);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].0, 12);
/// assert_eq!(groups[0].1.len(), 2);
/// assert_eq!(groups[1].0, 10);
/// ```
pub fn group_by_project(records: &[AssignmentRecord]) -> Vec<(i64, Vec<&AssignmentRecord>)> {
    let mut groups: Vec<(i64, Vec<&AssignmentRecord>)> = Vec::new();

    for record in records {
        match groups.iter_mut().find(|(id, _)| *id == record.project_id) {
            Some((_, members)) => members.push(record),
            None => groups.push((record.project_id, vec![record])),
        }
    }

    groups
}

/// Returns the records belonging to one project, in dataset order.
pub fn by_project_id(records: &[AssignmentRecord], project_id: i64) -> Vec<&AssignmentRecord> {
    records
        .iter()
        .filter(|record| record.project_id == project_id)
        .collect()
}

/// Returns the records belonging to one employee, in dataset order.
pub fn by_employee_id(records: &[AssignmentRecord], emp_id: i64) -> Vec<&AssignmentRecord> {
    records
        .iter()
        .filter(|record| record.emp_id == emp_id)
        .collect()
}
