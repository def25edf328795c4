//! Overlap computation over an assignment dataset.
//!
//! The engine is a set of pure functions over an explicitly supplied record
//! slice: grouping by project, the quadratic longest-pair search within a
//! group, the per-project and global maxima, and the linear lookup helpers
//! used by the query endpoints. The caller owns the dataset; nothing here
//! holds state.

mod grouping;
mod search;

pub use grouping::{by_employee_id, by_project_id, group_by_project};
pub use search::{global_longest_pair, longest_pair_among, longest_pair_per_project};
