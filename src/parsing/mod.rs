//! Parsing and validation of raw roster input.
//!
//! This module turns loosely-formatted strings into typed values: a
//! permissive multi-pattern date parser and the per-field validators used
//! when constructing assignment records.

mod date;
mod validate;

pub use date::{DATE_PATTERNS, parse_date};
pub use validate::{validate_date, validate_end_date, validate_id, validate_record};
