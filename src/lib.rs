//! Longest working-pair engine for employee project assignment rosters.
//!
//! This crate ingests tabular records describing employee-to-project
//! assignments and computes, per project and overall, which pair of
//! employees overlapped on the same project for the longest span of time.

#![warn(missing_docs)]

pub mod api;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod models;
pub mod parsing;
