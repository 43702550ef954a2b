//! Data ingestion layer for Salesboard.
//!
//! Responsible for decoding uploaded CSV/XLSX bytes into tables, validating
//! the expected column sets, computing the grouped sales sums, and running
//! the top-level render pipeline.

pub mod aggregate;
pub mod loader;
pub mod pipeline;
pub mod schema;

pub use board_core as core;
