//! Core domain types and helpers for the Salesboard dashboard.
//!
//! Hosts the table/series data model, the coerce-or-null parsers, column-name
//! normalization, shared number formatting, the error taxonomy, and the CLI
//! settings used by the binary.

pub mod coerce;
pub mod error;
pub mod formatting;
pub mod models;
pub mod normalize;
pub mod settings;
