//! Terminal UI layer for Salesboard.
//!
//! Provides themes, the dashboard chart view, the summary table view, static
//! PNG plot export, and the main application event loop built on top of
//! [`ratatui`].

pub mod app;
pub mod chart_view;
pub mod components;
pub mod plot;
pub mod table_view;
pub mod themes;

pub use board_core as core;
