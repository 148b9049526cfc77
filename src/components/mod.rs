//! UI components built with Leptos.
//!
//! - [`ReportPage`] - Page heading, aggregate toggle and all tables
//! - [`table`] - A single table with its toggle, reset and sortable headers
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
mod report;
pub mod table;

pub use report::ReportPage;
