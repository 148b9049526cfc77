//! Core view-state logic for the report page.
//!
//! This module provides:
//! - [`VisibilityController`] per-table show/hide and the aggregate label
//! - [`SortController`] column sorting and header icon state
//! - [`projection`] mapping of page state onto element ids, classes and styles
//! - [`Report`] loading of the page's tables from the embedded description

pub mod error;
pub mod projection;
mod report;
mod sort;
mod summary;
mod visibility;

pub use error::TableError;
pub use report::Report;
pub use sort::SortController;
pub use visibility::VisibilityController;
