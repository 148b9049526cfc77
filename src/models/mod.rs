//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Table`], [`HeaderCell`] - Table contents
//! - [`SortIcon`], [`Visibility`], [`ToggleGlyph`] - Per-table view state
//! - [`TablePage`], [`AggregateLabel`] - Page-wide state

mod page;
mod table;

pub use page::{AggregateLabel, TablePage};
pub use table::{HeaderCell, SortIcon, Table, TableId, ToggleGlyph, Visibility};
