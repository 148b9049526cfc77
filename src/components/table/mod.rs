//! Table section components.
//!
//! - [`TableSection`] - heading with toggle affordance and reset button, then the table
//! - [`SortHeader`] - a header cell with its three sort icons

mod header;
mod section;

pub use header::SortHeader;
pub use section::TableSection;
