//! Column sorting and header icon state.
//!
//! Each sortable header cycles Neutral -> Ascending -> Descending -> Neutral.
//! The state being entered decides the row order: Ascending and Descending
//! sort the data rows by the column's text (case-insensitive, stable), the
//! return to Neutral leaves the rows as they are.

use std::cmp::Reverse;

use leptos::logging::log;

use crate::core::error::TableError;
use crate::models::{SortIcon, Table, TableId, TablePage};

/// Sort and icon-reset operations over the tables of a page.
pub trait SortController {
    /// Forces every header of the table back to Neutral.
    ///
    /// Fails if any header lacks sort icons.
    fn reset_header_icons(&mut self, id: &TableId) -> Result<(), TableError>;

    /// Advances the column's icon cycle and reorders the data rows to match.
    ///
    /// Returns the icon now shown on the column.
    fn sort_column(&mut self, id: &TableId, column: usize) -> Result<SortIcon, TableError>;

    /// Resets the icon state of every header that has icons, skipping the rest.
    fn reset_table(&mut self, id: &TableId) -> Result<(), TableError>;
}

fn lookup<'a>(page: &'a mut TablePage, id: &TableId) -> Result<&'a mut Table, TableError> {
    page.table_mut(id)
        .ok_or_else(|| TableError::NotFound { table: id.clone() })
}

/// Case-insensitive sort key of a cell: lowercased, compared by code point.
fn sort_key(text: &str) -> String {
    text.to_lowercase()
}

/// Stable sort of the data rows by one column; each key is computed once.
fn order_rows(table: &mut Table, column: usize, direction: SortIcon) {
    match direction {
        SortIcon::Ascending => table.rows.sort_by_cached_key(|r| sort_key(r.cell(column))),
        SortIcon::Descending => table
            .rows
            .sort_by_cached_key(|r| Reverse(sort_key(r.cell(column)))),
        SortIcon::Neutral => {}
    }
}

impl SortController for TablePage {
    fn reset_header_icons(&mut self, id: &TableId) -> Result<(), TableError> {
        let table = lookup(self, id)?;
        if let Some(i) = table.header.iter().position(|h| !h.is_sortable()) {
            return Err(TableError::structural(
                id,
                format!("header {} has no sort icons", i),
            ));
        }

        for header in &mut table.header {
            header.icon = Some(SortIcon::Neutral);
        }
        Ok(())
    }

    fn sort_column(&mut self, id: &TableId, column: usize) -> Result<SortIcon, TableError> {
        let table = lookup(self, id)?;

        if table.header.is_empty() {
            return Err(TableError::structural(id, "missing header row"));
        }
        if column >= table.column_count() {
            return Err(TableError::OutOfRange {
                column,
                count: table.column_count(),
            });
        }
        let current = table.header[column]
            .icon
            .ok_or_else(|| TableError::structural(id, format!("header {} has no sort icons", column)))?;
        if table.rows.is_empty() {
            return Err(TableError::structural(id, "no data rows"));
        }

        let target = current.next();
        order_rows(table, column, target);

        for (i, header) in table.header.iter_mut().enumerate() {
            if i == column {
                header.icon = Some(target);
            } else if header.icon.is_some() {
                header.icon = Some(SortIcon::Neutral);
            }
        }

        log!("sort_column: {} column {} -> {}", id, column, target.label());
        Ok(target)
    }

    fn reset_table(&mut self, id: &TableId) -> Result<(), TableError> {
        let table = lookup(self, id)?;
        for header in table.header.iter_mut().filter(|h| h.is_sortable()) {
            header.icon = Some(SortIcon::Neutral);
        }
        Ok(())
    }
}
