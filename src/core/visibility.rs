//! Per-table show/hide state and the aggregate "Show All" / "Hide All" label.

use leptos::logging::log;

use crate::core::error::TableError;
use crate::models::{AggregateLabel, TableId, TablePage, Visibility};

/// Show/hide operations over every table on a page.
pub trait VisibilityController {
    /// Reveals or hides every table, driven by the current aggregate label.
    fn toggle_all(&mut self) -> Result<(), TableError>;

    /// Sets one table's visibility; `None` flips the current state.
    fn set_visibility(&mut self, id: &TableId, show: Option<bool>) -> Result<(), TableError>;

    /// Flips one table's visibility.
    fn toggle(&mut self, id: &TableId) -> Result<(), TableError>;

    /// `true` when no table is hidden.
    fn all_showing(&self) -> bool;

    /// `true` when no table is shown.
    fn all_hidden(&self) -> bool;
}

impl TablePage {
    /// Recomputes the aggregate label from the tables' flags.
    ///
    /// A mixed page keeps whatever label it had.
    fn sync_label(&mut self) {
        if self.all_showing() {
            self.label = AggregateLabel::HideAll;
        } else if self.all_hidden() {
            self.label = AggregateLabel::ShowAll;
        }
    }
}

impl VisibilityController for TablePage {
    fn toggle_all(&mut self) -> Result<(), TableError> {
        let reveal = self.label == AggregateLabel::ShowAll;
        log!(
            "toggle_all: {} {} tables",
            if reveal { "revealing" } else { "hiding" },
            self.tables.len()
        );

        // Provisional; each set_visibility below re-derives it.
        self.label = self.label.inverse();
        for id in self.ids() {
            self.set_visibility(&id, Some(reveal))?;
        }
        Ok(())
    }

    fn set_visibility(&mut self, id: &TableId, show: Option<bool>) -> Result<(), TableError> {
        let table = self
            .table_mut(id)
            .ok_or_else(|| TableError::NotFound { table: id.clone() })?;

        let show = show.unwrap_or(table.visibility.is_hidden());
        table.visibility = Visibility::from_show(show);

        self.sync_label();
        Ok(())
    }

    fn toggle(&mut self, id: &TableId) -> Result<(), TableError> {
        self.set_visibility(id, None)
    }

    fn all_showing(&self) -> bool {
        self.tables.iter().all(|t| t.visibility.is_shown())
    }

    fn all_hidden(&self) -> bool {
        self.tables.iter().all(|t| t.visibility.is_hidden())
    }
}
