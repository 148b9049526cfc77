//! Page-level view state: all tables plus the aggregate toggle label.

use crate::config::labels;
use crate::models::{Table, TableId};

/// Text of the global "Show All" / "Hide All" control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AggregateLabel {
    #[default]
    ShowAll,
    HideAll,
}

impl AggregateLabel {
    pub fn text(self) -> &'static str {
        match self {
            Self::ShowAll => labels::SHOW_ALL,
            Self::HideAll => labels::HIDE_ALL,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Self::ShowAll => Self::HideAll,
            Self::HideAll => Self::ShowAll,
        }
    }
}

/// Every table on the page, in document order, and the aggregate label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TablePage {
    pub tables: Vec<Table>,
    pub label: AggregateLabel,
}

impl TablePage {
    pub fn new(tables: Vec<Table>, label: AggregateLabel) -> Self {
        Self { tables, label }
    }

    pub fn table_mut(&mut self, id: &TableId) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| &t.id == id)
    }

    pub fn ids(&self) -> Vec<TableId> {
        self.tables.iter().map(|t| t.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_label() {
        assert_eq!(AggregateLabel::ShowAll.inverse(), AggregateLabel::HideAll);
        assert_eq!(AggregateLabel::HideAll.inverse().text(), "Show All");
    }

    #[test]
    fn test_table_lookup() {
        let mut page = TablePage::new(
            vec![Table::new("a", vec![], vec![]), Table::new("b", vec![], vec![])],
            AggregateLabel::ShowAll,
        );
        assert!(page.table_mut(&TableId::from("b")).is_some());
        assert!(page.table_mut(&TableId::from("c")).is_none());
        assert_eq!(page.ids(), vec![TableId::from("a"), TableId::from("b")]);
    }
}
