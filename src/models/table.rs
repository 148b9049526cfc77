//! Table data types: rows, header cells and per-table view state.

use std::fmt;

/// Stable identifier of a table on the page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(String);

impl TableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TableId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TableId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Show/hide flag of a single table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Table takes part in normal document flow
    #[default]
    Shown,
    /// Table is collapsed (`display: none`)
    Hidden,
}

impl Visibility {
    pub fn from_show(show: bool) -> Self {
        if show { Self::Shown } else { Self::Hidden }
    }

    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }

    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }

    /// Glyph the table's toggle affordance must display.
    ///
    /// A shown table offers "hide", a hidden table offers "show".
    pub fn glyph(self) -> ToggleGlyph {
        match self {
            Self::Shown => ToggleGlyph::Hide,
            Self::Hidden => ToggleGlyph::Show,
        }
    }
}

/// Icon displayed by a table's toggle affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleGlyph {
    /// Click to hide (minus)
    Hide,
    /// Click to show (plus)
    Show,
}

/// The single visible sort icon of a header cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortIcon {
    /// Filter glyph, column unsorted
    #[default]
    Neutral,
    Ascending,
    Descending,
}

impl SortIcon {
    /// Next state of the header icon cycle.
    ///
    /// Neutral -> Ascending -> Descending -> Neutral
    pub fn next(self) -> Self {
        match self {
            Self::Neutral => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Neutral,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// A column header.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCell {
    pub label: String,
    pub tooltip: Option<String>,
    /// `None` when the column was rendered without sort icons.
    pub icon: Option<SortIcon>,
}

impl HeaderCell {
    /// Header with sort icons, starting Neutral.
    pub fn sortable(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tooltip: None,
            icon: Some(SortIcon::Neutral),
        }
    }

    /// Header without sort icons.
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tooltip: None,
            icon: None,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.icon.is_some()
    }
}

/// Identity of a data row: its position when the table was built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub id: RowId,
    pub cells: Vec<String>,
}

impl Row {
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

/// A table: one header row plus ordered data rows.
///
/// The header is stored apart from the data rows, so reordering rows can
/// never move it.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub id: TableId,
    pub title: Option<String>,
    pub header: Vec<HeaderCell>,
    pub rows: Vec<Row>,
    pub visibility: Visibility,
}

impl Table {
    /// Builds a table, assigning row ids in input order.
    pub fn new(id: impl Into<TableId>, header: Vec<HeaderCell>, data: Vec<Vec<String>>) -> Self {
        let rows = data
            .into_iter()
            .enumerate()
            .map(|(i, cells)| Row {
                id: RowId(i),
                cells,
            })
            .collect();

        Self {
            id: id.into(),
            title: None,
            header,
            rows,
            visibility: Visibility::Shown,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Cell texts of a column, top to bottom.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row.cell(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_icon_cycle() {
        let icon = SortIcon::default();
        assert_eq!(icon, SortIcon::Neutral);
        assert_eq!(icon.next(), SortIcon::Ascending);
        assert_eq!(icon.next().next(), SortIcon::Descending);
        assert_eq!(icon.next().next().next(), SortIcon::Neutral);
    }

    #[test]
    fn test_visibility_glyph() {
        assert_eq!(Visibility::Shown.glyph(), ToggleGlyph::Hide);
        assert_eq!(Visibility::Hidden.glyph(), ToggleGlyph::Show);
        assert_eq!(Visibility::from_show(false), Visibility::Hidden);
    }

    #[test]
    fn test_row_ids_follow_input_order() {
        let table = Table::new(
            "t",
            vec![HeaderCell::sortable("Name")],
            vec![vec!["b".into()], vec!["a".into()]],
        );
        let ids: Vec<_> = table.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RowId(0), RowId(1)]);
        assert_eq!(table.visibility, Visibility::Shown);
    }

    #[test]
    fn test_missing_cell_reads_empty() {
        let row = Row {
            id: RowId(0),
            cells: vec!["x".into()],
        };
        assert_eq!(row.cell(0), "x");
        assert_eq!(row.cell(3), "");
    }
}
