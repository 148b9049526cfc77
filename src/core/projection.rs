//! Pure projection of the page state onto element ids, classes and styles.
//!
//! Components render exclusively from these values, so what the browser
//! shows is always a function of the current [`TablePage`].

use crate::config::{dom_ids, glyphs, icon_classes, style};
use crate::models::{SortIcon, Table, TablePage, ToggleGlyph, Visibility};

/// `display` values of one header's three icons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconDisplay {
    pub filter: &'static str,
    pub ascending: &'static str,
    pub descending: &'static str,
}

impl IconDisplay {
    fn of(icon: SortIcon) -> Self {
        let show = |wanted| {
            if icon == wanted {
                style::DISPLAY_INITIAL
            } else {
                style::DISPLAY_NONE
            }
        };
        Self {
            filter: show(SortIcon::Neutral),
            ascending: show(SortIcon::Ascending),
            descending: show(SortIcon::Descending),
        }
    }

    /// Number of icons currently displayed.
    #[cfg(test)]
    fn visible_count(&self) -> usize {
        [self.filter, self.ascending, self.descending]
            .iter()
            .filter(|d| **d == style::DISPLAY_INITIAL)
            .count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderView {
    pub index: usize,
    pub label: String,
    pub tooltip: Option<String>,
    /// `None` for headers rendered without icons.
    pub icons: Option<IconDisplay>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub id: String,
    pub toggle_id: String,
    pub title: Option<String>,
    /// `display` style of the table element.
    pub display: &'static str,
    pub glyph: ToggleGlyph,
    pub glyph_class: &'static str,
    pub headers: Vec<HeaderView>,
    /// Row keys (original positions) with their cells, in display order.
    pub rows: Vec<(usize, Vec<String>)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub toggle_all_id: &'static str,
    pub label: &'static str,
    pub tables: Vec<TableView>,
}

/// Element id of a table's toggle affordance.
pub fn toggle_id(table_id: &str) -> String {
    format!("{}{}", table_id, dom_ids::TOGGLE_SUFFIX)
}

pub fn display_value(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Shown => style::DISPLAY_SHOWN,
        Visibility::Hidden => style::DISPLAY_NONE,
    }
}

pub fn glyph_class(glyph: ToggleGlyph) -> &'static str {
    match glyph {
        ToggleGlyph::Hide => glyphs::HIDE_TABLE,
        ToggleGlyph::Show => glyphs::SHOW_TABLE,
    }
}

/// Class names identifying each header icon.
pub fn icon_class(icon: SortIcon) -> &'static str {
    match icon {
        SortIcon::Neutral => icon_classes::FILTER,
        SortIcon::Ascending => icon_classes::UP_ARROW,
        SortIcon::Descending => icon_classes::DOWN_ARROW,
    }
}

pub fn project_table(table: &Table) -> TableView {
    let glyph = table.visibility.glyph();
    TableView {
        id: table.id.to_string(),
        toggle_id: toggle_id(table.id.as_str()),
        title: table.title.clone(),
        display: display_value(table.visibility),
        glyph,
        glyph_class: glyph_class(glyph),
        headers: table
            .header
            .iter()
            .enumerate()
            .map(|(index, h)| HeaderView {
                index,
                label: h.label.clone(),
                tooltip: h.tooltip.clone(),
                icons: h.icon.map(IconDisplay::of),
            })
            .collect(),
        rows: table
            .rows
            .iter()
            .map(|r| (r.id.0, r.cells.clone()))
            .collect(),
    }
}

pub fn project(page: &TablePage) -> PageView {
    PageView {
        toggle_all_id: dom_ids::TOGGLE_ALL,
        label: page.label.text(),
        tables: page.tables.iter().map(project_table).collect(),
    }
}
