//! Builds the page's tables from a TOML report description.
//!
//! ```toml
//! title = "Performance Metrics"
//! start_hidden = true
//!
//! [[tables]]
//! id = "parent_perf_table"
//! title = "Parent Performance Metrics"
//! header = ["index", "name", "ncall"]
//! columns = ["name", "ncall"]
//! rename = { ncall = "Total Calls" }
//! exclude = ["__exit__"]
//! exclude_column = "name"
//! data = [[1, "main", 3], [2, "work", 1]]
//!
//! [[tables]]
//! id = "overview_table"
//! summary_of = "parent_perf_table"
//! summary_columns = ["ncall"]
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Deserialize;

use crate::config::{DEFAULT_TITLE, EMPTY_TABLE_COLUMN, SORT_TOOLTIP};
use crate::core::error::ReportError;
use crate::core::summary::summarize;
use crate::models::{AggregateLabel, HeaderCell, Table, TablePage, Visibility};

/// A cell as written in the report; numbers and booleans are accepted as-is.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Text(s) => f.write_str(s),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_exclude_column() -> String {
    "name".to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct TableConfig {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Source column names, one per data cell.
    #[serde(default)]
    pub header: Vec<String>,
    /// Columns to render, in order; defaults to the whole header.
    #[serde(default)]
    pub columns: Option<Vec<String>>,
    /// Display label per source column name.
    #[serde(default)]
    pub rename: HashMap<String, String>,
    /// Rows whose `exclude_column` cell contains any of these (case-insensitive) are dropped.
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default = "default_exclude_column")]
    pub exclude_column: String,
    #[serde(default)]
    pub data: Vec<Vec<CellValue>>,
    /// Builds this table as a summary of another one.
    #[serde(default)]
    pub summary_of: Option<String>,
    #[serde(default)]
    pub summary_columns: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default = "default_true")]
    pub start_hidden: bool,
    #[serde(default)]
    pub tables: Vec<TableConfig>,
}

/// A loaded report: page metadata plus the initial table state.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub title: String,
    pub footer: Option<String>,
    pub page: TablePage,
}

impl Report {
    pub fn from_toml(source: &str) -> Result<Self, ReportError> {
        let config: ReportConfig = toml::from_str(source)?;
        build_report(config)
    }
}

/// A built table together with the source names of its columns.
struct Built {
    table: Table,
    source_names: Vec<String>,
}

/// First-pass result for one table entry.
enum Slot<'a> {
    Data(Built),
    Summary(&'a str),
}

fn header_cells(config: &TableConfig, names: &[String]) -> Vec<HeaderCell> {
    names
        .iter()
        .map(|name| {
            let label = config.rename.get(name).cloned().unwrap_or_else(|| name.clone());
            if config.sortable {
                HeaderCell::sortable(label).with_tooltip(SORT_TOOLTIP)
            } else {
                HeaderCell::plain(label)
            }
        })
        .collect()
}

fn contains_ignore_case(haystack: &str, needles: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    needles
        .iter()
        .any(|n| haystack.contains(&n.to_lowercase()))
}

fn column_position(config: &TableConfig, name: &str) -> Result<usize, ReportError> {
    config
        .header
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| ReportError::UnknownColumn {
            table: config.id.clone(),
            column: name.to_string(),
        })
}

fn build_data_table(config: &TableConfig, visibility: Visibility) -> Result<Built, ReportError> {
    if let Some((row, cells)) = config
        .data
        .iter()
        .enumerate()
        .find(|(_, cells)| config.header.is_empty() || cells.len() != config.header.len())
    {
        return Err(ReportError::RaggedRow {
            table: config.id.clone(),
            row,
            expected: config.header.len(),
            found: cells.len(),
        });
    }

    let empty = config.header.is_empty() && config.data.is_empty();
    let names: Vec<String> = match &config.columns {
        Some(columns) => columns.clone(),
        None if empty => vec![EMPTY_TABLE_COLUMN.to_string()],
        None => config.header.clone(),
    };

    // Positions of the selected columns inside each data row.
    let positions = if empty {
        Vec::new()
    } else {
        names
            .iter()
            .map(|name| column_position(config, name))
            .collect::<Result<Vec<_>, _>>()?
    };
    let excluded_at = if config.exclude.is_empty() {
        None
    } else {
        Some(column_position(config, &config.exclude_column)?)
    };

    let data = config
        .data
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
        .filter(|cells| match excluded_at {
            Some(at) => !contains_ignore_case(&cells[at], &config.exclude),
            None => true,
        })
        .map(|cells| positions.iter().map(|&p| cells[p].clone()).collect())
        .collect();

    Ok(Built {
        table: finish(config, header_cells(config, &names), data, visibility),
        source_names: names,
    })
}

fn build_summary_table(
    config: &TableConfig,
    source_id: &str,
    tables: &[TableConfig],
    slots: &[Slot<'_>],
    visibility: Visibility,
) -> Result<Table, ReportError> {
    let source = slots
        .iter()
        .zip(tables)
        .find(|(_, t)| t.id == source_id)
        .map(|(slot, _)| slot)
        .ok_or_else(|| ReportError::UnknownSummarySource {
            table: config.id.clone(),
            source_table: source_id.to_string(),
        })?;
    let Slot::Data(source) = source else {
        return Err(ReportError::NestedSummary {
            table: config.id.clone(),
            source_table: source_id.to_string(),
        });
    };

    let columns = config
        .summary_columns
        .iter()
        .map(|name| {
            let index = source
                .source_names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| ReportError::UnknownColumn {
                    table: config.id.clone(),
                    column: name.clone(),
                })?;
            Ok((index, source.table.header[index].label.clone()))
        })
        .collect::<Result<Vec<_>, ReportError>>()?;

    let (names, data) = summarize(&source.table, &columns);
    Ok(finish(config, header_cells(config, &names), data, visibility))
}

fn finish(
    config: &TableConfig,
    header: Vec<HeaderCell>,
    data: Vec<Vec<String>>,
    visibility: Visibility,
) -> Table {
    let table = Table::new(config.id.clone(), header, data).with_visibility(visibility);
    match &config.title {
        Some(title) => table.with_title(title.clone()),
        None => table,
    }
}

pub fn build_report(config: ReportConfig) -> Result<Report, ReportError> {
    let mut seen = HashSet::new();
    for table in &config.tables {
        if !seen.insert(table.id.as_str()) {
            return Err(ReportError::DuplicateTable(table.id.clone()));
        }
    }

    let (visibility, label) = if config.start_hidden {
        (Visibility::Hidden, AggregateLabel::ShowAll)
    } else {
        (Visibility::Shown, AggregateLabel::HideAll)
    };

    // Data tables first, so summaries may refer to tables declared after them.
    let slots = config
        .tables
        .iter()
        .map(|t| match &t.summary_of {
            Some(source) => Ok(Slot::Summary(source.as_str())),
            None => build_data_table(t, visibility).map(Slot::Data),
        })
        .collect::<Result<Vec<_>, ReportError>>()?;

    let tables = config
        .tables
        .iter()
        .zip(&slots)
        .map(|(table_config, slot)| match slot {
            Slot::Data(built) => Ok(built.table.clone()),
            Slot::Summary(source) => {
                build_summary_table(table_config, source, &config.tables, &slots, visibility)
            }
        })
        .collect::<Result<Vec<_>, ReportError>>()?;

    Ok(Report {
        title: config.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        footer: config.footer,
        page: TablePage::new(tables, label),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REPORT_TOML;
    use crate::models::SortIcon;

    const SAMPLE: &str = r#"
        title = "Run"

        [[tables]]
        id = "overview_table"
        title = "Overview"
        summary_of = "parent_perf_table"
        summary_columns = ["ncall"]

        [[tables]]
        id = "parent_perf_table"
        header = ["index", "name", "ncall"]
        columns = ["name", "ncall"]
        rename = { ncall = "Total Calls" }
        exclude = ["__EXIT__"]
        data = [[1, "main", 3], [2, "Runner.__exit__", 9], [3, "work", 1.5]]

        [[tables]]
        id = "legend_table"
        sortable = false
        header = ["Column", "Description"]
        data = [["ID", "Identifier"]]
    "#;

    fn load(src: &str) -> Report {
        Report::from_toml(src).unwrap()
    }

    #[test]
    fn test_load_sample() {
        let report = load(SAMPLE);
        assert_eq!(report.title, "Run");
        assert_eq!(report.page.label, AggregateLabel::ShowAll);
        assert_eq!(report.page.ids().len(), 3);
        assert!(report.page.tables.iter().all(|t| t.visibility == Visibility::Hidden));
    }

    #[test]
    fn test_columns_rename_and_exclude() {
        let report = load(SAMPLE);
        let parent = &report.page.tables[1];
        let labels: Vec<_> = parent.header.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, vec!["name", "Total Calls"]);
        assert_eq!(parent.header[0].tooltip.as_deref(), Some(SORT_TOOLTIP));
        assert_eq!(parent.header[0].icon, Some(SortIcon::Neutral));

        let cells: Vec<_> = parent.rows.iter().map(|r| r.cells.clone()).collect();
        assert_eq!(
            cells,
            vec![vec!["main".to_string(), "3".to_string()], vec!["work".to_string(), "1.5".to_string()]]
        );
    }

    #[test]
    fn test_summary_declared_before_source() {
        let report = load(SAMPLE);
        let overview = &report.page.tables[0];
        assert_eq!(overview.title.as_deref(), Some("Overview"));
        assert_eq!(overview.header[4].label, "Overall Total");
        assert_eq!(
            overview.rows[0].cells,
            vec!["Total Calls", "1.5", "2.25", "3", "4.5"]
        );
    }

    #[test]
    fn test_unsortable_table_has_plain_headers() {
        let report = load(SAMPLE);
        assert!(report.page.tables[2].header.iter().all(|h| h.icon.is_none()));
    }

    #[test]
    fn test_empty_tables() {
        let report = load(
            r#"
            start_hidden = false
            [[tables]]
            id = "nothing"
            [[tables]]
            id = "columns_only"
            columns = ["a", "b"]
            "#,
        );
        assert_eq!(report.page.label, AggregateLabel::HideAll);
        assert_eq!(report.page.tables[0].header[0].label, EMPTY_TABLE_COLUMN);
        assert!(report.page.tables[0].rows.is_empty());
        assert_eq!(report.page.tables[1].column_count(), 2);
        assert_eq!(report.page.tables[1].visibility, Visibility::Shown);
    }

    #[test]
    fn test_duplicate_table_id() {
        let err = Report::from_toml("[[tables]]\nid = \"a\"\n[[tables]]\nid = \"a\"\n").unwrap_err();
        assert!(matches!(err, ReportError::DuplicateTable(id) if id == "a"));
    }

    #[test]
    fn test_unknown_column() {
        let err = Report::from_toml(
            "[[tables]]\nid = \"a\"\nheader = [\"x\"]\ncolumns = [\"y\"]\ndata = [[1]]\n",
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::UnknownColumn { column, .. } if column == "y"));
    }

    #[test]
    fn test_row_wider_than_header() {
        let err = Report::from_toml(
            "[[tables]]\nid = \"b\"\nheader = [\"n\"]\ndata = [[1, \"lost\"]]\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ReportError::RaggedRow { row: 0, expected: 1, found: 2, .. }
        ));
    }

    #[test]
    fn test_row_narrower_than_header() {
        let err = Report::from_toml(
            "[[tables]]\nid = \"b\"\nheader = [\"n\", \"m\"]\ndata = [[1, 2], [3]]\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ReportError::RaggedRow { row: 1, expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn test_data_without_header() {
        for data in ["[[1, \"x\"]]", "[[]]"] {
            let err = Report::from_toml(&format!("[[tables]]\nid = \"a\"\ndata = {data}\n"))
                .unwrap_err();
            assert!(matches!(err, ReportError::RaggedRow { table, expected: 0, .. } if table == "a"));
        }
    }

    #[test]
    fn test_exclude_matches_only_the_name_column() {
        let report = load(
            r#"
            [[tables]]
            id = "t"
            header = ["name", "module"]
            columns = ["name"]
            exclude = ["foo"]
            data = [["main", "foo"], ["food_prep", "bar"], ["work", "foo"]]
            "#,
        );
        let names: Vec<_> = report.page.tables[0].column_values(0).collect();
        assert_eq!(names, vec!["main", "work"]);
    }

    #[test]
    fn test_exclude_column_is_configurable() {
        let report = load(
            r#"
            [[tables]]
            id = "t"
            header = ["name", "module"]
            exclude = ["FOO"]
            exclude_column = "module"
            data = [["main", "foo"], ["work", "bar"]]
            "#,
        );
        let names: Vec<_> = report.page.tables[0].column_values(0).collect();
        assert_eq!(names, vec!["work"]);

        let err = Report::from_toml(
            "[[tables]]\nid = \"t\"\nheader = [\"x\"]\nexclude = [\"y\"]\ndata = [[1]]\n",
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::UnknownColumn { column, .. } if column == "name"));
    }

    #[test]
    fn test_summary_of_summary() {
        let err = Report::from_toml(
            r#"
            [[tables]]
            id = "base"
            header = ["n"]
            data = [[1]]
            [[tables]]
            id = "first"
            summary_of = "base"
            summary_columns = ["n"]
            [[tables]]
            id = "second"
            summary_of = "first"
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ReportError::NestedSummary { table, source_table } if table == "second" && source_table == "first"
        ));
    }

    #[test]
    fn test_unknown_summary_source() {
        let err = Report::from_toml("[[tables]]\nid = \"a\"\nsummary_of = \"b\"\n").unwrap_err();
        assert!(matches!(err, ReportError::UnknownSummarySource { .. }));
    }

    #[test]
    fn test_invalid_toml() {
        let err = Report::from_toml("tables = 3").unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)));
    }

    #[test]
    fn test_embedded_report_loads() {
        let report = Report::from_toml(REPORT_TOML).unwrap();
        assert!(!report.page.tables.is_empty());
    }
}
