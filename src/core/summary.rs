//! Derived overview tables: min / median / max / total per column.

use crate::config::{MISSING_VALUE, SUMMARY_HEADER};
use crate::models::Table;
use crate::utils::format::{format_number, parse_number};

/// Statistics over the numeric cells of one column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnStats {
    pub min: f64,
    pub median: f64,
    pub max: f64,
    pub total: f64,
}

impl ColumnStats {
    /// `None` when no cell parses as a number.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let mid = values.len() / 2;
        let median = if values.len() % 2 == 0 {
            (values[mid - 1] + values[mid]) / 2.0
        } else {
            values[mid]
        };

        Some(Self {
            min: values[0],
            median,
            max: values[values.len() - 1],
            total: values.iter().sum(),
        })
    }
}

/// One summary row per `(column index, metric label)` pair.
///
/// Returns header labels and data rows ready for [`Table::new`].
pub fn summarize(source: &Table, columns: &[(usize, String)]) -> (Vec<String>, Vec<Vec<String>>) {
    let header = SUMMARY_HEADER.iter().map(|s| s.to_string()).collect();

    let rows = columns
        .iter()
        .map(|(index, label)| {
            let stats = ColumnStats::from_values(source.column_values(*index).filter_map(parse_number));
            let mut row = vec![label.clone()];
            match stats {
                Some(s) => row.extend([s.min, s.median, s.max, s.total].map(format_number)),
                None => row.extend(std::iter::repeat_n(MISSING_VALUE.to_string(), 4)),
            }
            row
        })
        .collect();

    (header, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeaderCell;

    fn source() -> Table {
        Table::new(
            "parent",
            vec![HeaderCell::sortable("Name"), HeaderCell::sortable("Calls")],
            vec![
                vec!["a".into(), "4".into()],
                vec!["b".into(), "1".into()],
                vec!["c".into(), "n/a".into()],
                vec!["d".into(), "2".into()],
                vec!["e".into(), "3".into()],
            ],
        )
    }

    #[test]
    fn test_stats_even_count() {
        let stats = ColumnStats::from_values([4.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.total, 10.0);
    }

    #[test]
    fn test_stats_odd_count() {
        let stats = ColumnStats::from_values([0.5, 0.1, 0.3]).unwrap();
        assert_eq!(stats.median, 0.3);
        assert!(ColumnStats::from_values([]).is_none());
    }

    #[test]
    fn test_summarize_rows() {
        let (header, rows) = summarize(
            &source(),
            &[(1, "Total Calls".to_string()), (0, "Name".to_string())],
        );
        assert_eq!(header[0], "Metric");
        assert_eq!(header.len(), 5);
        assert_eq!(rows[0], vec!["Total Calls", "1", "2.5", "4", "10"]);
        assert_eq!(rows[1], vec!["Name", "-", "-", "-", "-"]);
    }
}
