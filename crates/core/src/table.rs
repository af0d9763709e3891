//! The assembled leaderboard: rows, best scores, columns and sorting.
use std::cmp::Ordering;

use serde::Serialize;
use thiserror::Error;

use crate::columns::{Cell, ColumnEntry, SortKey, build_columns, leaf_columns};
use crate::config::Config;
use crate::model::{BenchmarkId, MetricId};
use crate::scores::{BestScoreTable, RowRecord, best_scores};

#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => " 🔼",
            SortDirection::Descending => " 🔽",
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortBy {
    pub column: String,
    pub direction: SortDirection,
}

impl SortBy {
    pub fn new(column: &str, descending: bool) -> Self {
        Self {
            column: column.to_string(),
            direction: if descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        }
    }
}

// Missing values go last whichever way the column is sorted
fn compare_keys(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    match (a, b) {
        (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
        (SortKey::Missing, _) => Ordering::Greater,
        (_, SortKey::Missing) => Ordering::Less,
        (SortKey::Number(x), SortKey::Number(y)) => {
            direction.apply(x.partial_cmp(y).unwrap_or(Ordering::Equal))
        }
        (SortKey::Text(x), SortKey::Text(y)) => direction.apply(x.cmp(y)),
        _ => Ordering::Equal,
    }
}

/// Header cell of the two-row table header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
    pub text: String,
    /// Set for sortable leaf columns.
    pub column: Option<String>,
    pub colspan: usize,
    pub rowspan: usize,
    pub indicator: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewCell {
    #[serde(flatten)]
    pub cell: Cell,
    /// Raw value for client side sorting, absent for missing scores.
    pub sort_value: Option<String>,
}

/// Everything a renderer needs, already sorted and formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub header_rows: Vec<Vec<HeaderCell>>,
    pub rows: Vec<Vec<ViewCell>>,
}

/// Loaded rows together with the values derived from them.
///
/// Best scores and columns are recomputed whenever the rows are replaced,
/// and only then.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    config: Config,
    rows: Vec<RowRecord>,
    best: BestScoreTable,
    columns: Vec<ColumnEntry>,
}

impl Leaderboard {
    pub fn new(config: Config, rows: Vec<RowRecord>) -> Self {
        let mut board = Self {
            config,
            rows: Vec::new(),
            best: BestScoreTable::default(),
            columns: Vec::new(),
        };
        board.set_rows(rows);
        board
    }

    pub fn set_rows(&mut self, rows: Vec<RowRecord>) {
        let benchmarks: Vec<BenchmarkId> =
            self.config.benchmarks.iter().map(|b| b.id.clone()).collect();
        let metrics: Vec<MetricId> = self.config.metrics.iter().map(|m| m.id.clone()).collect();
        self.best = best_scores(&rows, &benchmarks, &metrics);
        self.columns = build_columns(&self.config, &self.best);
        self.rows = rows;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn best_scores(&self) -> &BestScoreTable {
        &self.best
    }

    pub fn columns(&self) -> &[ColumnEntry] {
        &self.columns
    }

    /// Rows ordered by `sort`, or in load order without one. Sorting is
    /// stable, so equal keys keep load order.
    pub fn sorted_rows(&self, sort: Option<&SortBy>) -> Result<Vec<&RowRecord>, TableError> {
        let mut rows: Vec<&RowRecord> = self.rows.iter().collect();
        if let Some(sort) = sort {
            let column = leaf_columns(&self.columns)
                .into_iter()
                .find(|c| c.id == sort.column)
                .ok_or_else(|| TableError::UnknownColumn(sort.column.clone()))?;
            rows.sort_by(|a, b| {
                compare_keys(&column.sort_key(a), &column.sort_key(b), sort.direction)
            });
        }
        Ok(rows)
    }

    pub fn view(&self, sort: Option<&SortBy>) -> Result<TableView, TableError> {
        let rows = self.sorted_rows(sort)?;
        let indicator = |id: &str| match sort {
            Some(s) if s.column == id => s.direction.indicator(),
            _ => "",
        };

        let mut top = Vec::new();
        let mut bottom = Vec::new();
        for entry in &self.columns {
            match entry {
                ColumnEntry::Single(column) => top.push(HeaderCell {
                    text: column.header.clone(),
                    column: Some(column.id.clone()),
                    colspan: 1,
                    rowspan: 2,
                    indicator: indicator(&column.id),
                }),
                ColumnEntry::Group { header, columns } => {
                    top.push(HeaderCell {
                        text: header.clone(),
                        column: None,
                        colspan: columns.len(),
                        rowspan: 1,
                        indicator: "",
                    });
                    bottom.extend(columns.iter().map(|column| HeaderCell {
                        text: column.header.clone(),
                        column: Some(column.id.clone()),
                        colspan: 1,
                        rowspan: 1,
                        indicator: indicator(&column.id),
                    }));
                }
            }
        }

        let leaves = leaf_columns(&self.columns);
        let body = rows
            .into_iter()
            .map(|row| {
                leaves
                    .iter()
                    .map(|column| ViewCell {
                        cell: column.cell(row, &self.config),
                        sort_value: match column.sort_key(row) {
                            SortKey::Text(text) => Some(text),
                            SortKey::Number(n) => Some(n.to_string()),
                            SortKey::Missing => None,
                        },
                    })
                    .collect()
            })
            .collect();

        Ok(TableView {
            header_rows: vec![top, bottom],
            rows: body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelSpec;
    use crate::test_utils::fixture_config;

    fn board() -> Leaderboard {
        let config = fixture_config(
            "unused",
            vec![
                ModelSpec::new("model-a", "s", "Google"),
                ModelSpec::new("model-b", "s", "Acme"),
                ModelSpec::new("model-c", "s", "Google"),
            ],
        );
        let mut a = RowRecord::new("model-a", "Google");
        a.set_score(&"defects4j".into(), &"exact_match@1".into(), 0.2);
        a.total_cost = 3.0;
        let mut b = RowRecord::new("model-b", "Acme");
        b.set_score(&"defects4j".into(), &"exact_match@1".into(), 0.4);
        b.total_cost = 1.0;
        let c = RowRecord::new("model-c", "Google");
        Leaderboard::new(config, vec![a, b, c])
    }

    fn names(rows: &[&RowRecord]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_unsorted_rows_keep_load_order() {
        let board = board();
        assert_eq!(
            names(&board.sorted_rows(None).unwrap()),
            ["model-a", "model-b", "model-c"]
        );
    }

    #[test]
    fn test_sort_by_metric_puts_missing_last() {
        let board = board();

        let asc = board
            .sorted_rows(Some(&SortBy::new("defects4j_exact_match@1", false)))
            .unwrap();
        assert_eq!(names(&asc), ["model-a", "model-b", "model-c"]);

        let desc = board
            .sorted_rows(Some(&SortBy::new("defects4j_exact_match@1", true)))
            .unwrap();
        assert_eq!(names(&desc), ["model-b", "model-a", "model-c"]);
    }

    #[test]
    fn test_sort_by_text_is_stable() {
        let board = board();
        let rows = board
            .sorted_rows(Some(&SortBy::new("provider", false)))
            .unwrap();
        assert_eq!(names(&rows), ["model-b", "model-a", "model-c"]);
    }

    #[test]
    fn test_sort_by_unknown_column_fails() {
        let board = board();
        let err = board
            .sorted_rows(Some(&SortBy::new("nope", false)))
            .unwrap_err();
        assert_eq!(err, TableError::UnknownColumn("nope".to_string()));
    }

    #[test]
    fn test_set_rows_recomputes_best_scores() {
        let mut board = board();
        let d4j = BenchmarkId::from("defects4j");
        let exact = MetricId::from("exact_match@1");
        assert_eq!(board.best_scores().get(&d4j, &exact), 0.4);

        let mut row = RowRecord::new("model-d", "Acme");
        row.set_score(&d4j, &exact, 0.9);
        board.set_rows(vec![row]);

        assert_eq!(board.best_scores().get(&d4j, &exact), 0.9);
        let view = board.view(None).unwrap();
        assert!(view.rows[0][2].cell.bold);
    }

    #[test]
    fn test_view_headers() {
        let board = board();
        let view = board
            .view(Some(&SortBy::new("total_cost", true)))
            .unwrap();

        let top: Vec<_> = view.header_rows[0].iter().map(|h| h.text.as_str()).collect();
        assert_eq!(top, ["Provider", "Model", "Defects4J", "GitBug-Java", "Total Cost"]);
        assert_eq!(view.header_rows[0][2].colspan, 3);
        assert_eq!(view.header_rows[0][0].rowspan, 2);
        assert_eq!(view.header_rows[1].len(), 6);
        assert_eq!(view.header_rows[0][4].indicator, " 🔽");
        assert_eq!(view.header_rows[0][1].indicator, "");
    }

    #[test]
    fn test_view_rows() {
        let board = board();
        let view = board
            .view(Some(&SortBy::new("total_cost", true)))
            .unwrap();

        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[0][1].cell.text, "model-a");
        assert_eq!(view.rows[0][8].cell.text, "$3.00");
        assert_eq!(view.rows[0][8].sort_value.as_deref(), Some("3"));
        assert_eq!(view.rows[2][2].cell.text, "N/A");
        assert_eq!(view.rows[2][2].sort_value, None);
    }
}
