//! Column descriptors and per-cell rendering.
//!
//! The column layout follows the configured benchmarks and metrics. Only the
//! bold flag of metric cells depends on data, through the [`BestScoreTable`]
//! handed to [`build_columns`].
use serde::Serialize;

use crate::config::Config;
use crate::format::{format_currency, format_percentage};
use crate::model::{BenchmarkId, MetricId, flag_glyph};
use crate::scores::{BestScoreTable, RowRecord};

pub const PROVIDER_COLUMN: &str = "provider";
pub const MODEL_COLUMN: &str = "name";
pub const TOTAL_COST_COLUMN: &str = "total_cost";

/// Id of the column showing `metric` for `benchmark`.
pub fn metric_column_id(benchmark: &BenchmarkId, metric: &MetricId) -> String {
    format!("{benchmark}_{metric}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

/// Value a column sorts on.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
    Missing,
}

/// A rendered table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub text: String,
    /// Flag emoji shown before the text.
    pub flag: Option<String>,
    pub bold: bool,
    pub align: Align,
}

impl Cell {
    fn plain(text: String, align: Align) -> Self {
        Self {
            text,
            flag: None,
            bold: false,
            align,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    Provider,
    Model,
    Metric {
        benchmark: BenchmarkId,
        metric: MetricId,
        best: f64,
    },
    TotalCost,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Unique id, `{benchmark}_{metric}` for metric columns.
    pub id: String,
    pub header: String,
    pub kind: ColumnKind,
}

impl Column {
    /// Renders `row`'s value; `config` maps providers to their flags.
    pub fn cell(&self, row: &RowRecord, config: &Config) -> Cell {
        match &self.kind {
            ColumnKind::Provider => Cell {
                text: row.provider.clone(),
                flag: Some(flag_glyph(config.country_code(&row.provider))),
                bold: true,
                align: Align::Left,
            },
            ColumnKind::Model => Cell::plain(row.name.clone(), Align::Left),
            ColumnKind::Metric {
                benchmark,
                metric,
                best,
            } => {
                let value = row.score(benchmark, metric);
                Cell {
                    text: format_percentage(value),
                    flag: None,
                    bold: value == Some(*best),
                    align: Align::Right,
                }
            }
            ColumnKind::TotalCost => Cell::plain(format_currency(row.total_cost), Align::Right),
        }
    }

    pub fn sort_key(&self, row: &RowRecord) -> SortKey {
        match &self.kind {
            ColumnKind::Provider => SortKey::Text(row.provider.clone()),
            ColumnKind::Model => SortKey::Text(row.name.clone()),
            ColumnKind::Metric {
                benchmark, metric, ..
            } => row
                .score(benchmark, metric)
                .map(SortKey::Number)
                .unwrap_or(SortKey::Missing),
            ColumnKind::TotalCost => SortKey::Number(row.total_cost),
        }
    }
}

/// A top level column, either standalone or a benchmark group.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnEntry {
    Single(Column),
    Group { header: String, columns: Vec<Column> },
}

/// Flattens entries into the leaf columns, in display order.
pub fn leaf_columns(entries: &[ColumnEntry]) -> Vec<&Column> {
    entries
        .iter()
        .flat_map(|entry| match entry {
            ColumnEntry::Single(column) => std::slice::from_ref(column),
            ColumnEntry::Group { columns, .. } => columns.as_slice(),
        })
        .collect()
}

/// Builds the provider, model, per-benchmark and total cost columns.
pub fn build_columns(config: &Config, best: &BestScoreTable) -> Vec<ColumnEntry> {
    let mut entries = vec![
        ColumnEntry::Single(Column {
            id: PROVIDER_COLUMN.to_string(),
            header: "Provider".to_string(),
            kind: ColumnKind::Provider,
        }),
        ColumnEntry::Single(Column {
            id: MODEL_COLUMN.to_string(),
            header: "Model".to_string(),
            kind: ColumnKind::Model,
        }),
    ];

    for benchmark in &config.benchmarks {
        let columns = config
            .metrics
            .iter()
            .map(|metric| Column {
                id: metric_column_id(&benchmark.id, &metric.id),
                header: metric.title.clone(),
                kind: ColumnKind::Metric {
                    benchmark: benchmark.id.clone(),
                    metric: metric.id.clone(),
                    best: best.get(&benchmark.id, &metric.id),
                },
            })
            .collect();
        entries.push(ColumnEntry::Group {
            header: benchmark.title.clone(),
            columns,
        });
    }

    entries.push(ColumnEntry::Single(Column {
        id: TOTAL_COST_COLUMN.to_string(),
        header: "Total Cost".to_string(),
        kind: ColumnKind::TotalCost,
    }));
    entries
}
