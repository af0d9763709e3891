//! Per-model rows and best-in-column scores.
use std::collections::HashMap;

use crate::model::{BenchmarkId, MetricId, ModelSpec};
use crate::result::ResultRecord;

/// One leaderboard row, accumulated from a model's result files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowRecord {
    pub name: String,
    pub provider: String,
    /// Sum of `total_cost` over the benchmarks that loaded.
    pub total_cost: f64,
    scores: HashMap<BenchmarkId, HashMap<MetricId, f64>>,
}

impl RowRecord {
    pub fn new(name: &str, provider: &str) -> Self {
        Self {
            name: name.to_string(),
            provider: provider.to_string(),
            ..Default::default()
        }
    }

    pub fn for_model(model: &ModelSpec) -> Self {
        Self::new(&model.name, &model.provider)
    }

    pub fn score(&self, benchmark: &BenchmarkId, metric: &MetricId) -> Option<f64> {
        self.scores.get(benchmark)?.get(metric).copied()
    }

    pub fn set_score(&mut self, benchmark: &BenchmarkId, metric: &MetricId, value: f64) {
        self.scores
            .entry(benchmark.clone())
            .or_default()
            .insert(metric.clone(), value);
    }

    /// Merges `record` as the results of `benchmark`.
    ///
    /// Metrics absent from the record stay absent; the record's cost is added
    /// to the running total.
    pub fn merge(&mut self, benchmark: &BenchmarkId, metrics: &[MetricId], record: &ResultRecord) {
        for metric in metrics {
            if let Some(value) = record.metric(metric) {
                self.set_score(benchmark, metric, value);
            }
        }
        self.total_cost += record.total_cost();
    }
}

/// Highest value per (benchmark, metric) across all rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestScoreTable {
    best: HashMap<(BenchmarkId, MetricId), f64>,
}

impl BestScoreTable {
    /// Best score for the column, 0 when no row has a value.
    pub fn get(&self, benchmark: &BenchmarkId, metric: &MetricId) -> f64 {
        self.best
            .get(&(benchmark.clone(), metric.clone()))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn is_best(&self, benchmark: &BenchmarkId, metric: &MetricId, value: f64) -> bool {
        value == self.get(benchmark, metric)
    }
}

/// Computes the best score of every column, treating absent values as 0.
pub fn best_scores(
    rows: &[RowRecord],
    benchmarks: &[BenchmarkId],
    metrics: &[MetricId],
) -> BestScoreTable {
    let mut best = HashMap::new();
    for benchmark in benchmarks {
        for metric in metrics {
            let max = rows
                .iter()
                .map(|row| row.score(benchmark, metric).unwrap_or(0.0))
                .fold(0.0, f64::max);
            best.insert((benchmark.clone(), metric.clone()), max);
        }
    }
    BestScoreTable { best }
}
