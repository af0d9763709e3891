//! Loads result files into leaderboard rows.
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::model::{BenchmarkId, MetricId, ModelSpec};
use crate::result::LoadError;
use crate::scores::RowRecord;
use crate::source::{self, ResultSource};

/// A result file that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    pub model: String,
    pub benchmark: BenchmarkId,
    pub error: LoadError,
}

/// Rows in model order plus whatever failed along the way.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub rows: Vec<RowRecord>,
    pub failures: Vec<LoadFailure>,
}

pub struct DataLoader {
    source: Arc<dyn ResultSource>,
    models: Vec<ModelSpec>,
    benchmarks: Vec<BenchmarkId>,
    metrics: Vec<MetricId>,
}

impl DataLoader {
    pub fn new(source: Arc<dyn ResultSource>, config: &Config) -> Self {
        Self {
            source,
            models: config.models.clone(),
            benchmarks: config.benchmarks.iter().map(|b| b.id.clone()).collect(),
            metrics: config.metrics.iter().map(|m| m.id.clone()).collect(),
        }
    }

    /// Creates a loader reading from the config's `results` location.
    pub fn from_config(config: &Config) -> Result<Self, LoadError> {
        let source = source::from_location(&config.results)?;
        Ok(Self::new(source, config))
    }

    /// Loads every model concurrently.
    ///
    /// Always yields one row per model in configuration order. A failed
    /// benchmark leaves holes in its row and is reported in `failures`.
    pub async fn load(&self) -> LoadOutcome {
        let loaded = join_all(self.models.iter().map(|m| self.load_model(m))).await;

        let mut outcome = LoadOutcome::default();
        for (row, failures) in loaded {
            outcome.rows.push(row);
            outcome.failures.extend(failures);
        }
        info!(
            rows = outcome.rows.len(),
            failures = outcome.failures.len(),
            "Loaded results"
        );
        outcome
    }

    async fn load_model(&self, model: &ModelSpec) -> (RowRecord, Vec<LoadFailure>) {
        let mut row = RowRecord::for_model(model);
        let mut failures = Vec::new();

        for benchmark in &self.benchmarks {
            let path = model.result_path(benchmark);
            match self.source.fetch(&path).await {
                Ok(record) => {
                    debug!(model = %model.name, %benchmark, "Merged result");
                    row.merge(benchmark, &self.metrics, &record);
                }
                Err(error) => {
                    warn!(
                        model = %model.name,
                        %benchmark,
                        %path,
                        %error,
                        "Failed to load result"
                    );
                    failures.push(LoadFailure {
                        model: model.name.clone(),
                        benchmark: benchmark.clone(),
                        error,
                    });
                }
            }
        }
        (row, failures)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::result::ResultRecord;
    use crate::source::DirSource;
    use crate::test_utils::{fixture_config, write_result};

    /// In-memory source; missing paths fail like a 404.
    struct MapSource(HashMap<String, String>);

    #[async_trait]
    impl ResultSource for MapSource {
        async fn fetch(&self, path: &str) -> Result<ResultRecord, LoadError> {
            match self.0.get(path) {
                Some(body) => ResultRecord::from_slice(body.as_bytes()),
                None => Err(LoadError::Status {
                    status: 404,
                    url: path.to_string(),
                }),
            }
        }
    }

    fn models() -> Vec<ModelSpec> {
        vec![
            ModelSpec::new("model-a", "google", "Google"),
            ModelSpec::new("model-b", "openai-chatcompletion", "OpenAI"),
            ModelSpec::new("model-c", "anthropic", "Anthropic"),
        ]
    }

    #[tokio::test]
    async fn test_all_fetches_failing_still_yields_every_row() {
        let config = fixture_config("unused", models());
        let loader = DataLoader::new(Arc::new(MapSource(HashMap::new())), &config);

        let outcome = loader.load().await;

        let names: Vec<_> = outcome.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["model-a", "model-b", "model-c"]);
        assert_eq!(outcome.failures.len(), 6);
        assert!(outcome.rows.iter().all(|r| r.total_cost == 0.0));
    }

    #[tokio::test]
    async fn test_partial_results_are_merged_per_model() {
        let models = models();
        let config = fixture_config("unused", models.clone());
        let d4j = BenchmarkId::from("defects4j");
        let gbj = BenchmarkId::from("gitbugjava");
        let files = HashMap::from([
            (
                models[0].result_path(&d4j),
                r#"{"exact_match@1": 0.3, "plausible@1": 0.6, "total_cost": 4.0}"#.to_string(),
            ),
            (
                models[0].result_path(&gbj),
                r#"{"exact_match@1": 0.1, "total_cost": 1.5}"#.to_string(),
            ),
            (models[2].result_path(&gbj), "not json".to_string()),
        ]);
        let loader = DataLoader::new(Arc::new(MapSource(files)), &config);

        let outcome = loader.load().await;

        assert_eq!(outcome.rows.len(), 3);
        let a = &outcome.rows[0];
        assert_eq!(a.provider, "Google");
        assert_eq!(a.score(&d4j, &"exact_match@1".into()), Some(0.3));
        assert_eq!(a.score(&d4j, &"ast_match@1".into()), None);
        assert_eq!(a.score(&gbj, &"exact_match@1".into()), Some(0.1));
        assert_eq!(a.total_cost, 5.5);

        let failed: Vec<_> = outcome
            .failures
            .iter()
            .map(|f| (f.model.as_str(), f.benchmark.as_str()))
            .collect();
        assert_eq!(
            failed,
            [
                ("model-b", "defects4j"),
                ("model-b", "gitbugjava"),
                ("model-c", "defects4j"),
                ("model-c", "gitbugjava"),
            ]
        );
        assert!(matches!(outcome.failures[3].error, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_no_models_yields_no_rows() {
        let config = fixture_config("unused", vec![]);
        let loader = DataLoader::new(Arc::new(MapSource(HashMap::new())), &config);

        let outcome = loader.load().await;

        assert!(outcome.rows.is_empty());
        assert!(outcome.failures.is_empty());
    }

    #[tokio::test]
    async fn test_loads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let models = models();
        write_result(
            dir.path(),
            &models[1],
            "gitbugjava",
            r#"{"ast_match@1": 0.42, "total_cost": 0.75}"#,
        );
        let config = fixture_config(dir.path().to_str().unwrap(), models);
        let source = DirSource::new(&config.results).unwrap();
        let loader = DataLoader::new(Arc::new(source), &config);

        let outcome = loader.load().await;

        let b = &outcome.rows[1];
        assert_eq!(
            b.score(&"gitbugjava".into(), &"ast_match@1".into()),
            Some(0.42)
        );
        assert_eq!(b.total_cost, 0.75);
        assert_eq!(outcome.failures.len(), 5);
    }
}
