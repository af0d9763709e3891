//! Test utilities for leaderboard-core
//!
//! Shared helpers for temporary config files, result directories and fixture
//! configurations.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;

use crate::config::Config;
use crate::model::{Benchmark, Metric, ModelSpec};

/// Creates a temporary config file with the given content.
/// Uses tempfile::Builder to ensure unique directories for parallel tests.
///
/// # Panics
/// Panics if temp directory creation or file writing fails.
pub fn create_temp_config(content: &str) -> PathBuf {
    let temp_dir = Builder::new()
        .prefix("leaderboard-test")
        .rand_bytes(8)
        .tempdir()
        .unwrap();
    let config_path = temp_dir.path().join("leaderboard.yml");
    File::create(&config_path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
    // Keep the temp directory alive by leaking it (this is just for tests)
    let _ = Box::leak(Box::new(temp_dir));
    config_path
}

/// Writes `body` as the statistics file of `model` for `benchmark` under `root`.
pub fn write_result(root: &Path, model: &ModelSpec, benchmark: &str, body: &str) {
    let path = root.join(model.result_path(&benchmark.into()));
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, body).unwrap();
}

/// Two benchmarks, three metrics and the given models, results under `results`.
pub fn fixture_config(results: &str, models: Vec<ModelSpec>) -> Config {
    Config {
        title: "Test board".to_string(),
        results: results.to_string(),
        benchmarks: vec![
            Benchmark {
                id: "defects4j".into(),
                title: "Defects4J".to_string(),
            },
            Benchmark {
                id: "gitbugjava".into(),
                title: "GitBug-Java".to_string(),
            },
        ],
        metrics: vec![
            Metric {
                id: "exact_match@1".into(),
                title: "Exact Match @1".to_string(),
            },
            Metric {
                id: "ast_match@1".into(),
                title: "AST Match @1".to_string(),
            },
            Metric {
                id: "plausible@1".into(),
                title: "Plausible @1".to_string(),
            },
        ],
        models,
        providers: [("Google".to_string(), "US".to_string())].into(),
        citation: "@misc{board}".to_string(),
    }
}
