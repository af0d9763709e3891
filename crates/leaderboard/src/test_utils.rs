//! Test utilities for the leaderboard crate
//!
//! Helpers for temporary config files pointing at a mock results server.

use std::fs;
use tempfile::{Builder, NamedTempFile};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a temporary config file with two models reading from `results`.
/// Uses tempfile::Builder to ensure unique directories for parallel tests.
///
/// # Panics
/// Panics if temp directory creation or file writing fails.
pub fn create_temp_config_file(results: &str) -> NamedTempFile {
    let temp_dir = Builder::new()
        .prefix("leaderboard-test")
        .rand_bytes(8)
        .tempdir()
        .unwrap();
    let config_content = format!(
        r#"
title: Test board
results: "{results}"
benchmarks:
  - id: defects4j
    title: Defects4J
  - id: gitbugjava
    title: GitBug-Java
metrics:
  - id: exact_match@1
    title: Exact Match @1
  - id: plausible@1
    title: Plausible @1
models:
  - name: model-a
    strategy: google
    provider: Google
  - name: model-b
    strategy: openai-chatcompletion
    provider: OpenAI
providers:
  Google: US
"#,
    );
    let file = NamedTempFile::new_in(temp_dir.path()).unwrap();
    fs::write(file.path(), config_content).unwrap();

    // Keep the temp directory alive by leaking it (this is just for tests)
    let _ = Box::leak(Box::new(temp_dir));
    file
}

/// Serves `body` for `file` under `/results` on the mock server.
pub async fn mount_result(server: &MockServer, file: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/results/{file}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
