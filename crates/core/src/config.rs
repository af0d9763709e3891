use std::{
    collections::{HashMap, HashSet},
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::{
    assets::{get_config_dir, get_default_config},
    columns::{MODEL_COLUMN, PROVIDER_COLUMN, TOTAL_COST_COLUMN, metric_column_id},
    model::{Benchmark, Metric, ModelSpec, UNKNOWN_COUNTRY},
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File system error: {0}")]
    IO(#[from] std::io::Error),
    #[error("YAML parsing error: {0}")]
    YAMLError(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Leaderboard configuration: what to load and how to label it.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    /// Base URL or directory of the result files.
    #[serde(default = "default_results")]
    pub results: String,
    pub benchmarks: Vec<Benchmark>,
    pub metrics: Vec<Metric>,
    pub models: Vec<ModelSpec>,
    /// Provider name to country code.
    #[serde(default)]
    pub providers: HashMap<String, String>,
    #[serde(default)]
    pub citation: String,
}

fn default_title() -> String {
    "Leaderboard".to_string()
}

fn default_results() -> String {
    "./results".to_string()
}

impl Config {
    /// Country code for `provider`, `UN` when the provider is not mapped.
    pub fn country_code(&self, provider: &str) -> &str {
        self.providers
            .get(provider)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_COUNTRY)
    }

    #[instrument(skip(self))]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.benchmarks.is_empty() {
            return Err(ConfigError::Config("No benchmarks configured".to_string()));
        }
        if self.metrics.is_empty() {
            return Err(ConfigError::Config("No metrics configured".to_string()));
        }

        let mut seen = HashSet::new();
        for b in &self.benchmarks {
            if !seen.insert(b.id.as_str()) {
                return Err(ConfigError::Config(format!("Duplicate benchmark '{}'", b.id)));
            }
        }
        seen.clear();
        for m in &self.metrics {
            if !seen.insert(m.id.as_str()) {
                return Err(ConfigError::Config(format!("Duplicate metric '{}'", m.id)));
            }
        }

        // Sorting looks columns up by id
        let mut columns = HashSet::from([
            PROVIDER_COLUMN.to_string(),
            MODEL_COLUMN.to_string(),
            TOTAL_COST_COLUMN.to_string(),
        ]);
        for b in &self.benchmarks {
            for m in &self.metrics {
                let id = metric_column_id(&b.id, &m.id);
                if !columns.insert(id.clone()) {
                    return Err(ConfigError::Config(format!(
                        "Benchmark '{}' and metric '{}' give duplicate column id '{id}'",
                        b.id, m.id
                    )));
                }
            }
        }

        for (provider, code) in &self.providers {
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ConfigError::Config(format!(
                    "Invalid country code '{code}' for provider '{provider}'"
                )));
            }
        }
        Ok(())
    }
}

#[instrument(skip(config_path))]
pub fn create_or_get_config_file(
    config_path: Option<PathBuf>,
) -> Result<(bool, PathBuf), ConfigError> {
    let actual_path = config_path.unwrap_or_else(|| {
        let config_dir = get_config_dir();
        config_dir.join("leaderboard.yml")
    });

    let parent_dir = actual_path.parent().ok_or_else(|| {
        ConfigError::IO(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Config path has no parent directory",
        ))
    })?;

    if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
        fs::create_dir_all(parent_dir)?;
    }

    if actual_path.exists() {
        Ok((true, actual_path))
    } else {
        File::create(&actual_path)?.write_all(get_default_config().as_bytes())?;
        Ok((false, actual_path))
    }
}

/// Parses and validates a configuration document.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yaml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[instrument(skip(config_path))]
pub fn get_config(config_path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let (_, config_file) = create_or_get_config_file(config_path)?;
    let content = fs::read_to_string(&config_file)?;
    parse_config(&content)
}
