use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::MetricId;

/// Failure to obtain a single result file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid result document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid result location: {0}")]
    Location(String),
}

/// Statistics of one model on one benchmark.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ResultRecord {
    #[serde(default)]
    total_cost: Option<f64>,
    #[serde(flatten)]
    values: HashMap<String, Value>,
}

impl ResultRecord {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Numeric value of `metric`, `None` when missing or not a number.
    pub fn metric(&self, metric: &MetricId) -> Option<f64> {
        self.values.get(metric.as_str()).and_then(Value::as_f64)
    }

    /// Cost in USD, 0 when not reported.
    pub fn total_cost(&self) -> f64 {
        self.total_cost.unwrap_or(0.0)
    }
}
