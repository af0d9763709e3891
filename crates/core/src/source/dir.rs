use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::ResultSource;
use crate::result::{LoadError, ResultRecord};

/// Result files in a local directory tree.
#[derive(Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Creates a source rooted at `location`, expanding `~` and env vars.
    pub fn new(location: &str) -> Result<Self, LoadError> {
        if location.trim().is_empty() {
            return Err(LoadError::Location("results directory is empty".to_string()));
        }
        let expanded = shellexpand::full(location)
            .map_err(|e| LoadError::Location(format!("{location}: {e}")))?;
        Ok(Self {
            root: PathBuf::from(expanded.as_ref()),
        })
    }
}

#[async_trait]
impl ResultSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<ResultRecord, LoadError> {
        let file = self.root.join(path);
        debug!(file = %file.display(), "Reading result");
        let body = tokio::fs::read(&file).await?;
        ResultRecord::from_slice(&body)
    }
}
