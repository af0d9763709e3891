//! Where result files come from.
use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::result::{LoadError, ResultRecord};

pub mod dir;
pub mod http;

pub use dir::DirSource;
pub use http::HttpSource;

/// A store of statistics files addressed by relative path.
#[async_trait]
pub trait ResultSource: Send + Sync {
    /// Fetches and parses the document at `path`.
    async fn fetch(&self, path: &str) -> Result<ResultRecord, LoadError>;
}

/// Picks a source for `location`: http(s) URLs are fetched over the network,
/// anything else is a local directory.
pub fn from_location(location: &str) -> Result<Arc<dyn ResultSource>, LoadError> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Arc::new(HttpSource::new(url))),
        _ => Ok(Arc::new(DirSource::new(location)?)),
    }
}
