use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::ResultSource;
use crate::result::{LoadError, ResultRecord};

/// Result files served over http(s), e.g. the published site itself.
#[derive(Debug)]
pub struct HttpSource {
    base_url: Url,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Appends the `/` separated `path` to the base URL one segment at a
    /// time, so a segment is never read as a scheme or query.
    fn result_url(&self, path: &str) -> Result<Url, LoadError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LoadError::Location(format!("{} cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url)
    }
}

#[async_trait]
impl ResultSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<ResultRecord, LoadError> {
        let url = self.result_url(path)?;
        debug!(%url, "Fetching result");

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(LoadError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        ResultRecord::from_slice(&body)
    }
}
