use crate::config::ClientConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

use super::Transport;

/// `reqwest`-backed transport: `GET {base_url}/{path}`, one attempt, no retries.
pub struct HttpTransport {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = url::Url::parse(&config.base_url)
            .map_err(|e| Error::Validation(format!("invalid base url {:?}: {}", config.base_url, e)))?;

        let inner = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| Error::Validation(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            inner,
            base_url: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url_for(path);
        debug!("GET {}", url);

        let resp = self.inner.get(&url).send().await.map_err(|e| Error::Transport {
            url: url.clone(),
            source: Box::new(e),
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(Error::Status {
                code: status.as_u16(),
                url,
            });
        }

        let body = resp.bytes().await.map_err(|e| Error::Body {
            url: url.clone(),
            source: Box::new(e),
        })?;

        debug!("{} → {} bytes", url, body.len());
        Ok(body.to_vec())
    }
}
