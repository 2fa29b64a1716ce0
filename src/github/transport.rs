// HTTP transport for JSON GET requests.
// One request per call, no retries; the body is decoded as JSON whatever the status.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::Value;
use tracing::debug;

use crate::error::{GhOrgError, Result};

use super::config::ClientConfig;
use super::types::RateLimit;

/// Fetches a URL and decodes its body as JSON.
///
/// Implementations perform exactly one request per call and hand transport
/// or decoding failures back unchanged.
pub trait Transport: Send + Sync {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value>> + Send;
}

/// Transport backed by a reqwest client with GitHub default headers.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    rate_limit: Mutex<RateLimit>,
}

impl HttpTransport {
    /// Build a transport whose requests carry the headers from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| GhOrgError::Config(e.to_string()))?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_str(&config.api_version)
                .map_err(|e| GhOrgError::Config(e.to_string()))?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| GhOrgError::Config(e.to_string()))?,
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            rate_limit: Mutex::new(RateLimit::default()),
        })
    }

    /// Rate limit reported by the most recent response.
    pub fn rate_limit(&self) -> RateLimit {
        *self.rate_limit.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self.client.get(url).send().await?;
        debug!(url, status = %response.status(), "GET");

        self.rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .update_from_headers(response.headers());

        Ok(response.json::<Value>().await?)
    }
}

/// Fetch `url` once with a default-configured [`HttpTransport`].
pub async fn get_json(url: &str) -> Result<Value> {
    HttpTransport::new(&ClientConfig::default())?
        .get_json(url)
        .await
}
