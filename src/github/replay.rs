// Replay transport and captured payload fixtures.
// Serves canned JSON by URL and records every request so tests can count calls.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{GhOrgError, Result};
use crate::utils::access_nested_map;

use super::client::org_url;
use super::transport::Transport;

/// A captured organization payload and its repository listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    /// Organization login the payloads were captured for.
    pub org: String,
    pub org_payload: Value,
    pub repos_payload: Value,
    /// Names of every repository in the listing, in order.
    pub expected_repos: Vec<String>,
    /// Names of the repositories licensed under Apache 2.0.
    pub apache2_repos: Vec<String>,
}

impl Fixture {
    /// Parse a JSON array of fixtures.
    pub fn parse(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON array of fixtures from disk.
    pub fn load(path: &Path) -> Result<Vec<Self>> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// The `repos_url` advertised by the organization payload.
    pub fn repos_url(&self) -> Result<&str> {
        access_nested_map(&self.org_payload, &["repos_url"])?
            .as_str()
            .ok_or_else(|| GhOrgError::UnexpectedPayload("repos_url is not a string".to_string()))
    }
}

/// Transport answering from a fixed URL to payload table.
///
/// Requests for unknown URLs fail with [`GhOrgError::NoReplay`]. Every
/// request, answered or not, is recorded.
#[derive(Debug, Default)]
pub struct ReplayTransport {
    payloads: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl ReplayTransport {
    /// Create a transport with no registered payloads.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `payload` as the response for `url`.
    pub fn with_response(mut self, url: impl Into<String>, payload: Value) -> Self {
        self.payloads.insert(url.into(), payload);
        self
    }

    /// Serve the organization and repository payloads of `fixture`, with
    /// the organization resolved against `api_base`.
    pub fn from_fixture(api_base: &str, fixture: &Fixture) -> Result<Self> {
        let repos_url = fixture.repos_url()?.to_string();
        Ok(Self::new()
            .with_response(org_url(api_base, &fixture.org), fixture.org_payload.clone())
            .with_response(repos_url, fixture.repos_payload.clone()))
    }

    /// Number of requests made for `url`.
    pub fn calls(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.as_str() == url)
            .count()
    }

    /// Every requested URL in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Transport for ReplayTransport {
    async fn get_json(&self, url: &str) -> Result<Value> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());
        debug!(url, "replay GET");

        self.payloads
            .get(url)
            .cloned()
            .ok_or_else(|| GhOrgError::NoReplay(url.to_string()))
    }
}
