// GitHub organization client.
// Memoized organization and repository payloads with license filtering.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{GhOrgError, Result};
use crate::utils::{Memoized, access_nested_map};

use super::config::{ClientConfig, GITHUB_API_BASE};
use super::transport::{HttpTransport, Transport};

/// URL of the organization endpoint for `org` under `api_base`.
pub fn org_url(api_base: &str, org: &str) -> String {
    format!("{}/orgs/{}", api_base.trim_end_matches('/'), org)
}

/// Whether `repo` is licensed under `license_key`.
///
/// A record without `license.key` is not an error, it simply does not
/// match. An empty `license_key` is rejected.
pub fn has_license(repo: &Value, license_key: &str) -> Result<bool> {
    if license_key.is_empty() {
        return Err(GhOrgError::InvalidArgument(
            "license_key cannot be empty".to_string(),
        ));
    }

    match access_nested_map(repo, &["license", "key"]) {
        Ok(key) => Ok(key.as_str() == Some(license_key)),
        Err(GhOrgError::KeyNotFound(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Client for a single GitHub organization.
///
/// The organization payload and the repository listing are each fetched at
/// most once per client and reused for every later read.
#[derive(Debug)]
pub struct GithubOrgClient<T = HttpTransport> {
    org_name: String,
    api_base: String,
    transport: T,
    org: Memoized<Value>,
    repos_payload: Memoized<Value>,
}

impl GithubOrgClient<HttpTransport> {
    /// Create an anonymous client against the public GitHub API.
    pub fn new(org_name: impl Into<String>) -> Result<Self> {
        Self::with_config(org_name, &ClientConfig::default())
    }

    /// Create a client configured from `GITHUB_TOKEN` and `GITHUB_API_URL`.
    pub fn from_env(org_name: impl Into<String>) -> Result<Self> {
        Self::with_config(org_name, &ClientConfig::from_env())
    }

    /// Create a client whose transport and API base come from `config`.
    pub fn with_config(org_name: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(GithubOrgClient::with_transport(org_name, transport).with_api_base(&config.api_base))
    }

    /// Whether `repo` is licensed under `license_key`. See [`has_license`].
    pub fn has_license(repo: &Value, license_key: &str) -> Result<bool> {
        has_license(repo, license_key)
    }
}

impl<T: Transport> GithubOrgClient<T> {
    /// Create a client that fetches through `transport`.
    pub fn with_transport(org_name: impl Into<String>, transport: T) -> Self {
        Self {
            org_name: org_name.into(),
            api_base: GITHUB_API_BASE.to_string(),
            transport,
            org: Memoized::new(),
            repos_payload: Memoized::new(),
        }
    }

    /// Resolve the organization endpoint against another API base.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Organization login this client was built for.
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// Full URL of the organization endpoint.
    pub fn org_url(&self) -> String {
        org_url(&self.api_base, &self.org_name)
    }

    /// Transport the client fetches through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Organization payload, fetched on first read.
    pub async fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_init(|| async {
                let url = self.org_url();
                let payload = self.transport.get_json(&url).await?;
                debug!(org = %self.org_name, "cached organization payload");
                Ok::<_, GhOrgError>(payload)
            })
            .await
    }

    /// The `repos_url` advertised by the organization payload.
    pub async fn public_repos_url(&self) -> Result<String> {
        let org = self.org().await?;
        access_nested_map(org, &["repos_url"])?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| GhOrgError::UnexpectedPayload("repos_url is not a string".to_string()))
    }

    /// Repository listing, fetched on first read.
    pub async fn repos_payload(&self) -> Result<&Value> {
        self.repos_payload
            .get_or_try_init(|| async {
                let url = self.public_repos_url().await?;
                let payload = self.transport.get_json(&url).await?;
                debug!(org = %self.org_name, "cached repository payload");
                Ok::<_, GhOrgError>(payload)
            })
            .await
    }

    /// Names of the organization's repositories in listing order.
    ///
    /// With `license`, only repositories whose `license.key` matches are
    /// kept. Repositories without a license are skipped.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let repos = self
            .repos_payload()
            .await?
            .as_array()
            .ok_or_else(|| {
                GhOrgError::UnexpectedPayload("repository listing is not an array".to_string())
            })?;

        let mut names = Vec::with_capacity(repos.len());
        for repo in repos {
            if let Some(key) = license {
                if !has_license(repo, key)? {
                    continue;
                }
            }
            let name = access_nested_map(repo, &["name"])?
                .as_str()
                .ok_or_else(|| {
                    GhOrgError::UnexpectedPayload("repository name is not a string".to_string())
                })?;
            names.push(name.to_string());
        }

        trace!(org = %self.org_name, license, count = names.len(), "listed repositories");
        Ok(names)
    }
}
