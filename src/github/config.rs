// Client configuration.
// API base URL, credentials and the default headers sent with every request.

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const DEFAULT_USER_AGENT: &str = "ghorg";

/// Settings used to build an [`HttpTransport`](super::HttpTransport) and
/// to resolve organization URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_base: String,
    /// Bearer token. Anonymous requests are made when unset.
    pub token: Option<String>,
    pub user_agent: String,
    pub api_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: GITHUB_API_BASE.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_version: GITHUB_API_VERSION.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `GITHUB_TOKEN` and `GITHUB_API_URL` from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(base) = non_empty("GITHUB_API_URL") {
            config.api_base = base;
        }
        config.token = non_empty("GITHUB_TOKEN");
        config.normalized()
    }

    /// Set the API base URL.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self.normalized()
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base.trim_end_matches('/').len();
        self.api_base.truncate(trimmed);
        self
    }
}
