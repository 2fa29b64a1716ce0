// GitHub API module.
// Organization client, configuration and the transports it fetches through.

pub mod client;
pub mod config;
pub mod replay;
pub mod transport;
pub mod types;

pub use client::{GithubOrgClient, has_license, org_url};
pub use config::ClientConfig;
pub use replay::{Fixture, ReplayTransport};
pub use transport::{HttpTransport, Transport, get_json};
pub use types::RateLimit;
