// GitHub organization client library.
// Memoized organization lookups, nested JSON access and swappable transports.

pub mod error;
pub mod github;
pub mod logging;
pub mod utils;

pub use error::{GhOrgError, Result};
pub use github::{
    ClientConfig, Fixture, GithubOrgClient, HttpTransport, RateLimit, ReplayTransport, Transport,
    get_json, has_license,
};
pub use logging::init_logging;
pub use utils::{Memoized, access_nested_map};
