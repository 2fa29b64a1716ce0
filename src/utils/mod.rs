// Generic utilities shared by the GitHub client.
// Nested JSON lookups and per-instance memoization.

pub mod memo;
pub mod nested;

pub use memo::Memoized;
pub use nested::access_nested_map;
