// src/github/mod.rs
// =============================================================================
// Everything that talks to GitHub.
//
// - api: the `GithubApi` trait the resolver depends on, and its error type
// - types: comparison and contents payloads
// - fetch: `RestClient`, the reqwest-backed implementation
// =============================================================================

mod api;
mod fetch;
#[cfg(test)]
pub(crate) mod mock;
mod types;

pub use api::{ApiError, GithubApi};
pub use fetch::{RestClient, RestClientBuilder, DEFAULT_API_URL};
pub use types::{ChangedFile, Contents, DirectoryEntry, FileContent, FileStatus};
