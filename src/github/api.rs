// src/github/api.rs
// =============================================================================
// The seam between the resolver and GitHub.
//
// The resolver never builds HTTP requests itself. It receives something that
// implements `GithubApi`, already authenticated, and asks it for two things:
// - the file-level diff between two revisions
// - the content of one file at one revision
//
// `RestClient` (fetch.rs) is the real implementation; tests use a mock.
// =============================================================================

use async_trait::async_trait;
use thiserror::Error;

use super::types::{ChangedFile, Contents};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GitHub returned HTTP {status} for {url}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid API URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait GithubApi: Send + Sync {
    // Files changed between `base` and `head` (three-dot comparison)
    async fn compare_commits(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> Result<Vec<ChangedFile>, ApiError>;

    // Content of `path` at `reference`. May be a directory listing.
    async fn get_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<Contents, ApiError>;
}
