// src/github/fetch.rs
// =============================================================================
// A `GithubApi` implementation on top of the GitHub REST API.
//
// Endpoints used:
// - GET /repos/{owner}/{repo}/compare/{base}...{head}
// - GET /repos/{owner}/{repo}/contents/{path}?ref={ref}
//
// Authentication is a bearer token handed in by whoever builds the client.
// The resolver only ever sees the trait, so nothing here knows about folders,
// globs or component names.
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::api::{ApiError, GithubApi};
use super::types::{ChangedFile, Comparison, Contents};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Error body GitHub sends with 4xx/5xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    api_url: Url,
}

#[derive(Debug, Clone)]
pub struct RestClientBuilder {
    api_url: String,
    token: Option<String>,
    timeout: Duration,
    user_agent: String,
}

impl Default for RestClientBuilder {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl RestClientBuilder {
    /// Base URL of the API, e.g. `https://github.example.com/api/v3` for GHES
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Per-request timeout, covering connect through reading the body
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<RestClient, ApiError> {
        let api_url = Url::parse(&self.api_url).map_err(|source| ApiError::InvalidUrl {
            url: self.api_url.clone(),
            source,
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));
        headers.insert(USER_AGENT, header_value(&self.user_agent)?);
        if let Some(token) = &self.token {
            let mut value = header_value(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|source| ApiError::Transport {
                url: self.api_url.clone(),
                source,
            })?;

        Ok(RestClient { client, api_url })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value)
        .map_err(|_| ApiError::Other("header value contains invalid characters".to_string()))
}

impl RestClient {
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::default()
    }

    // Appends `segments` to the API base URL. Each segment is percent-encoded
    // on its own, so slashes inside a segment must already be split out.
    fn endpoint<'a, I>(&self, segments: I) -> Result<Url, ApiError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Other(format!("API URL '{}' cannot be a base", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            // GitHub puts a human readable reason in the body; fall back to the
            // canonical reason when the body is not the usual shape
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
            };
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl GithubApi for RestClient {
    async fn compare_commits(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> Result<Vec<ChangedFile>, ApiError> {
        let basehead = format!("{}...{}", base, head);
        let url = self.endpoint(
            ["repos", owner, repo, "compare"]
                .into_iter()
                .chain(basehead.split('/')),
        )?;
        let comparison: Comparison = self.get_json(url).await?;
        Ok(comparison.files)
    }

    async fn get_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<Contents, ApiError> {
        let mut url = self.endpoint(
            ["repos", owner, repo, "contents"]
                .into_iter()
                .chain(path.split('/').filter(|s| !s.is_empty())),
        )?;
        url.query_pairs_mut().append_pair("ref", reference);
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_url: &str) -> RestClient {
        RestClient::builder().api_url(api_url).build().unwrap()
    }

    #[test]
    fn test_compare_endpoint_keeps_branch_slashes() {
        let client = client(DEFAULT_API_URL);
        let basehead = "main...feature/icons";
        let url = client
            .endpoint(
                ["repos", "acme", "assets", "compare"]
                    .into_iter()
                    .chain(basehead.split('/')),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/acme/assets/compare/main...feature/icons"
        );
    }

    #[test]
    fn test_endpoint_on_enterprise_base() {
        let client = client("https://github.example.com/api/v3/");
        let url = client
            .endpoint(["repos", "acme", "assets", "contents", "icons", "my icon.svg"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://github.example.com/api/v3/repos/acme/assets/contents/icons/my%20icon.svg"
        );
    }

    #[test]
    fn test_invalid_api_url() {
        let err = RestClient::builder().api_url("not a url").build().unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }
}
