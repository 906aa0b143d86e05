// src/github/mock.rs
// In-memory `GithubApi` for resolver tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

use super::api::{ApiError, GithubApi};
use super::types::{ChangedFile, Contents, FileContent};

#[derive(Default)]
pub(crate) struct MockGithubApi {
    files: Vec<ChangedFile>,
    compare_error: Option<String>,
    contents: HashMap<String, Result<Contents, String>>,
    // (path, ref) of every get_content call
    calls: Mutex<Vec<(String, String)>>,
    // When set, every get_content call waits here before answering
    barrier: Option<Arc<Barrier>>,
}

impl MockGithubApi {
    pub fn new(files: Vec<ChangedFile>) -> Self {
        Self {
            files,
            ..Default::default()
        }
    }

    pub fn failing_compare(message: &str) -> Self {
        Self {
            compare_error: Some(message.to_string()),
            ..Default::default()
        }
    }

    // Serves `body` base64-encoded, the way GitHub does
    pub fn with_file(mut self, path: &str, body: &str) -> Self {
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD.encode(body);
        self.contents.insert(
            path.to_string(),
            Ok(Contents::File(FileContent {
                path: path.to_string(),
                content: Some(encoded),
                encoding: Some("base64".to_string()),
            })),
        );
        self
    }

    pub fn with_contents(mut self, path: &str, contents: Contents) -> Self {
        self.contents.insert(path.to_string(), Ok(contents));
        self
    }

    pub fn with_error(mut self, path: &str, message: &str) -> Self {
        self.contents
            .insert(path.to_string(), Err(message.to_string()));
        self
    }

    pub fn with_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.barrier = Some(barrier);
        self
    }

    pub fn content_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GithubApi for MockGithubApi {
    async fn compare_commits(
        &self,
        _owner: &str,
        _repo: &str,
        _base: &str,
        _head: &str,
    ) -> Result<Vec<ChangedFile>, ApiError> {
        match &self.compare_error {
            Some(message) => Err(ApiError::Other(message.clone())),
            None => Ok(self.files.clone()),
        }
    }

    async fn get_content(
        &self,
        _owner: &str,
        _repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<Contents, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), reference.to_string()));

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        match self.contents.get(path) {
            Some(Ok(contents)) => Ok(contents.clone()),
            Some(Err(message)) => Err(ApiError::Other(message.clone())),
            None => Err(ApiError::Status {
                url: path.to_string(),
                status: 404,
                message: "Not Found".to_string(),
            }),
        }
    }
}
