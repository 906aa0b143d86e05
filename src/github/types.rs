// src/github/types.rs
// =============================================================================
// Payload shapes for the two GitHub endpoints we talk to:
// - GET /repos/{owner}/{repo}/compare/{base}...{head}
// - GET /repos/{owner}/{repo}/contents/{path}?ref={ref}
//
// Only the fields the resolver reads are modelled. serde ignores the rest.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

// The status GitHub attaches to each file in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
    /// File was copied from another path
    Copied,
    /// Mode or metadata changed, content did not
    Changed,
    Unchanged,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Added => "added",
            FileStatus::Modified => "modified",
            FileStatus::Removed => "removed",
            FileStatus::Renamed => "renamed",
            FileStatus::Copied => "copied",
            FileStatus::Changed => "changed",
            FileStatus::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// One entry of the comparison's `files` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Repo-relative path at head
    pub filename: String,
    pub status: FileStatus,
    /// Only present for renames
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_filename: Option<String>,
}

impl ChangedFile {
    pub fn new(filename: impl Into<String>, status: FileStatus) -> Self {
        Self {
            filename: filename.into(),
            status,
            previous_filename: None,
        }
    }

    pub fn renamed_from(mut self, previous: impl Into<String>) -> Self {
        self.previous_filename = Some(previous.into());
        self
    }
}

// Top-level comparison response. `files` is missing when nothing changed.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Comparison {
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}

// A single file returned by the contents endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileContent {
    pub path: String,
    /// Base64 body, wrapped at 60 columns by GitHub. Absent for large files.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

// One entry of a directory listing. Only the name is kept, for logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryEntry {
    pub(crate) name: String,
}

// The contents endpoint answers with an object for a file and an array for a
// directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Contents {
    Directory(Vec<DirectoryEntry>),
    File(FileContent),
}
