// src/assets/resolve.rs
// =============================================================================
// Finds the SVG assets that changed between two revisions and turns each one
// into a `PluginInput` (decoded code + state map).
//
// How it works:
// 1. Ask GitHub for the file-level diff between `base` and `head`
// 2. Keep files inside the folder whose relative path matches the glob
// 3. Fetch every survivor's content at `head`, all at once
//    (removed files get EMPTY_SVG instead of a request)
// 4. Name each file and merge the caller's state over the computed keys
//
// All or nothing: the first failed fetch fails the whole call and whatever
// was already fetched is thrown away.
// =============================================================================

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Serialize;
use tracing::{debug, info};

use super::error::{ContentError, ResolveError};
use super::filter::AssetFilter;
use super::state::{State, StateBuilder};
use crate::github::{ChangedFile, Contents, FileStatus, GithubApi};
use crate::naming::{path_to_name, NamingScheme};

// Stand-in code for deleted files so downstream always gets parseable SVG
pub const EMPTY_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"></svg>"#;

pub const DEFAULT_BASE: &str = "master";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginInput {
    pub code: String,
    pub state: State,
}

// Which repository and which two revisions to compare
pub struct GithubParams<'a> {
    pub api: &'a dyn GithubApi,
    pub base: String,
    pub head: String,
    pub owner: String,
    pub repo: String,
}

impl<'a> GithubParams<'a> {
    pub fn new(
        api: &'a dyn GithubApi,
        owner: impl Into<String>,
        repo: impl Into<String>,
        head: impl Into<String>,
    ) -> Self {
        Self {
            api,
            base: DEFAULT_BASE.to_string(),
            head: head.into(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }
}

pub struct ResolveParams<'a> {
    /// Folder scope; empty means the repository root
    pub folder_path: String,
    pub github: GithubParams<'a>,
    /// Relative to `folder_path`
    pub glob_pattern: String,
    pub name_scheme: NamingScheme,
    /// Merged into every result, winning over computed keys
    pub state: State,
    /// Cap on in-flight content requests; `None` sends them all at once
    pub max_concurrency: Option<usize>,
}

impl<'a> ResolveParams<'a> {
    pub fn new(github: GithubParams<'a>, glob_pattern: impl Into<String>) -> Self {
        Self {
            folder_path: String::new(),
            github,
            glob_pattern: glob_pattern.into(),
            name_scheme: NamingScheme::default(),
            state: State::new(),
            max_concurrency: None,
        }
    }

    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.folder_path = folder.into();
        self
    }

    pub fn name_scheme(mut self, scheme: NamingScheme) -> Self {
        self.name_scheme = scheme;
        self
    }

    pub fn state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    pub fn max_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_concurrency = limit;
        self
    }
}

pub async fn resolve(params: ResolveParams<'_>) -> Result<Vec<PluginInput>, ResolveError> {
    let ResolveParams {
        folder_path,
        github,
        glob_pattern,
        name_scheme,
        state,
        max_concurrency,
    } = params;

    let filter = AssetFilter::new(&folder_path, &glob_pattern).map_err(|source| {
        ResolveError::Glob {
            pattern: glob_pattern.clone(),
            source,
        }
    })?;

    let changed = github
        .api
        .compare_commits(&github.owner, &github.repo, &github.base, &github.head)
        .await?;
    let total = changed.len();

    let assets: Vec<(ChangedFile, String)> = changed
        .into_iter()
        .filter_map(|file| {
            let relative = filter.select(&file.filename);
            if relative.is_none() {
                debug!(file = %file.filename, "skipping, outside folder or glob");
            }
            relative.map(|relative| (file, relative))
        })
        .collect();

    info!(
        base = %github.base,
        head = %github.head,
        changed = total,
        assets = assets.len(),
        "compared revisions"
    );

    if assets.is_empty() {
        return Ok(Vec::new());
    }

    let limit = max_concurrency.unwrap_or(assets.len()).max(1);
    let github = &github;
    let filter = &filter;
    let state = &state;

    stream::iter(assets)
        .map(|(file, relative)| resolve_asset(github, filter, name_scheme, state, file, relative))
        .buffer_unordered(limit)
        .try_collect()
        .await
}

async fn resolve_asset(
    github: &GithubParams<'_>,
    filter: &AssetFilter,
    scheme: NamingScheme,
    base_state: &State,
    file: ChangedFile,
    file_path: String,
) -> Result<PluginInput, ResolveError> {
    let code = if file.status == FileStatus::Removed {
        EMPTY_SVG.to_string()
    } else {
        fetch_code(github, &file.filename)
            .await
            .map_err(|source| ResolveError::Content {
                filename: file.filename.clone(),
                source,
            })?
    };
    debug!(file = %file.filename, status = %file.status, "resolved asset");

    let previous_name = file
        .previous_filename
        .as_deref()
        .map(|previous| path_to_name(&filter.relative(previous), scheme));

    let state = StateBuilder::new(path_to_name(&file_path, scheme), file.status, file_path)
        .previous_name(previous_name)
        .build(base_state);

    Ok(PluginInput { code, state })
}

async fn fetch_code(github: &GithubParams<'_>, path: &str) -> Result<String, ContentError> {
    let contents = github
        .api
        .get_content(&github.owner, &github.repo, path, &github.head)
        .await?;

    match contents {
        Contents::Directory(entries) => {
            let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
            debug!(path, entries = ?names, "expected a file, got a directory listing");
            Err(ContentError::Directory {
                entries: entries.len(),
            })
        }
        Contents::File(file) => {
            let body = file
                .content
                .filter(|body| !body.is_empty())
                .ok_or(ContentError::MissingContent)?;
            // Anything other than base64 is unexpected from this endpoint
            match file.encoding.as_deref() {
                None | Some("base64") => decode_content(&body),
                Some(other) => Err(ContentError::Encoding(other.to_string())),
            }
        }
    }
}

// GitHub wraps base64 bodies with newlines. Decoded bytes must be UTF-8.
pub fn decode_content(body: &str) -> Result<String, ContentError> {
    let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. buffer_unordered + try_collect
//    - buffer_unordered(n) polls up to n fetches at once and yields results
//      as they finish, so output order is completion order
//    - try_collect stops at the first Err; the remaining futures are dropped
//      with the stream
//
// 2. `let github = &github;` before the stream
//    - Each future borrows the params. Rebinding them as references makes
//      the closure copy a pointer per file instead of moving the values.
// -----------------------------------------------------------------------------
