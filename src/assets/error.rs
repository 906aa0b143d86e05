use std::string::FromUtf8Error;

use thiserror::Error;

use crate::github::ApiError;

#[derive(Debug, Error)]
pub enum ResolveError {
    // The comparison call failed; surfaced exactly as the client reported it
    #[error(transparent)]
    Diff(#[from] ApiError),

    #[error("invalid glob pattern '{pattern}'")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("could not get contents for {filename}")]
    Content {
        filename: String,
        #[source]
        source: ContentError,
    },
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("path is a directory with {entries} entries, not a file")]
    Directory { entries: usize },

    #[error("unsupported content encoding '{0}'")]
    Encoding(String),

    #[error("response has no content body")]
    MissingContent,

    #[error("content is not valid base64")]
    Base64(#[from] base64::DecodeError),

    #[error("content is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}
