//! Content file error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or checking the resume content file.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Content file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),

    #[error("[{field}] must be an http(s) URL, got `{url}`")]
    InvalidLink { field: &'static str, url: String },

    #[error("duplicate title `{title}` in [[{list}]]")]
    DuplicateTitle { list: &'static str, title: String },
}
