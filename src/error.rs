//! Error types for the rendering core

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the blog rendering core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Template unavailable at {path:?}: {source}")]
    TemplateUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template is missing region marker: {0}")]
    MissingRegion(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Title {0:?} has no letters or digits to build a filename from")]
    EmptySlug(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result alias for the rendering core
pub type Result<T> = std::result::Result<T, Error>;
