use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MergeError>;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to launch `{tool}`: {source}")]
    Spawn {
        tool: String,
        source: std::io::Error,
    },

    #[error("`{tool}` exited with {status}")]
    ToolFailed {
        tool: String,
        status: std::process::ExitStatus,
    },

    #[error("invalid merge config {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid library spec `{0}` (expected INCLUDE=PATH)")]
    LibrarySpec(String),

    #[error("invalid include pattern for `{include}`: {source}")]
    Pattern {
        include: String,
        source: regex::Error,
    },
}
