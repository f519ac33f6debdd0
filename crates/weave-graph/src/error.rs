//! Error types for graph loading, partitioning and rendering

use std::path::PathBuf;

use thiserror::Error;

use crate::model::NodeId;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge ({a}, {b}) has unknown color label `{label}` ({count} unknown in total)")]
    UnknownColor {
        label: String,
        a: NodeId,
        b: NodeId,
        count: usize,
    },

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported edge list format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("invalid TOML edge list {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid JSON edge list {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot serialize edge list: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("layout has no position for node {0}")]
    MissingPosition(NodeId),

    #[error("surface already presented")]
    AlreadyPresented,
}
