//! Merge configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! tool = "pcpp"
//! define = "GRAPH_CONSTRAINT_SOLVER_SINGLE_HEADER"
//! entry_point = "../../graph_constraint_solver/main.cpp"
//! output = "out.hpp"
//! single_header = "single_header.cpp"
//!
//! [[libraries]]
//! include = "nlohmann/json.hpp"
//! source = "/opt/nlohmann/json.hpp"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MergeError, Result};

pub const DEFAULT_TOOL: &str = "pcpp";
pub const DEFAULT_DEFINE: &str = "GRAPH_CONSTRAINT_SOLVER_SINGLE_HEADER";
pub const DEFAULT_OUTPUT: &str = "out.hpp";
pub const DEFAULT_SINGLE_HEADER: &str = "single_header.cpp";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "weave-merge.toml";

/// A library whose include directive is dropped and whose source is spliced
/// in ahead of the flattened output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySpec {
    /// Path inside the angle brackets, e.g. `nlohmann/json.hpp`.
    pub include: String,
    /// The library's own source file.
    pub source: PathBuf,
}

impl FromStr for LibrarySpec {
    type Err = MergeError;

    /// Parses `INCLUDE=PATH`.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((include, source)) if !include.trim().is_empty() && !source.trim().is_empty() => {
                Ok(LibrarySpec {
                    include: include.trim().to_string(),
                    source: PathBuf::from(source.trim()),
                })
            }
            _ => Err(MergeError::LibrarySpec(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Preprocessor executable.
    pub tool: String,
    /// Macro defined while preprocessing.
    pub define: String,
    /// Primary source file handed to the preprocessor.
    pub entry_point: PathBuf,
    /// Flattened preprocessor output, filtered in place.
    pub output: PathBuf,
    /// Combined file.
    pub single_header: PathBuf,
    pub libraries: Vec<LibrarySpec>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        MergeConfig {
            tool: DEFAULT_TOOL.to_string(),
            define: DEFAULT_DEFINE.to_string(),
            entry_point: PathBuf::from("main.cpp"),
            output: PathBuf::from(DEFAULT_OUTPUT),
            single_header: PathBuf::from(DEFAULT_SINGLE_HEADER),
            libraries: Vec::new(),
        }
    }
}

impl MergeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| MergeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: MergeConfig = toml::from_str(&text).map_err(|source| MergeError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            "Loaded merge config from {} ({} libraries)",
            path.display(),
            config.libraries.len()
        );
        Ok(config)
    }

    /// Files concatenated into the single header, in order: every library
    /// source, then the filtered output.
    pub fn merge_list(&self) -> Vec<PathBuf> {
        self.libraries
            .iter()
            .map(|lib| lib.source.clone())
            .chain(std::iter::once(self.output.clone()))
            .collect()
    }
}
