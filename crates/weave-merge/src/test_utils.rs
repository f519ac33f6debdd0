//! Test utilities for weave-merge

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::{LibrarySpec, MergeConfig};
use crate::error::{MergeError, Result};
use crate::preprocessor::Preprocessor;

/// Preprocessor that writes fixed text and records what it was asked.
#[derive(Debug, Default)]
pub struct FakePreprocessor {
    pub flattened: String,
    pub requests: RefCell<Vec<(PathBuf, String, PathBuf)>>,
}

impl FakePreprocessor {
    pub fn new(flattened: &str) -> Self {
        FakePreprocessor {
            flattened: flattened.to_string(),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Preprocessor for FakePreprocessor {
    fn expand(&self, entry: &Path, define: &str, output: &Path) -> Result<String> {
        self.requests
            .borrow_mut()
            .push((entry.to_path_buf(), define.to_string(), output.to_path_buf()));
        std::fs::write(output, &self.flattened).map_err(|source| MergeError::Write {
            path: output.to_path_buf(),
            source,
        })?;
        Ok(self.flattened.clone())
    }
}

/// Temp directory with one library source per `(include, content)` pair and
/// a config pointing every path into it.
pub fn create_merge_dir(libraries: &[(&str, &str)]) -> (TempDir, MergeConfig) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    std::fs::write(root.join("main.cpp"), "int main() {}\n").unwrap();

    let libraries = libraries
        .iter()
        .enumerate()
        .map(|(i, (include, content))| {
            let source = root.join(format!("lib{}.hpp", i));
            std::fs::write(&source, content).unwrap();
            LibrarySpec {
                include: include.to_string(),
                source,
            }
        })
        .collect();

    let config = MergeConfig {
        entry_point: root.join("main.cpp"),
        output: root.join("out.hpp"),
        single_header: root.join("single_header.cpp"),
        libraries,
        ..MergeConfig::default()
    };
    (dir, config)
}
