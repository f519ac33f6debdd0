//! Single-header merge pipeline
//!
//! Steps, strictly in order, each file closed before the next step:
//! 1. the preprocessor writes the flattened entry point to `output`
//! 2. `output` is read back and library include lines are dropped
//! 3. the filtered text overwrites `output`
//! 4. library sources, then `output`, are concatenated into `single_header`

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::MergeConfig;
use crate::error::{MergeError, Result};
use crate::filter::IncludeFilter;
use crate::preprocessor::Preprocessor;

/// What a merge run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub dropped_lines: usize,
    pub merge_list: Vec<PathBuf>,
    pub bytes_written: u64,
}

pub struct Merger<'a, P: Preprocessor + ?Sized> {
    config: &'a MergeConfig,
    preprocessor: &'a P,
}

impl<'a, P: Preprocessor + ?Sized> Merger<'a, P> {
    pub fn new(config: &'a MergeConfig, preprocessor: &'a P) -> Self {
        Merger {
            config,
            preprocessor,
        }
    }

    pub fn run(&self) -> Result<MergeReport> {
        let config = self.config;

        let flattened = self
            .preprocessor
            .expand(&config.entry_point, &config.define, &config.output)?;
        tracing::debug!(
            "Preprocessed {} into {} ({} bytes)",
            config.entry_point.display(),
            config.output.display(),
            flattened.len()
        );

        let filter = IncludeFilter::new(&config.libraries)?;
        let dropped_lines = filter_in_place(&filter, &config.output)?;
        tracing::info!(
            "Dropped {} include lines from {}",
            dropped_lines,
            config.output.display()
        );

        let merge_list = config.merge_list();
        let bytes_written = concatenate(&merge_list, &config.single_header)?;
        tracing::info!(
            "Wrote {} ({} bytes from {} files)",
            config.single_header.display(),
            bytes_written,
            merge_list.len()
        );

        Ok(MergeReport {
            dropped_lines,
            merge_list,
            bytes_written,
        })
    }
}

/// Rewrite `path` without the lines the filter matches.
pub fn filter_in_place(filter: &IncludeFilter, path: &Path) -> Result<usize> {
    let text = read(path)?;
    let (kept, dropped) = filter.apply(&text);
    std::fs::write(path, kept).map_err(|source| MergeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(dropped)
}

/// Write the full content of every input, byte for byte and in order, into
/// `dest`.
pub fn concatenate(inputs: &[PathBuf], dest: &Path) -> Result<u64> {
    let write_err = |source| MergeError::Write {
        path: dest.to_path_buf(),
        source,
    };
    let file = File::create(dest).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    let mut total = 0u64;
    for input in inputs {
        let content = std::fs::read(input).map_err(|source| MergeError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        writer.write_all(&content).map_err(write_err)?;
        total += content.len() as u64;
        tracing::debug!("Appended {} ({} bytes)", input.display(), content.len());
    }
    writer.flush().map_err(write_err)?;
    Ok(total)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| MergeError::Read {
        path: path.to_path_buf(),
        source,
    })
}
