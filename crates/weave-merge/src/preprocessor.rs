//! Preprocessor boundary

use std::path::Path;
use std::process::Command;

use crate::error::{MergeError, Result};

/// Flattens a source file by expanding its include directives.
pub trait Preprocessor {
    /// Expand `entry` with `define` set, leave the flattened text at
    /// `output`, and return it.
    fn expand(&self, entry: &Path, define: &str, output: &Path) -> Result<String>;
}

/// Runs an external tool as `<tool> -o <output> -D <define> <entry>`.
#[derive(Debug, Clone)]
pub struct CommandPreprocessor {
    tool: String,
}

impl CommandPreprocessor {
    pub fn new(tool: impl Into<String>) -> Self {
        CommandPreprocessor { tool: tool.into() }
    }

    fn command(&self, entry: &Path, define: &str, output: &Path) -> Command {
        let mut command = Command::new(&self.tool);
        command
            .arg("-o")
            .arg(output)
            .arg("-D")
            .arg(define)
            .arg(entry);
        command
    }
}

impl Preprocessor for CommandPreprocessor {
    fn expand(&self, entry: &Path, define: &str, output: &Path) -> Result<String> {
        tracing::info!(
            "Running {} -o {} -D {} {}",
            self.tool,
            output.display(),
            define,
            entry.display()
        );
        let status = self
            .command(entry, define, output)
            .status()
            .map_err(|source| MergeError::Spawn {
                tool: self.tool.clone(),
                source,
            })?;
        if !status.success() {
            return Err(MergeError::ToolFailed {
                tool: self.tool.clone(),
                status,
            });
        }
        std::fs::read_to_string(output).map_err(|source| MergeError::Read {
            path: output.to_path_buf(),
            source,
        })
    }
}
