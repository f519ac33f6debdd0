//! Include-line filter

use regex::Regex;

use crate::config::LibrarySpec;
use crate::error::{MergeError, Result};

/// Drops `#include <...>` lines for libraries spliced in separately.
#[derive(Debug, Clone)]
pub struct IncludeFilter {
    patterns: Vec<Regex>,
}

impl IncludeFilter {
    pub fn new(libraries: &[LibrarySpec]) -> Result<Self> {
        let patterns = libraries
            .iter()
            .map(|lib| {
                Regex::new(&format!("^#include.*<{}>", regex::escape(&lib.include))).map_err(
                    |source| MergeError::Pattern {
                        include: lib.include.clone(),
                        source,
                    },
                )
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(IncludeFilter { patterns })
    }

    /// True if any library's include directive is on this line.
    pub fn matches(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(line))
    }

    /// Keep every line that does not match, terminators included.
    /// Returns the kept text and how many lines were dropped.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut kept = String::with_capacity(text.len());
        let mut dropped = 0;
        for line in text.split_inclusive('\n') {
            if self.matches(line) {
                tracing::debug!("Dropping include line: {}", line.trim_end());
                dropped += 1;
            } else {
                kept.push_str(line);
            }
        }
        (kept, dropped)
    }
}
