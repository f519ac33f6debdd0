//! Weave Merge — flatten a source tree into one single-header file
//!
//! A preprocessor expands the entry point, include lines for libraries that
//! are spliced in separately get dropped, and the library sources plus the
//! filtered output are concatenated.

pub mod config;
pub mod error;
pub mod filter;
pub mod preprocessor;
pub mod merge;


#[cfg(test)]
pub mod test_utils;

pub use config::{LibrarySpec, MergeConfig, DEFAULT_CONFIG_FILE};
pub use error::MergeError;
pub use filter::IncludeFilter;
pub use preprocessor::{CommandPreprocessor, Preprocessor};
pub use merge::{concatenate, filter_in_place, MergeReport, Merger};
