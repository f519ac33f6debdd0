//! Edge list files (TOML or JSON)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::model::{ColoredEdge, Palette};

/// Optional overrides for the default palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<String>,
}

impl StyleOverrides {
    pub fn apply(&self, palette: &mut Palette) {
        if let Some(size) = self.node_size {
            palette.nodes.size = size;
        }
        if let Some(color) = &self.node_color {
            palette.nodes.color = color.clone();
        }
        if let Some(color) = &self.normal {
            palette.normal.color = color.clone();
        }
        if let Some(color) = &self.highlighted {
            palette.highlighted.color = color.clone();
        }
    }
}

/// On-disk edge list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeListFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleOverrides>,
    #[serde(default)]
    pub edges: Vec<ColoredEdge>,
}

impl EdgeListFile {
    pub fn new(edges: Vec<ColoredEdge>) -> Self {
        EdgeListFile { style: None, edges }
    }

    /// Load from `.toml` or `.json`, chosen by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GraphError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&text).map_err(|source| GraphError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
            Some("json") => serde_json::from_str(&text).map_err(|source| GraphError::Json {
                path: path.to_path_buf(),
                source,
            })?,
            _ => return Err(GraphError::UnsupportedFormat(path.to_path_buf())),
        };
        tracing::debug!("Loaded {} edges from {}", file.edges.len(), path.display());
        Ok(file)
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Default palette with this file's overrides applied.
    pub fn palette(&self) -> Palette {
        let mut palette = Palette::default();
        if let Some(style) = &self.style {
            style.apply(&mut palette);
        }
        palette
    }
}
