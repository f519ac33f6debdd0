//! Core data structures for the edge-colored graph

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rendering category of an edge.
///
/// Only `Normal` and `Highlighted` are drawn. Any other label is carried
/// through as `Other` so the partition can report it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EdgeColor {
    Normal,
    Highlighted,
    Other(String),
}

impl EdgeColor {
    /// Parse a label by exact match. Accepts the semantic names and the
    /// plotting colors the sample data was written with (`blue`, `red`).
    pub fn parse(label: &str) -> Self {
        match label {
            "normal" | "blue" => EdgeColor::Normal,
            "highlighted" | "red" => EdgeColor::Highlighted,
            _ => EdgeColor::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EdgeColor::Normal => "normal",
            EdgeColor::Highlighted => "highlighted",
            EdgeColor::Other(label) => label,
        }
    }
}

impl fmt::Display for EdgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EdgeColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EdgeColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(EdgeColor::parse(&label))
    }
}

/// An undirected, color-tagged edge. Endpoints may be equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColoredEdge {
    pub a: NodeId,
    pub b: NodeId,
    pub color: EdgeColor,
}

impl ColoredEdge {
    pub fn new(a: u64, b: u64, color: EdgeColor) -> Self {
        ColoredEdge {
            a: NodeId(a),
            b: NodeId(b),
            color,
        }
    }

    pub fn highlighted(a: u64, b: u64) -> Self {
        Self::new(a, b, EdgeColor::Highlighted)
    }

    /// Endpoint pair as plain integers.
    pub fn endpoints(&self) -> (u64, u64) {
        (self.a.0, self.b.0)
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

/// A 2-D position assigned by a layout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// How nodes are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub size: f64,
    pub color: String,
}

/// How one edge class is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub color: String,
    pub width: f64,
}

/// Fixed visual styles for the three draw calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub nodes: NodeStyle,
    pub normal: EdgeStyle,
    pub highlighted: EdgeStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            nodes: NodeStyle {
                size: 10.0,
                color: "black".to_string(),
            },
            normal: EdgeStyle {
                color: "blue".to_string(),
                width: 1.0,
            },
            highlighted: EdgeStyle {
                color: "red".to_string(),
                width: 2.0,
            },
        }
    }
}
