//! Built-in edge lists

use crate::error::{GraphError, Result};
use crate::model::{ColoredEdge, EdgeColor};

pub const PRESET_NAMES: &[&str] = &["bridges", "bridges-head", "empty"];

/// Sample graph with its three bridges marked red. The repeated `(1, 1)`
/// self-loop is part of the data.
const BRIDGES: &[(u64, u64, &str)] = &[
    (0, 1, "blue"),
    (0, 6, "blue"),
    (0, 11, "blue"),
    (1, 2, "blue"),
    (1, 1, "blue"),
    (1, 1, "blue"),
    (2, 3, "blue"),
    (2, 16, "blue"),
    (3, 4, "blue"),
    (3, 5, "blue"),
    (3, 7, "red"),
    (3, 12, "blue"),
    (3, 13, "blue"),
    (3, 15, "blue"),
    (3, 16, "blue"),
    (3, 8, "blue"),
    (4, 8, "blue"),
    (5, 11, "blue"),
    (5, 12, "blue"),
    (6, 9, "blue"),
    (6, 18, "blue"),
    (8, 14, "red"),
    (8, 15, "blue"),
    (9, 10, "blue"),
    (10, 16, "blue"),
    (11, 12, "blue"),
    (13, 19, "blue"),
    (14, 17, "red"),
    (16, 19, "blue"),
    (18, 19, "blue"),
];

const BRIDGES_HEAD: &[(u64, u64, &str)] = &[
    (0, 1, "blue"),
    (3, 7, "red"),
    (8, 14, "red"),
    (14, 17, "red"),
];

fn from_literal(edges: &[(u64, u64, &str)]) -> Vec<ColoredEdge> {
    edges
        .iter()
        .map(|&(a, b, color)| ColoredEdge::new(a, b, EdgeColor::parse(color)))
        .collect()
}

/// Look up a preset by name.
pub fn preset(name: &str) -> Result<Vec<ColoredEdge>> {
    match name {
        "bridges" => Ok(from_literal(BRIDGES)),
        "bridges-head" => Ok(from_literal(BRIDGES_HEAD)),
        "empty" => Ok(Vec::new()),
        _ => Err(GraphError::UnknownPreset(name.to_string())),
    }
}
