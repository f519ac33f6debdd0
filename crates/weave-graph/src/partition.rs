//! Edge partition by color label

use crate::error::{GraphError, Result};
use crate::model::{ColoredEdge, EdgeColor};

/// Edges split into the two drawable classes plus everything else.
///
/// Each list keeps input order. Every edge lands in exactly one list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgePartition {
    pub normal: Vec<ColoredEdge>,
    pub highlighted: Vec<ColoredEdge>,
    pub other: Vec<ColoredEdge>,
}

impl EdgePartition {
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = ColoredEdge>,
    {
        let mut partition = EdgePartition::default();
        for edge in edges {
            match edge.color {
                EdgeColor::Normal => partition.normal.push(edge),
                EdgeColor::Highlighted => partition.highlighted.push(edge),
                EdgeColor::Other(_) => partition.other.push(edge),
            }
        }
        partition
    }

    pub fn len(&self) -> usize {
        self.normal.len() + self.highlighted.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fail if any edge carries a label outside the two drawable classes.
    pub fn ensure_exhaustive(&self) -> Result<()> {
        match self.other.first() {
            None => Ok(()),
            Some(edge) => Err(GraphError::UnknownColor {
                label: edge.color.to_string(),
                a: edge.a,
                b: edge.b,
                count: self.other.len(),
            }),
        }
    }

    /// Log dropped edges instead of failing.
    pub fn warn_unknown(&self) {
        for edge in &self.other {
            tracing::warn!(
                "Edge ({}, {}) has unknown color `{}`; it will not be drawn",
                edge.a,
                edge.b,
                edge.color
            );
        }
    }
}
