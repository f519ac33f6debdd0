//! Node placement
//!
//! Real layout algorithms live outside this crate. `CircularLayout` exists so
//! the renderers have coordinates to work with.

use std::collections::HashMap;

use crate::graph::EdgeColoredGraph;
use crate::model::{NodeId, Point};

/// Assignment of 2-D coordinates to nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    positions: HashMap<NodeId, Point>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self, node: NodeId) -> Option<Point> {
        self.positions.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Smallest box containing every position, as (min, max).
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.positions.values();
        let first = *points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}

impl FromIterator<(NodeId, Point)> for Layout {
    fn from_iter<I: IntoIterator<Item = (NodeId, Point)>>(iter: I) -> Self {
        Layout {
            positions: iter.into_iter().collect(),
        }
    }
}

/// Produces a layout for a graph.
pub trait LayoutAlgorithm {
    fn layout(&self, graph: &EdgeColoredGraph) -> Layout;
}

/// Nodes evenly spaced on a circle, in order of first appearance.
#[derive(Debug, Clone, Copy)]
pub struct CircularLayout {
    pub radius: f64,
}

impl Default for CircularLayout {
    fn default() -> Self {
        CircularLayout { radius: 1.0 }
    }
}

impl LayoutAlgorithm for CircularLayout {
    fn layout(&self, graph: &EdgeColoredGraph) -> Layout {
        let count = graph.node_count();
        graph
            .nodes()
            .enumerate()
            .map(|(i, node)| {
                let angle = std::f64::consts::TAU * i as f64 / count as f64;
                (node, Point::new(self.radius * angle.cos(), self.radius * angle.sin()))
            })
            .collect()
    }
}
