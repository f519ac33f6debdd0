//! Graph wrapper using petgraph::UnGraph, built once from a literal edge list

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::model::*;
use crate::partition::EdgePartition;

/// An undirected multigraph whose edges carry a color tag.
///
/// Nodes are derived from the edges in order of first appearance. Edges are
/// kept exactly as given: self-loops and duplicates included.
pub struct EdgeColoredGraph {
    inner: UnGraph<NodeId, EdgeColor>,
    index: HashMap<NodeId, NodeIndex>,
}

impl std::fmt::Debug for EdgeColoredGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeColoredGraph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl EdgeColoredGraph {
    /// Build a graph by inserting every edge in order.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = ColoredEdge>,
    {
        let mut graph = EdgeColoredGraph {
            inner: UnGraph::default(),
            index: HashMap::new(),
        };
        for edge in edges {
            let a = graph.intern(edge.a);
            let b = graph.intern(edge.b);
            graph.inner.add_edge(a, b, edge.color);
        }
        tracing::debug!(
            "Built graph with {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    fn intern(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.inner.add_node(id);
        self.index.insert(id, idx);
        idx
    }

    /// Total number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges, duplicates counted.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.edge_count() == 0
    }

    /// Nodes in order of first appearance.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.inner.node_indices().map(move |idx| self.inner[idx])
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = ColoredEdge> + '_ {
        self.inner.edge_indices().filter_map(move |idx| {
            let (a, b) = self.inner.edge_endpoints(idx)?;
            Some(ColoredEdge {
                a: self.inner[a],
                b: self.inner[b],
                color: self.inner[idx].clone(),
            })
        })
    }

    /// Split the edges into drawable classes by strict label equality.
    pub fn partition(&self) -> EdgePartition {
        EdgePartition::from_edges(self.edges())
    }

    pub(crate) fn inner(&self) -> &UnGraph<NodeId, EdgeColor> {
        &self.inner
    }
}

impl Default for EdgeColoredGraph {
    fn default() -> Self {
        Self::from_edges(std::iter::empty())
    }
}
