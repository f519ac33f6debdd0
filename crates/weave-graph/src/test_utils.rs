//! Test utilities for weave-graph

use crate::error::RenderError;
use crate::layout::Layout;
use crate::model::{ColoredEdge, EdgeStyle, NodeId, NodeStyle};
use crate::render::GraphRenderer;

/// One call received by a `RecordingRenderer`.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Nodes(Vec<NodeId>),
    Edges { edges: Vec<(u64, u64)>, color: String },
    Present,
}

/// Surface that records every call; optionally fails on the n-th call.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
    pub fail_on: Option<usize>,
}

impl RecordingRenderer {
    pub fn failing_on(call: usize) -> Self {
        RecordingRenderer {
            calls: Vec::new(),
            fail_on: Some(call),
        }
    }

    fn record(&mut self, call: Call) -> Result<(), RenderError> {
        if self.fail_on == Some(self.calls.len()) {
            return Err(RenderError::Io(std::io::Error::other("surface closed")));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl GraphRenderer for RecordingRenderer {
    fn draw_nodes(
        &mut self,
        nodes: &[NodeId],
        _layout: &Layout,
        _style: &NodeStyle,
    ) -> Result<(), RenderError> {
        self.record(Call::Nodes(nodes.to_vec()))
    }

    fn draw_edges(
        &mut self,
        edges: &[ColoredEdge],
        _layout: &Layout,
        style: &EdgeStyle,
    ) -> Result<(), RenderError> {
        self.record(Call::Edges {
            edges: edges.iter().map(ColoredEdge::endpoints).collect(),
            color: style.color.clone(),
        })
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.record(Call::Present)
    }
}

/// Shorthand for building an edge list from plain triples.
pub fn edges(triples: &[(u64, u64, &str)]) -> Vec<ColoredEdge> {
    triples
        .iter()
        .map(|&(a, b, color)| ColoredEdge::new(a, b, crate::model::EdgeColor::parse(color)))
        .collect()
}
