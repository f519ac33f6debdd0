//! Rendering boundary
//!
//! A `GraphRenderer` is any drawing surface. `render` only sequences the
//! calls: nodes, then normal edges, then highlighted edges, then present.
//! Later calls draw on top of earlier ones.

pub mod dot;
pub mod svg;

use crate::error::RenderError;
use crate::graph::EdgeColoredGraph;
use crate::layout::Layout;
use crate::model::{ColoredEdge, EdgeStyle, NodeId, NodeStyle, Palette};
use crate::partition::EdgePartition;

pub use dot::DotRenderer;
pub use svg::SvgRenderer;

/// A drawing surface.
pub trait GraphRenderer {
    /// Draw every node at its layout position.
    fn draw_nodes(
        &mut self,
        nodes: &[NodeId],
        layout: &Layout,
        style: &NodeStyle,
    ) -> Result<(), RenderError>;

    /// Draw one class of edges in a single style.
    fn draw_edges(
        &mut self,
        edges: &[ColoredEdge],
        layout: &Layout,
        style: &EdgeStyle,
    ) -> Result<(), RenderError>;

    /// Flush the surface to its destination.
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Issue the draw calls for a partitioned graph in layering order.
///
/// Errors from the surface are returned unchanged and stop the sequence.
pub fn render<R>(
    graph: &EdgeColoredGraph,
    layout: &Layout,
    partition: &EdgePartition,
    renderer: &mut R,
    palette: &Palette,
) -> Result<(), RenderError>
where
    R: GraphRenderer + ?Sized,
{
    let nodes: Vec<NodeId> = graph.nodes().collect();
    tracing::debug!(
        "Rendering {} nodes, {} normal edges, {} highlighted edges",
        nodes.len(),
        partition.normal.len(),
        partition.highlighted.len()
    );

    renderer.draw_nodes(&nodes, layout, &palette.nodes)?;
    renderer.draw_edges(&partition.normal, layout, &palette.normal)?;
    renderer.draw_edges(&partition.highlighted, layout, &palette.highlighted)?;
    renderer.present()
}

/// Look up a node position or fail with the missing node.
pub(crate) fn position_of(
    layout: &Layout,
    node: NodeId,
) -> Result<crate::model::Point, RenderError> {
    layout
        .position(node)
        .ok_or(RenderError::MissingPosition(node))
}

/// Escape text for a double-quoted XML attribute.
pub(crate) fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Escape text for a double-quoted DOT string.
pub(crate) fn dot_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
