//! Graphviz DOT surface with pinned positions (`neato -n` friendly)

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{dot_escape, position_of, GraphRenderer};
use crate::error::RenderError;
use crate::layout::Layout;
use crate::model::{ColoredEdge, EdgeStyle, NodeId, NodeStyle};

/// Points per inch; DOT widths are in inches.
const POINTS_PER_INCH: f64 = 72.0;
const GRAPH_NAME: &str = "weave";

pub struct DotRenderer<W: Write> {
    sink: W,
    body: String,
    presented: bool,
}

impl DotRenderer<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self, RenderError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> DotRenderer<W> {
    pub fn new(sink: W) -> Self {
        DotRenderer {
            sink,
            body: String::new(),
            presented: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> GraphRenderer for DotRenderer<W> {
    fn draw_nodes(
        &mut self,
        nodes: &[NodeId],
        layout: &Layout,
        style: &NodeStyle,
    ) -> Result<(), RenderError> {
        if self.presented {
            return Err(RenderError::AlreadyPresented);
        }
        let width = style.size / POINTS_PER_INCH;
        let color = dot_escape(&style.color);
        for &node in nodes {
            let p = position_of(layout, node)?;
            let _ = writeln!(
                self.body,
                "  {} [pos=\"{:.3},{:.3}!\", width={:.3}, color=\"{}\"];",
                node, p.x, p.y, width, color
            );
        }
        Ok(())
    }

    fn draw_edges(
        &mut self,
        edges: &[ColoredEdge],
        _layout: &Layout,
        style: &EdgeStyle,
    ) -> Result<(), RenderError> {
        if self.presented {
            return Err(RenderError::AlreadyPresented);
        }
        let color = dot_escape(&style.color);
        for edge in edges {
            let _ = writeln!(
                self.body,
                "  {} -- {} [color=\"{}\", penwidth={}];",
                edge.a, edge.b, color, style.width
            );
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        if self.presented {
            return Err(RenderError::AlreadyPresented);
        }
        writeln!(self.sink, "graph {} {{", GRAPH_NAME)?;
        writeln!(self.sink, "  node [shape=point];")?;
        self.sink.write_all(self.body.as_bytes())?;
        writeln!(self.sink, "}}")?;
        self.sink.flush()?;
        self.presented = true;
        Ok(())
    }
}
