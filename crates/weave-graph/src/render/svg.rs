//! Standalone SVG surface

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{position_of, xml_escape, GraphRenderer};
use crate::error::RenderError;
use crate::layout::Layout;
use crate::model::{ColoredEdge, EdgeStyle, NodeId, NodeStyle, Point};

/// Canvas edge length in pixels.
pub const CANVAS_SIZE: f64 = 800.0;
const MARGIN: f64 = 40.0;
const LOOP_RADIUS: f64 = 8.0;

/// Collects SVG elements in draw order and writes the document on present.
pub struct SvgRenderer<W: Write> {
    sink: W,
    body: String,
    presented: bool,
}

impl SvgRenderer<BufWriter<File>> {
    /// Render into a file, created (or truncated) now.
    pub fn create(path: &Path) -> Result<Self, RenderError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SvgRenderer<W> {
    pub fn new(sink: W) -> Self {
        SvgRenderer {
            sink,
            body: String::new(),
            presented: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn check_open(&self) -> Result<(), RenderError> {
        if self.presented {
            return Err(RenderError::AlreadyPresented);
        }
        Ok(())
    }
}

/// Maps layout coordinates onto the canvas, keeping aspect ratio, y up.
struct Viewport {
    min: Point,
    scale: f64,
    offset: Point,
}

impl Viewport {
    fn fit(layout: &Layout) -> Self {
        let usable = CANVAS_SIZE - 2.0 * MARGIN;
        let Some((min, max)) = layout.bounds() else {
            return Viewport {
                min: Point::default(),
                scale: 1.0,
                offset: Point::new(MARGIN, MARGIN),
            };
        };
        let span = (max.x - min.x).max(max.y - min.y);
        if span <= f64::EPSILON {
            return Viewport {
                min,
                scale: 0.0,
                offset: Point::new(CANVAS_SIZE / 2.0, CANVAS_SIZE / 2.0),
            };
        }
        let scale = usable / span;
        Viewport {
            min,
            scale,
            offset: Point::new(
                MARGIN + (usable - (max.x - min.x) * scale) / 2.0,
                MARGIN + (usable - (max.y - min.y) * scale) / 2.0,
            ),
        }
    }

    fn map(&self, p: Point) -> Point {
        let x = self.offset.x + (p.x - self.min.x) * self.scale;
        let y = self.offset.y + (p.y - self.min.y) * self.scale;
        Point::new(x, CANVAS_SIZE - y)
    }
}

impl<W: Write> GraphRenderer for SvgRenderer<W> {
    fn draw_nodes(
        &mut self,
        nodes: &[NodeId],
        layout: &Layout,
        style: &NodeStyle,
    ) -> Result<(), RenderError> {
        self.check_open()?;
        let viewport = Viewport::fit(layout);
        // Size is an area in points squared, like the plotting toolkits use.
        let radius = style.size.max(0.0).sqrt() / 2.0;
        let fill = xml_escape(&style.color);
        self.body.push_str("  <g class=\"nodes\">\n");
        for &node in nodes {
            let p = viewport.map(position_of(layout, node)?);
            let _ = writeln!(
                self.body,
                "    <circle data-node=\"{}\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
                node, p.x, p.y, radius, fill
            );
        }
        self.body.push_str("  </g>\n");
        Ok(())
    }

    fn draw_edges(
        &mut self,
        edges: &[ColoredEdge],
        layout: &Layout,
        style: &EdgeStyle,
    ) -> Result<(), RenderError> {
        self.check_open()?;
        let viewport = Viewport::fit(layout);
        let _ = writeln!(
            self.body,
            "  <g class=\"edges\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\">",
            xml_escape(&style.color),
            style.width
        );
        for edge in edges {
            let a = viewport.map(position_of(layout, edge.a)?);
            if edge.is_self_loop() {
                let _ = writeln!(
                    self.body,
                    "    <circle data-edge=\"{}-{}\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/>",
                    edge.a,
                    edge.b,
                    a.x,
                    a.y - LOOP_RADIUS,
                    LOOP_RADIUS
                );
                continue;
            }
            let b = viewport.map(position_of(layout, edge.b)?);
            let _ = writeln!(
                self.body,
                "    <line data-edge=\"{}-{}\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>",
                edge.a, edge.b, a.x, a.y, b.x, b.y
            );
        }
        self.body.push_str("  </g>\n");
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.check_open()?;
        writeln!(
            self.sink,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
            CANVAS_SIZE
        )?;
        self.sink.write_all(self.body.as_bytes())?;
        writeln!(self.sink, "</svg>")?;
        self.sink.flush()?;
        self.presented = true;
        tracing::debug!("SVG surface presented ({} bytes of elements)", self.body.len());
        Ok(())
    }
}
