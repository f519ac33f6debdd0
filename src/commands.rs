//! CLI command implementations

use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

use weave_graph::{
    CircularLayout, ColoredEdge, DotRenderer, EdgeColoredGraph, EdgeListFile, GraphRenderer,
    LayoutAlgorithm, Palette, SvgRenderer,
};
use weave_merge::{CommandPreprocessor, LibrarySpec, MergeConfig, Merger, DEFAULT_CONFIG_FILE};

use crate::{EdgeSource, Format};

pub struct DrawOptions {
    pub strict_colors: bool,
    pub recolor_bridges: bool,
}

pub struct MergeArgs {
    pub config: Option<PathBuf>,
    pub tool: Option<String>,
    pub define: Option<String>,
    pub entry: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub single_header: Option<PathBuf>,
    pub libs: Vec<String>,
}

/// Load the edge list and palette named on the command line.
fn load_edges(source: &EdgeSource) -> anyhow::Result<(Vec<ColoredEdge>, Palette)> {
    match &source.edges {
        Some(path) => {
            let file = EdgeListFile::load(path)
                .with_context(|| format!("Failed to load edge list {}", path.display()))?;
            let palette = file.palette();
            Ok((file.edges, palette))
        }
        None => {
            let edges = weave_graph::preset(&source.preset)
                .with_context(|| format!("Available presets: {}", weave_graph::PRESET_NAMES.join(", ")))?;
            Ok((edges, Palette::default()))
        }
    }
}

pub fn draw(
    source: &EdgeSource,
    format: Format,
    output: Option<PathBuf>,
    options: DrawOptions,
) -> anyhow::Result<()> {
    let (edges, palette) = load_edges(source)?;
    let mut graph = EdgeColoredGraph::from_edges(edges);

    if options.recolor_bridges {
        graph = EdgeColoredGraph::from_edges(weave_graph::recolor_bridges(&graph));
    }

    let partition = graph.partition();
    if partition.is_empty() {
        tracing::info!("Edge list is empty; presenting a blank surface");
    }
    if options.strict_colors {
        partition.ensure_exhaustive()?;
    } else {
        partition.warn_unknown();
    }

    tracing::info!(
        "Drawing {} nodes, {} normal edges, {} highlighted edges",
        graph.node_count(),
        partition.normal.len(),
        partition.highlighted.len()
    );

    let layout = CircularLayout::default().layout(&graph);
    let mut renderer = open_renderer(format, output.as_deref())?;
    weave_graph::render(&graph, &layout, &partition, renderer.as_mut(), &palette)?;

    if let Some(path) = output {
        tracing::info!("Wrote {}", path.display());
    }
    Ok(())
}

fn open_renderer(format: Format, output: Option<&Path>) -> anyhow::Result<Box<dyn GraphRenderer>> {
    let renderer: Box<dyn GraphRenderer> = match (format, output) {
        (Format::Svg, Some(path)) => Box::new(
            SvgRenderer::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        (Format::Dot, Some(path)) => Box::new(
            DotRenderer::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        (Format::Svg, None) => Box::new(SvgRenderer::new(std::io::stdout())),
        (Format::Dot, None) => Box::new(DotRenderer::new(std::io::stdout())),
    };
    Ok(renderer)
}

pub fn bridges(source: &EdgeSource) -> anyhow::Result<()> {
    let (edges, _) = load_edges(source)?;
    let graph = EdgeColoredGraph::from_edges(edges);
    let recolored = weave_graph::recolor_bridges(&graph);

    let bridge_count = weave_graph::bridge_indices(&graph).len();
    tracing::info!("{} of {} edges are bridges", bridge_count, graph.edge_count());

    let text = EdgeListFile::new(recolored).to_toml()?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Config file first, then command-line overrides.
fn resolve_merge_config(args: MergeArgs) -> anyhow::Result<MergeConfig> {
    let mut config = match &args.config {
        Some(path) => MergeConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            MergeConfig::load(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => MergeConfig::default(),
    };

    if let Some(tool) = args.tool {
        config.tool = tool;
    }
    if let Some(define) = args.define {
        config.define = define;
    }
    if let Some(entry) = args.entry {
        config.entry_point = entry;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(single_header) = args.single_header {
        config.single_header = single_header;
    }
    for lib in &args.libs {
        config.libraries.push(lib.parse::<LibrarySpec>()?);
    }
    Ok(config)
}

pub fn merge(args: MergeArgs) -> anyhow::Result<()> {
    let config = resolve_merge_config(args)?;
    tracing::info!(
        "Merging {} with {} libraries into {}",
        config.entry_point.display(),
        config.libraries.len(),
        config.single_header.display()
    );

    let preprocessor = CommandPreprocessor::new(config.tool.clone());
    let report = Merger::new(&config, &preprocessor)
        .run()
        .context("Single-header merge failed")?;

    tracing::info!(
        "Done: {} files, {} bytes, {} include lines dropped",
        report.merge_list.len(),
        report.bytes_written,
        report.dropped_lines
    );
    Ok(())
}
