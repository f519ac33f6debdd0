//! Weave CLI entry point

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "weave")]
#[command(about = "Edge-colored graph drawing and single-header merging", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Where the edge list comes from.
#[derive(clap::Args, Debug, Clone)]
pub struct EdgeSource {
    /// Built-in edge list (bridges, bridges-head, empty)
    #[arg(long, default_value = "bridges", conflicts_with = "edges")]
    pub preset: String,

    /// Edge list file (.toml or .json)
    #[arg(long)]
    pub edges: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Svg,
    Dot,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a graph with normal and highlighted edges
    Draw {
        #[command(flatten)]
        source: EdgeSource,

        /// Output format
        #[arg(short, long, value_enum, default_value = "svg")]
        format: Format,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on edge colors other than normal/highlighted
        #[arg(long)]
        strict_colors: bool,

        /// Ignore the given colors and highlight bridges instead
        #[arg(long)]
        recolor_bridges: bool,
    },
    /// Print the edge list with bridges highlighted
    Bridges {
        #[command(flatten)]
        source: EdgeSource,
    },
    /// Build a single-header file
    Merge {
        /// Merge config file (defaults to weave-merge.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Preprocessor executable
        #[arg(long)]
        tool: Option<String>,

        /// Macro defined while preprocessing
        #[arg(short = 'D', long)]
        define: Option<String>,

        /// Entry point source file
        #[arg(long)]
        entry: Option<PathBuf>,

        /// Flattened preprocessor output
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Combined single-header file
        #[arg(long)]
        single_header: Option<PathBuf>,

        /// Library to splice in, as INCLUDE=PATH (repeatable)
        #[arg(long = "lib")]
        libs: Vec<String>,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "weave={0},weave_graph={0},weave_merge={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Draw {
            source,
            format,
            output,
            strict_colors,
            recolor_bridges,
        } => commands::draw(
            &source,
            format,
            output,
            commands::DrawOptions {
                strict_colors,
                recolor_bridges,
            },
        ),
        Commands::Bridges { source } => commands::bridges(&source),
        Commands::Merge {
            config,
            tool,
            define,
            entry,
            output,
            single_header,
            libs,
        } => commands::merge(commands::MergeArgs {
            config,
            tool,
            define,
            entry,
            output,
            single_header,
            libs,
        }),
        Commands::Version => {
            println!("weave v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
