//! Weave Graph — edge-colored graphs, edge partitioning and rendering

pub mod model;
pub mod error;
pub mod graph;
pub mod partition;
pub mod bridges;
pub mod layout;
pub mod render;
pub mod presets;
pub mod edge_list;


#[cfg(test)]
pub mod test_utils;

pub use model::{NodeId, EdgeColor, ColoredEdge, Point, NodeStyle, EdgeStyle, Palette};
pub use error::{GraphError, RenderError};
pub use graph::EdgeColoredGraph;
pub use partition::EdgePartition;
pub use bridges::{bridge_indices, find_bridges, recolor_bridges};
pub use layout::{Layout, LayoutAlgorithm, CircularLayout};
pub use render::{render, GraphRenderer, DotRenderer, SvgRenderer};
pub use presets::{preset, PRESET_NAMES};
pub use edge_list::{EdgeListFile, StyleOverrides};
