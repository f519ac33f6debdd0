//! Bridge detection for highlighting
//!
//! A bridge is an edge whose removal disconnects its component. The graph is
//! a multigraph, so parallel edges are never bridges and neither are
//! self-loops.

use std::collections::BTreeSet;

use crate::graph::EdgeColoredGraph;
use crate::model::{ColoredEdge, EdgeColor};

/// Indices (insertion order) of all bridge edges.
pub fn bridge_indices(graph: &EdgeColoredGraph) -> BTreeSet<usize> {
    let inner = graph.inner();
    let n = inner.node_count();

    let mut adjacency: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    for edge in inner.edge_indices() {
        if let Some((a, b)) = inner.edge_endpoints(edge) {
            adjacency[a.index()].push((b.index(), edge.index()));
            adjacency[b.index()].push((a.index(), edge.index()));
        }
    }

    let mut discovered: Vec<Option<usize>> = vec![None; n];
    let mut low = vec![0usize; n];
    let mut bridges = BTreeSet::new();
    let mut clock = 0usize;

    for start in 0..n {
        if discovered[start].is_some() {
            continue;
        }
        discovered[start] = Some(clock);
        low[start] = clock;
        clock += 1;

        // (node, edge used to reach it, next adjacency slot)
        let mut stack: Vec<(usize, Option<usize>, usize)> = vec![(start, None, 0)];

        while let Some(frame) = stack.last_mut() {
            let (u, parent_edge, slot) = *frame;
            if slot < adjacency[u].len() {
                frame.2 += 1;
                let (v, edge) = adjacency[u][slot];
                if Some(edge) == parent_edge {
                    continue;
                }
                match discovered[v] {
                    Some(seen) => low[u] = low[u].min(seen),
                    None => {
                        discovered[v] = Some(clock);
                        low[v] = clock;
                        clock += 1;
                        stack.push((v, Some(edge), 0));
                    }
                }
                continue;
            }

            stack.pop();
            if let (Some(&(parent, _, _)), Some(edge)) = (stack.last(), parent_edge) {
                low[parent] = low[parent].min(low[u]);
                let parent_time = discovered[parent].unwrap_or(0);
                if low[u] > parent_time {
                    bridges.insert(edge);
                }
            }
        }
    }

    tracing::debug!("Found {} bridges among {} edges", bridges.len(), graph.edge_count());
    bridges
}

/// Bridge edges in insertion order.
pub fn find_bridges(graph: &EdgeColoredGraph) -> Vec<ColoredEdge> {
    let bridges = bridge_indices(graph);
    graph
        .edges()
        .enumerate()
        .filter(|(i, _)| bridges.contains(i))
        .map(|(_, edge)| edge)
        .collect()
}

/// Replace every color: bridges become highlighted, all other edges normal.
pub fn recolor_bridges(graph: &EdgeColoredGraph) -> Vec<ColoredEdge> {
    let bridges = bridge_indices(graph);
    graph
        .edges()
        .enumerate()
        .map(|(i, edge)| ColoredEdge {
            color: if bridges.contains(&i) {
                EdgeColor::Highlighted
            } else {
                EdgeColor::Normal
            },
            ..edge
        })
        .collect()
}
