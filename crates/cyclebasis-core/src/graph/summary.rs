/// Whole-graph statistics: connected components and cycle-space dimension.
///
/// For a simple undirected graph with `V` vertices, `E` edges and `C`
/// connected components, any cycle basis has exactly `E - V + C` members.
/// The pipeline compares its result against this number to raise
/// [`crate::cycles::DetectionWarning::InsufficientIndependentCycles`].
use serde::Serialize;

use super::UndirectedGraph;
use crate::union_find::UnionFind;

/// Headline numbers describing a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    /// Number of vertices `V`.
    pub vertices: usize,
    /// Number of undirected edges `E`.
    pub edges: usize,
    /// Number of connected components `C` (isolated vertices count).
    pub components: usize,
    /// `E / (V * (V - 1))`; 0 when `V < 2`.
    pub density: f64,
    /// Size of any cycle basis, `E - V + C`.
    pub expected_cycles: usize,
}

/// Counts connected components, treating isolated vertices as components.
pub fn connected_components<G: UndirectedGraph>(graph: &G) -> usize {
    let n = graph.vertex_count();
    let mut uf = UnionFind::new(n);
    for u in 0..n {
        for w in graph.neighbors(u) {
            if u < w && w < n {
                uf.union(u, w);
            }
        }
    }
    uf.component_count()
}

/// Returns `E - V + C`, the dimension of the graph's cycle space over GF(2).
pub fn cycle_space_dimension<G: UndirectedGraph>(graph: &G) -> usize {
    let components = connected_components(graph);
    (graph.edge_count() + components).saturating_sub(graph.vertex_count())
}

/// Computes a [`GraphSummary`] for `graph`.
pub fn summarize<G: UndirectedGraph>(graph: &G) -> GraphSummary {
    let vertices = graph.vertex_count();
    let edges = graph.edge_count();
    let components = connected_components(graph);
    let density = if vertices < 2 {
        0.0
    } else {
        edges as f64 / (vertices as f64 * (vertices - 1) as f64)
    };
    GraphSummary {
        vertices,
        edges,
        components,
        density,
        expected_cycles: (edges + components).saturating_sub(vertices),
    }
}
