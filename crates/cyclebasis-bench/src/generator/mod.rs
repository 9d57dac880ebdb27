//! Sparse random graph generator.
//!
//! Every component starts as a random recursive tree; `extra_edges` chords
//! are then scattered inside components. Each accepted chord closes exactly
//! one new independent cycle, so the cycle-space dimension of the result is
//! the number of chords actually placed.
//!
//! Path exploration is exponential in the number of chords, so the tiers
//! grow the vertex count much faster than the chord count.

pub mod topology;

use cyclebasis_core::{AdjacencyGraph, UndirectedGraph};
use petgraph::graph::{NodeIndex, UnGraph};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Total number of vertices.
    pub num_vertices: usize,
    /// Number of connected components; vertices are split into contiguous
    /// blocks of near-equal size.
    pub num_components: usize,
    /// Number of non-tree edges to attempt.
    pub extra_edges: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 12 vertices, 3 chords.
    Tiny,
    /// 40 vertices, 5 chords.
    Small,
    /// 150 vertices, 7 chords.
    Medium,
    /// 500 vertices, 9 chords, two components.
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (num_vertices, num_components, extra_edges) = match self {
            SizeTier::Tiny => (12, 1, 3),
            SizeTier::Small => (40, 1, 5),
            SizeTier::Medium => (150, 1, 7),
            SizeTier::Large => (500, 2, 9),
        };
        GeneratorConfig {
            seed,
            num_vertices,
            num_components,
            extra_edges,
        }
    }

    /// Short label used in benchmark ids.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Tiny => "XS",
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
        }
    }
}

/// Generates a graph from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_graph(config: &GeneratorConfig) -> AdjacencyGraph {
    let mut rng = StdRng::seed_from_u64(config.seed);
    topology::build_graph(config, &mut rng)
}

/// Copies `graph` into a petgraph `UnGraph`, preserving vertex ids and edge
/// order.
pub fn to_petgraph(graph: &AdjacencyGraph) -> UnGraph<(), ()> {
    let mut pg = UnGraph::with_capacity(graph.vertex_count(), graph.edge_count());
    for _ in 0..graph.vertex_count() {
        pg.add_node(());
    }
    for &(u, v) in graph.edges() {
        pg.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    pg
}
