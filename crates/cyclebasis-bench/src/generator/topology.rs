//! Topology construction: per-component random trees plus scattered chords.

use std::ops::Range;

use cyclebasis_core::{AdjacencyGraph, UndirectedGraph};
use rand::Rng;
use rand::rngs::StdRng;

use super::GeneratorConfig;

/// Attempts per requested chord before giving up on a saturated component.
const CHORD_ATTEMPTS: usize = 64;

/// Builds the graph described by `config`.
pub fn build_graph(config: &GeneratorConfig, rng: &mut StdRng) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(config.num_vertices);
    let blocks = component_blocks(config.num_vertices, config.num_components);

    for block in &blocks {
        for v in block.start + 1..block.end {
            let parent = rng.gen_range(block.start..v);
            // Fresh vertex, so the edge is always new.
            if graph.add_edge(parent, v).is_err() {
                break;
            }
        }
    }

    let usable: Vec<&Range<usize>> = blocks.iter().filter(|b| b.len() >= 3).collect();
    if usable.is_empty() {
        return graph;
    }

    let mut placed = 0;
    let mut attempts = 0;
    while placed < config.extra_edges && attempts < config.extra_edges * CHORD_ATTEMPTS {
        attempts += 1;
        let block = usable[rng.gen_range(0..usable.len())];
        let u = rng.gen_range(block.clone());
        let v = rng.gen_range(block.clone());
        if u != v && !graph.are_adjacent(u, v) && graph.add_edge(u, v).is_ok() {
            placed += 1;
        }
    }
    graph
}

/// Splits `0..n` into `k` contiguous blocks whose sizes differ by at most one.
///
/// `k` is clamped to `1..=n`; an empty graph yields no blocks.
pub fn component_blocks(n: usize, k: usize) -> Vec<Range<usize>> {
    if n == 0 {
        return Vec::new();
    }
    let k = k.clamp(1, n);
    let base = n / k;
    let rem = n % k;
    let mut blocks = Vec::with_capacity(k);
    let mut start = 0;
    for i in 0..k {
        let len = base + usize::from(i < rem);
        blocks.push(start..start + len);
        start += len;
    }
    blocks
}
