//! Shared graph fixtures for unit tests.
//!
//! Compiled only in test builds. Integration tests under
//! `crates/cyclebasis-core/tests/` keep their own builders because they link
//! against the non-test library build.
#![allow(clippy::expect_used)]

use crate::graph::{AdjacencyGraph, VertexId};

/// Builds an [`AdjacencyGraph`], panicking on an invalid edge list.
pub fn graph(vertex_count: usize, edges: &[(VertexId, VertexId)]) -> AdjacencyGraph {
    AdjacencyGraph::from_edges(vertex_count, edges.iter().copied()).expect("valid test graph")
}

/// `0-1-2-0`.
pub fn triangle() -> AdjacencyGraph {
    graph(3, &[(0, 1), (1, 2), (2, 0)])
}

/// Square `0-1-2-3-0` with the diagonal `0-2`.
pub fn square_with_diagonal() -> AdjacencyGraph {
    graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)])
}

/// Triangles on `{0,1,2}` and `{3,4,5}` with no edge between them.
pub fn two_triangles() -> AdjacencyGraph {
    graph(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)])
}

/// A seven-vertex tree.
pub fn tree() -> AdjacencyGraph {
    graph(7, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)])
}

/// The plain 4-cycle `0-1-2-3-0`.
pub fn square() -> AdjacencyGraph {
    graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])
}

/// Two squares sharing the edge `1-4`: `0-1-4-3-0` and `1-2-5-4-1`.
pub fn domino() -> AdjacencyGraph {
    graph(
        6,
        &[(0, 1), (1, 2), (0, 3), (1, 4), (2, 5), (3, 4), (4, 5)],
    )
}

/// Complete graph on four vertices.
pub fn k4() -> AdjacencyGraph {
    graph(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
}
