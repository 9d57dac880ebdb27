/// Read-only graph model consumed by the cycle pipeline.
///
/// The pipeline never owns or mutates a graph. Everything it needs is exposed
/// through the [`UndirectedGraph`] capability trait: vertex and edge counts
/// plus per-vertex neighbor enumeration. Two implementations ship with the
/// crate:
///
/// - [`AdjacencyGraph`]: an owned adjacency list that enforces the
///   simple-graph contract (no self-loops, no parallel edges) at insertion
///   time. Neighbors are reported in edge insertion order.
/// - `petgraph::Graph<N, E, Undirected, Ix>`: any undirected petgraph graph.
///   The caller is responsible for keeping it simple; petgraph itself allows
///   parallel edges and self-loops.
///
/// # Text Format
///
/// See the [`parse`] submodule for the line-oriented `label:count` /
/// `u-v` file format.
///
/// # Summary Statistics
///
/// See the [`summary`] submodule for connected components, the cycle-space
/// dimension `E - V + C`, and [`GraphSummary`].
pub mod parse;
pub mod summary;

pub use parse::{GraphParseError, LabeledGraph, MAX_VERTICES, parse_graph, write_graph};
pub use summary::{GraphSummary, connected_components, cycle_space_dimension, summarize};

use std::collections::TryReserveError;

use petgraph::Undirected;
use petgraph::graph::{Graph, IndexType, NodeIndex};

/// Dense vertex identifier in `0..vertex_count`.
pub type VertexId = usize;

// ---------------------------------------------------------------------------
// Capability trait
// ---------------------------------------------------------------------------

/// Minimal read-only view of a simple undirected graph.
///
/// Implementors must report every undirected edge from both endpoints, never
/// twice from the same endpoint, and never as a self-loop. Vertex ids are the
/// dense range `0..vertex_count()`.
pub trait UndirectedGraph {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges.
    fn edge_count(&self) -> usize;

    /// Returns the neighbors of `v`.
    ///
    /// The iteration order is significant: the back-edge scan and the path
    /// explorer visit neighbors in exactly this order, so it determines which
    /// candidate cycles are found. An out-of-range `v` yields no neighbors.
    fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_;

    /// Returns `true` if `u` and `v` are joined by an edge.
    fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbors(u).any(|w| w == v)
    }
}

impl<N, E, Ix: IndexType> UndirectedGraph for Graph<N, E, Undirected, Ix> {
    fn vertex_count(&self) -> usize {
        self.node_count()
    }

    fn edge_count(&self) -> usize {
        Graph::edge_count(self)
    }

    fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        Graph::neighbors(self, NodeIndex::new(v)).map(|n| n.index())
    }

    fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.find_edge(NodeIndex::new(u), NodeIndex::new(v)).is_some()
    }
}

// ---------------------------------------------------------------------------
// GraphBuildError
// ---------------------------------------------------------------------------

/// Errors raised when an edge would break the simple-graph contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphBuildError {
    /// An edge endpoint is not a vertex of the graph.
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Both endpoints of an edge are the same vertex.
    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(VertexId),
    /// The edge already exists (in either orientation).
    #[error("duplicate edge {u}-{v}")]
    DuplicateEdge {
        /// First endpoint as given.
        u: VertexId,
        /// Second endpoint as given.
        v: VertexId,
    },
}

// ---------------------------------------------------------------------------
// AdjacencyGraph
// ---------------------------------------------------------------------------

/// An owned simple undirected graph stored as per-vertex neighbor lists.
///
/// Edges are kept in insertion order both in the neighbor lists and in the
/// flat edge list returned by [`AdjacencyGraph::edges`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<VertexId>>,
    edges: Vec<(VertexId, VertexId)>,
}

impl AdjacencyGraph {
    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
        }
    }

    /// Like [`AdjacencyGraph::new`], but reports an allocation failure
    /// instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns the [`TryReserveError`] if storage for `vertex_count`
    /// neighbor lists cannot be reserved.
    pub fn try_new(vertex_count: usize) -> Result<Self, TryReserveError> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            adjacency,
            edges: Vec::new(),
        })
    }

    /// Builds a graph from an edge list, inserting edges in the given order.
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphBuildError`] encountered.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphBuildError>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut graph = Self::new(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Appends a new isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> VertexId {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Adds the undirected edge `u-v`.
    ///
    /// # Errors
    ///
    /// - [`GraphBuildError::VertexOutOfRange`] if either endpoint is not a vertex.
    /// - [`GraphBuildError::SelfLoop`] if `u == v`.
    /// - [`GraphBuildError::DuplicateEdge`] if the edge is already present.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphBuildError> {
        let vertex_count = self.adjacency.len();
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(GraphBuildError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        if u == v {
            return Err(GraphBuildError::SelfLoop(u));
        }
        if self.adjacency[u].contains(&v) {
            return Err(GraphBuildError::DuplicateEdge { u, v });
        }

        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edges.push((u, v));
        Ok(())
    }

    /// Returns the edges in insertion order, each as given to
    /// [`AdjacencyGraph::add_edge`].
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// Returns the degree of `v`, or 0 for an out-of-range id.
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency.get(v).map_or(0, Vec::len)
    }
}

impl UndirectedGraph for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .copied()
    }
}
