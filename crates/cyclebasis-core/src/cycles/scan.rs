/// Back-edge scan: the first pipeline stage.
///
/// One iterative depth-first traversal visits every vertex, starting at 0
/// and restarting from each still-undiscovered vertex in increasing id order.
/// Vertices are white (undiscovered), gray (on the DFS stack) or black
/// (finished). A non-tree edge from `u` to a gray vertex `v` other than the
/// parent of `u` is a back edge, and each back edge closes at least one
/// independent cycle.
///
/// For every back edge `(u, v)` the scan records `u` as an *anchor*, unless
/// `u` or `v` is already an anchor. The explorer then enumerates cycles from
/// the anchors only. The rule keeps the anchor set small and may miss cycles
/// whose back edges all touch existing anchors; the pipeline reports that
/// case through its dimension check.
use bitvec::prelude::*;

use crate::graph::{UndirectedGraph, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// One DFS frame: a vertex, its tree parent, and the unread part of its
/// neighbor list.
struct Frame<I> {
    vertex: VertexId,
    parent: Option<VertexId>,
    neighbors: I,
}

/// Per-call scan state. Holds the anchors found so far.
#[derive(Debug, Clone, Default)]
pub struct ScanContext {
    anchors: Vec<VertexId>,
    is_anchor: BitVec<usize, Lsb0>,
    back_edges: usize,
}

impl ScanContext {
    /// Creates an empty context for a graph of `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            anchors: Vec::new(),
            is_anchor: bitvec![usize, Lsb0; 0; vertex_count],
            back_edges: 0,
        }
    }

    /// Anchors in discovery order.
    pub fn anchors(&self) -> &[VertexId] {
        &self.anchors
    }

    /// Consumes the context and returns the anchors in discovery order.
    pub fn into_anchors(self) -> Vec<VertexId> {
        self.anchors
    }

    /// Number of back edges seen, including those that added no anchor.
    pub fn back_edge_count(&self) -> usize {
        self.back_edges
    }

    /// Returns `true` if `v` has been recorded as an anchor.
    pub fn is_anchor(&self, v: VertexId) -> bool {
        self.is_anchor.get(v).is_some_and(|b| *b)
    }

    fn record_back_edge(&mut self, u: VertexId, v: VertexId) {
        self.back_edges += 1;
        if self.is_anchor(u) || self.is_anchor(v) {
            return;
        }
        log::trace!("back edge {u}-{v}: anchor {u}");
        self.anchors.push(u);
        self.is_anchor.set(u, true);
    }
}

/// Runs the back-edge scan over all of `graph`.
pub fn scan_back_edges<G: UndirectedGraph>(graph: &G) -> ScanContext {
    let n = graph.vertex_count();
    let mut ctx = ScanContext::new(n);
    let mut color = vec![Color::White; n];

    for root in 0..n {
        if color[root] != Color::White {
            continue;
        }
        color[root] = Color::Gray;
        let mut stack = vec![Frame {
            vertex: root,
            parent: None,
            neighbors: graph.neighbors(root),
        }];

        while let Some(frame) = stack.last_mut() {
            let (u, parent) = (frame.vertex, frame.parent);
            let Some(w) = frame.neighbors.next() else {
                color[u] = Color::Black;
                stack.pop();
                continue;
            };
            if Some(w) == parent || w >= n {
                continue;
            }
            match color[w] {
                Color::White => {
                    color[w] = Color::Gray;
                    stack.push(Frame {
                        vertex: w,
                        parent: Some(u),
                        neighbors: graph.neighbors(w),
                    });
                }
                Color::Gray => ctx.record_back_edge(u, w),
                // Already reported as a back edge from the other end.
                Color::Black => {}
            }
        }
    }
    ctx
}
