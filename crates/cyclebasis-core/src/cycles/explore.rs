/// Path exploration: the second pipeline stage.
///
/// From each anchor a backtracking depth-first walk extends a simple path one
/// neighbor at a time. When the last vertex `c` of the path has a neighbor
/// that is already on the path (other than the vertex right before `c`), the
/// path plus that neighbor is recorded as a raw cycle and `c` is abandoned;
/// its remaining neighbors are not tried. Raw cycles may carry a non-cyclic
/// prefix, e.g. `[4, 1, 2, 3, 1]`; [`super::normalize`] trims it.
///
/// The walk keeps one shared path buffer and a stack of neighbor iterators,
/// one per path vertex, so its depth is bounded by the vertex count rather
/// than by the native call stack.
use bitvec::prelude::*;

use crate::graph::{UndirectedGraph, VertexId};

/// Explores from every anchor in order and returns all raw cycles.
pub fn explore_all<G: UndirectedGraph>(
    graph: &G,
    anchors: &[VertexId],
    max_path_depth: Option<usize>,
) -> Vec<Vec<VertexId>> {
    let mut raw = Vec::new();
    for &anchor in anchors {
        let before = raw.len();
        explore_from(graph, anchor, max_path_depth, &mut raw);
        log::trace!("anchor {anchor}: {} raw cycles", raw.len() - before);
    }
    raw
}

/// Explores from `anchor`, appending every raw cycle found to `out`.
///
/// With `max_path_depth = Some(d)` the path is never extended past `d`
/// vertices; a closing vertex may still be appended to a path of length `d`.
pub fn explore_from<G: UndirectedGraph>(
    graph: &G,
    anchor: VertexId,
    max_path_depth: Option<usize>,
    out: &mut Vec<Vec<VertexId>>,
) {
    let n = graph.vertex_count();
    if anchor >= n {
        return;
    }
    let limit = max_path_depth.unwrap_or(usize::MAX);

    let mut on_path = bitvec![usize, Lsb0; 0; n];
    let mut path: Vec<VertexId> = vec![anchor];
    on_path.set(anchor, true);
    let mut stack = vec![graph.neighbors(anchor)];

    while let Some(neighbors) = stack.last_mut() {
        let next = neighbors.next();
        let depth = path.len();
        let current = path[depth - 1];
        let predecessor = depth.checked_sub(2).map(|i| path[i]);

        let Some(w) = next else {
            stack.pop();
            path.pop();
            on_path.set(current, false);
            continue;
        };
        if Some(w) == predecessor || w >= n {
            continue;
        }

        if on_path[w] {
            let mut cycle = Vec::with_capacity(depth + 1);
            cycle.extend_from_slice(&path);
            cycle.push(w);
            out.push(cycle);

            stack.pop();
            path.pop();
            on_path.set(current, false);
        } else if depth < limit {
            path.push(w);
            on_path.set(w, true);
            stack.push(graph.neighbors(w));
        }
    }
}
