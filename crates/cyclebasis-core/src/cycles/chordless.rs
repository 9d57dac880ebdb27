/// Chord detection.
///
/// A chord is an edge of the graph joining two cycle vertices that are not
/// consecutive on the cycle. Triangles never have one. For longer cycles every
/// pair at cyclic distance two or more is tested, and the test stops at the
/// first chord found.
use super::Cycle;
use crate::graph::{UndirectedGraph, VertexId};

/// Returns the first chord of `cycle` as `(cycle[i], cycle[j])` with `i < j`,
/// or `None` if the cycle is chordless.
pub fn find_chord<G: UndirectedGraph>(
    cycle: &[VertexId],
    graph: &G,
) -> Option<(VertexId, VertexId)> {
    let len = cycle.len();
    if len < 4 {
        return None;
    }
    for i in 0..len - 2 {
        // Skip j == i + 1 (consecutive) and, for i == 0, the closing pair.
        let end = if i == 0 { len - 1 } else { len };
        for j in i + 2..end {
            if graph.are_adjacent(cycle[i], cycle[j]) {
                return Some((cycle[i], cycle[j]));
            }
        }
    }
    None
}

/// Returns `true` if `cycle` has no chord in `graph`.
pub fn is_chordless<G: UndirectedGraph>(cycle: &[VertexId], graph: &G) -> bool {
    find_chord(cycle, graph).is_none()
}

/// Keeps only the chordless cycles, preserving order. Returns the number of
/// cycles removed.
pub fn retain_chordless<G: UndirectedGraph>(cycles: &mut Vec<Cycle>, graph: &G) -> usize {
    let before = cycles.len();
    cycles.retain(|c| match find_chord(c.vertices(), graph) {
        None => true,
        Some((a, b)) => {
            log::trace!("dropping cycle [{c}]: chord {a}-{b}");
            false
        }
    });
    before - cycles.len()
}
