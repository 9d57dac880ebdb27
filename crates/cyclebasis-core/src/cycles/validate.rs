/// Structural checks of cycles against a graph.
///
/// A vertex sequence is a cycle of the graph iff it has at least three and at
/// most `vertex_count` vertices, every id is in range, every consecutive pair
/// (including last-to-first) is an edge, and no vertex appears twice.
///
/// All functions here are pure and read the graph only through
/// [`UndirectedGraph::are_adjacent`].
use bitvec::prelude::*;

use super::Cycle;
use super::chordless::is_chordless;
use crate::graph::{UndirectedGraph, VertexId};

/// The first reason a vertex sequence is not a cycle of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleDefect {
    /// Fewer than three vertices.
    TooShort {
        /// Sequence length.
        len: usize,
    },
    /// More vertices than the graph has.
    TooLong {
        /// Sequence length.
        len: usize,
        /// Vertices in the graph.
        vertex_count: usize,
    },
    /// A vertex id outside `0..vertex_count`.
    VertexOutOfRange {
        /// The offending id.
        vertex: VertexId,
    },
    /// Two consecutive vertices are not joined by an edge.
    MissingEdge {
        /// Earlier vertex of the pair.
        from: VertexId,
        /// Later vertex of the pair (the first vertex for the closing pair).
        to: VertexId,
    },
    /// A vertex occurs more than once.
    RepeatedVertex {
        /// The repeated id.
        vertex: VertexId,
        /// Position of its second occurrence.
        position: usize,
    },
}

impl std::fmt::Display for CycleDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { len } => write!(f, "only {len} vertices, a cycle needs at least 3"),
            Self::TooLong { len, vertex_count } => write!(
                f,
                "{len} vertices but the graph only has {vertex_count}"
            ),
            Self::VertexOutOfRange { vertex } => write!(f, "vertex {vertex} is not in the graph"),
            Self::MissingEdge { from, to } => write!(f, "no edge between {from} and {to}"),
            Self::RepeatedVertex { vertex, position } => {
                write!(f, "vertex {vertex} repeated at position {position}")
            }
        }
    }
}

/// Checks `cycle` against `graph` and returns its first defect.
///
/// Checks run in a fixed order: length, then a single walk that tests range,
/// repetition and adjacency for each vertex in turn, then the closing edge.
///
/// # Errors
///
/// Returns the first [`CycleDefect`] found.
pub fn validate_cycle<G: UndirectedGraph>(cycle: &[VertexId], graph: &G) -> Result<(), CycleDefect> {
    let n = graph.vertex_count();
    let len = cycle.len();
    if len < 3 {
        return Err(CycleDefect::TooShort { len });
    }
    if len > n {
        return Err(CycleDefect::TooLong {
            len,
            vertex_count: n,
        });
    }

    let mut seen = bitvec![usize, Lsb0; 0; n];
    let mut prev: Option<VertexId> = None;
    for (position, &v) in cycle.iter().enumerate() {
        if v >= n {
            return Err(CycleDefect::VertexOutOfRange { vertex: v });
        }
        if seen[v] {
            return Err(CycleDefect::RepeatedVertex {
                vertex: v,
                position,
            });
        }
        seen.set(v, true);
        if let Some(p) = prev.filter(|&p| !graph.are_adjacent(p, v)) {
            return Err(CycleDefect::MissingEdge { from: p, to: v });
        }
        prev = Some(v);
    }

    let (first, last) = (cycle[0], cycle[len - 1]);
    if !graph.are_adjacent(last, first) {
        return Err(CycleDefect::MissingEdge {
            from: last,
            to: first,
        });
    }
    Ok(())
}

/// Returns `true` if `cycle` is a simple cycle of `graph`.
pub fn is_cycle<G: UndirectedGraph>(cycle: &[VertexId], graph: &G) -> bool {
    validate_cycle(cycle, graph).is_ok()
}

/// Returns every cycle of `cycles` that fails validation, with its defect.
pub fn check_cycles<'a, G: UndirectedGraph>(
    cycles: &'a [Cycle],
    graph: &G,
) -> Vec<(&'a Cycle, CycleDefect)> {
    cycles
        .iter()
        .filter_map(|c| validate_cycle(c.vertices(), graph).err().map(|d| (c, d)))
        .collect()
}

/// Quality counts for a set of cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct CycleStatus {
    /// Cycles that fail [`validate_cycle`].
    pub invalid: usize,
    /// Valid cycles that have a chord.
    pub non_chordless: usize,
}

impl CycleStatus {
    /// Returns `true` when every cycle is valid.
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Counts invalid and non-chordless cycles in `cycles`.
pub fn cycle_status<G: UndirectedGraph>(cycles: &[Cycle], graph: &G) -> CycleStatus {
    let mut status = CycleStatus::default();
    for cycle in cycles {
        if !is_cycle(cycle.vertices(), graph) {
            status.invalid += 1;
        } else if !is_chordless(cycle.vertices(), graph) {
            status.non_chordless += 1;
        }
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{square, square_with_diagonal, triangle, two_triangles};

    #[test]
    fn triangle_is_a_cycle_in_any_rotation_or_direction() {
        let g = triangle();
        for c in [[0, 1, 2], [1, 2, 0], [2, 1, 0], [0, 2, 1]] {
            assert_eq!(validate_cycle(&c, &g), Ok(()), "{c:?}");
        }
    }

    #[test]
    fn short_sequences_are_rejected() {
        let g = triangle();
        assert_eq!(validate_cycle(&[0, 1], &g), Err(CycleDefect::TooShort { len: 2 }));
        assert_eq!(validate_cycle(&[], &g), Err(CycleDefect::TooShort { len: 0 }));
    }

    #[test]
    fn sequence_longer_than_graph_is_rejected() {
        let g = triangle();
        assert_eq!(
            validate_cycle(&[0, 1, 2, 0], &g),
            Err(CycleDefect::TooLong {
                len: 4,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn out_of_range_vertex_is_rejected() {
        let g = square();
        assert_eq!(
            validate_cycle(&[0, 1, 9], &g),
            Err(CycleDefect::VertexOutOfRange { vertex: 9 })
        );
    }

    #[test]
    fn missing_edge_is_reported_with_its_pair() {
        let g = square();
        assert_eq!(
            validate_cycle(&[0, 1, 3], &g),
            Err(CycleDefect::MissingEdge { from: 1, to: 3 })
        );
        // 0-1-2 walks fine but 2-0 does not close.
        assert_eq!(
            validate_cycle(&[0, 1, 2], &g),
            Err(CycleDefect::MissingEdge { from: 2, to: 0 })
        );
    }

    #[test]
    fn early_return_to_start_is_rejected() {
        let g = two_triangles();
        assert_eq!(
            validate_cycle(&[0, 1, 0, 2, 1, 2], &g),
            Err(CycleDefect::RepeatedVertex {
                vertex: 0,
                position: 2
            })
        );
    }

    #[test]
    fn square_with_chord_is_valid() {
        let g = square_with_diagonal();
        assert!(is_cycle(&[0, 1, 2, 3], &g));
        assert!(is_cycle(&[0, 2, 3], &g));
        assert!(!is_cycle(&[1, 3, 2], &g));
    }

    #[test]
    fn check_cycles_returns_only_defective_ones() {
        let g = square();
        let cycles = vec![Cycle::new(vec![0, 1, 2, 3]), Cycle::new(vec![0, 1, 2])];
        let bad = check_cycles(&cycles, &g);
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].0, &cycles[1]);
        assert_eq!(bad[0].1, CycleDefect::MissingEdge { from: 2, to: 0 });
    }

    #[test]
    fn status_counts_invalid_and_chorded_cycles() {
        let g = square_with_diagonal();
        let cycles = vec![
            Cycle::new(vec![0, 1, 2, 3]),
            Cycle::new(vec![0, 1, 2]),
            Cycle::new(vec![1, 3, 2]),
        ];
        let status = cycle_status(&cycles, &g);
        assert_eq!(
            status,
            CycleStatus {
                invalid: 1,
                non_chordless: 1
            }
        );
        assert!(!status.all_valid());
    }

    #[test]
    fn defect_messages_name_the_vertices() {
        let msg = CycleDefect::MissingEdge { from: 4, to: 7 }.to_string();
        assert_eq!(msg, "no edge between 4 and 7");
    }
}
