/// Cycle-space reduction over GF(2): the last pipeline stage.
///
/// # Encoding
///
/// Every unordered vertex pair `{u, v}` of an `n`-vertex graph gets a column
/// in `0..n(n-1)/2` by triangular numbering (see [`EdgeIndexer`]). A cycle is
/// encoded as the bit vector of its edges, closing edge included.
///
/// # Elimination
///
/// Columns are processed in increasing order. For each column the first
/// untagged row with a 1 becomes the pivot: it is tagged and its current
/// vector is XORed into every later untagged row with a 1 in that column.
/// Elimination stops once every row is tagged or every column is done. Rows
/// never tagged have been reduced to zero and are dependent on the pivots.
///
/// The basis keeps each pivot row's *original* vector rather than its reduced
/// one. The pivot originals span the same space and are independent, and
/// unlike a reduced row (a sum of several cycles) each one is known to be a
/// single simple loop.
///
/// # Decoding
///
/// The set bits of a basis vector are mapped back to vertex pairs and walked
/// into a vertex sequence, which is then canonicalized.
use std::collections::HashMap;

use bitvec::prelude::*;

use super::validate::CycleDefect;
use super::{Cycle, DetectionError, Stage, canonicalize};
use crate::graph::VertexId;

/// A cycle encoded as a bit vector over edge columns.
pub type EdgeVector = BitVec<usize, Lsb0>;

// ---------------------------------------------------------------------------
// EdgeIndexer
// ---------------------------------------------------------------------------

/// Bijection between unordered vertex pairs and edge columns.
///
/// For `n = 5` the columns are:
///
/// ```text
/// 0:0-1  1:0-2  2:0-3  3:0-4  4:1-2  5:1-3  6:1-4  7:2-3  8:2-4  9:3-4
/// ```
///
/// With `offset[0] = 0` and `offset[i] = offset[i-1] + n - 1 - i`, the column
/// of `{u, v}` is `offset[min] + max - 1`. The indexer stores
/// `row_start[i] = offset[i] + i`, the first column of row `i`, which also
/// serves the reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeIndexer {
    vertex_count: usize,
    row_start: Vec<usize>,
    len: usize,
}

impl EdgeIndexer {
    /// Builds the indexer for a graph of `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        let rows = vertex_count.saturating_sub(1);
        let mut row_start = Vec::with_capacity(rows);
        let mut next = 0usize;
        for i in 0..rows {
            row_start.push(next);
            next += vertex_count - 1 - i;
        }
        Self {
            vertex_count,
            row_start,
            len: next,
        }
    }

    /// Number of columns, `n(n-1)/2`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for graphs with fewer than two vertices.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Vertex count the indexer was built for.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Column of the pair `{u, v}`, or `None` if `u == v` or either vertex is
    /// out of range.
    pub fn index(&self, u: VertexId, v: VertexId) -> Option<usize> {
        let (lo, hi) = if u < v { (u, v) } else { (v, u) };
        if lo == hi || hi >= self.vertex_count {
            return None;
        }
        Some(self.row_start[lo] + hi - lo - 1)
    }

    /// Pair `(lo, hi)` with `lo < hi` stored at column `idx`.
    pub fn pair(&self, idx: usize) -> Option<(VertexId, VertexId)> {
        if idx >= self.len {
            return None;
        }
        let row = self
            .row_start
            .partition_point(|&start| start <= idx)
            .checked_sub(1)?;
        Some((row, idx - self.row_start[row] + row + 1))
    }

    /// Encodes `cycle` as an [`EdgeVector`] of length [`EdgeIndexer::len`].
    ///
    /// # Errors
    ///
    /// Returns a [`CycleDefect`] if a vertex is out of range or two
    /// consecutive vertices are equal.
    pub fn encode(&self, cycle: &[VertexId]) -> Result<EdgeVector, CycleDefect> {
        let mut bits = bitvec![usize, Lsb0; 0; self.len];
        let closing = cycle.last().zip(cycle.first()).filter(|_| cycle.len() > 1);
        let pairs = cycle.windows(2).map(|w| (w[0], w[1])).chain(closing.map(|(&a, &b)| (a, b)));
        for (position, (u, v)) in pairs.enumerate() {
            match self.index(u, v) {
                Some(col) => bits.set(col, true),
                None if u.max(v) >= self.vertex_count => {
                    return Err(CycleDefect::VertexOutOfRange { vertex: u.max(v) });
                }
                None => {
                    return Err(CycleDefect::RepeatedVertex {
                        vertex: v,
                        position: (position + 1) % cycle.len(),
                    });
                }
            }
        }
        Ok(bits)
    }

    /// Returns the vertex pairs of the set bits of `vector`, in column order.
    pub fn pairs_of(&self, vector: &BitSlice<usize, Lsb0>) -> Vec<(VertexId, VertexId)> {
        vector.iter_ones().filter_map(|i| self.pair(i)).collect()
    }

    /// Decodes `vector` into a canonical [`Cycle`].
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::CorruptBasisVector`] if the set bits are not
    /// exactly one simple loop.
    pub fn decode(&self, vector: &BitSlice<usize, Lsb0>) -> Result<Cycle, DetectionError> {
        let edges = self.pairs_of(vector);
        match walk_loop(&edges) {
            Ok(vertices) => Ok(canonicalize(&vertices)),
            Err(reason) => Err(DetectionError::CorruptBasisVector { edges, reason }),
        }
    }
}

// ---------------------------------------------------------------------------
// DecodeFailure
// ---------------------------------------------------------------------------

/// Why a basis vector could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeFailure {
    /// The vector has no set bits.
    Empty,
    /// A vertex is an endpoint of more than two edges.
    VertexOverloaded {
        /// The vertex.
        vertex: VertexId,
        /// Its number of incident edges in the vector.
        degree: usize,
    },
    /// The walk reached a vertex with no unused edge before returning to the
    /// start.
    BrokenWalk {
        /// Where the walk got stuck.
        at: VertexId,
    },
    /// The walk closed a loop without using every edge.
    SplitLoop {
        /// Edges on the walked loop.
        walked: usize,
        /// Edges in the vector.
        total: usize,
    },
}

impl std::fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("vector is empty"),
            Self::VertexOverloaded { vertex, degree } => {
                write!(f, "vertex {vertex} has {degree} incident edges")
            }
            Self::BrokenWalk { at } => write!(f, "walk cannot continue from vertex {at}"),
            Self::SplitLoop { walked, total } => {
                write!(f, "loop closed after {walked} of {total} edges")
            }
        }
    }
}

/// Walks `edges` as a single closed loop, returning its vertices starting
/// with the first endpoint of the first edge.
fn walk_loop(edges: &[(VertexId, VertexId)]) -> Result<Vec<VertexId>, DecodeFailure> {
    let Some(&(start, second)) = edges.first() else {
        return Err(DecodeFailure::Empty);
    };

    let mut incident: HashMap<VertexId, Vec<usize>> = HashMap::new();
    for (i, &(u, v)) in edges.iter().enumerate() {
        incident.entry(u).or_default().push(i);
        incident.entry(v).or_default().push(i);
    }
    for &(u, v) in edges {
        for vertex in [u, v] {
            let degree = incident.get(&vertex).map_or(0, Vec::len);
            if degree > 2 {
                return Err(DecodeFailure::VertexOverloaded { vertex, degree });
            }
        }
    }

    let mut used = bitvec![usize, Lsb0; 0; edges.len()];
    used.set(0, true);
    let mut walked = 1;
    let mut vertices = vec![start];
    let mut current = second;

    while current != start {
        vertices.push(current);
        let next_edge = incident
            .get(&current)
            .and_then(|ids| ids.iter().copied().find(|&i| !used[i]))
            .ok_or(DecodeFailure::BrokenWalk { at: current })?;
        used.set(next_edge, true);
        walked += 1;
        let (u, v) = edges[next_edge];
        current = if u == current { v } else { u };
    }

    if walked < edges.len() {
        return Err(DecodeFailure::SplitLoop {
            walked,
            total: edges.len(),
        });
    }
    Ok(vertices)
}

// ---------------------------------------------------------------------------
// Elimination
// ---------------------------------------------------------------------------

/// Runs GF(2) Gaussian elimination over `rows` in place and returns the pivot
/// rows in the order they were selected.
///
/// On return every non-pivot row is zero. Only columns with a set bit in at
/// least one row are visited; the others cannot hold a pivot.
pub fn gaussian_elimination(rows: &mut [EdgeVector]) -> Vec<usize> {
    let Some(width) = rows.first().map(|row| row.len()) else {
        return Vec::new();
    };
    let mut occupied = bitvec![usize, Lsb0; 0; width];
    for row in rows.iter() {
        occupied |= row.as_bitslice();
    }

    let mut tagged = bitvec![usize, Lsb0; 0; rows.len()];
    let mut pivots = Vec::new();
    for col in occupied.iter_ones() {
        if pivots.len() == rows.len() {
            break;
        }
        let Some(p) = (0..rows.len()).find(|&r| !tagged[r] && rows[r][col]) else {
            continue;
        };
        tagged.set(p, true);
        pivots.push(p);

        let pivot = rows[p].clone();
        for r in p + 1..rows.len() {
            if !tagged[r] && rows[r][col] {
                rows[r] ^= pivot.as_bitslice();
            }
        }
    }
    pivots
}

/// Reduces `cycles` to a linearly independent subset over GF(2).
///
/// Sets of fewer than three cycles are returned unchanged. Otherwise the
/// result holds one canonical cycle per pivot, in pivot order.
///
/// # Errors
///
/// - [`DetectionError::InvalidCycleDetected`] if a cycle cannot be encoded
///   for a graph of `vertex_count` vertices.
/// - [`DetectionError::CorruptBasisVector`] if a basis vector fails to decode.
pub fn reduce(cycles: Vec<Cycle>, vertex_count: usize) -> Result<Vec<Cycle>, DetectionError> {
    if cycles.len() < 3 {
        return Ok(cycles);
    }
    let indexer = EdgeIndexer::new(vertex_count);
    let mut encoded = Vec::with_capacity(cycles.len());
    for cycle in &cycles {
        let vector = indexer.encode(cycle.vertices()).map_err(|defect| {
            DetectionError::InvalidCycleDetected {
                stage: Stage::Reduce,
                cycle: cycle.clone(),
                defect,
            }
        })?;
        encoded.push(vector);
    }

    let mut rows = encoded.clone();
    let pivots = gaussian_elimination(&mut rows);
    log::debug!(
        "elimination: {} rows, {} columns, {} pivots",
        rows.len(),
        indexer.len(),
        pivots.len()
    );

    pivots
        .into_iter()
        .map(|p| indexer.decode(&encoded[p]))
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn cycle(v: &[VertexId]) -> Cycle {
        Cycle::new(v.to_vec())
    }

    fn vector(len: usize, ones: &[usize]) -> EdgeVector {
        let mut bits = bitvec![usize, Lsb0; 0; len];
        for &i in ones {
            bits.set(i, true);
        }
        bits
    }

    #[test]
    fn indexer_matches_documented_table() {
        let idx = EdgeIndexer::new(5);
        assert_eq!(idx.len(), 10);
        let expected = [
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 4),
            (3, 4),
        ];
        for (i, &(u, v)) in expected.iter().enumerate() {
            assert_eq!(idx.index(u, v), Some(i));
            assert_eq!(idx.index(v, u), Some(i));
            assert_eq!(idx.pair(i), Some((u, v)));
        }
        assert_eq!(idx.pair(10), None);
    }

    #[test]
    fn indexer_is_a_bijection_for_larger_graphs() {
        let n = 23;
        let idx = EdgeIndexer::new(n);
        assert_eq!(idx.len(), n * (n - 1) / 2);
        let mut col = 0;
        for u in 0..n {
            for v in u + 1..n {
                assert_eq!(idx.index(u, v), Some(col));
                assert_eq!(idx.pair(col), Some((u, v)));
                col += 1;
            }
        }
    }

    #[test]
    fn indexer_rejects_loops_and_out_of_range() {
        let idx = EdgeIndexer::new(4);
        assert_eq!(idx.index(2, 2), None);
        assert_eq!(idx.index(1, 4), None);
        assert!(EdgeIndexer::new(1).is_empty());
        assert!(EdgeIndexer::new(0).is_empty());
    }

    #[test]
    fn encode_includes_closing_edge() {
        let idx = EdgeIndexer::new(4);
        // 0-1 -> 0, 1-2 -> 3, 2-3 -> 5, 3-0 -> 2.
        let bits = idx.encode(&[0, 1, 2, 3]).expect("encodes");
        assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![0, 2, 3, 5]);
        assert_eq!(bits.count_ones(), 4);
    }

    #[test]
    fn encode_rejects_bad_vertices() {
        let idx = EdgeIndexer::new(4);
        assert_eq!(
            idx.encode(&[0, 1, 7]),
            Err(CycleDefect::VertexOutOfRange { vertex: 7 })
        );
        assert!(matches!(
            idx.encode(&[0, 1, 1]),
            Err(CycleDefect::RepeatedVertex { vertex: 1, .. })
        ));
    }

    #[test]
    fn decode_round_trips_to_canonical_form() {
        let idx = EdgeIndexer::new(6);
        let bits = idx.encode(&[4, 2, 5, 1]).expect("encodes");
        assert_eq!(idx.decode(&bits), Ok(cycle(&[1, 4, 2, 5])));
    }

    #[test]
    fn decode_rejects_overloaded_vertex() {
        // 0-1, 0-2, 0-3: vertex 0 has degree 3.
        let idx = EdgeIndexer::new(4);
        let err = idx.decode(&vector(6, &[0, 1, 2])).expect_err("corrupt");
        assert_eq!(
            err,
            DetectionError::CorruptBasisVector {
                edges: vec![(0, 1), (0, 2), (0, 3)],
                reason: DecodeFailure::VertexOverloaded {
                    vertex: 0,
                    degree: 3
                },
            }
        );
    }

    #[test]
    fn decode_rejects_open_path() {
        // 0-1, 1-2: the walk gets stuck at 2.
        let idx = EdgeIndexer::new(4);
        let err = idx.decode(&vector(6, &[0, 3])).expect_err("corrupt");
        assert!(matches!(
            err,
            DetectionError::CorruptBasisVector {
                reason: DecodeFailure::BrokenWalk { at: 2 },
                ..
            }
        ));
    }

    #[test]
    fn decode_rejects_two_disjoint_loops() {
        let idx = EdgeIndexer::new(6);
        let mut bits = idx.encode(&[0, 1, 2]).expect("encodes");
        bits |= idx.encode(&[3, 4, 5]).expect("encodes").as_bitslice();
        let err = idx.decode(&bits).expect_err("corrupt");
        assert!(matches!(
            err,
            DetectionError::CorruptBasisVector {
                reason: DecodeFailure::SplitLoop {
                    walked: 3,
                    total: 6
                },
                ..
            }
        ));
    }

    #[test]
    fn decode_rejects_empty_vector() {
        let idx = EdgeIndexer::new(3);
        let err = idx.decode(&vector(3, &[])).expect_err("corrupt");
        assert!(matches!(
            err,
            DetectionError::CorruptBasisVector {
                reason: DecodeFailure::Empty,
                ..
            }
        ));
    }

    #[test]
    fn elimination_finds_dependent_rows() {
        let idx = EdgeIndexer::new(4);
        let mut rows: Vec<EdgeVector> = [[0, 1, 2, 3].as_slice(), &[0, 1, 2], &[0, 2, 3]]
            .iter()
            .map(|c| idx.encode(c).expect("encodes"))
            .collect();
        let pivots = gaussian_elimination(&mut rows);
        assert_eq!(pivots, vec![0, 1]);
        assert!(rows[2].not_any(), "dependent row reduced to zero");
    }

    #[test]
    fn elimination_of_independent_rows_tags_them_all() {
        let mut rows = vec![vector(6, &[0, 3, 1]), vector(6, &[1, 5, 2])];
        let pivots = gaussian_elimination(&mut rows);
        assert_eq!(pivots.len(), 2);
        assert!(gaussian_elimination(&mut []).is_empty());
    }

    #[test]
    fn reduce_keeps_original_pivot_cycles() {
        let cleaned = vec![cycle(&[0, 1, 2, 3]), cycle(&[0, 1, 2]), cycle(&[0, 2, 3])];
        let basis = reduce(cleaned, 4).expect("reduces");
        assert_eq!(basis, vec![cycle(&[0, 1, 2, 3]), cycle(&[0, 1, 2])]);
    }

    #[test]
    fn reduce_leaves_small_sets_alone() {
        // Identical cycles would be dependent, but two rows are never reduced.
        let pair = vec![cycle(&[0, 1, 2]), cycle(&[0, 1, 2])];
        assert_eq!(reduce(pair.clone(), 3).expect("unchanged"), pair);
    }

    #[test]
    fn reduce_reports_unencodable_cycle() {
        let cycles = vec![cycle(&[0, 1, 2]), cycle(&[0, 1, 9]), cycle(&[1, 2, 3])];
        let err = reduce(cycles, 4).expect_err("vertex 9 is out of range");
        assert!(matches!(
            err,
            DetectionError::InvalidCycleDetected {
                stage: Stage::Reduce,
                defect: CycleDefect::VertexOutOfRange { vertex: 9 },
                ..
            }
        ));
    }
}
