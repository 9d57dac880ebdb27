/// Candidate cleanup: trim, canonicalize, deduplicate.
///
/// The explorer emits paths such as `[4, 1, 2, 3, 1]` whose cyclic part
/// starts somewhere after the anchor. Cleanup reduces each one to the vertex
/// sequence of the cycle it closes, rotates and orients it into canonical
/// form, and keeps the first occurrence of each canonical cycle.
use std::collections::HashSet;

use super::Cycle;
use crate::graph::VertexId;

/// Returns the cyclic portion of `path`.
///
/// Scans `i` upwards and, for each `i`, `j` from `i + 2`; the first match
/// `path[i] == path[j]` yields `path[i..j]`. A path of exactly three vertices
/// is returned unchanged, and a path with no such repetition yields `None`.
pub fn find_true_cycle(path: &[VertexId]) -> Option<Vec<VertexId>> {
    if path.len() == 3 {
        return Some(path.to_vec());
    }
    for (i, &start) in path.iter().enumerate() {
        let tail = path.get(i + 2..).unwrap_or(&[]);
        if let Some(offset) = tail.iter().position(|&v| v == start) {
            return Some(path[i..i + 2 + offset].to_vec());
        }
    }
    None
}

/// Returns the canonical form of `cycle`.
///
/// The minimum vertex is rotated to the front; if the vertex after it is
/// greater than the last vertex, the direction is reversed so that the
/// smaller neighbor of the minimum comes second.
pub fn canonicalize(cycle: &[VertexId]) -> Cycle {
    let Some(min_pos) = cycle
        .iter()
        .enumerate()
        .min_by_key(|&(_, v)| v)
        .map(|(i, _)| i)
    else {
        return Cycle::default();
    };

    let mut out = Vec::with_capacity(cycle.len());
    out.extend_from_slice(&cycle[min_pos..]);
    out.extend_from_slice(&cycle[..min_pos]);
    if out.len() > 2 && out[1] > out[out.len() - 1] {
        out[1..].reverse();
    }
    Cycle::new(out)
}

/// Drops cycles already seen, keeping first-seen order.
///
/// Inputs are expected to be canonical; non-canonical duplicates of the same
/// cycle are not recognized.
pub fn dedupe(cycles: Vec<Cycle>) -> Vec<Cycle> {
    let mut seen: HashSet<Cycle> = HashSet::with_capacity(cycles.len());
    let mut out = Vec::with_capacity(cycles.len());
    for cycle in cycles {
        if seen.insert(cycle.clone()) {
            out.push(cycle);
        }
    }
    out
}

/// Runs [`find_true_cycle`], [`canonicalize`] and [`dedupe`] over raw paths.
///
/// Trimmed sequences shorter than three vertices are dropped.
pub fn clean_cycles(raw: &[Vec<VertexId>]) -> Vec<Cycle> {
    let canonical: Vec<Cycle> = raw
        .iter()
        .filter_map(|path| find_true_cycle(path))
        .filter(|c| c.len() >= 3)
        .map(|c| canonicalize(&c))
        .collect();
    dedupe(canonical)
}
