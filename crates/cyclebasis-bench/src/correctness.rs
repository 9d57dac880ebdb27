//! Post-detection invariant checkers for correctness validation.

use std::collections::HashSet;

use cyclebasis_core::cycles::reduce::gaussian_elimination;
use cyclebasis_core::{
    Cycle, DetectionOutput, EdgeIndexer, UndirectedGraph, check_cycles, cycle_space_dimension,
    is_chordless,
};

/// Verifies that every cycle is a simple cycle of `graph`.
pub fn check_cycles_valid<G: UndirectedGraph>(graph: &G, cycles: &[Cycle]) -> Result<(), String> {
    match check_cycles(cycles, graph).first() {
        Some((cycle, defect)) => Err(format!("invalid cycle [{cycle}]: {defect}")),
        None => Ok(()),
    }
}

/// Verifies that every cycle is canonical and that none repeats.
pub fn check_canonical_unique(cycles: &[Cycle]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for cycle in cycles {
        if !cycle.is_canonical() {
            return Err(format!("cycle [{cycle}] is not canonical"));
        }
        if !seen.insert(cycle) {
            return Err(format!("cycle [{cycle}] appears twice"));
        }
    }
    Ok(())
}

/// Verifies the basis size against `E - V + C`:
/// - never larger
/// - equal whenever no warning was raised
pub fn check_basis_size<G: UndirectedGraph>(
    graph: &G,
    output: &DetectionOutput,
) -> Result<(), String> {
    let expected = cycle_space_dimension(graph);
    let found = output.cycles.len();
    if found > expected {
        return Err(format!("basis has {found} cycles, dimension is {expected}"));
    }
    if output.warnings.is_empty() && found != expected {
        return Err(format!(
            "basis has {found} cycles, dimension is {expected}, and no warning was raised"
        ));
    }
    Ok(())
}

/// Verifies that the cycles' edge vectors are linearly independent over GF(2).
pub fn check_independent<G: UndirectedGraph>(graph: &G, cycles: &[Cycle]) -> Result<(), String> {
    let indexer = EdgeIndexer::new(graph.vertex_count());
    let mut rows = Vec::with_capacity(cycles.len());
    for cycle in cycles {
        let row = indexer
            .encode(cycle.vertices())
            .map_err(|defect| format!("cannot encode [{cycle}]: {defect}"))?;
        rows.push(row);
    }
    let rank = gaussian_elimination(&mut rows).len();
    if rank != cycles.len() {
        return Err(format!("{} cycles span only rank {rank}", cycles.len()));
    }
    Ok(())
}

/// Verifies that no cycle has a chord.
pub fn check_chordless<G: UndirectedGraph>(graph: &G, cycles: &[Cycle]) -> Result<(), String> {
    match cycles.iter().find(|c| !is_chordless(c.vertices(), graph)) {
        Some(cycle) => Err(format!("cycle [{cycle}] has a chord")),
        None => Ok(()),
    }
}

/// Runs every basis checker except [`check_chordless`].
pub fn check_basis<G: UndirectedGraph>(graph: &G, output: &DetectionOutput) -> Result<(), String> {
    check_cycles_valid(graph, &output.cycles)?;
    check_canonical_unique(&output.cycles)?;
    check_basis_size(graph, output)?;
    check_independent(graph, &output.cycles)
}
