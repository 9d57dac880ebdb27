use std::time::Instant;

use crate::graph::{UndirectedGraph, cycle_space_dimension};

use super::explore::explore_all;
use super::reduce::reduce;
use super::scan::scan_back_edges;
use super::{
    Cycle, DetectionConfig, DetectionError, DetectionInfo, DetectionOutput, DetectionWarning,
    Stage, clean_cycles, retain_chordless, validate_cycle,
};

/// Computes a cycle basis of `graph` with the default [`DetectionConfig`].
///
/// Returns the cycles only; warnings are logged but dropped. Call
/// [`find_cycles_with_config`] to receive them.
///
/// # Errors
///
/// See [`find_cycles_with_config`].
pub fn find_cycles<G: UndirectedGraph>(graph: &G) -> Result<Vec<Cycle>, DetectionError> {
    find_cycles_with_config(graph, &DetectionConfig::default()).map(|out| out.cycles)
}

/// Computes a cycle basis of `graph` using the given configuration.
///
/// Graphs with fewer than three vertices or three edges, and graphs without
/// a back edge, yield an empty basis.
///
/// # Errors
///
/// Returns [`DetectionError::InvalidCycleDetected`] when self-checks are
/// enabled and a stage produced a cycle that is not in the graph.
/// Returns [`DetectionError::CorruptBasisVector`] if a basis vector fails to
/// decode.
pub fn find_cycles_with_config<G: UndirectedGraph>(
    graph: &G,
    config: &DetectionConfig,
) -> Result<DetectionOutput, DetectionError> {
    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();
    let mut info = DetectionInfo {
        expected_cycles: cycle_space_dimension(graph),
        ..DetectionInfo::default()
    };

    if vertex_count < 3 || edge_count < 3 {
        log::debug!("trivial graph ({vertex_count} vertices, {edge_count} edges): no cycles");
        return Ok(finish(Vec::new(), info, config));
    }

    // Step 1: back-edge scan.
    let started = Instant::now();
    let ctx = scan_back_edges(graph);
    info.timings.scan = started.elapsed();
    info.anchors = ctx.anchors().len();
    log::debug!(
        "scan: {} back edges, {} anchors",
        ctx.back_edge_count(),
        info.anchors
    );
    if ctx.anchors().is_empty() {
        return Ok(finish(Vec::new(), info, config));
    }

    // Step 2: path exploration.
    let started = Instant::now();
    let raw = explore_all(graph, ctx.anchors(), config.max_path_depth);
    info.timings.explore = started.elapsed();
    info.raw_cycles = raw.len();
    log::debug!("explore: {} raw cycles", raw.len());

    // Step 3: trim, canonicalize, dedupe.
    let started = Instant::now();
    let mut candidates = clean_cycles(&raw);
    drop(raw);
    info.timings.normalize = started.elapsed();
    info.cleaned_cycles = candidates.len();
    log::debug!("normalize: {} distinct cycles", candidates.len());

    if config.enable_self_checks {
        let started = Instant::now();
        self_check(&candidates, graph, Stage::Normalize)?;
        info.timings.validate += started.elapsed();
    }

    // Step 4: optional chordless filter, ahead of the reduction so that the
    // basis is drawn from chordless candidates only.
    if config.enable_chordless_filter {
        let started = Instant::now();
        let removed = retain_chordless(&mut candidates, graph);
        info.timings.chordless = started.elapsed();
        info.chordless_cycles = Some(candidates.len());
        log::debug!("chordless: removed {removed}, {} left", candidates.len());
    }

    // Step 5: GF(2) reduction.
    let started = Instant::now();
    let basis = reduce(candidates, vertex_count)?;
    info.timings.reduce = started.elapsed();
    log::debug!("reduce: {} independent cycles", basis.len());

    if config.enable_self_checks {
        let started = Instant::now();
        self_check(&basis, graph, Stage::Reduce)?;
        info.timings.validate += started.elapsed();
    }

    Ok(finish(basis, info, config))
}

fn self_check<G: UndirectedGraph>(
    cycles: &[Cycle],
    graph: &G,
    stage: Stage,
) -> Result<(), DetectionError> {
    for cycle in cycles {
        validate_cycle(cycle.vertices(), graph).map_err(|defect| {
            DetectionError::InvalidCycleDetected {
                stage,
                cycle: cycle.clone(),
                defect,
            }
        })?;
    }
    Ok(())
}

/// Compares the result against the cycle-space dimension and assembles the
/// output.
fn finish(cycles: Vec<Cycle>, mut info: DetectionInfo, config: &DetectionConfig) -> DetectionOutput {
    info.final_cycles = cycles.len();

    let mut warnings = Vec::new();
    if cycles.len() != info.expected_cycles {
        let warning = DetectionWarning::InsufficientIndependentCycles {
            found: cycles.len(),
            expected: info.expected_cycles,
        };
        log::warn!("{warning}");
        warnings.push(warning);
    }

    DetectionOutput {
        cycles,
        warnings,
        info: config.collect_diagnostics.then_some(info),
    }
}
