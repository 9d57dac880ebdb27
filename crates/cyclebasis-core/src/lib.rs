#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod cycles;
pub mod graph;
pub mod union_find;

#[cfg(test)]
mod test_helpers;

pub use cycles::{
    Cycle, CycleDefect, CycleStatus, DecodeFailure, DetectionConfig, DetectionError,
    DetectionInfo, DetectionOutput, DetectionWarning, EdgeIndexer, Stage, StageTimings,
    canonicalize, check_cycles, clean_cycles, cycle_status, dedupe, find_chord, find_cycles,
    find_cycles_with_config, find_true_cycle, is_chordless, is_cycle, retain_chordless,
    validate_cycle,
};
pub use graph::{
    AdjacencyGraph, GraphBuildError, GraphParseError, GraphSummary, LabeledGraph, MAX_VERTICES,
    UndirectedGraph, VertexId, connected_components, cycle_space_dimension, parse_graph, summarize,
    write_graph,
};
pub use union_find::UnionFind;

/// Returns the current version of the cyclebasis-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
