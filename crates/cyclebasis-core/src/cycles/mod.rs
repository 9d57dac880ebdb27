/// Cycle basis detection for simple undirected graphs.
///
/// The pipeline runs five stages, each in its own submodule:
///
/// 1. [`scan`]: one depth-first pass that records an *anchor* vertex for
///    every independent cycle closed by a back edge.
/// 2. [`explore`]: from each anchor, a backtracking walk that enumerates
///    candidate cyclic paths.
/// 3. [`normalize`]: trims candidates to their cyclic portion, rotates them
///    into canonical form and drops duplicates.
/// 4. [`chordless`] (optional): discards candidates that have a chord.
/// 5. [`reduce`]: encodes candidates as GF(2) edge vectors, keeps a maximal
///    independent subset via Gaussian elimination, and decodes it back.
///
/// [`validate`] re-checks cycles against the graph. It runs after
/// normalization and after reduction when
/// [`DetectionConfig::enable_self_checks`] is set.
///
/// The primary entry points are [`find_cycles`] and
/// [`find_cycles_with_config`].
pub mod chordless;
pub mod explore;
pub mod normalize;
mod pipeline;
pub mod reduce;
pub mod scan;
pub mod validate;


pub use chordless::{find_chord, is_chordless, retain_chordless};
pub use normalize::{canonicalize, clean_cycles, dedupe, find_true_cycle};
pub use pipeline::{find_cycles, find_cycles_with_config};
pub use reduce::{DecodeFailure, EdgeIndexer};
pub use validate::{CycleDefect, CycleStatus, check_cycles, cycle_status, is_cycle, validate_cycle};

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::graph::VertexId;

// ---------------------------------------------------------------------------
// Cycle
// ---------------------------------------------------------------------------

/// A simple cycle given as its vertex sequence, without repeating the start.
///
/// Cycles returned by the pipeline are in canonical form: the smallest vertex
/// comes first and the second vertex is smaller than the last one. Two
/// canonical cycles are equal iff they describe the same set of edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Cycle(Vec<VertexId>);

impl Cycle {
    /// Wraps a vertex sequence as-is. Use [`canonicalize`] to normalize it.
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Self(vertices)
    }

    /// Returns the vertex sequence.
    pub fn vertices(&self) -> &[VertexId] {
        &self.0
    }

    /// Consumes the cycle and returns its vertex sequence.
    pub fn into_vertices(self) -> Vec<VertexId> {
        self.0
    }

    /// Number of vertices, which is also the number of edges.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the cycle's edges, closing pair last.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        let closing = match (self.0.last(), self.0.first()) {
            (Some(&last), Some(&first)) if self.0.len() > 1 => Some((last, first)),
            _ => None,
        };
        self.0.windows(2).map(|w| (w[0], w[1])).chain(closing)
    }

    /// Returns `true` if the sequence is already in canonical form.
    pub fn is_canonical(&self) -> bool {
        canonicalize(&self.0) == *self
    }
}

impl From<Vec<VertexId>> for Cycle {
    fn from(vertices: Vec<VertexId>) -> Self {
        Self(vertices)
    }
}

impl AsRef<[VertexId]> for Cycle {
    fn as_ref(&self) -> &[VertexId] {
        &self.0
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" - ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Pipeline stage after which a self-check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Output of the normalizer (candidate set).
    Normalize,
    /// Output of the reducer (final basis).
    Reduce,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normalize => f.write_str("normalize"),
            Self::Reduce => f.write_str("reduce"),
        }
    }
}

// ---------------------------------------------------------------------------
// DetectionError
// ---------------------------------------------------------------------------

/// Fatal pipeline failures.
///
/// Both variants indicate a defect in the pipeline rather than bad input;
/// they carry enough payload to reproduce the problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectionError {
    /// A basis vector did not decode to a single simple loop.
    #[error("basis vector with edges {edges:?} is not a simple cycle: {reason}")]
    CorruptBasisVector {
        /// Vertex pairs of the vector's set bits, in edge-index order.
        edges: Vec<(VertexId, VertexId)>,
        /// What went wrong while decoding.
        reason: DecodeFailure,
    },
    /// A self-check found a cycle that does not exist in the graph.
    #[error("invalid cycle [{cycle}] after {stage} stage: {defect}")]
    InvalidCycleDetected {
        /// Stage whose output failed the check.
        stage: Stage,
        /// The offending cycle.
        cycle: Cycle,
        /// First defect found.
        defect: CycleDefect,
    },
}

// ---------------------------------------------------------------------------
// DetectionWarning
// ---------------------------------------------------------------------------

/// Non-fatal findings returned alongside the cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetectionWarning {
    /// The result size differs from the cycle-space dimension `E - V + C`.
    ///
    /// The anchor rule of the back-edge scan and the first-closing-neighbor
    /// rule of the explorer can both miss cycles on some graphs.
    InsufficientIndependentCycles {
        /// Number of cycles returned.
        found: usize,
        /// Cycle-space dimension of the graph.
        expected: usize,
    },
}

impl std::fmt::Display for DetectionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientIndependentCycles { found, expected } => write!(
                f,
                "found {found} independent cycles, expected {expected} (E - V + C)"
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// DetectionConfig
// ---------------------------------------------------------------------------

/// Configuration for [`find_cycles_with_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionConfig {
    /// Drop candidates that have a chord before reduction.
    ///
    /// Default: `false`.
    pub enable_chordless_filter: bool,

    /// Validate the candidate set and the final basis against the graph and
    /// fail with [`DetectionError::InvalidCycleDetected`] on a defect.
    ///
    /// Default: `true`.
    pub enable_self_checks: bool,

    /// Fill [`DetectionOutput::info`] with counters and stage timings.
    ///
    /// Default: `false`.
    pub collect_diagnostics: bool,

    /// Maximum number of vertices on an explored path, closing vertex
    /// excluded. `None` explores without bound.
    ///
    /// Default: `None`.
    pub max_path_depth: Option<usize>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            enable_chordless_filter: false,
            enable_self_checks: true,
            collect_diagnostics: false,
            max_path_depth: None,
        }
    }
}

// ---------------------------------------------------------------------------
// DetectionInfo
// ---------------------------------------------------------------------------

/// Wall-clock time spent in each stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageTimings {
    /// Back-edge scan.
    #[serde(rename = "scan_us", serialize_with = "as_micros")]
    pub scan: Duration,
    /// Path exploration.
    #[serde(rename = "explore_us", serialize_with = "as_micros")]
    pub explore: Duration,
    /// Trimming, canonicalization and deduplication.
    #[serde(rename = "normalize_us", serialize_with = "as_micros")]
    pub normalize: Duration,
    /// Chordless filtering (zero when disabled).
    #[serde(rename = "chordless_us", serialize_with = "as_micros")]
    pub chordless: Duration,
    /// Encoding, elimination and decoding.
    #[serde(rename = "reduce_us", serialize_with = "as_micros")]
    pub reduce: Duration,
    /// Self-checks (zero when disabled).
    #[serde(rename = "validate_us", serialize_with = "as_micros")]
    pub validate: Duration,
}

impl StageTimings {
    /// Sum of all stages.
    pub fn total(&self) -> Duration {
        self.scan + self.explore + self.normalize + self.chordless + self.reduce + self.validate
    }
}

fn as_micros<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
}

/// Diagnostic counters for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionInfo {
    /// Anchors recorded by the back-edge scan.
    pub anchors: usize,
    /// Raw paths produced by the explorer.
    pub raw_cycles: usize,
    /// Distinct canonical cycles after normalization.
    pub cleaned_cycles: usize,
    /// Candidates left by the chordless filter; `None` when it is disabled.
    pub chordless_cycles: Option<usize>,
    /// Cycles in the returned basis.
    pub final_cycles: usize,
    /// Cycle-space dimension `E - V + C`.
    pub expected_cycles: usize,
    /// Per-stage elapsed time.
    pub timings: StageTimings,
}

// ---------------------------------------------------------------------------
// DetectionOutput
// ---------------------------------------------------------------------------

/// The result of a successful [`find_cycles_with_config`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionOutput {
    /// The cycle basis, each cycle in canonical form.
    pub cycles: Vec<Cycle>,
    /// Non-fatal warnings.
    pub warnings: Vec<DetectionWarning>,
    /// Present when [`DetectionConfig::collect_diagnostics`] is set.
    pub info: Option<DetectionInfo>,
}
