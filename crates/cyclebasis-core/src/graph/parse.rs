/// Line-oriented graph text format.
///
/// ```text
/// my_graph:4
/// # a square with one diagonal
/// 0-1
/// 1-2
/// 2-3
/// 3-0
///
/// 0-2
/// ```
///
/// The first line is `<label>:<vertexCount>`. Every following line is blank,
/// a `#` comment, or a single `<v1>-<v2>` edge. Vertices `0..vertexCount` are
/// created up front, then edges are inserted in file order. Surrounding
/// whitespace is ignored on every line.
///
/// Parsing is strict: anything that would make the graph non-simple (a
/// self-loop, a repeated edge, an endpoint past `vertexCount`) is reported
/// with its 1-based line number rather than silently dropped.
/// A header count above [`MAX_VERTICES`] is rejected before anything is
/// allocated.
use std::num::IntErrorKind;

use super::{AdjacencyGraph, GraphBuildError, UndirectedGraph, VertexId};

/// A graph read from the text format together with its header label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledGraph {
    /// Label from the header line (may be empty).
    pub label: String,
    /// The parsed graph.
    pub graph: AdjacencyGraph,
}

/// Largest vertex count [`parse_graph`] accepts in a header.
///
/// Vertices are allocated up front from the header alone, so the count is
/// bounded independently of the input length.
pub const MAX_VERTICES: usize = 1 << 24;

/// Errors produced by [`parse_graph`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphParseError {
    /// The input has no header line.
    #[error("missing header line '<label>:<vertex count>'")]
    MissingHeader,
    /// The header line has no `:` or its count is not a non-negative integer.
    #[error("line 1: invalid header {content:?}, expected '<label>:<vertex count>'")]
    InvalidHeader {
        /// The header line as read.
        content: String,
    },
    /// The header asks for more vertices than can be allocated.
    #[error("line 1: vertex count {count} exceeds the limit of {limit}")]
    TooManyVertices {
        /// Count from the header.
        count: String,
        /// The accepted maximum.
        limit: usize,
    },
    /// An edge line is not of the form `<v1>-<v2>`.
    #[error("line {line}: invalid edge {content:?}, expected '<v1>-<v2>'")]
    InvalidEdge {
        /// 1-based line number.
        line: usize,
        /// The line as read.
        content: String,
    },
    /// An edge line is well-formed but the edge cannot be added.
    #[error("line {line}: {source}")]
    Graph {
        /// 1-based line number.
        line: usize,
        /// The underlying graph construction error.
        #[source]
        source: GraphBuildError,
    },
}

/// Parses the text format into a [`LabeledGraph`].
///
/// # Errors
///
/// Returns a [`GraphParseError`] describing the first offending line.
pub fn parse_graph(input: &str) -> Result<LabeledGraph, GraphParseError> {
    let mut lines = input.lines().enumerate();

    let (_, header) = lines.next().ok_or(GraphParseError::MissingHeader)?;
    let header = header.trim();
    if header.is_empty() {
        return Err(GraphParseError::MissingHeader);
    }
    let (label, count) = header
        .split_once(':')
        .ok_or_else(|| GraphParseError::InvalidHeader {
            content: header.to_owned(),
        })?;
    let count = count.trim();
    let too_many = || GraphParseError::TooManyVertices {
        count: count.to_owned(),
        limit: MAX_VERTICES,
    };
    let vertex_count: usize = match count.parse() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => return Err(too_many()),
        Err(_) => {
            return Err(GraphParseError::InvalidHeader {
                content: header.to_owned(),
            });
        }
    };
    if vertex_count > MAX_VERTICES {
        return Err(too_many());
    }

    let mut graph = AdjacencyGraph::try_new(vertex_count).map_err(|_| too_many())?;
    for (idx, raw) in lines {
        let line = idx + 1;
        let content = raw.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let (u, v) = parse_edge(content).ok_or_else(|| GraphParseError::InvalidEdge {
            line,
            content: content.to_owned(),
        })?;
        graph
            .add_edge(u, v)
            .map_err(|source| GraphParseError::Graph { line, source })?;
    }

    Ok(LabeledGraph {
        label: label.trim().to_owned(),
        graph,
    })
}

fn parse_edge(content: &str) -> Option<(VertexId, VertexId)> {
    let (a, b) = content.split_once('-')?;
    let u = a.trim().parse().ok()?;
    let v = b.trim().parse().ok()?;
    Some((u, v))
}

/// Serializes `graph` back into the text format under `label`.
///
/// Edges are written in [`AdjacencyGraph::edges`] order, so
/// `parse_graph(&write_graph(label, &g))` reproduces `g` exactly.
pub fn write_graph(label: &str, graph: &AdjacencyGraph) -> String {
    let mut out = format!("{label}:{}\n", graph.vertex_count());
    for &(u, v) in graph.edges() {
        out.push_str(&format!("{u}-{v}\n"));
    }
    out
}
