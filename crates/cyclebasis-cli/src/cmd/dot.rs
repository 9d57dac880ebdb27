//! Implementation of `cyclebasis dot <file>`.
//!
//! Writes the graph as Graphviz DOT text. Every edge on a basis cycle is
//! drawn in that cycle's palette color; an edge shared by several cycles
//! takes the color of the first one. Remaining edges stay plain.
use std::collections::HashMap;
use std::io::Write;

use cyclebasis_core::{
    AdjacencyGraph, Cycle, DetectionConfig, UndirectedGraph, VertexId, find_cycles_with_config,
};

use super::{load_graph, stdout_error};
use crate::error::CliError;

const PALETTE: [&str; 10] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#42d4f4", "#f032e6", "#9a6324",
    "#800000", "#000075",
];

/// Runs the `dot` command.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] for malformed input and the mapped
/// detection error if the pipeline fails.
pub fn run(content: &str, chordless: bool) -> Result<(), CliError> {
    let labeled = load_graph(content)?;
    let config = DetectionConfig {
        enable_chordless_filter: chordless,
        ..DetectionConfig::default()
    };
    let output = find_cycles_with_config(&labeled.graph, &config)?;
    let dot = render_dot(&labeled.label, &labeled.graph, &output.cycles);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(dot.as_bytes()).map_err(|e| stdout_error(&e))
}

/// Renders `graph` as an undirected DOT graph with `cycles` highlighted.
pub fn render_dot(label: &str, graph: &AdjacencyGraph, cycles: &[Cycle]) -> String {
    let mut owner: HashMap<(VertexId, VertexId), usize> = HashMap::new();
    for (i, cycle) in cycles.iter().enumerate() {
        for (u, v) in cycle.edges() {
            owner.entry((u.min(v), u.max(v))).or_insert(i);
        }
    }

    let name = if label.is_empty() { "G" } else { label };
    let mut out = format!("graph \"{}\" {{\n", escape(name));
    out.push_str("  node [shape=circle];\n");
    for v in 0..graph.vertex_count() {
        out.push_str(&format!("  {v};\n"));
    }
    for &(u, v) in graph.edges() {
        match owner.get(&(u.min(v), u.max(v))) {
            Some(&i) => out.push_str(&format!(
                "  {u} -- {v} [color=\"{}\", penwidth=2];\n",
                PALETTE[i % PALETTE.len()]
            )),
            None => out.push_str(&format!("  {u} -- {v};\n")),
        }
    }
    out.push_str("}\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn tree_edges_are_plain() {
        let g = load_graph("path:3\n0-1\n1-2\n").expect("parses");
        let dot = render_dot(&g.label, &g.graph, &[]);
        assert_eq!(
            dot,
            "graph \"path\" {\n  node [shape=circle];\n  0;\n  1;\n  2;\n  0 -- 1;\n  1 -- 2;\n}\n"
        );
    }

    #[test]
    fn cycle_edges_take_palette_colors() {
        let g = load_graph("t:4\n0-1\n1-2\n2-0\n2-3\n").expect("parses");
        let cycles = vec![Cycle::new(vec![0, 1, 2])];
        let dot = render_dot(&g.label, &g.graph, &cycles);
        assert!(dot.contains("0 -- 1 [color=\"#e6194b\", penwidth=2];"), "{dot}");
        assert!(dot.contains("2 -- 0 [color=\"#e6194b\", penwidth=2];"), "{dot}");
        assert!(dot.contains("  2 -- 3;\n"), "{dot}");
    }

    #[test]
    fn shared_edge_keeps_first_cycle_color() {
        let g = load_graph("sq:4\n0-1\n1-2\n2-3\n3-0\n0-2\n").expect("parses");
        let cycles = vec![Cycle::new(vec![0, 1, 2]), Cycle::new(vec![0, 2, 3])];
        let dot = render_dot(&g.label, &g.graph, &cycles);
        assert!(dot.contains("0 -- 2 [color=\"#e6194b\""), "{dot}");
        assert!(dot.contains("2 -- 3 [color=\"#3cb44b\""), "{dot}");
    }

    #[test]
    fn label_is_escaped_and_defaulted() {
        let g = AdjacencyGraph::new(0);
        assert!(render_dot("a\"b", &g, &[]).starts_with("graph \"a\\\"b\" {"));
        assert!(render_dot("", &g, &[]).starts_with("graph \"G\" {"));
    }
}
