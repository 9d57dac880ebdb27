//! Implementation of `cyclebasis info <file>`.
//!
//! Prints the header label and [`GraphSummary`] of a graph file, as aligned
//! key/value lines or a single JSON object.
use std::io::Write;

use cyclebasis_core::{GraphSummary, summarize};

use super::{load_graph, stdout_error};
use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `info` command.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] (exit code 2) if the content is not a
/// valid graph file.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let labeled = load_graph(content)?;
    let summary = summarize(&labeled.graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &labeled.label, &summary),
        OutputFormat::Json => print_json(&mut out, &labeled.label, &summary),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: Write>(w: &mut W, label: &str, s: &GraphSummary) -> std::io::Result<()> {
    writeln!(w, "label:            {label}")?;
    writeln!(w, "vertices:         {}", s.vertices)?;
    writeln!(w, "edges:            {}", s.edges)?;
    writeln!(w, "components:       {}", s.components)?;
    writeln!(w, "density:          {:.4}", s.density)?;
    writeln!(w, "expected cycles:  {}", s.expected_cycles)
}

fn print_json<W: Write>(w: &mut W, label: &str, s: &GraphSummary) -> std::io::Result<()> {
    let mut value = serde_json::to_value(s)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("label".to_owned(), serde_json::Value::from(label));
    }
    serde_json::to_writer_pretty(&mut *w, &value)?;
    writeln!(w)
}
