//! Implementation of `cyclebasis cycles <file>`.
//!
//! Human mode prints one cycle per line on stdout; with `--info` the stage
//! counts and timings follow on stderr. JSON mode prints a single object
//! with `label`, `cycles`, `count`, `expected`, `warnings`, `status` and, if
//! requested, `info`.
//!
//! Exit codes: 0 = success, 1 = detection failure or short basis under
//! `--strict`, 2 = input failure.
use std::io::Write;

use cyclebasis_core::{
    CycleStatus, DetectionConfig, DetectionInfo, DetectionOutput, DetectionWarning,
    cycle_space_dimension, cycle_status, find_cycles_with_config,
};

use super::{load_graph, stdout_error};
use crate::OutputFormat;
use crate::error::CliError;

/// Flags of the `cycles` subcommand.
#[derive(Debug, Clone, Default)]
pub struct CyclesArgs {
    /// Draw the basis from chordless cycles only.
    pub chordless: bool,
    /// Validate cycles between stages.
    pub self_checks: bool,
    /// Collect and print [`DetectionInfo`].
    pub info: bool,
    /// Exploration depth bound.
    pub max_depth: Option<usize>,
    /// Fail when the basis is short.
    pub strict: bool,
}

impl CyclesArgs {
    fn detection_config(&self) -> DetectionConfig {
        DetectionConfig {
            enable_chordless_filter: self.chordless,
            enable_self_checks: self.self_checks,
            collect_diagnostics: self.info,
            max_path_depth: self.max_depth,
        }
    }
}

/// Runs the `cycles` command.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] for malformed input, the mapped
/// [`cyclebasis_core::DetectionError`] if the pipeline fails, and
/// [`CliError::InsufficientCycles`] under `--strict` when a warning was
/// raised.
pub fn run(content: &str, args: &CyclesArgs, format: &OutputFormat) -> Result<(), CliError> {
    let labeled = load_graph(content)?;
    let graph = &labeled.graph;

    let output = find_cycles_with_config(graph, &args.detection_config())?;
    let expected = cycle_space_dimension(graph);
    let status = cycle_status(&output.cycles, graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            print_human(&mut out, &output).map_err(|e| stdout_error(&e))?;
            if let Some(info) = &output.info {
                let stderr = std::io::stderr();
                print_info_human(&mut stderr.lock(), info, &status).map_err(|e| {
                    CliError::IoError {
                        source: "stderr".to_owned(),
                        detail: e.to_string(),
                    }
                })?;
            }
        }
        OutputFormat::Json => {
            print_json(&mut out, &labeled.label, &output, expected, &status)
                .map_err(|e| stdout_error(&e))?;
        }
    }

    if args.strict {
        if let Some(DetectionWarning::InsufficientIndependentCycles { found, expected }) =
            output.warnings.first()
        {
            return Err(CliError::InsufficientCycles {
                found: *found,
                expected: *expected,
            });
        }
    }
    Ok(())
}

fn print_human<W: Write>(w: &mut W, output: &DetectionOutput) -> std::io::Result<()> {
    for cycle in &output.cycles {
        writeln!(w, "{cycle}")?;
    }
    Ok(())
}

fn print_info_human<W: Write>(
    w: &mut W,
    info: &DetectionInfo,
    status: &CycleStatus,
) -> std::io::Result<()> {
    writeln!(w, "anchors:        {}", info.anchors)?;
    writeln!(w, "raw cycles:     {}", info.raw_cycles)?;
    writeln!(w, "cleaned:        {}", info.cleaned_cycles)?;
    if let Some(chordless) = info.chordless_cycles {
        writeln!(w, "chordless:      {chordless}")?;
    }
    writeln!(
        w,
        "basis:          {} of {}",
        info.final_cycles, info.expected_cycles
    )?;
    writeln!(w, "non-chordless:  {}", status.non_chordless)?;
    writeln!(
        w,
        "time:           {}us",
        info.timings.total().as_micros()
    )
}

fn print_json<W: Write>(
    w: &mut W,
    label: &str,
    output: &DetectionOutput,
    expected: usize,
    status: &CycleStatus,
) -> std::io::Result<()> {
    let mut value = serde_json::json!({
        "label": label,
        "cycles": output.cycles,
        "count": output.cycles.len(),
        "expected": expected,
        "warnings": output.warnings,
        "status": status,
    });
    if let (Some(info), Some(obj)) = (&output.info, value.as_object_mut()) {
        obj.insert("info".to_owned(), serde_json::to_value(info)?);
    }
    serde_json::to_writer_pretty(&mut *w, &value)?;
    writeln!(w)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use cyclebasis_core::Cycle;

    use super::*;

    fn output_of(content: &str, args: &CyclesArgs) -> DetectionOutput {
        let labeled = load_graph(content).expect("parses");
        find_cycles_with_config(&labeled.graph, &args.detection_config()).expect("detects")
    }

    fn defaults() -> CyclesArgs {
        CyclesArgs {
            self_checks: true,
            ..CyclesArgs::default()
        }
    }

    #[test]
    fn flags_map_onto_detection_config() {
        let args = CyclesArgs {
            chordless: true,
            self_checks: false,
            info: true,
            max_depth: Some(4),
            strict: true,
        };
        let config = args.detection_config();
        assert!(config.enable_chordless_filter);
        assert!(!config.enable_self_checks);
        assert!(config.collect_diagnostics);
        assert_eq!(config.max_path_depth, Some(4));
    }

    #[test]
    fn human_output_is_one_cycle_per_line() {
        let output = output_of("sq:4\n0-1\n1-2\n2-3\n3-0\n0-2\n", &defaults());
        let mut buf = Vec::new();
        print_human(&mut buf, &output).expect("writes");
        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            "0 - 1 - 2 - 3\n0 - 1 - 2\n"
        );
    }

    #[test]
    fn json_output_has_counts_and_optional_info() {
        let args = CyclesArgs {
            info: true,
            ..defaults()
        };
        let output = output_of("t:3\n0-1\n1-2\n2-0\n", &args);
        let status = CycleStatus::default();
        let mut buf = Vec::new();
        print_json(&mut buf, "t", &output, 1, &status).expect("writes");
        let json: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
        assert_eq!(json["label"], "t");
        assert_eq!(json["count"], 1);
        assert_eq!(json["expected"], 1);
        assert_eq!(json["cycles"][0], serde_json::json!([0, 1, 2]));
        assert_eq!(json["warnings"], serde_json::json!([]));
        assert_eq!(json["info"]["final_cycles"], 1);
    }

    #[test]
    fn json_warnings_are_tagged() {
        let output = DetectionOutput {
            cycles: vec![Cycle::new(vec![0, 1, 2])],
            warnings: vec![DetectionWarning::InsufficientIndependentCycles {
                found: 1,
                expected: 2,
            }],
            info: None,
        };
        let mut buf = Vec::new();
        print_json(&mut buf, "g", &output, 2, &CycleStatus::default()).expect("writes");
        let json: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
        assert_eq!(
            json["warnings"][0]["kind"],
            "insufficient_independent_cycles"
        );
        assert!(json.get("info").is_none());
    }
}
