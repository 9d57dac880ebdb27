/// Command module for the `cyclebasis` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the input text and parsed arguments and returns `Ok(())` on
/// success or a [`crate::error::CliError`] on failure.
pub mod cycles;
pub mod dot;
pub mod info;

use cyclebasis_core::{LabeledGraph, parse_graph};

use crate::error::CliError;

/// Parses graph text, mapping failures to an exit-code-2 [`CliError`].
pub(crate) fn load_graph(content: &str) -> Result<LabeledGraph, CliError> {
    parse_graph(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })
}

/// Maps a stdout write failure to [`CliError::IoError`].
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}
