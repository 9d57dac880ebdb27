/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `cyclebasis` binary.
/// Every variant maps to a stable exit code via [`CliError::exit_code`]:
///
/// - Exit code **2**: the input could not be read or parsed.
/// - Exit code **1**: the input was fine but detection failed, or `--strict`
///   was given and the basis came out short.
use std::fmt;
use std::path::PathBuf;

use cyclebasis_core::DetectionError;

/// All error conditions that the `cyclebasis` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// Any other I/O error while reading input or writing output.
    IoError {
        /// What was being read or written.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a valid graph file.
    ParseFailed {
        /// The parser's message, including the line number.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// A basis vector did not decode to a simple cycle.
    CorruptBasis {
        /// The core error message.
        detail: String,
    },

    /// A pipeline self-check rejected a cycle.
    InvalidCycle {
        /// The core error message.
        detail: String,
    },

    /// `--strict` was given and the basis is smaller than `E - V + C`.
    InsufficientCycles {
        /// Number of cycles returned.
        found: usize,
        /// Cycle-space dimension.
        expected: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. } => 2,

            Self::CorruptBasis { .. }
            | Self::InvalidCycle { .. }
            | Self::InsufficientCycles { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseFailed { detail } => format!("error: parse failed: {detail}"),
            Self::CorruptBasis { detail } | Self::InvalidCycle { detail } => {
                format!("error: detection failed: {detail}")
            }
            Self::InsufficientCycles { found, expected } => {
                format!(
                    "error: found {found} independent cycles, expected {expected} (--strict)"
                )
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<DetectionError> for CliError {
    fn from(err: DetectionError) -> Self {
        let detail = err.to_string();
        match err {
            DetectionError::CorruptBasisVector { .. } => Self::CorruptBasis { detail },
            DetectionError::InvalidCycleDetected { .. } => Self::InvalidCycle { detail },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use cyclebasis_core::{Cycle, CycleDefect, DecodeFailure, Stage};

    use super::*;

    #[test]
    fn input_failures_exit_with_two() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("g.txt"),
            },
            CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: 4,
                actual: None,
            },
            CliError::ParseFailed {
                detail: "line 2: invalid edge".to_owned(),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 2, "{err}");
        }
    }

    #[test]
    fn detection_failures_exit_with_one() {
        let corrupt: CliError = DetectionError::CorruptBasisVector {
            edges: vec![(0, 1)],
            reason: DecodeFailure::BrokenWalk { at: 1 },
        }
        .into();
        assert!(matches!(corrupt, CliError::CorruptBasis { .. }));
        assert_eq!(corrupt.exit_code(), 1);

        let invalid: CliError = DetectionError::InvalidCycleDetected {
            stage: Stage::Normalize,
            cycle: Cycle::new(vec![0, 1, 2]),
            defect: CycleDefect::MissingEdge { from: 2, to: 0 },
        }
        .into();
        assert!(matches!(invalid, CliError::InvalidCycle { .. }));
        assert!(invalid.message().contains("after normalize stage"));

        let short = CliError::InsufficientCycles {
            found: 1,
            expected: 2,
        };
        assert_eq!(short.exit_code(), 1);
        assert!(short.message().contains("expected 2"));
    }

    #[test]
    fn file_too_large_message_includes_sizes() {
        let err = CliError::FileTooLarge {
            source: "big.txt".to_owned(),
            limit: 10,
            actual: Some(20),
        };
        assert_eq!(
            err.to_string(),
            "error: file too large: big.txt is 20 bytes, limit is 10 bytes"
        );
    }
}
