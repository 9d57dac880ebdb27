/// File and stdin reading with size enforcement and UTF-8 validation.
///
/// `cyclebasis-core` never touches the filesystem; all input I/O happens
/// here. Disk files are size-checked through their metadata before any read.
/// Stdin is read through a `Read::take` cap one byte past the limit, so an
/// oversized stream is detected without unbounded allocation.
use std::io::{ErrorKind, Read as _};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns a [`CliError`] with exit code 2 if the source is missing,
/// unreadable, larger than `max_size` bytes, or not valid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();
    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    bytes_to_string(bytes, &path.display().to_string())
}

fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let mut buf = Vec::new();
    std::io::stdin()
        .lock()
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| CliError::IoError {
            source: "stdin".to_owned(),
            detail: e.to_string(),
        })?;

    if buf.len() as u64 > max_size {
        return Err(CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: max_size,
            actual: None,
        });
    }
    bytes_to_string(buf, "-")
}

fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use std::io::Write as _;

    use super::*;

    fn temp_file_with(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("create temp file");
        f.write_all(contents).expect("write temp file");
        f
    }

    #[test]
    fn reads_graph_file() {
        let content = "t:3\n0-1\n1-2\n2-0\n";
        let f = temp_file_with(content.as_bytes());
        let source = PathOrStdin::Path(f.path().to_path_buf());
        assert_eq!(read_input(&source, 1024).expect("reads"), content);
    }

    #[test]
    fn file_exactly_at_limit_is_accepted() {
        let f = temp_file_with(b"t:0\n");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        assert_eq!(read_input(&source, 4).expect("at limit"), "t:0\n");
    }

    #[test]
    fn file_over_limit_reports_actual_size() {
        let f = temp_file_with(b"t:3\n0-1\n");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        match read_input(&source, 4).expect_err("over limit") {
            CliError::FileTooLarge {
                actual: Some(n),
                limit,
                ..
            } => {
                assert_eq!(n, 8);
                assert_eq!(limit, 4);
            }
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let mut data = b"t:3\n".to_vec();
        data.push(0xFF);
        let f = temp_file_with(&data);
        let source = PathOrStdin::Path(f.path().to_path_buf());
        let err = read_input(&source, 1024).expect_err("bad UTF-8");
        assert_eq!(err.exit_code(), 2);
        match err {
            CliError::InvalidUtf8 { byte_offset, .. } => assert_eq!(byte_offset, 4),
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = PathOrStdin::Path(dir.path().join("absent.txt"));
        match read_input(&source, 1024).expect_err("missing") {
            CliError::FileNotFound { path } => assert!(path.ends_with("absent.txt")),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}
