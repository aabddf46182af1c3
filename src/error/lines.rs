use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinesError {
    #[error("Failed to open body file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read body file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line} of '{path}' exceeds the {limit} byte limit.")]
    OversizedLine {
        path: PathBuf,
        line: usize,
        limit: usize,
    },
    #[error("Line {line} of '{path}' is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
