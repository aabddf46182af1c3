//! Line-delimited body file loading.
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::LinesError;

/// Smallest accepted line limit and the default (512 KiB).
pub const DEFAULT_MAX_LINE_BYTES: usize = 524_288;

/// Reads every line of `path` into memory, in file order.
///
/// Line terminators (`\n`, `\r\n`) are stripped. An empty file yields an
/// empty vector.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or read, when a line is
/// longer than `max_line_bytes`, or when a line is not valid UTF-8.
pub fn load_lines(path: &Path, max_line_bytes: usize) -> Result<Vec<String>, LinesError> {
    let file = File::open(path).map_err(|err| LinesError::Open {
        path: path.to_path_buf(),
        source: err,
    })?;
    let lines = read_lines(BufReader::new(file), path, max_line_bytes)?;
    debug!("Loaded {} body lines from {}", lines.len(), path.display());
    Ok(lines)
}

pub(crate) fn read_lines<R: BufRead>(
    mut reader: R,
    path: &Path,
    max_line_bytes: usize,
) -> Result<Vec<String>, LinesError> {
    let mut lines = Vec::with_capacity(100);
    let mut buffer = Vec::new();
    let mut line_no: usize = 0;
    // Room for the line plus "\r\n"; anything longer is oversized either way.
    let per_line_cap = u64::try_from(max_line_bytes.saturating_add(2)).unwrap_or(u64::MAX);

    loop {
        buffer.clear();
        let read = reader
            .by_ref()
            .take(per_line_cap)
            .read_until(b'\n', &mut buffer)
            .map_err(|err| LinesError::Read {
                path: path.to_path_buf(),
                source: err,
            })?;
        if read == 0 {
            break;
        }
        line_no = line_no.saturating_add(1);

        strip_terminator(&mut buffer);
        if buffer.len() > max_line_bytes {
            return Err(LinesError::OversizedLine {
                path: path.to_path_buf(),
                line: line_no,
                limit: max_line_bytes,
            });
        }

        let line = String::from_utf8(std::mem::take(&mut buffer)).map_err(|err| {
            LinesError::InvalidUtf8 {
                path: path.to_path_buf(),
                line: line_no,
                source: err,
            }
        })?;
        lines.push(line);
    }

    Ok(lines)
}

fn strip_terminator(buffer: &mut Vec<u8>) {
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
    }
}
