use super::types::PositiveUsize;
use crate::error::ValidationError;
use crate::lines::DEFAULT_MAX_LINE_BYTES;

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, ValidationError> {
    s.trim().parse::<PositiveUsize>()
}

pub(super) fn parse_max_line_bytes(s: &str) -> Result<usize, ValidationError> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|err| ValidationError::InvalidNumber { source: err })?;
    ensure_max_line_bytes(value)
}

pub(crate) fn ensure_max_line_bytes(value: usize) -> Result<usize, ValidationError> {
    if value < DEFAULT_MAX_LINE_BYTES {
        return Err(ValidationError::ValueTooSmall {
            min: u64::try_from(DEFAULT_MAX_LINE_BYTES).unwrap_or(u64::MAX),
        });
    }
    Ok(value)
}
