use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::parsers::ensure_max_line_bytes;
use crate::args::{PositiveUsize, RequestArgs};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// Only options that were not given explicitly on the command line are
/// overwritten.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut RequestArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "method")
        && let Some(method) = config.method.clone()
    {
        args.method = method;
    }

    if !is_cli(matches, "file")
        && let Some(file) = config.file.clone()
    {
        args.file = Some(file);
    }

    if !is_cli(matches, "num")
        && let Some(num) = config.num
    {
        args.num = PositiveUsize::try_from(num).map_err(|err| invalid_field("num", err))?;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout
    {
        args.timeout = timeout;
    }

    if !is_cli(matches, "redirect_limit")
        && let Some(redirect) = config.redirect
    {
        args.redirect_limit = redirect;
    }

    if !is_cli(matches, "max_line_bytes")
        && let Some(max_line_bytes) = config.max_line_bytes
    {
        args.max_line_bytes = ensure_max_line_bytes(max_line_bytes)
            .map_err(|err| invalid_field("max_line_bytes", err))?;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn invalid_field(field: &'static str, source: ValidationError) -> AppError {
    AppError::config(ConfigError::InvalidField { field, source })
}
