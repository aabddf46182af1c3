use super::*;
use crate::error::{AppError, AppResult};
use crate::lines::DEFAULT_MAX_LINE_BYTES;
use clap::Parser;

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = RequestArgs::try_parse_from(["reqgen", "-u", "http://localhost"])
        .map_err(|err| AppError::validation(format!("Expected Ok, got Err: {}", err)))?;

    let checks = [
        (args.method == "GET", "Expected default method GET"),
        (args.num.get() == 1, "Expected default num 1"),
        (args.timeout == 5, "Expected default timeout 5"),
        (args.redirect_limit == 10, "Expected default redirect 10"),
        (
            args.max_line_bytes == DEFAULT_MAX_LINE_BYTES,
            "Expected default max_line_bytes",
        ),
        (args.file.is_none(), "Expected file to be None"),
        (args.config.is_none(), "Expected config to be None"),
        (!args.verbose, "Expected verbose to be false"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_short_flags() -> AppResult<()> {
    let args = RequestArgs::try_parse_from([
        "reqgen",
        "-u",
        "http://localhost:8080/items",
        "-m",
        "POST",
        "-f",
        "bodies.jsonl",
        "-n",
        "7",
        "-t",
        "2",
    ])
    .map_err(|err| AppError::validation(format!("Expected Ok, got Err: {}", err)))?;

    if args.url.as_deref() != Some("http://localhost:8080/items") {
        return Err(AppError::validation("Unexpected url"));
    }
    if args.method != "POST" {
        return Err(AppError::validation("Unexpected method"));
    }
    if args.body_file() != Some("bodies.jsonl") {
        return Err(AppError::validation("Unexpected file"));
    }
    if args.num.get() != 7 || args.timeout != 2 {
        return Err(AppError::validation("Unexpected num/timeout"));
    }
    Ok(())
}

#[test]
fn parse_args_long_flags() -> AppResult<()> {
    let args = RequestArgs::try_parse_from([
        "reqgen",
        "--url",
        "http://localhost",
        "--method",
        "delete",
        "--num",
        "3",
        "--timeout",
        "9",
        "--redirect",
        "0",
        "--max-line-bytes",
        "1048576",
        "--verbose",
    ])
    .map_err(|err| AppError::validation(format!("Expected Ok, got Err: {}", err)))?;

    if args.method != "delete" {
        return Err(AppError::validation("Method should be passed through as-is"));
    }
    if args.num.get() != 3 || args.timeout != 9 {
        return Err(AppError::validation("Unexpected num/timeout"));
    }
    if args.redirect_limit != 0 {
        return Err(AppError::validation("Unexpected redirect limit"));
    }
    if args.max_line_bytes != 1_048_576 {
        return Err(AppError::validation("Unexpected max_line_bytes"));
    }
    if !args.verbose {
        return Err(AppError::validation("Expected verbose"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_num() -> AppResult<()> {
    let result = RequestArgs::try_parse_from(["reqgen", "-u", "http://localhost", "-n", "0"]);
    if result.is_ok() {
        return Err(AppError::validation("Expected zero num to be rejected"));
    }
    Ok(())
}

#[test]
fn parse_args_accepts_zero_timeout() -> AppResult<()> {
    let args = RequestArgs::try_parse_from(["reqgen", "-u", "http://localhost", "-t", "0"])
        .map_err(|err| AppError::validation(format!("Expected Ok, got Err: {}", err)))?;
    if args.timeout != 0 {
        return Err(AppError::validation("Expected timeout 0"));
    }
    Ok(())
}

#[test]
fn parse_args_keeps_method_verbatim() -> AppResult<()> {
    let args = RequestArgs::try_parse_from(["reqgen", "-u", "http://localhost", "-m", " post"])
        .map_err(|err| AppError::validation(format!("Expected Ok, got Err: {}", err)))?;
    if args.method != " post" {
        return Err(AppError::validation(format!("Unexpected method: {:?}", args.method)));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_small_line_limit() -> AppResult<()> {
    let result = RequestArgs::try_parse_from([
        "reqgen",
        "-u",
        "http://localhost",
        "--max-line-bytes",
        "1024",
    ]);
    if result.is_ok() {
        return Err(AppError::validation(
            "Expected line limit below 512 KiB to be rejected",
        ));
    }
    Ok(())
}

#[test]
fn empty_file_flag_means_no_bodies() -> AppResult<()> {
    let args = RequestArgs::try_parse_from(["reqgen", "-u", "http://localhost", "-f", ""])
        .map_err(|err| AppError::validation(format!("Expected Ok, got Err: {}", err)))?;
    if args.body_file().is_some() {
        return Err(AppError::validation("Empty file path should be ignored"));
    }
    Ok(())
}
