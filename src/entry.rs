use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::error;

use reqgen::args::RequestArgs;
use reqgen::config::DEFAULT_CONFIG_FILES;
use reqgen::error::{AppError, AppResult};
use reqgen::http::{AttemptObserver, RequestPlan, TracingObserver, run_plan};
use reqgen::lines::load_lines;

pub(crate) fn run() -> AppResult<()> {
    let (args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    reqgen::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime
        .block_on(run_async(args, &matches))
        .inspect_err(|err| error!("{}", err))
}

fn parse_args() -> AppResult<Option<(RequestArgs, ArgMatches)>> {
    let mut cmd = RequestArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = RequestArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

async fn run_async(mut args: RequestArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = reqgen::config::load_config(args.config.as_deref())? {
        reqgen::config::apply_config(&mut args, matches, &config)?;
    }

    let bodies = load_bodies(&args)?;
    let plan = RequestPlan::from_args(&args, bodies);

    let observer: Arc<dyn AttemptObserver> = Arc::new(TracingObserver);
    let summary = run_plan(&plan, &observer).await?;
    println!("{}", summary);
    Ok(())
}

fn load_bodies(args: &RequestArgs) -> AppResult<Vec<String>> {
    let Some(path) = args.body_file() else {
        return Ok(Vec::new());
    };
    load_lines(Path::new(path), args.max_line_bytes).map_err(AppError::lines)
}
