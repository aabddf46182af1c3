use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Variable read before `RUST_LOG`, so reqgen's verbosity can be tuned
/// without changing the filter of other tools sharing the shell.
pub const LOG_ENV: &str = "REQGEN_LOG";

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `REQGEN_LOG`, then `RUST_LOG`; otherwise `debug`
/// when verbose and `info` when not. An unparsable directive falls back to
/// `info`. A second call keeps the first subscriber.
pub fn init_logging(verbose: bool) {
    let directive = filter_directive(
        verbose,
        std::env::var(LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Logging already initialised, keeping it: {}", err);
    }
}

fn filter_directive(verbose: bool, own: Option<String>, rust_log: Option<String>) -> String {
    own.or(rust_log).unwrap_or_else(|| {
        if verbose {
            "debug".to_owned()
        } else {
            "info".to_owned()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_variable_beats_rust_log() {
        let directive = filter_directive(
            false,
            Some("reqgen=trace".to_owned()),
            Some("warn".to_owned()),
        );
        assert_eq!(directive, "reqgen=trace");
    }

    #[test]
    fn rust_log_is_used_when_own_variable_is_unset() {
        assert_eq!(filter_directive(true, None, Some("warn".to_owned())), "warn");
    }

    #[test]
    fn verbose_flag_picks_default_level() {
        assert_eq!(filter_directive(true, None, None), "debug");
        assert_eq!(filter_directive(false, None, None), "info");
    }

    #[test]
    fn second_install_is_tolerated() {
        init_logging(true);
        init_logging(false);
    }
}
