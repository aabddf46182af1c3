use clap::Parser;

use crate::lines::DEFAULT_MAX_LINE_BYTES;

use super::parsers::{parse_max_line_bytes, parse_positive_usize};
use super::types::PositiveUsize;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("reqgen/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "reqgen",
    version,
    about = "Generate concurrent HTTP requests for benchmarking."
)]
pub struct RequestArgs {
    /// URL to send requests to
    #[arg(long, short)]
    pub url: Option<String>,

    /// Request method (GET, POST, PUT, PATCH, DELETE, ...), sent as given
    #[arg(long, short, default_value = "GET")]
    pub method: String,

    /// Request bodies, one JSON document per line, cycled across requests
    #[arg(long, short)]
    pub file: Option<String>,

    /// Number of concurrent requests
    #[arg(long, short, default_value = "1", value_parser = parse_positive_usize)]
    pub num: PositiveUsize,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long, short, default_value = "5")]
    pub timeout: u64,

    /// Maximum redirects to follow (0 disables redirects)
    #[arg(long = "redirect", default_value = "10")]
    pub redirect_limit: u32,

    /// Longest accepted line in the body file, in bytes (min 524288)
    #[arg(
        long = "max-line-bytes",
        default_value_t = DEFAULT_MAX_LINE_BYTES,
        value_parser = parse_max_line_bytes
    )]
    pub max_line_bytes: usize,

    /// Enable verbose logging (sets log level to debug unless overridden by REQGEN_LOG/RUST_LOG)
    #[arg(long, short)]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./reqgen.toml or ./reqgen.json if present.
    #[arg(long)]
    pub config: Option<String>,
}

impl RequestArgs {
    /// Body file path, treating an empty string as unset.
    #[must_use]
    pub fn body_file(&self) -> Option<&str> {
        self.file.as_deref().filter(|path| !path.is_empty())
    }
}
