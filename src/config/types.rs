use serde::Deserialize;

/// Values a config file may provide. Anything set on the command line wins.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub method: Option<String>,
    #[serde(alias = "body_file")]
    pub file: Option<String>,
    #[serde(alias = "concurrency")]
    pub num: Option<usize>,
    /// Seconds; 0 disables the timeout.
    pub timeout: Option<u64>,
    pub redirect: Option<u32>,
    pub max_line_bytes: Option<usize>,
}
