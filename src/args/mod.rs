//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::RequestArgs;
pub use types::PositiveUsize;

pub(crate) use cli::DEFAULT_USER_AGENT;
