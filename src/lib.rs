//! Core library for the `reqgen` CLI.
//!
//! `reqgen` fires a fixed number of concurrent HTTP requests at one URL,
//! optionally cycling request bodies read from a line-delimited file, and
//! reports how many succeeded and how many failed. The binary wires CLI
//! arguments and config files into [`http::RequestPlan`] and hands it to
//! [`http::run_plan`].
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod lines;
pub mod logger;
