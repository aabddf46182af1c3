//! Concurrent request fan-out and outcome aggregation.
mod attempt;
mod client;
mod counters;
mod dispatch;
mod observer;
mod plan;


pub use attempt::AttemptOutcome;
pub use client::build_client;
pub use counters::DispatchSummary;
pub use dispatch::{dispatch, run_plan};
pub use observer::{AttemptObserver, TracingObserver};
pub use plan::{BodyLines, RequestPlan};
