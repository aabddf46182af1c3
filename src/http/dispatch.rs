use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use crate::error::{AppResult, AttemptError};

use super::attempt::{AttemptOutcome, run_attempt};
use super::client::build_client;
use super::counters::{Counters, DispatchSummary};
use super::observer::AttemptObserver;
use super::plan::RequestPlan;

/// Fires `plan.concurrency` attempts at once and waits for all of them.
///
/// Every attempt runs in its own task and shares `client` (and therefore its
/// connection pool). Attempts are never retried and never abort the
/// dispatch; the returned counts always add up to the concurrency.
///
/// Must be called from within a tokio runtime.
pub async fn dispatch(
    client: &Client,
    plan: &RequestPlan,
    observer: &Arc<dyn AttemptObserver>,
) -> DispatchSummary {
    let concurrency = plan.concurrency.get();
    let shared_plan = Arc::new(plan.clone());
    let counters = Arc::new(Counters::default());
    let mut attempt_handles = Vec::with_capacity(concurrency);

    info!(
        "Dispatching {} {} request(s) to {} ({} body line(s))",
        concurrency,
        plan.method,
        plan.url,
        plan.bodies.len()
    );

    for index in 0..concurrency {
        let client = client.clone();
        let plan = Arc::clone(&shared_plan);
        let counters = Arc::clone(&counters);
        let observer = Arc::clone(observer);

        let handle = tokio::spawn(async move {
            let outcome = run_attempt(&client, &plan, index).await;
            observer.on_outcome(index, &outcome);
            counters.record(&outcome);
        });
        attempt_handles.push(handle);
    }

    for (index, handle) in attempt_handles.into_iter().enumerate() {
        if let Err(err) = handle.await {
            let outcome = AttemptOutcome::Failure(AttemptError::Aborted { source: err });
            observer.on_outcome(index, &outcome);
            counters.record(&outcome);
        }
    }

    counters.summary()
}

/// Builds the shared client for `plan` and dispatches it.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built. Individual
/// attempt failures are only counted.
pub async fn run_plan(
    plan: &RequestPlan,
    observer: &Arc<dyn AttemptObserver>,
) -> AppResult<DispatchSummary> {
    let client = build_client(plan)?;
    Ok(dispatch(&client, plan, observer).await)
}
