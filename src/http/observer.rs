use tracing::{debug, error, warn};

use super::attempt::AttemptOutcome;

/// Receives every attempt outcome as it happens.
///
/// The dispatcher reports through this instead of logging directly so
/// callers can capture or silence per-attempt diagnostics.
pub trait AttemptObserver: Send + Sync {
    fn on_outcome(&self, index: usize, outcome: &AttemptOutcome);
}

/// Logs construction and transport failures through `tracing`.
/// Error statuses and successes only show up at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl AttemptObserver for TracingObserver {
    fn on_outcome(&self, index: usize, outcome: &AttemptOutcome) {
        match outcome {
            AttemptOutcome::Success { status } => {
                debug!("Attempt {} succeeded with status {}", index, status);
            }
            AttemptOutcome::Failure(err) if err.is_construction() => {
                error!("Attempt {}: create request error: {}", index, err);
            }
            AttemptOutcome::Failure(err) if err.is_diagnostic() => {
                warn!("Attempt {}: {}", index, err);
            }
            AttemptOutcome::Failure(err) => {
                debug!("Attempt {}: {}", index, err);
            }
        }
    }
}
