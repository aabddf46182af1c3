use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::attempt::AttemptOutcome;

/// Success/error tallies shared by all attempts. Only ever bumped with
/// atomic adds.
#[derive(Debug, Default)]
pub(super) struct Counters {
    success: AtomicU64,
    error: AtomicU64,
}

impl Counters {
    pub(super) fn record(&self, outcome: &AttemptOutcome) {
        let counter = match outcome {
            AttemptOutcome::Success { .. } => &self.success,
            AttemptOutcome::Failure(_) => &self.error,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn summary(&self) -> DispatchSummary {
        DispatchSummary {
            success: self.success.load(Ordering::Relaxed),
            error: self.error.load(Ordering::Relaxed),
        }
    }
}

/// Final counts of a dispatch, read after every attempt has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchSummary {
    pub success: u64,
    pub error: u64,
}

impl DispatchSummary {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.success.saturating_add(self.error)
    }
}

impl fmt::Display for DispatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "success count is {}. error count is {}",
            self.success, self.error
        )
    }
}
