use std::sync::Arc;
use std::time::Duration;

use crate::args::{PositiveUsize, RequestArgs};

pub(super) const DEFAULT_METHOD: &str = "GET";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_REDIRECT_LIMIT: u32 = 10;

/// Ordered request bodies shared read-only by every attempt.
#[derive(Debug, Clone)]
pub struct BodyLines {
    items: Arc<[String]>,
}

impl BodyLines {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            items: lines.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Body for attempt `index`, cycling round-robin through the lines.
    /// Returns `None` when there are no lines, meaning "send no body".
    #[must_use]
    pub fn for_attempt(&self, index: usize) -> Option<&str> {
        let slot = index.checked_rem(self.items.len())?;
        self.items.get(slot).map(String::as_str)
    }
}

impl Default for BodyLines {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Everything one dispatch needs. Built once, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RequestPlan {
    pub url: String,
    pub method: String,
    pub concurrency: PositiveUsize,
    pub timeout: Duration,
    pub redirect_limit: u32,
    pub bodies: BodyLines,
}

impl RequestPlan {
    #[must_use]
    pub fn new(url: impl Into<String>, concurrency: PositiveUsize) -> Self {
        Self {
            url: url.into(),
            method: DEFAULT_METHOD.to_owned(),
            concurrency,
            timeout: DEFAULT_TIMEOUT,
            redirect_limit: DEFAULT_REDIRECT_LIMIT,
            bodies: BodyLines::default(),
        }
    }

    /// Builds a plan from parsed arguments and the already loaded body lines.
    ///
    /// A missing URL becomes an empty one; every attempt then fails to build
    /// its request and is counted as an error.
    #[must_use]
    pub fn from_args(args: &RequestArgs, bodies: Vec<String>) -> Self {
        Self::new(args.url.clone().unwrap_or_default(), args.num)
            .with_method(&args.method)
            .with_timeout(Duration::from_secs(args.timeout))
            .with_redirect_limit(args.redirect_limit)
            .with_bodies(bodies)
    }

    /// Sets the method verbatim. Validity is checked per attempt; an empty
    /// method means GET.
    #[must_use]
    pub fn with_method(mut self, method: &str) -> Self {
        method.clone_into(&mut self.method);
        self
    }

    /// Sets the per-request timeout. `Duration::ZERO` disables it.

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_redirect_limit(mut self, redirect_limit: u32) -> Self {
        self.redirect_limit = redirect_limit;
        self
    }

    #[must_use]
    pub fn with_bodies(mut self, bodies: Vec<String>) -> Self {
        self.bodies = BodyLines::new(bodies);
        self
    }
}
