use reqwest::{Client, Method, Request, StatusCode, header::CONTENT_TYPE};

use crate::error::AttemptError;

use super::plan::{DEFAULT_METHOD, RequestPlan};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Classification of one finished attempt.
#[derive(Debug)]
pub enum AttemptOutcome {
    Success { status: u16 },
    Failure(AttemptError),
}

impl AttemptOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

pub(super) fn build_request(
    client: &Client,
    plan: &RequestPlan,
    index: usize,
) -> Result<Request, AttemptError> {
    let raw_method = if plan.method.is_empty() {
        DEFAULT_METHOD
    } else {
        plan.method.as_str()
    };
    let method =
        Method::from_bytes(raw_method.as_bytes()).map_err(|err| AttemptError::InvalidMethod {
            method: plan.method.clone(),
            source: err,
        })?;

    let mut request_builder = client
        .request(method, plan.url.as_str())
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
    if let Some(body) = plan.bodies.for_attempt(index) {
        request_builder = request_builder.body(body.to_owned());
    }

    request_builder
        .build()
        .map_err(|err| AttemptError::Build { source: err })
}

pub(super) async fn run_attempt(
    client: &Client,
    plan: &RequestPlan,
    index: usize,
) -> AttemptOutcome {
    let request = match build_request(client, plan, index) {
        Ok(request) => request,
        Err(err) => return AttemptOutcome::Failure(err),
    };

    match client.execute(request).await {
        Ok(response) => {
            let status = response.status();
            // Body is never read; dropping the response releases the connection.
            drop(response);
            classify_status(status)
        }
        Err(err) if err.is_timeout() => {
            AttemptOutcome::Failure(AttemptError::Timeout { source: err })
        }
        Err(err) => AttemptOutcome::Failure(AttemptError::Transport { source: err }),
    }
}

pub(super) fn classify_status(status: StatusCode) -> AttemptOutcome {
    let status = status.as_u16();
    if status >= 400 {
        AttemptOutcome::Failure(AttemptError::Status { status })
    } else {
        AttemptOutcome::Success { status }
    }
}
