use reqwest::{Client, redirect};

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

use super::plan::RequestPlan;

/// Builds the single client shared by every attempt of a dispatch.
///
/// The plan timeout bounds the whole request (connect, write and read); a
/// zero timeout leaves requests unbounded.
/// Redirects are followed up to `redirect_limit` hops; zero disables them.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(plan: &RequestPlan) -> AppResult<Client> {
    let redirect_policy = if plan.redirect_limit == 0 {
        redirect::Policy::none()
    } else {
        redirect::Policy::limited(usize::try_from(plan.redirect_limit).unwrap_or(usize::MAX))
    };

    let mut client_builder = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .redirect(redirect_policy);
    if !plan.timeout.is_zero() {
        client_builder = client_builder.timeout(plan.timeout);
    }

    client_builder
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
