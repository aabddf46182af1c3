mod app;
mod attempt;
mod config;
mod http;
mod lines;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use attempt::AttemptError;
pub use config::ConfigError;
pub use http::HttpError;
pub use lines::LinesError;
pub use validation::ValidationError;
