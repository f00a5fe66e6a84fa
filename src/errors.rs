use std::result::Result as StdResult;

use fintrack_config::ConfigError;
use fintrack_domain::ValidationError;
use thiserror::Error;

/// Unified error type for the application boundary.
#[derive(Debug, Error)]
pub enum FinTrackError {
    #[error("Invalid record: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = StdResult<T, FinTrackError>;
