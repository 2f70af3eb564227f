//! Errors for misuse of the world API. Gameplay itself never fails.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// `tick` was called before `init` or after `clean_up`.
    #[error("world is not initialized; call init() first")]
    NotInitialized,

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
