//! Centralized error handling module
//!
//! Every fallible operation in memebot returns [`AppResult`]. Per-request
//! errors are turned into ephemeral chat replies by the bot; only startup
//! errors reach the process boundary.

pub mod types;

pub use types::{AppError, AppResult};

/// Convert from anyhow::Error to AppError at the binary edge
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
            source: None,
        }
    }
}
