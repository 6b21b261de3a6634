//! Error types for the portfolio application.
//!
//! Errors are split by domain: configuration problems detected at startup and failures talking
//! to the remote data store. Both use `thiserror` and aggregate into [`Error`] so startup code
//! can propagate either with `?`.

pub mod config;
pub mod store;

use thiserror::Error;

pub use config::ConfigError;
pub use store::StoreError;

/// Main error type for the portfolio application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Remote data store error (request, status or decoding failure).
    #[error(transparent)]
    StoreError(#[from] StoreError),
}
