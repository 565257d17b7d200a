//! Unified error handling for storefront consumers.
//!
//! Cart mutations themselves are infallible; failures come from loading
//! configuration, reading or writing the store, or validating a discount.
//! Consumers (the CLI, tests) should return `Result<T, AppError>`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Discount percentage out of range.
    #[error("Invalid discount: {0}")]
    Discount(#[from] atelier_core::DiscountError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
