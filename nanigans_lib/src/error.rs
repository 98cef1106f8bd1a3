//! Error types for the library layer.

use thiserror::Error;

/// Errors produced by the library layer.
///
/// Transport failures are not represented here: they travel inside the
/// returned `Response`. This type covers what is rejected before any
/// request is made.
#[derive(Error, Debug)]
pub enum NanigansError {
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}
