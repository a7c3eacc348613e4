//! Result and error types for page objects.

use crate::locator::Locator;
use thiserror::Error;

/// Result type for page object operations
pub type PageResult<T> = Result<T, PageError>;

/// Errors that can occur while driving a page
#[derive(Debug, Error)]
pub enum PageError {
    /// A locator matched zero elements
    #[error("Element not found: {locator}")]
    NotFound {
        /// Locator (or collection index) that failed to resolve
        locator: String,
    },

    /// The underlying driver failed (stale element, dead session, ...)
    #[error("Driver error: {message}")]
    Driver {
        /// Error message
        message: String,
    },

    /// A driver-level operation timed out
    #[error("Operation timed out after {ms}ms")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
    },

    /// Invalid session configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Page text could not be parsed into the expected value
    #[error("Parse error: {message}")]
    Parse {
        /// Error message
        message: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PageError {
    /// Create a not-found error for a locator
    #[must_use]
    pub fn not_found(locator: &Locator) -> Self {
        Self::NotFound {
            locator: locator.to_string(),
        }
    }

    /// Create a not-found error for an index into a collection
    #[must_use]
    pub fn index_out_of_range(what: &str, index: usize, len: usize) -> Self {
        Self::NotFound {
            locator: format!("{what}[{index}] (only {len} present)"),
        }
    }

    /// Create a driver error
    #[must_use]
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error means "no such element"
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convert a not-found lookup into `None`, propagating every other failure.
pub(crate) fn found<T>(result: PageResult<T>) -> PageResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}
