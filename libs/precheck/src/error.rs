//! The error raised by failed checks.

use log::trace;
use thiserror::Error;

/// Raised when a check's predicate does not hold. Carries a single formatted
/// message and nothing else; the caller decides all further handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionViolation {
    message: String,
}

impl AssertionViolation {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        trace!("assertion violated: {}", message);
        Self { message }
    }

    /// Gets the formatted violation message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
