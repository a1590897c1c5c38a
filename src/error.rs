//! Error types shared by every component

use core::fmt;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Errors raised by the analytics components
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalyticsError {
    /// An input did not meet a type or shape precondition
    Validation(String),
}

impl AnalyticsError {
    /// Build a validation error from a message
    pub fn validation(msg: impl Into<String>) -> Self {
        AnalyticsError::Validation(msg.into())
    }

    /// Whether this is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, AnalyticsError::Validation(_))
    }
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsError::Validation(msg) => write!(f, "validation error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnalyticsError {}

/// Result type for analytics operations
pub type Result<T> = core::result::Result<T, AnalyticsError>;
