//! Common error infrastructure for script-core.
//!
//! This module provides shared types used across the error types in this
//! crate. Domain-negative outcomes (a cast failing validation, a proc being
//! absorbed) are ordinary values, not errors; the types here cover genuine
//! configuration and environment faults.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: binding two scripts to the same spell id
    Validation,

    /// The environment is missing a required service.
    ///
    /// Examples: an oracle the engine never provided. Scripts degrade
    /// defensively instead of surfacing these; hosts may still log them.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for script-core errors.
///
/// Provides a uniform interface for classification and metrics across the
/// crate's error types. Implementors derive Display/Error via `thiserror`.
pub trait ScriptError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
