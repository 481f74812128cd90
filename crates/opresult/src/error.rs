//! Error types for container resolution
//!
//! These are programmer errors raised at the call that breaks a resolver
//! contract. They are reported directly and are never folded into an
//! `OperationResult`.

use thiserror::Error;

/// Result type for resolver operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors that can occur while building or resolving a match
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The held error's runtime type has no registered handler
    #[error("No handler registered for error type {type_name}")]
    MissingHandler { type_name: &'static str },

    /// A handler for this error type was already registered
    #[error("Handler for {type_name} is already registered")]
    DuplicateHandler { type_name: &'static str },
}
