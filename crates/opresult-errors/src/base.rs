//! The base error value every domain error builds on.

use std::error::Error as StdError;
use std::fmt;

use crate::fault::Fault;

/// Base error carried by a failed `OperationResult`.
///
/// Immutable once built: the consuming `with_*` methods return a new value.
#[derive(Debug, Clone)]
pub struct Error {
    message: String,
    error_code: Option<i32>,
    cause: Option<Fault>,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error_code: None,
            cause: None,
        }
    }

    /// Create an error with a message only.
    pub fn create(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    /// Create an error carrying a caller-assigned classification code.
    pub fn with_code(message: impl Into<String>, error_code: i32) -> Self {
        Self {
            error_code: Some(error_code),
            ..Self::new(message)
        }
    }

    /// Wrap a captured failure. The message is the failure's full context
    /// chain and the failure itself is kept as the cause.
    pub fn from_fault(fault: Fault) -> Self {
        Self {
            message: format!("{:#}", fault),
            error_code: None,
            cause: Some(fault),
        }
    }

    /// Return a copy of this error with `fault` attached as its cause.
    pub fn with_cause(self, fault: Fault) -> Self {
        Self {
            cause: Some(fault),
            ..self
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error_code(&self) -> Option<i32> {
        self.error_code
    }

    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_ref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorCode:{}|{}", self.error_code.unwrap_or(0), self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|fault| fault.as_std_error() as &(dyn StdError + 'static))
    }
}

impl From<Fault> for Error {
    fn from(fault: Fault) -> Self {
        Self::from_fault(fault)
    }
}
