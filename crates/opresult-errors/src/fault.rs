//! Captured failures.
//!
//! A [`Fault`] is an unexpected failure intercepted at a boundary (a panic in a
//! caller-supplied closure, or an error returned where a value was expected)
//! and retained as the `cause` of an [`Error`](crate::Error).

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Panic payload rendered as an error so it can travel inside `anyhow`.
#[derive(Debug, Error)]
#[error("panicked: {0}")]
struct Panicked(String);

/// A captured failure.
///
/// Cloning is cheap: every clone shares the same underlying `anyhow::Error`.
#[derive(Clone)]
pub struct Fault {
    inner: Arc<anyhow::Error>,
}

impl Fault {
    /// Capture any standard error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_anyhow(anyhow::Error::new(error))
    }

    /// Capture a plain message as a failure.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::from_anyhow(anyhow::Error::msg(message))
    }

    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Convert the payload handed back by `catch_unwind` into a fault.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "<non-string panic payload>".to_string(),
            },
        };
        Self::new(Panicked(message))
    }

    /// Whether this fault was produced from a panic.
    pub fn is_panic(&self) -> bool {
        self.inner.is::<Panicked>()
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    pub fn as_anyhow(&self) -> &anyhow::Error {
        &self.inner
    }

    /// View the fault as a standard error, e.g. for `source()` chains.
    pub fn as_std_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &**self.inner
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:#}", self.inner)
        } else {
            write!(f, "{}", self.inner)
        }
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("message", &format_args!("{:#}", self.inner))
            .field("panic", &self.is_panic())
            .finish()
    }
}

impl From<anyhow::Error> for Fault {
    fn from(error: anyhow::Error) -> Self {
        Self::from_anyhow(error)
    }
}
