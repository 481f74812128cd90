//! Synchronous combinators.
//!
//! All of them are built on [`OperationResult::match_with`] and share one
//! contract: a failed container short-circuits without calling the supplied
//! closure, and a panic inside the closure becomes a failed container whose
//! cause is the captured panic.

use opresult_errors::AnyError;

use crate::container::OperationResult;
use crate::guard;

impl<T> OperationResult<T> {
    /// Transform the held value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationResult<U> {
        self.match_with(
            |value| match guard::capture(|| f(value)) {
                Ok(mapped) => OperationResult::success(mapped),
                Err(fault) => OperationResult::from(fault),
            },
            OperationResult::fail,
        )
    }

    /// Transform the held value with a fallible function. An `Err` is
    /// captured exactly like a panic.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> OperationResult<U>
    where
        E: Into<anyhow::Error>,
    {
        self.match_with(
            |value| OperationResult::try_from_fn(|| f(value)),
            OperationResult::fail,
        )
    }

    /// Chain a step that inspects the whole (successful) container and
    /// returns a container of its own, e.g. to reclassify a value as an error.
    pub fn bind<U>(
        self,
        f: impl FnOnce(OperationResult<T>) -> OperationResult<U>,
    ) -> OperationResult<U> {
        self.match_with(
            |value| OperationResult::from_fn(|| f(OperationResult::success(value))),
            OperationResult::fail,
        )
    }

    /// Run `action` on the held value for its side effects.
    pub fn if_success(&self, action: impl FnOnce(&T)) -> OperationResult<()> {
        self.as_ref().match_with(
            |value| OperationResult::from(guard::capture(|| action(value))),
            |_| OperationResult::success(()),
        )
    }

    /// Run `action` on the held error for its side effects.
    pub fn if_fail(&self, action: impl FnOnce(&AnyError)) -> OperationResult<()> {
        self.as_ref().match_with(
            |_| OperationResult::success(()),
            |error| OperationResult::from(guard::capture(|| action(&error))),
        )
    }
}
