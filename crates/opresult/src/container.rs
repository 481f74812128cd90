//! The value-or-error container.

use std::future::Future;

use opresult_errors::{
    AnyError, ConflictError, DomainError, Error, Fault, InvalidStateError, NotFoundError,
};

use crate::guard;

/// Holds either a successful `T` or an [`AnyError`], never both and never
/// neither.
///
/// Containers are immutable: combinators consume a container and return a
/// new one, and a failed container passes its error along untouched.
///
/// The built-in error kinds convert with `.into()`. A caller-defined
/// [`DomainError`] goes through [`OperationResult::fail`] or
/// [`IntoFailure::into_failure`].
#[derive(Debug, Clone)]
#[must_use = "an OperationResult may hold an error that should be handled"]
pub struct OperationResult<T> {
    state: State<T>,
}

#[derive(Debug, Clone)]
enum State<T> {
    Success(T),
    Failure(AnyError),
}

impl<T> OperationResult<T> {
    pub fn success(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    pub fn fail(error: impl Into<AnyError>) -> Self {
        Self {
            state: State::Failure(error.into()),
        }
    }

    pub fn has_error(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }

    /// The held value; `None` on a failed container.
    pub fn result(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// The held error; `None` on a successful container.
    pub fn error(&self) -> Option<&AnyError> {
        match &self.state {
            State::Success(_) => None,
            State::Failure(error) => Some(error),
        }
    }

    pub fn as_ref(&self) -> OperationResult<&T> {
        match &self.state {
            State::Success(value) => OperationResult::success(value),
            State::Failure(error) => OperationResult::fail(error.clone()),
        }
    }

    /// Dispatch to exactly one of the two functions based on the state.
    ///
    /// This is the single inspection primitive; every combinator reduces to it.
    pub fn match_with<U>(
        self,
        on_success: impl FnOnce(T) -> U,
        on_fail: impl FnOnce(AnyError) -> U,
    ) -> U {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(error) => on_fail(error),
        }
    }

    /// Effect-only variant of [`match_with`](Self::match_with).
    pub fn inspect_with(&self, on_success: impl FnOnce(&T), on_fail: impl FnOnce(&AnyError)) {
        self.as_ref().match_with(on_success, |error| on_fail(&error))
    }

    pub fn into_result(self) -> Result<T, AnyError> {
        self.match_with(Ok, Err)
    }

    /// Run `producer`, turning a panic into a failed container.
    pub fn from_fn(producer: impl FnOnce() -> OperationResult<T>) -> Self {
        guard::capture(producer).unwrap_or_else(Self::from)
    }

    /// Run a fallible `producer`. A returned error or a panic becomes a
    /// failed container whose cause is the captured failure.
    pub fn try_from_fn<E>(producer: impl FnOnce() -> Result<T, E>) -> Self
    where
        E: Into<anyhow::Error>,
    {
        match guard::capture(producer) {
            Ok(Ok(value)) => Self::success(value),
            Ok(Err(error)) => Self::from(Fault::from_anyhow(error.into())),
            Err(fault) => Self::from(fault),
        }
    }

    /// Await `producer`, turning a panic raised while polling it into a
    /// failed container.
    pub async fn from_async<F>(producer: F) -> Self
    where
        F: Future<Output = OperationResult<T>>,
    {
        guard::capture_async(producer)
            .await
            .unwrap_or_else(Self::from)
    }
}

/// Turns any [`DomainError`] into a failed container.
pub trait IntoFailure: DomainError + Sized {
    fn into_failure<T>(self) -> OperationResult<T> {
        OperationResult::fail(self)
    }
}

impl<E: DomainError> IntoFailure for E {}

impl<T> From<AnyError> for OperationResult<T> {
    fn from(error: AnyError) -> Self {
        Self::fail(error)
    }
}

impl<T> From<Fault> for OperationResult<T> {
    fn from(fault: Fault) -> Self {
        Self::fail(Error::from_fault(fault))
    }
}

impl<T> From<Error> for OperationResult<T> {
    fn from(error: Error) -> Self {
        Self::fail(error)
    }
}

impl<T> From<ConflictError> for OperationResult<T> {
    fn from(error: ConflictError) -> Self {
        Self::fail(error)
    }
}

impl<T, Id> From<NotFoundError<Id>> for OperationResult<T>
where
    NotFoundError<Id>: DomainError,
{
    fn from(error: NotFoundError<Id>) -> Self {
        Self::fail(error)
    }
}

impl<T, S> From<InvalidStateError<S>> for OperationResult<T>
where
    InvalidStateError<S>: DomainError,
{
    fn from(error: InvalidStateError<S>) -> Self {
        Self::fail(error)
    }
}

impl<T, E> From<Result<T, E>> for OperationResult<T>
where
    E: Into<AnyError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::fail(error),
        }
    }
}

impl<T> From<OperationResult<T>> for Result<T, AnyError> {
    fn from(result: OperationResult<T>) -> Self {
        result.into_result()
    }
}
