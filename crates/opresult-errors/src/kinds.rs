//! Built-in error kinds.
//!
//! Each kind is named after the HTTP status it resembles, but nothing here
//! performs or assumes HTTP I/O. Messages are derived from the constructor
//! arguments once and never change afterwards.

use std::fmt;

use crate::base::Error;
use crate::domain::DomainError;

/// An entity looked up by `id` does not exist (HTTP 404 analogue).
///
/// Every `Id` type gives a distinct runtime type: `NotFoundError<u64>` and
/// `NotFoundError<String>` are dispatched separately.
#[derive(Debug, Clone)]
pub struct NotFoundError<Id> {
    id: Id,
    base: Error,
}

impl<Id: fmt::Display> NotFoundError<Id> {
    pub fn create(id: Id) -> Self {
        let base = Error::new(Self::describe(&id));
        Self { id, base }
    }

    pub fn with_code(id: Id, error_code: i32) -> Self {
        let base = Error::with_code(Self::describe(&id), error_code);
        Self { id, base }
    }

    fn describe(id: &Id) -> String {
        format!("Entity with id:{} was not found", id)
    }
}

impl<Id> NotFoundError<Id> {
    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn message(&self) -> &str {
        self.base.message()
    }
}

impl<Id> DomainError for NotFoundError<Id>
where
    Id: fmt::Debug + Send + Sync + 'static,
{
    fn as_error(&self) -> &Error {
        &self.base
    }
}

/// A uniqueness or state clash, e.g. creating an entity whose key already
/// exists (HTTP 409 analogue).
#[derive(Debug, Clone)]
pub struct ConflictError {
    base: Error,
}

impl ConflictError {
    pub fn create(message: impl Into<String>) -> Self {
        Self {
            base: Error::new(message),
        }
    }

    pub fn with_code(message: impl Into<String>, error_code: i32) -> Self {
        Self {
            base: Error::with_code(message, error_code),
        }
    }

    pub fn message(&self) -> &str {
        self.base.message()
    }
}

impl DomainError for ConflictError {
    fn as_error(&self) -> &Error {
        &self.base
    }
}

/// A transition between two states of the same state type was refused.
///
/// States are rendered with their `Debug` form, which for field-less enums
/// is the variant name.
#[derive(Debug, Clone)]
pub struct InvalidStateError<S> {
    previous_state: S,
    new_state: S,
    base: Error,
}

impl<S: fmt::Debug> InvalidStateError<S> {
    pub fn create(previous_state: S, new_state: S) -> Self {
        let base = Error::new(Self::describe(&previous_state, &new_state));
        Self {
            previous_state,
            new_state,
            base,
        }
    }

    pub fn with_code(previous_state: S, new_state: S, error_code: i32) -> Self {
        let base = Error::with_code(Self::describe(&previous_state, &new_state), error_code);
        Self {
            previous_state,
            new_state,
            base,
        }
    }

    fn describe(previous_state: &S, new_state: &S) -> String {
        format!(
            "Entity can't change state from :{:?} to {:?}",
            previous_state, new_state
        )
    }
}

impl<S> InvalidStateError<S> {
    pub fn previous_state(&self) -> &S {
        &self.previous_state
    }

    pub fn new_state(&self) -> &S {
        &self.new_state
    }

    pub fn message(&self) -> &str {
        self.base.message()
    }
}

impl<S> DomainError for InvalidStateError<S>
where
    S: fmt::Debug + Send + Sync + 'static,
{
    fn as_error(&self) -> &Error {
        &self.base
    }
}
