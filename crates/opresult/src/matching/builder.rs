//! Handler registration.

use std::any::{self, TypeId};
use std::collections::HashMap;

use opresult_errors::{AnyError, DomainError, Error};
use tracing::{debug, trace};

use super::descriptor::MatchDescriptor;
use super::resolver::MatchResolver;
use super::{ErrorHandler, SuccessHandler};
use crate::container::OperationResult;
use crate::error::{MatchError, Result};

/// What the builder captured from the container it was created for.
enum Captured<V> {
    Value(V),
    Error(AnyError),
}

/// Collects one handler per error type, then freezes into a
/// [`MatchResolver`] when the success handler is supplied.
///
/// Every step consumes the builder, so a frozen match can't be extended.
pub struct MatchBuilder<'a, V, R> {
    captured: Captured<V>,
    handlers: HashMap<TypeId, ErrorHandler<'a, R>>,
}

impl<'a, V: 'a, R: 'a> MatchBuilder<'a, V, R> {
    /// Builder whose success handler sees the held value.
    pub fn new(container: OperationResult<V>) -> Self {
        Self {
            captured: container.match_with(Captured::Value, Captured::Error),
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for errors whose runtime type is exactly `E`.
    ///
    /// Registering a second handler for the same type fails with
    /// [`MatchError::DuplicateHandler`].
    pub fn on_error<E: DomainError>(mut self, handler: impl Fn(&E) -> R + 'a) -> Result<Self> {
        let type_name = any::type_name::<E>();
        let key = TypeId::of::<E>();

        if self.handlers.contains_key(&key) {
            debug!(type_name, "rejected duplicate error handler");
            return Err(MatchError::DuplicateHandler { type_name });
        }

        let handler: ErrorHandler<'a, R> =
            Box::new(move |error: &AnyError| match error.downcast_ref::<E>() {
                Some(error) => handler(error),
                None => unreachable!(
                    "handler for {} received {}",
                    type_name,
                    error.type_name()
                ),
            });
        self.handlers.insert(key, handler);
        trace!(type_name, "registered error handler");
        Ok(self)
    }

    /// Supply the success handler and freeze the match.
    ///
    /// Unless a handler for the base [`Error`] type was registered, one is
    /// installed that returns `R::default()`.
    pub fn on_success(mut self, handler: impl Fn(&V) -> R + 'a) -> Result<MatchResolver<'a, V, R>>
    where
        R: Default,
    {
        let base = TypeId::of::<Error>();
        if !self.handlers.contains_key(&base) {
            let fallback: ErrorHandler<'a, R> = Box::new(|_: &AnyError| R::default());
            self.handlers.insert(base, fallback);
            trace!("installed default handler for base error");
        }
        self.freeze(Box::new(handler))
    }

    /// Like [`on_success`](Self::on_success) without the implicit base
    /// [`Error`] handler: every error type must be registered explicitly.
    pub fn on_success_strict(
        self,
        handler: impl Fn(&V) -> R + 'a,
    ) -> Result<MatchResolver<'a, V, R>> {
        self.freeze(Box::new(handler))
    }

    fn freeze(self, on_success: SuccessHandler<'a, V, R>) -> Result<MatchResolver<'a, V, R>> {
        let Self {
            captured,
            mut handlers,
        } = self;

        let descriptor = match captured {
            Captured::Value(value) => {
                trace!("froze success branch");
                MatchDescriptor::success(on_success, value)
            }
            Captured::Error(error) => match handlers.remove(&error.type_id()) {
                Some(handler) => {
                    trace!(type_name = error.type_name(), "froze error branch");
                    MatchDescriptor::failure(handler, error)
                }
                None => {
                    let type_name = error.type_name();
                    debug!(type_name, "no handler registered for held error");
                    return Err(MatchError::MissingHandler { type_name });
                }
            },
        };

        Ok(MatchResolver::new(descriptor))
    }
}

impl<'a, T: 'a, R: 'a> MatchBuilder<'a, OperationResult<T>, R> {
    /// Builder whose success handler sees the whole container.
    pub fn for_container(container: OperationResult<T>) -> Self {
        let captured = match container.error().cloned() {
            Some(error) => Captured::Error(error),
            None => Captured::Value(container),
        };
        Self {
            captured,
            handlers: HashMap::new(),
        }
    }
}
