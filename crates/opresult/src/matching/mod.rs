//! Type-dispatch resolution over the open error hierarchy.
//!
//! A [`MatchBuilder`] registers one handler per concrete error type, the
//! success handler freezes the match into a [`MatchResolver`], and
//! [`MatchResolver::resolve_value`] runs the single branch that applies.
//! Dispatch uses the held error's runtime type and only an exact match
//! counts; a handler for a wrapping or base type never sees a subtype.
//!
//! # Example
//!
//! ```rust
//! use opresult::{NotFoundError, OperationResult};
//!
//! let lookup: OperationResult<String> = NotFoundError::create(7).into();
//!
//! let status = lookup
//!     .resolve_container_value(|m| {
//!         m.on_error(|_: &NotFoundError<i32>| 404)?
//!             .on_success(|_| 200)
//!     })
//!     .unwrap();
//! assert_eq!(status, 404);
//! ```

mod builder;
mod descriptor;
mod resolver;

pub use builder::MatchBuilder;
pub use descriptor::MatchDescriptor;
pub use resolver::MatchResolver;

use opresult_errors::AnyError;

use crate::container::OperationResult;
use crate::error::Result;

pub(crate) type ErrorHandler<'a, R> = Box<dyn Fn(&AnyError) -> R + 'a>;
pub(crate) type SuccessHandler<'a, V, R> = Box<dyn Fn(&V) -> R + 'a>;

impl<T> OperationResult<T> {
    /// Resolve the container with handlers registered by `build`; the
    /// success handler sees the held value.
    pub fn resolve_container_value<'a, R>(
        self,
        build: impl FnOnce(MatchBuilder<'a, T, R>) -> Result<MatchResolver<'a, T, R>>,
    ) -> Result<R>
    where
        T: 'a,
        R: 'a,
    {
        let resolver = build(MatchBuilder::new(self))?;
        Ok(resolver.resolve_value())
    }

    /// Resolve the container with handlers registered by `build`; the
    /// success handler sees the whole container.
    pub fn resolve_container<'a, R>(
        self,
        build: impl FnOnce(
            MatchBuilder<'a, OperationResult<T>, R>,
        ) -> Result<MatchResolver<'a, OperationResult<T>, R>>,
    ) -> Result<R>
    where
        T: 'a,
        R: 'a,
    {
        let resolver = build(MatchBuilder::for_container(self))?;
        Ok(resolver.resolve_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;
    use opresult_errors::{ConflictError, Error, InvalidStateError, NotFoundError};
    use rstest::rstest;

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    enum Status {
        Ok,
        NotFound,
        Conflict,
        #[default]
        Unknown,
    }

    fn status_of(result: OperationResult<u32>) -> Result<Status> {
        result.resolve_container_value(|m| {
            m.on_error(|_: &NotFoundError<u32>| Status::NotFound)?
                .on_error(|_: &ConflictError| Status::Conflict)?
                .on_success(|_| Status::Ok)
        })
    }

    #[rstest]
    #[case(OperationResult::success(1), Status::Ok)]
    #[case(NotFoundError::create(1_u32).into(), Status::NotFound)]
    #[case(ConflictError::create("dup").into(), Status::Conflict)]
    #[case(Error::create("plain").into(), Status::Unknown)]
    fn test_dispatch_by_runtime_type(#[case] result: OperationResult<u32>, #[case] expected: Status) {
        assert_eq!(status_of(result).unwrap(), expected);
    }

    #[test]
    fn test_unregistered_kind_is_missing_even_with_default() {
        let result: OperationResult<u32> = InvalidStateError::create("open", "closed").into();

        let error = status_of(result).unwrap_err();

        assert!(matches!(error, MatchError::MissingHandler { type_name } if type_name.contains("InvalidStateError")));
    }

    #[test]
    fn test_exact_type_only() {
        // Different id types are different error types.
        let result: OperationResult<u32> = NotFoundError::create(String::from("abc")).into();
        assert!(matches!(status_of(result), Err(MatchError::MissingHandler { .. })));
    }

    #[test]
    fn test_resolve_container_hands_whole_container_to_success_handler() -> anyhow::Result<()> {
        let result = OperationResult::success(41_u32);

        let described = result.resolve_container(|m| {
            m.on_error(|e: &ConflictError| format!("conflict: {}", e.message()))?
                .on_success(|container| match container.result() {
                    Some(v) => format!("value {}", v + 1),
                    None => unreachable!("success branch always holds a value"),
                })
        })?;

        assert_eq!(described, "value 42");
        Ok(())
    }

    #[test]
    fn test_resolve_container_dispatches_error() -> anyhow::Result<()> {
        let result: OperationResult<u32> = ConflictError::create("taken").into();

        let described = result.resolve_container(|m| {
            m.on_error(|e: &ConflictError| format!("conflict: {}", e.message()))?
                .on_success(|_| String::from("ok"))
        })?;

        assert_eq!(described, "conflict: taken");
        Ok(())
    }

    #[test]
    fn test_unit_handlers_default_to_unit() -> anyhow::Result<()> {
        let result: OperationResult<u32> = Error::create("ignored").into();
        result.resolve_container_value(|m| m.on_success(|_| ()))?;
        Ok(())
    }
}
