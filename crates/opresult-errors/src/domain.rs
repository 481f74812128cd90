//! The open error hierarchy.
//!
//! Any type implementing [`DomainError`] can travel inside a failed
//! `OperationResult`. Third-party crates extend the hierarchy by implementing
//! the trait for their own types; no central enum needs to change.
//!
//! Values are stored type-erased as an [`AnyError`], which remembers the
//! concrete runtime type so that resolvers can dispatch on it.

use std::any::{Any, TypeId};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::base::Error;
use crate::fault::Fault;

/// Access to the concrete type behind a trait object.
///
/// Blanket-implemented for every `'static` type; not meant to be
/// implemented by hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// The "is-an-Error" capability.
///
/// Implementors expose the base [`Error`] they embed. Identity for dispatch
/// purposes is the implementor's runtime type, never its field values.
pub trait DomainError: AsAny + fmt::Debug + Send + Sync {
    /// The base error fields (message, code, cause).
    fn as_error(&self) -> &Error;
}

impl DomainError for Error {
    fn as_error(&self) -> &Error {
        self
    }
}

/// A shared, type-erased domain error.
#[derive(Clone)]
pub struct AnyError {
    inner: Arc<dyn DomainError>,
}

impl AnyError {
    pub fn new<E: DomainError>(error: E) -> Self {
        Self {
            inner: Arc::new(error),
        }
    }

    fn inner(&self) -> &dyn DomainError {
        &*self.inner
    }

    pub fn message(&self) -> &str {
        self.inner().as_error().message()
    }

    pub fn error_code(&self) -> Option<i32> {
        self.inner().as_error().error_code()
    }

    pub fn cause(&self) -> Option<&Fault> {
        self.inner().as_error().cause()
    }

    pub fn as_error(&self) -> &Error {
        self.inner().as_error()
    }

    /// Runtime type of the concrete error held.
    pub fn type_id(&self) -> TypeId {
        Any::type_id(self.inner().as_any())
    }

    pub fn type_name(&self) -> &'static str {
        self.inner().type_name()
    }

    /// Exact runtime-type test. A subtype never matches its base.
    pub fn is<E: DomainError>(&self) -> bool {
        self.inner().as_any().is::<E>()
    }

    pub fn downcast_ref<E: DomainError>(&self) -> Option<&E> {
        self.inner().as_any().downcast_ref::<E>()
    }

    /// Whether both handles point at the same error value.
    pub fn ptr_eq(&self, other: &AnyError) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<E: DomainError> From<E> for AnyError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl From<Fault> for AnyError {
    fn from(fault: Fault) -> Self {
        Self::new(Error::from_fault(fault))
    }
}

impl fmt::Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_error(), f)
    }
}

impl fmt::Debug for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner(), f)
    }
}

impl StdError for AnyError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause()
            .map(|fault| fault.as_std_error() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct QuotaExceeded {
        base: Error,
        limit: u32,
    }

    impl DomainError for QuotaExceeded {
        fn as_error(&self) -> &Error {
            &self.base
        }
    }

    #[test]
    fn test_runtime_type_is_the_concrete_type() {
        let error = AnyError::from(QuotaExceeded {
            base: Error::with_code("quota exceeded", 429),
            limit: 10,
        });

        assert_eq!(error.type_id(), TypeId::of::<QuotaExceeded>());
        assert!(error.is::<QuotaExceeded>());
        assert!(!error.is::<Error>());
        assert_eq!(error.downcast_ref::<QuotaExceeded>().unwrap().limit, 10);
        assert_eq!(error.message(), "quota exceeded");
        assert_eq!(error.error_code(), Some(429));
    }

    #[test]
    fn test_base_error_is_its_own_type() {
        let error = AnyError::from(Error::create("plain"));
        assert_eq!(error.type_id(), TypeId::of::<Error>());
        assert!(error.type_name().ends_with("Error"));
    }

    #[test]
    fn test_fault_converts_to_base_error() {
        let error = AnyError::from(Fault::msg("boom"));
        assert!(error.is::<Error>());
        assert_eq!(error.message(), "boom");
        assert!(error.cause().is_some());
        assert!(error.source().is_some());
    }

    #[test]
    fn test_clone_shares_value() {
        let error = AnyError::from(Error::create("shared"));
        let copy = error.clone();
        assert!(error.ptr_eq(&copy));
        assert!(!error.ptr_eq(&AnyError::from(Error::create("shared"))));
    }

    #[test]
    fn test_display_uses_base_format() {
        let error = AnyError::from(Error::with_code("gone", 404));
        assert_eq!(error.to_string(), "ErrorCode:404|gone");
    }
}
