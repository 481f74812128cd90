//! Error model for OperationResult containers.
//!
//! Domain errors are plain data: a base [`Error`] (message, optional code,
//! optional captured [`Fault`]) extended by an open set of kinds such as
//! [`NotFoundError`], [`ConflictError`] and [`InvalidStateError`]. Any type
//! implementing [`DomainError`] joins the hierarchy and can be stored in a
//! failed container as an [`AnyError`].
//!
//! # Example
//!
//! ```rust
//! use opresult_errors::{AnyError, NotFoundError};
//!
//! let error = AnyError::from(NotFoundError::create(42));
//! assert_eq!(error.message(), "Entity with id:42 was not found");
//! assert!(error.is::<NotFoundError<i32>>());
//! ```

pub mod base;
pub mod config;
pub mod domain;
pub mod fault;
pub mod kinds;
pub mod repr;

pub use base::Error;
pub use config::{ConfigError, OpResultConfig, ReprConfig};
pub use domain::{AnyError, AsAny, DomainError};
pub use fault::Fault;
pub use kinds::{ConflictError, InvalidStateError, NotFoundError};
pub use repr::ErrorRecord;
