//! Value-or-error containers.
//!
//! An [`OperationResult`] holds either a value or a domain error from the
//! open hierarchy in [`opresult_errors`]. Combinators transform the value
//! and pass errors through untouched; a panic inside a caller-supplied
//! closure or future is captured as a failed container instead of unwinding.
//! Errors are dispatched by their concrete type with
//! [`OperationResult::resolve_container_value`].
//!
//! # Example
//!
//! ```rust
//! use opresult::{ConflictError, OperationResult};
//!
//! let reserved = OperationResult::success(3)
//!     .map(|n| n * 2)
//!     .bind(|r| match r.result() {
//!         Some(&6) => ConflictError::create("id 6 is reserved").into(),
//!         _ => r,
//!     });
//!
//! assert!(reserved.error().unwrap().is::<ConflictError>());
//! ```

pub mod combinators;
pub mod container;
pub mod error;
pub mod future;
pub mod matching;

mod guard;

pub use container::{IntoFailure, OperationResult};
pub use error::{MatchError, Result};
pub use future::OperationResultFuture;
pub use matching::{MatchBuilder, MatchDescriptor, MatchResolver};

pub use opresult_errors::{
    AnyError, ConflictError, DomainError, Error, ErrorRecord, Fault, InvalidStateError,
    NotFoundError, ReprConfig,
};
