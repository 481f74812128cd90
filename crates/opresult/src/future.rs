//! Asynchronous combinators.
//!
//! Three shapes are covered:
//!
//! - a settled container with an async transform
//!   ([`OperationResult::map_async`], [`OperationResult::bind_async`]),
//! - a container that is itself still pending
//!   ([`OperationResultFuture`], implemented for every
//!   `Future<Output = OperationResult<T>>`),
//! - a container whose success slot holds a pending value
//!   ([`OperationResult::settle`], [`OperationResult::map_pending`],
//!   [`OperationResult::bind_pending`]).
//!
//! Every stage completes before the next one starts. A failed container never
//! calls the transform and never polls anything it was handed, and a panic
//! raised while awaiting becomes a failed container like in the sync
//! combinators.

use std::future::Future;

use opresult_errors::AnyError;

use crate::container::OperationResult;
use crate::guard;

impl<T> OperationResult<T> {
    /// Transform the held value with an async function.
    pub async fn map_async<U, F, Fut>(self, f: F) -> OperationResult<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.into_result() {
            Ok(value) => match guard::capture(|| f(value)) {
                Ok(pending) => guard::capture_async(pending).await.into(),
                Err(fault) => fault.into(),
            },
            Err(error) => OperationResult::fail(error),
        }
    }

    /// Chain an async step that receives the whole (successful) container.
    pub async fn bind_async<U, F, Fut>(self, f: F) -> OperationResult<U>
    where
        F: FnOnce(OperationResult<T>) -> Fut,
        Fut: Future<Output = OperationResult<U>>,
    {
        match self.into_result() {
            Ok(value) => match guard::capture(|| f(OperationResult::success(value))) {
                Ok(pending) => OperationResult::from_async(pending).await,
                Err(fault) => fault.into(),
            },
            Err(error) => OperationResult::fail(error),
        }
    }
}

impl<P: Future> OperationResult<P> {
    /// Await the pending success value. A failed container is returned as is
    /// and the pending value is dropped without being polled.
    pub async fn settle(self) -> OperationResult<P::Output> {
        match self.into_result() {
            Ok(pending) => guard::capture_async(pending).await.into(),
            Err(error) => OperationResult::fail(error),
        }
    }

    /// Await the pending success value, then transform it.
    pub async fn map_pending<U, F>(self, f: F) -> OperationResult<U>
    where
        F: FnOnce(P::Output) -> U,
    {
        self.settle().await.map(f)
    }

    /// Await the pending success value, then chain an async step on the
    /// settled container.
    pub async fn bind_pending<U, F, Fut>(self, f: F) -> OperationResult<U>
    where
        F: FnOnce(OperationResult<P::Output>) -> Fut,
        Fut: Future<Output = OperationResult<U>>,
    {
        self.settle().await.bind_async(f).await
    }
}

/// Combinators for a container that has not arrived yet.
///
/// The container is awaited first (a panic while awaiting is captured), then
/// the matching synchronous or asynchronous combinator runs.
pub trait OperationResultFuture<T>: Future<Output = OperationResult<T>> + Sized {
    fn map_sync<U, F>(self, f: F) -> impl Future<Output = OperationResult<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { OperationResult::from_async(self).await.map(f) }
    }

    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = OperationResult<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { OperationResult::from_async(self).await.map_async(f).await }
    }

    fn bind_sync<U, F>(self, f: F) -> impl Future<Output = OperationResult<U>>
    where
        F: FnOnce(OperationResult<T>) -> OperationResult<U>,
    {
        async move { OperationResult::from_async(self).await.bind(f) }
    }

    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = OperationResult<U>>
    where
        F: FnOnce(OperationResult<T>) -> Fut,
        Fut: Future<Output = OperationResult<U>>,
    {
        async move { OperationResult::from_async(self).await.bind_async(f).await }
    }

    /// Await the container, then run `action` on the held value.
    fn if_success_async<A>(self, action: A) -> impl Future<Output = OperationResult<()>>
    where
        A: FnOnce(&T),
    {
        async move { OperationResult::from_async(self).await.if_success(action) }
    }

    /// Await the container, then run `action` on the held error. A panic
    /// while awaiting counts as a failure and reaches `action` too.
    fn if_fail_async<A>(self, action: A) -> impl Future<Output = OperationResult<()>>
    where
        A: FnOnce(&AnyError),
    {
        async move { OperationResult::from_async(self).await.if_fail(action) }
    }
}

impl<T, F> OperationResultFuture<T> for F where F: Future<Output = OperationResult<T>> {}
