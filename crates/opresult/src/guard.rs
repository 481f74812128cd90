//! Panic boundaries around caller-supplied code.
//!
//! Every closure or future handed to a combinator runs through one of these
//! functions. A panic is caught here and comes back as a [`Fault`]; it never
//! unwinds through the combinator.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures_util::FutureExt;
use opresult_errors::Fault;
use tracing::debug;

/// Run `f`, capturing a panic as a [`Fault`].
pub(crate) fn capture<U>(f: impl FnOnce() -> U) -> Result<U, Fault> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(captured)
}

/// Await `future`, capturing a panic raised while polling it.
pub(crate) async fn capture_async<F>(future: F) -> Result<F::Output, Fault>
where
    F: Future,
{
    AssertUnwindSafe(future).catch_unwind().await.map_err(captured)
}

fn captured(payload: Box<dyn std::any::Any + Send>) -> Fault {
    let fault = Fault::from_panic(payload);
    debug!(fault = %fault, "captured panic as failed result");
    fault
}
