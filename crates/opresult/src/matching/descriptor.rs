//! The frozen outcome of a match.

use std::fmt;

use opresult_errors::AnyError;

use super::{ErrorHandler, SuccessHandler};

enum Branch<'a, V, R> {
    Success {
        handler: SuccessHandler<'a, V, R>,
        value: V,
    },
    Failure {
        handler: ErrorHandler<'a, R>,
        error: AnyError,
    },
}

/// Exactly one branch of a match together with the data it will be
/// called with. Immutable once built.
pub struct MatchDescriptor<'a, V, R> {
    branch: Branch<'a, V, R>,
}

impl<'a, V, R> MatchDescriptor<'a, V, R> {
    pub(crate) fn success(handler: SuccessHandler<'a, V, R>, value: V) -> Self {
        Self {
            branch: Branch::Success { handler, value },
        }
    }

    pub(crate) fn failure(handler: ErrorHandler<'a, R>, error: AnyError) -> Self {
        Self {
            branch: Branch::Failure { handler, error },
        }
    }

    pub fn has_error(&self) -> bool {
        matches!(self.branch, Branch::Failure { .. })
    }

    pub fn value(&self) -> Option<&V> {
        match &self.branch {
            Branch::Success { value, .. } => Some(value),
            Branch::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&AnyError> {
        match &self.branch {
            Branch::Success { .. } => None,
            Branch::Failure { error, .. } => Some(error),
        }
    }

    pub(crate) fn invoke(&self) -> R {
        match &self.branch {
            Branch::Success { handler, value } => handler(value),
            Branch::Failure { handler, error } => handler(error),
        }
    }
}

impl<V: fmt::Debug, R> fmt::Debug for MatchDescriptor<'_, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.branch {
            Branch::Success { value, .. } => {
                f.debug_struct("MatchDescriptor").field("value", value).finish()
            }
            Branch::Failure { error, .. } => {
                f.debug_struct("MatchDescriptor").field("error", error).finish()
            }
        }
    }
}
