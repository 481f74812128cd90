//! Resolution of a frozen match.

use super::descriptor::MatchDescriptor;

/// Produces the value of a frozen match.
#[derive(Debug)]
pub struct MatchResolver<'a, V, R> {
    descriptor: MatchDescriptor<'a, V, R>,
}

impl<'a, V, R> MatchResolver<'a, V, R> {
    pub(crate) fn new(descriptor: MatchDescriptor<'a, V, R>) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &MatchDescriptor<'a, V, R> {
        &self.descriptor
    }

    /// Invoke the frozen branch. Repeated calls replay the same handler
    /// with the same captured data.
    pub fn resolve_value(&self) -> R {
        self.descriptor.invoke()
    }
}
