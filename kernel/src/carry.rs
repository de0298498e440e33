//! Carry policy: faults are first-class return values.

use crate::kind::FaultKind;
use crate::policy::{FaultMessages, FaultPolicy};
use crate::registry::MessageRegistry;

/// Policy that carries a fault as a tagged value.
///
/// `signal` returns `Err(kind)` without interrupting control flow; the
/// caller inspects the tag before using the value.
#[derive(Debug, Clone)]
pub struct CarryPolicy<K: FaultKind> {
    registry: MessageRegistry<K>,
}

impl<K: FaultKind> CarryPolicy<K> {
    /// Create a carry policy owning its registry.
    #[must_use]
    pub fn new(registry: MessageRegistry<K>) -> Self {
        Self { registry }
    }
}

impl<K: FaultKind> FaultMessages for CarryPolicy<K> {
    type Kind = K;

    fn registry(&self) -> &MessageRegistry<K> {
        &self.registry
    }
}

impl<T, K: FaultKind> FaultPolicy<T> for CarryPolicy<K> {
    type Outcome = Result<T, K>;

    fn accept(&mut self, value: T) -> Self::Outcome {
        Ok(value)
    }

    fn signal(&mut self, kind: K) -> Self::Outcome {
        Err(kind)
    }
}
