//! Fault message registry: one human-readable message per fault kind.
//!
//! The registry is immutable after construction. The length invariant (one
//! message per kind, in ordinal order) is enforced at construction time, so
//! lookup is infallible afterwards.

use std::marker::PhantomData;

use crate::kind::FaultKind;

/// Immutable mapping from fault kind to human-readable message text.
///
/// Messages are stored positionally by kind ordinal. Violating the
/// dense-ordinal contract of [`FaultKind`] after construction is a
/// programming error in the kind enum, not a runtime-reportable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRegistry<K: FaultKind> {
    messages: Vec<String>,
    _kind: PhantomData<K>,
}

/// Error type for registry construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The message count does not match the kind count.
    MessageCountMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MessageCountMismatch { expected, actual } => {
                write!(f, "expected {expected} messages, got {actual}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

impl<K: FaultKind> MessageRegistry<K> {
    /// Create a registry from one message per kind, in ordinal order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MessageCountMismatch`] if `messages.len()`
    /// differs from `K::COUNT`.
    pub fn new(messages: Vec<String>) -> Result<Self, RegistryError> {
        if messages.len() != K::COUNT {
            return Err(RegistryError::MessageCountMismatch {
                expected: K::COUNT,
                actual: messages.len(),
            });
        }
        Ok(Self {
            messages,
            _kind: PhantomData,
        })
    }

    /// The message for a kind.
    #[must_use]
    pub fn message(&self, kind: K) -> &str {
        &self.messages[kind.ordinal()]
    }
}
