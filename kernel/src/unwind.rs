//! Unwind policy: faults interrupt control flow via stack unwinding.
//!
//! `signal` raises a [`SignalUnwind`] payload through `panic_any`. Callers
//! install a [`recover`] boundary to convert the payload back into a value;
//! without a boundary the process terminates.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Mutex;

use crate::kind::FaultKind;
use crate::policy::{FaultMessages, FaultPolicy};
use crate::registry::MessageRegistry;

/// Panic payload for an unwind-policy signal.
///
/// Carries the registry's rendered message exactly; [`recover`] matches on
/// this type so foreign panics are never mistaken for signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalUnwind {
    /// The rendered message at the time of the signal.
    pub message: String,
}

/// Policy that reports a fault by unwinding the call stack.
#[derive(Debug, Clone)]
pub struct UnwindPolicy<K: FaultKind> {
    registry: MessageRegistry<K>,
}

impl<K: FaultKind> UnwindPolicy<K> {
    /// Create an unwind policy owning its registry.
    #[must_use]
    pub fn new(registry: MessageRegistry<K>) -> Self {
        Self { registry }
    }
}

impl<K: FaultKind> FaultMessages for UnwindPolicy<K> {
    type Kind = K;

    fn registry(&self) -> &MessageRegistry<K> {
        &self.registry
    }
}

impl<T, K: FaultKind> FaultPolicy<T> for UnwindPolicy<K> {
    type Outcome = T;

    fn accept(&mut self, value: T) -> T {
        value
    }

    /// # Panics
    ///
    /// Always. The unwind carries a [`SignalUnwind`] payload with the
    /// kind's rendered message.
    fn signal(&mut self, kind: K) -> T {
        let message = self.registry.message(kind).to_string();
        std::panic::panic_any(SignalUnwind { message })
    }
}

// Hook swapping is process-global; concurrent recovery boundaries serialize
// so one boundary never leaves another thread's hook silenced.
static HOOK_GUARD: Mutex<()> = Mutex::new(());

/// Run `f`, converting an unwind-policy signal into `Err(message)`.
///
/// Only [`SignalUnwind`] payloads are recovered; any other panic payload is
/// re-raised unchanged via `resume_unwind`. The default panic hook would
/// print a report to stderr before this boundary sees the payload, so the
/// hook is silenced for the duration of the call and the prior hook is
/// restored before returning.
///
/// # Errors
///
/// Returns `Err` with the signal's rendered message.
pub fn recover<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    let outcome = {
        let _guard = HOOK_GUARD
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let prior = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));
        let outcome = catch_unwind(AssertUnwindSafe(f));
        std::panic::set_hook(prior);
        outcome
    };
    match outcome {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<SignalUnwind>() {
            Ok(signal) => Err(signal.message),
            Err(other) => std::panic::resume_unwind(other),
        },
    }
}
