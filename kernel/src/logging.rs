//! Logging decorator: append a log line, then delegate.

use std::io::Write;

use crate::policy::{FaultMessages, FaultPolicy};
use crate::registry::MessageRegistry;

/// Decorator that appends `Error: <message>` to a sink before delegating
/// `signal` to the wrapped policy.
///
/// Composition is by wrapping: the decorator implements the policy traits
/// with the inner policy's `Kind` and `Outcome`, so any variant can be
/// wrapped without changing the caller-visible shape. `message` and
/// `accept` delegate without logging.
#[derive(Debug)]
pub struct LoggingPolicy<P, W> {
    inner: P,
    sink: W,
}

impl<P, W> LoggingPolicy<P, W> {
    /// Wrap `inner`, appending one log line per `signal` call to `sink`.
    #[must_use]
    pub fn new(inner: P, sink: W) -> Self {
        Self { inner, sink }
    }

    /// Unwrap into the inner policy and the sink.
    #[must_use]
    pub fn into_inner(self) -> (P, W) {
        (self.inner, self.sink)
    }
}

impl<P: FaultMessages, W> FaultMessages for LoggingPolicy<P, W> {
    type Kind = P::Kind;

    fn registry(&self) -> &MessageRegistry<P::Kind> {
        self.inner.registry()
    }
}

impl<T, P, W> FaultPolicy<T> for LoggingPolicy<P, W>
where
    P: FaultPolicy<T>,
    W: Write,
{
    type Outcome = P::Outcome;

    fn accept(&mut self, value: T) -> Self::Outcome {
        self.inner.accept(value)
    }

    fn signal(&mut self, kind: P::Kind) -> Self::Outcome {
        // Append before delegating. A failed append must not alter the
        // inner policy's outcome, so the write error is discarded.
        let _ = writeln!(self.sink, "Error: {}", self.inner.message(kind));
        self.inner.signal(kind)
    }
}
