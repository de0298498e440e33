//! The fault policy capability traits.
//!
//! Message lookup is independent of the value type a routine produces, so it
//! lives on its own trait ([`FaultMessages`]); [`FaultPolicy`] adds the
//! value-shaping operations. The two conforming variants
//! ([`CarryPolicy`](crate::carry::CarryPolicy),
//! [`UnwindPolicy`](crate::unwind::UnwindPolicy)) are peers: they share the
//! registry lookup through the provided [`FaultMessages::message`] method and
//! differ only in `signal`'s propagation mechanism.

use crate::kind::FaultKind;
use crate::registry::MessageRegistry;

/// Access to a policy's fault taxonomy and message registry.
pub trait FaultMessages {
    /// The fault taxonomy this policy serves.
    type Kind: FaultKind;

    /// The policy's message registry.
    fn registry(&self) -> &MessageRegistry<Self::Kind>;

    /// The rendered message for a kind.
    ///
    /// Delegates to the registry so the text stays single-sourced across
    /// variants and decorators.
    fn message(&self, kind: Self::Kind) -> &str {
        self.registry().message(kind)
    }
}

/// Interchangeable fault-signaling strategy over values of type `T`.
///
/// `Outcome` is the caller-visible return shape and is decided by the
/// conforming variant, not by this trait: the carry variant returns a tagged
/// `Result`, the unwind variant returns `T` and diverges on `signal`.
/// Routines generic over a policy must not assume either mechanism.
pub trait FaultPolicy<T>: FaultMessages {
    /// The caller-visible return shape.
    type Outcome;

    /// Wrap a successfully computed value in the policy's outcome shape.
    fn accept(&mut self, value: T) -> Self::Outcome;

    /// Turn a fault kind into the policy's designated outcome.
    ///
    /// Depending on the variant this either returns normally (carrying the
    /// kind) or unwinds the stack and never returns.
    fn signal(&mut self, kind: Self::Kind) -> Self::Outcome;
}
