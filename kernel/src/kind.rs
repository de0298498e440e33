//! Closed fault enumeration contract.

/// Contract for a closed set of failure causes.
///
/// Implementors are small fieldless enums. Identity only — a kind carries
/// no payload; human-readable wording lives in a
/// [`MessageRegistry`](crate::registry::MessageRegistry).
///
/// # Contract
///
/// - `ordinal` values are dense and stable: every kind maps to a distinct
///   index in `0..COUNT`.
/// - `label` is a stable machine identifier (used in transcripts), not
///   display text.
pub trait FaultKind: Copy + Eq + std::fmt::Debug {
    /// Number of kinds in the enumeration.
    const COUNT: usize;

    /// Dense index of this kind, `< Self::COUNT`.
    fn ordinal(self) -> usize;

    /// Stable identifier for this kind.
    fn label(self) -> &'static str;
}
