//! Shared helpers for crest benchmark suites.

use crest_harness::scenario::search_registry;
use crest_kernel::carry::CarryPolicy;
use crest_search::fault::SearchFault;

/// Build a sample of `n` varied elements with the maximum at the midpoint.
///
/// Deterministic: the same `n` always yields the same sample.
#[must_use]
pub fn midpoint_sample(n: usize) -> Vec<i64> {
    let mut values: Vec<i64> = (0..n)
        .map(|i| i64::try_from(i).unwrap_or(0) * 37 % 1000)
        .collect();
    if !values.is_empty() {
        values[n / 2] = 1000;
    }
    values
}

/// Build a carry policy over the demo registry.
///
/// # Panics
///
/// Panics if the fixture registry is malformed. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn carry_policy() -> CarryPolicy<SearchFault> {
    CarryPolicy::new(search_registry().expect("registry"))
}
