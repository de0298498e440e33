//! Unwind boundary locks: recovered text equals the registry rendering
//! exactly, and foreign panics pass through the boundary.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crest_harness::scenario::search_registry;
use crest_kernel::policy::FaultMessages;
use crest_kernel::unwind::{recover, UnwindPolicy};
use crest_search::fault::SearchFault;
use crest_search::max::{find_max, Peak};

#[test]
fn recovered_message_equals_the_registry_rendering() {
    let registry = search_registry().unwrap();
    let expected = registry.message(SearchFault::IsEmpty).to_string();

    let mut policy = UnwindPolicy::new(registry);
    let outcome = recover(|| find_max(&[] as &[i64], &mut policy));
    assert_eq!(outcome, Err(expected));
}

#[test]
fn recovery_leaves_non_empty_searches_untouched() {
    let mut policy = UnwindPolicy::new(search_registry().unwrap());
    let outcome = recover(|| find_max(&[-1i64, 2, 0], &mut policy));
    assert_eq!(outcome, Ok(Peak { value: 2, index: 1 }));
}

#[test]
fn unwind_message_equals_the_carry_policy_rendering() {
    // The demonstrated equivalence: both strategies surface the same text.
    let mut unwound = UnwindPolicy::new(search_registry().unwrap());
    let recovered = recover(|| find_max(&[] as &[i64], &mut unwound)).unwrap_err();

    let carried = crest_kernel::carry::CarryPolicy::new(search_registry().unwrap());
    assert_eq!(recovered, carried.message(SearchFault::IsEmpty));
}

#[test]
fn foreign_panics_cross_the_boundary_unchanged() {
    let reraised = catch_unwind(AssertUnwindSafe(|| {
        let _ = recover(|| -> i64 { panic!("not a signal") });
    }));
    let payload = reraised.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>().copied(), Some("not a signal"));
}
