//! Crest Search: the maximum search routine, generic over a fault policy.
//!
//! This crate provides the search layer for Crest. It depends only on
//! `crest_kernel` — it does NOT depend on `crest_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! crest_kernel  ←  crest_search  ←  crest_harness
//! (policies)       (find_max)       (scenarios, runner, transcript)
//! ```
//!
//! # Key items
//!
//! - [`fault::SearchFault`] — the closed set of faults the search can signal
//! - [`max::Peak`] — a maximum value together with its earliest position
//! - [`max::find_max`] — the search routine, generic over the policy

#![forbid(unsafe_code)]

pub mod fault;
pub mod max;
