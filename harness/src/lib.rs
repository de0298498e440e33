//! Crest Harness: scenario orchestration for the policy demonstration.
//!
//! The harness runs the fixed strategy matrix (carry, logged carry, unwind)
//! over the sample inputs and packages the outcomes as a deterministic run
//! transcript. The harness does NOT implement policy behavior — it delegates
//! to `crest_kernel` and `crest_search`; fixtures provide domain data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod runner;
pub mod scenario;
pub mod transcript;
