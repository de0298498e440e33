//! Crest Kernel: interchangeable fault-signaling policies.
//!
//! A policy decides how a signaled fault kind becomes caller-visible
//! behavior. The kernel provides the capability traits, the two conforming
//! variants, and the logging decorator:
//!
//! - [`kind::FaultKind`] — contract for a closed fault enumeration
//! - [`registry::MessageRegistry`] — one human-readable message per kind
//! - [`policy::FaultMessages`] / [`policy::FaultPolicy`] — the capability traits
//! - [`carry::CarryPolicy`] — faults as first-class return values
//! - [`unwind::UnwindPolicy`] — faults as stack unwinds, with a [`unwind::recover`] boundary
//! - [`logging::LoggingPolicy`] — append a log line, then delegate
//!
//! # Module Dependency Direction
//!
//! `kind` ← `registry` ← `policy` ← {`carry`, `unwind`, `logging`}
//!
//! One-way only. No cycles. The variants depend on `policy`; `policy`
//! depends on `registry` and `kind`; `kind` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carry;
pub mod kind;
pub mod logging;
pub mod policy;
pub mod registry;
pub mod unwind;
