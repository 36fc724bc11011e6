//! # Recur Engine (Kernel Layer)
//!
//! Recurrence pattern model and expansion engine.
//!
//! This crate provides:
//! - Pattern definitions ([`recurrence::RecurrencePattern`], [`recurrence::Termination`])
//! - Validation of every pattern invariant before expansion
//! - The pure expansion function [`recurrence::expand`] turning a pattern
//!   into an ordered, duplicate-free sequence of concrete dates
//! - Safety limits ([`recurrence::ExpansionLimits`]) bounding unbounded patterns
//!
//! ## Design Principles
//!
//! - **Immutable pattern values** passed into a pure function; no shared
//!   state, no incremental update machinery
//! - **Skip, never drift**: a monthly day-31 rule skips 30-day months and a
//!   yearly Feb-29 rule skips non-leap years rather than sliding to a
//!   neighbouring date
//! - **Builder pattern** for ergonomic construction with validation at the
//!   boundary

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod recurrence;
