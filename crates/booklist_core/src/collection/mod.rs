//! Observable ordered collection and its change-notification contract.
//!
//! # Responsibility
//! - Own an index-addressed sequence and report each structural change.
//! - Keep the collection free of any rendering dependency.
//!
//! # Invariants
//! - Indices are contiguous `0..len`; there is no index stabilization.
//! - Each mutation reaching an observer is one `BeginBatch`, op, `EndBatch`
//!   bracket, delivered through the dispatch queue in mutation order.

pub mod change;
pub mod list;
pub mod observer;
