//! Detail-editor protocol.
//!
//! # Responsibility
//! - Define the single outcome an edit session reports back to the list.
//! - Model the session lifecycle without any UI dependency.
//!
//! # Invariants
//! - A session completes at most once; completion consumes the session.
//! - Completion is delivered through the dispatch queue, never inline.
//! - Rejected saves/deletes keep the session open.

pub mod result;
pub mod session;
