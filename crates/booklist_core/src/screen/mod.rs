//! List screen orchestration.
//!
//! # Responsibility
//! - Own the book list for one screen.
//! - Open edit sessions and apply their results to the list.
//!
//! # Invariants
//! - Results are applied without re-validating records or indices; the
//!   list's own range check is the only guard.

pub mod list_screen;
