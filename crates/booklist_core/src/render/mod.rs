//! Binding between the observable list and a rendered list surface.
//!
//! # Responsibility
//! - Translate change operations into surface structural updates.
//! - Serve row counts and row visuals back to the surface.
//!
//! # Invariants
//! - The adapter manages exactly one flat section (section 0).
//! - Every structural update is wrapped in the surface's begin/end scope.
//! - Neither the list nor the surface is kept alive by the adapter.

pub mod adapter;
pub mod presenter;
pub mod recording;
pub mod surface;
