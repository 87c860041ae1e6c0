//! Domain model for the book list.
//!
//! # Responsibility
//! - Define the record shape managed by the observable list.
//! - Convert raw editor input into records.
//!
//! # Invariants
//! - Records carry no identity; the list locates them by index only.
//! - A record is valid when both `title` and `author` are non-empty.

pub mod book;
pub mod draft;
