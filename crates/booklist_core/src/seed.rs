//! Startup seed data.
//!
//! # Invariants
//! - Every seeded record passes `Book::validate()`.

use crate::model::book::{Book, BookValidationError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Seed loading failure.
#[derive(Debug)]
pub enum SeedError {
    Json(serde_json::Error),
    InvalidBook {
        position: usize,
        source: BookValidationError,
    },
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid seed json: {err}"),
            Self::InvalidBook { position, source } => {
                write!(f, "invalid seed book at position {position}: {source}")
            }
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidBook { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Parses a JSON array of books.
///
/// # Errors
/// - `Json` when the text is not an array of book objects.
/// - `InvalidBook` for the first record with an empty title or author.
pub fn load_seed_json(text: &str) -> Result<Vec<Book>, SeedError> {
    let books: Vec<Book> = serde_json::from_str(text)?;
    for (position, book) in books.iter().enumerate() {
        book.validate()
            .map_err(|source| SeedError::InvalidBook { position, source })?;
    }
    info!(
        "event=seed_load module=seed status=ok count={}",
        books.len()
    );
    Ok(books)
}
