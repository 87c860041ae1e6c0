//! Book record.
//!
//! # Responsibility
//! - Define the value type shown as one row of the list.
//! - Provide validity checks and the literal seed records.
//!
//! # Invariants
//! - `is_valid()` depends on `title` and `author` only, never on the year.
//! - Two books with equal content are indistinguishable once inserted.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque reference to a cover image asset.
///
/// Resolution to pixels (and any placeholder fallback) belongs to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverImage(String);

impl CoverImage {
    pub fn new(asset: impl Into<String>) -> Self {
        Self(asset.into())
    }

    pub fn asset(&self) -> &str {
        self.0.as_str()
    }
}

/// One book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub year_of_publishing: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<CoverImage>,
}

/// Validation error for a [`Book`] that cannot be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyTitle,
    EmptyAuthor,
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "book title must not be empty"),
            Self::EmptyAuthor => write!(f, "book author must not be empty"),
        }
    }
}

impl Error for BookValidationError {}

impl Book {
    /// Creates a book without a cover.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year_of_publishing: year,
            cover: None,
        }
    }

    /// Blank record used as the starting point of a "create" edit session.
    pub fn empty() -> Self {
        Self::new("", "", 0)
    }

    /// Literal seed records for the demo list.
    pub fn demos() -> Vec<Self> {
        vec![
            Self::new("Honzikova cesta", "Bohumil Riha", 1234),
            Self::new("Robinson Crusoe", "Daniel Defoe", 1235),
        ]
    }

    pub fn with_cover(mut self, cover: CoverImage) -> Self {
        self.cover = Some(cover);
        self
    }

    /// Checks the commit invariant.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is empty (checked first).
    /// - `EmptyAuthor` when `author` is empty.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if self.author.is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
