//! Raw editor input and its conversion into a [`Book`].
//!
//! # Invariants
//! - Conversion never carries over a cover; callers restore it explicitly.
//! - Year text is parsed as-is (no trimming), so `" 1999"` is rejected.

use crate::model::book::Book;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifies one raw input field of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Author,
    Title,
    Year,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Title => "title",
            Self::Year => "year",
        }
    }
}

/// Reason a draft could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Input field is not available at all.
    Missing(DraftField),
    /// Input field is present but holds no text.
    Empty(DraftField),
    /// Year text is not an integer.
    InvalidYear(String),
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "{} input is missing", field.as_str()),
            Self::Empty(field) => write!(f, "{} input is empty", field.as_str()),
            Self::InvalidYear(value) => write!(f, "year `{value}` is not an integer"),
        }
    }
}

impl Error for DraftError {}

/// Raw text state of the detail editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub author: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
}

impl BookDraft {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            author: Some(author.into()),
            title: Some(title.into()),
            year: Some(year.into()),
        }
    }

    /// Prefills the editor fields from an existing record.
    pub fn from_book(book: &Book) -> Self {
        Self::new(
            book.author.as_str(),
            book.title.as_str(),
            book.year_of_publishing.to_string(),
        )
    }

    /// Converts the raw fields into a record without a cover.
    ///
    /// # Errors
    /// - `Missing` / `Empty` for the first absent or blank field, checked in
    ///   author, title, year order.
    /// - `InvalidYear` when the year text does not parse as an integer.
    pub fn parse(&self) -> Result<Book, DraftError> {
        let author = required(self.author.as_deref(), DraftField::Author)?;
        let title = required(self.title.as_deref(), DraftField::Title)?;
        let year_text = required(self.year.as_deref(), DraftField::Year)?;
        let year = year_text
            .parse::<i64>()
            .map_err(|_| DraftError::InvalidYear(year_text.to_string()))?;

        Ok(Book::new(title, author, year))
    }
}

impl Book {
    /// Builds a record from three optional raw texts.
    ///
    /// Returns `None` when any input is absent or empty, or when the year is
    /// not an integer. Validity is checked separately by the caller.
    pub fn from_raw_input(
        author: Option<&str>,
        title: Option<&str>,
        year: Option<&str>,
    ) -> Option<Self> {
        BookDraft {
            author: author.map(str::to_string),
            title: title.map(str::to_string),
            year: year.map(str::to_string),
        }
        .parse()
        .ok()
    }
}

fn required(value: Option<&str>, field: DraftField) -> Result<&str, DraftError> {
    match value {
        None => Err(DraftError::Missing(field)),
        Some("") => Err(DraftError::Empty(field)),
        Some(text) => Ok(text),
    }
}
