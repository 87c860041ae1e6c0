//! Element-to-row presentation binding.
//!
//! Kept separate from the collection so the list stays testable without any
//! rendering dependency.

use crate::model::book::{Book, CoverImage};

/// Maps one collection element to a row visual.
pub trait RowPresenter<T> {
    type Row;

    /// Identifier of the row prototype the surface should instantiate.
    fn prototype_id(&self) -> &'static str;

    fn present(&self, element: &T) -> Self::Row;
}

/// Display fields of one book row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub prototype_id: &'static str,
    pub title: String,
    pub author: String,
    pub year: String,
    pub cover: Option<CoverImage>,
}

/// Presenter for the basic book cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookRowPresenter;

impl BookRowPresenter {
    pub const PROTOTYPE_ID: &'static str = "BookBasicCell";
}

impl RowPresenter<Book> for BookRowPresenter {
    type Row = BookRow;

    fn prototype_id(&self) -> &'static str {
        Self::PROTOTYPE_ID
    }

    fn present(&self, element: &Book) -> BookRow {
        BookRow {
            prototype_id: Self::PROTOTYPE_ID,
            title: element.title.clone(),
            author: element.author.clone(),
            year: element.year_of_publishing.to_string(),
            cover: element.cover.clone(),
        }
    }
}
