//! Outcome of one detail-editing session.

use crate::model::book::Book;

/// Result reported exactly once by a detail-editing flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorResult {
    /// New record to append.
    Created(Book),
    /// Edited record for the row the session was opened on.
    Saved(Book, usize),
    /// Row the session was opened on should be removed; the record is
    /// informational only.
    Deleted(Book, usize),
    Cancelled,
}

impl EditorResult {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Saved(..) => "saved",
            Self::Deleted(..) => "deleted",
            Self::Cancelled => "cancelled",
        }
    }

    /// Row index captured when the session was opened, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Saved(_, index) | Self::Deleted(_, index) => Some(*index),
            Self::Created(_) | Self::Cancelled => None,
        }
    }
}
