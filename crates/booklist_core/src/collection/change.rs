//! Structural change descriptions.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One structural change, or a batch boundary marker.
///
/// Carries only the index; observers re-read content from the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", content = "index", rename_all = "snake_case")]
pub enum ChangeOperation {
    BeginBatch,
    EndBatch,
    Insert(usize),
    Delete(usize),
    Update(usize),
}

impl ChangeOperation {
    /// Row index for element operations, `None` for batch markers.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::BeginBatch | Self::EndBatch => None,
            Self::Insert(index) | Self::Delete(index) | Self::Update(index) => Some(index),
        }
    }

    pub fn is_batch_marker(self) -> bool {
        self.index().is_none()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::BeginBatch => "begin_batch",
            Self::EndBatch => "end_batch",
            Self::Insert(_) => "insert",
            Self::Delete(_) => "delete",
            Self::Update(_) => "update",
        }
    }
}

impl Display for ChangeOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.index() {
            Some(index) => write!(f, "{}({index})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}
