//! Detail edit session.
//!
//! A session is opened on a record (plus its row index when editing an
//! existing row) and ends with exactly one [`EditorResult`]. The completion
//! runs on the dispatch queue so the list screen is live again before any
//! mutation reaches it.

use crate::dispatch::DispatchQueue;
use crate::editor::result::EditorResult;
use crate::model::book::{Book, BookValidationError};
use crate::model::draft::{BookDraft, DraftError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use uuid::Uuid;

/// Correlation id of one edit session, used in log events.
pub type SessionId = Uuid;

type Completion = Box<dyn FnOnce(EditorResult)>;

/// Why a session could not end with the requested action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Raw editor input does not form a record.
    Draft(DraftError),
    /// Parsed record fails validation.
    Invalid(BookValidationError),
    /// Delete requested on a session opened for a new record.
    NothingToDelete,
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft(err) => write!(f, "{err}"),
            Self::Invalid(err) => write!(f, "{err}"),
            Self::NothingToDelete => write!(f, "session is not bound to an existing row"),
        }
    }
}

impl Error for RejectReason {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Draft(err) => Some(err),
            Self::Invalid(err) => Some(err),
            Self::NothingToDelete => None,
        }
    }
}

/// Rejected action; hands the still-open session back to the caller.
#[derive(Debug)]
pub struct SessionRejection {
    pub session: EditSession,
    pub reason: RejectReason,
}

impl Display for SessionRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "edit session {} stays open: {}", self.session.id, self.reason)
    }
}

impl Error for SessionRejection {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}

/// One open detail-editing flow.
pub struct EditSession {
    id: SessionId,
    book: Book,
    index: Option<usize>,
    queue: DispatchQueue,
    completion: Option<Completion>,
}

impl EditSession {
    /// Opens a session on `book`.
    ///
    /// `index` is the row being edited, or `None` when creating a record.
    pub fn new(
        book: Book,
        index: Option<usize>,
        queue: DispatchQueue,
        completion: impl FnOnce(EditorResult) + 'static,
    ) -> Self {
        let id = Uuid::new_v4();
        info!(
            "event=edit_session_open module=editor status=ok session_id={id} index={}",
            describe_index(index)
        );
        Self {
            id,
            book,
            index,
            queue,
            completion: Some(Box::new(completion)),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Record the session was opened on.
    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Editor fields prefilled from the session's record.
    pub fn draft(&self) -> BookDraft {
        BookDraft::from_book(&self.book)
    }

    /// Commits `draft`.
    ///
    /// The cover of the original record is carried over. Completes with
    /// `Saved` when the session has an index, otherwise with `Created`.
    ///
    /// # Errors
    /// - Returns the open session with `Draft` or `Invalid` when the input
    ///   cannot be committed.
    pub fn save(self, draft: &BookDraft) -> Result<(), SessionRejection> {
        let mut book = match draft.parse() {
            Ok(book) => book,
            Err(err) => return Err(self.reject(RejectReason::Draft(err))),
        };
        book.cover = self.book.cover.clone();
        if let Err(err) = book.validate() {
            return Err(self.reject(RejectReason::Invalid(err)));
        }

        let result = match self.index {
            Some(index) => EditorResult::Saved(book, index),
            None => EditorResult::Created(book),
        };
        self.finish(result);
        Ok(())
    }

    /// Requests removal of the edited row.
    ///
    /// # Errors
    /// - Returns the open session with `NothingToDelete` when the session was
    ///   opened for a new record.
    pub fn delete(mut self) -> Result<(), SessionRejection> {
        let Some(index) = self.index else {
            return Err(self.reject(RejectReason::NothingToDelete));
        };
        let book = std::mem::replace(&mut self.book, Book::empty());
        self.finish(EditorResult::Deleted(book, index));
        Ok(())
    }

    /// Ends the session without any change.
    pub fn cancel(self) {
        self.finish(EditorResult::Cancelled);
    }

    fn reject(self, reason: RejectReason) -> SessionRejection {
        info!(
            "event=edit_session_reject module=editor status=rejected session_id={} reason=\"{reason}\"",
            self.id
        );
        SessionRejection {
            session: self,
            reason,
        }
    }

    fn finish(mut self, result: EditorResult) {
        let Some(completion) = self.completion.take() else {
            return;
        };
        info!(
            "event=edit_session_finish module=editor status=ok session_id={} result={}",
            self.id,
            result.kind()
        );
        self.queue.dispatch(move || completion(result));
    }
}

impl Drop for EditSession {
    fn drop(&mut self) {
        if self.completion.is_some() {
            warn!(
                "event=edit_session_abandoned module=editor status=warn session_id={}",
                self.id
            );
        }
    }
}

impl Debug for EditSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("id", &self.id)
            .field("book", &self.book)
            .field("index", &self.index)
            .field("open", &self.completion.is_some())
            .finish()
    }
}

fn describe_index(index: Option<usize>) -> String {
    index.map_or_else(|| "none".to_string(), |index| index.to_string())
}
