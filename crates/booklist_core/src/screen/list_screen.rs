//! Book list screen: result orchestrator for one rendered list.
//!
//! Known gap: `Saved`/`Deleted` carry the row index captured when the session
//! opened. A mutation landing while the session is open makes that index
//! stale; an out-of-range stale index surfaces as `CollectionError`, an
//! in-range one silently targets a different row.

use crate::collection::list::{CollectionError, CollectionResult, ObservableList};
use crate::dispatch::DispatchQueue;
use crate::editor::result::EditorResult;
use crate::editor::session::EditSession;
use crate::model::book::Book;
use crate::render::adapter::TableAdapter;
use crate::render::presenter::BookRowPresenter;
use crate::render::surface::ListSurface;
use log::{debug, error, info};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Adapter binding the book list to a surface of type `S`.
pub type BookTableAdapter<S> = TableAdapter<Book, BookRowPresenter, S>;

/// Shared handle to the screen's list.
pub type SharedBookList = Rc<RefCell<ObservableList<Book>>>;

/// One list screen and its editor-result orchestrator.
#[derive(Debug)]
pub struct BookListScreen {
    books: SharedBookList,
    queue: DispatchQueue,
    last_error: Cell<Option<CollectionError>>,
}

impl BookListScreen {
    /// Creates a screen seeded with `seed`, delivering notifications via `queue`.
    pub fn new(seed: Vec<Book>, queue: DispatchQueue) -> Rc<Self> {
        info!(
            "event=list_screen_init module=screen status=ok seed_len={}",
            seed.len()
        );
        Rc::new(Self {
            books: Rc::new(RefCell::new(ObservableList::new(seed, queue.clone()))),
            queue,
            last_error: Cell::new(None),
        })
    }

    pub fn books(&self) -> &SharedBookList {
        &self.books
    }

    pub fn queue(&self) -> &DispatchQueue {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.books.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.borrow().is_empty()
    }

    /// Copy of the current content in row order.
    pub fn snapshot(&self) -> Vec<Book> {
        self.books.borrow().as_slice().to_vec()
    }

    /// Binds `surface` to the list; the adapter becomes the list's observer.
    pub fn attach_surface<S: ListSurface + 'static>(
        &self,
        surface: &Rc<S>,
    ) -> Rc<BookTableAdapter<S>> {
        TableAdapter::attach(&self.books, surface, BookRowPresenter)
    }

    /// Applies one editor result to the list.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when a `Saved`/`Deleted` index no longer exists.
    pub fn accept(&self, result: EditorResult) -> CollectionResult<()> {
        debug!(
            "event=editor_result module=screen kind={} index={:?}",
            result.kind(),
            result.index()
        );
        let mut books = self.books.borrow_mut();
        match result {
            EditorResult::Created(book) => {
                books.add(book);
            }
            EditorResult::Saved(book, index) => books.replace(book, index)?,
            EditorResult::Deleted(_, index) => {
                books.delete(index)?;
            }
            EditorResult::Cancelled => {}
        }
        Ok(())
    }

    /// Opens a session for a new record.
    pub fn begin_create(self: &Rc<Self>) -> EditSession {
        EditSession::new(
            Book::empty(),
            None,
            self.queue.clone(),
            self.completion(),
        )
    }

    /// Opens a session on the row at `index`.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when no such row exists.
    pub fn begin_edit(self: &Rc<Self>, index: usize) -> CollectionResult<EditSession> {
        let book = {
            let books = self.books.borrow();
            books
                .get(index)
                .cloned()
                .ok_or(CollectionError::IndexOutOfRange {
                    index,
                    len: books.len(),
                })?
        };
        Ok(EditSession::new(
            book,
            Some(index),
            self.queue.clone(),
            self.completion(),
        ))
    }

    /// Returns and clears the failure of the last session-delivered result.
    pub fn take_last_error(&self) -> Option<CollectionError> {
        self.last_error.take()
    }

    fn completion(self: &Rc<Self>) -> impl FnOnce(EditorResult) + 'static {
        let screen: Weak<Self> = Rc::downgrade(self);
        move |result| {
            let Some(screen) = screen.upgrade() else {
                debug!("event=editor_result_dropped module=screen reason=screen_gone");
                return;
            };
            if let Err(err) = screen.accept(result) {
                error!("event=editor_result_apply module=screen status=error error=\"{err}\"");
                screen.last_error.set(Some(err));
            }
        }
    }
}
