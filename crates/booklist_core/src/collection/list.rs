//! Observable list implementation.
//!
//! # Responsibility
//! - Provide add/replace/delete over an owned `Vec<T>`.
//! - Schedule one notification bracket per mutation on the dispatch queue.
//!
//! # Invariants
//! - Out-of-range `replace`/`delete` return `CollectionError` and neither
//!   mutate nor notify.
//! - Observer presence is checked when the mutation is issued; the weak
//!   reference is upgraded again at delivery time.
//! - The list never keeps its observer alive.

use crate::collection::change::ChangeOperation;
use crate::collection::observer::ChangeObserver;
use crate::dispatch::DispatchQueue;
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Weak;

pub type CollectionResult<T> = Result<T, CollectionError>;

/// Caller-side logic defect detected by the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// Index outside `0..len` passed to `replace` or `delete`.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
        }
    }
}

impl Error for CollectionError {}

/// Ordered, index-addressed collection that reports structural changes.
#[derive(Debug)]
pub struct ObservableList<T> {
    items: Vec<T>,
    observer: Option<Weak<dyn ChangeObserver>>,
    queue: DispatchQueue,
}

impl<T> ObservableList<T> {
    /// Creates a list with initial content and no observer.
    pub fn new(initial: Vec<T>, queue: DispatchQueue) -> Self {
        Self {
            items: initial,
            observer: None,
            queue,
        }
    }

    /// Registers the single observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: Weak<dyn ChangeObserver>) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Returns whether an observer is registered and still alive.
    pub fn has_observer(&self) -> bool {
        self.observer
            .as_ref()
            .is_some_and(|observer| observer.strong_count() > 0)
    }

    pub fn queue(&self) -> &DispatchQueue {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`, `None` outside `0..len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Appends `item` and reports `Insert(len_before)`.
    ///
    /// Returns the index of the new element.
    pub fn add(&mut self, item: T) -> usize {
        self.items.push(item);
        let index = self.items.len() - 1;
        self.notify(ChangeOperation::Insert(index));
        index
    }

    /// Overwrites the element at `index` and reports `Update(index)`.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `index >= len`; nothing changes.
    pub fn replace(&mut self, item: T, index: usize) -> CollectionResult<()> {
        self.check_index(index, "replace")?;
        self.items[index] = item;
        self.notify(ChangeOperation::Update(index));
        Ok(())
    }

    /// Removes the element at `index`, shifting later elements down, and
    /// reports `Delete(index)`.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `index >= len`; nothing changes.
    pub fn delete(&mut self, index: usize) -> CollectionResult<T> {
        self.check_index(index, "delete")?;
        let removed = self.items.remove(index);
        self.notify(ChangeOperation::Delete(index));
        Ok(removed)
    }

    /// Replaces the whole content and asks the observer for a full reload.
    pub fn reset(&mut self, items: Vec<T>) {
        self.items = items;
        let Some(observer) = self.live_observer() else {
            debug!("event=notify_dropped module=collection reason=no_observer op=full_reload");
            return;
        };
        self.queue.dispatch(move || {
            if let Some(observer) = observer.upgrade() {
                observer.full_reload();
            }
        });
    }

    fn check_index(&self, index: usize, operation: &'static str) -> CollectionResult<()> {
        let len = self.items.len();
        if index < len {
            return Ok(());
        }
        error!(
            "event=index_out_of_range module=collection status=error op={operation} index={index} len={len}"
        );
        Err(CollectionError::IndexOutOfRange { index, len })
    }

    fn live_observer(&self) -> Option<Weak<dyn ChangeObserver>> {
        self.observer
            .as_ref()
            .filter(|observer| observer.strong_count() > 0)
            .cloned()
    }

    fn notify(&self, operation: ChangeOperation) {
        let Some(observer) = self.live_observer() else {
            debug!("event=notify_dropped module=collection reason=no_observer op={operation}");
            return;
        };
        debug!("event=notify_scheduled module=collection op={operation}");
        self.queue.dispatch(move || {
            let Some(observer) = observer.upgrade() else {
                return;
            };
            observer.apply(ChangeOperation::BeginBatch);
            observer.apply(operation);
            observer.apply(ChangeOperation::EndBatch);
        });
    }
}
