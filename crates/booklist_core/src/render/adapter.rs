//! Table adapter: the list's observer and the surface's data source.
//!
//! # Invariants
//! - `attach` registers the adapter as the list's only observer.
//! - A cleared surface reference turns every notification into a no-op.
//! - Row queries re-read the list at call time; they never cache.

use crate::collection::change::ChangeOperation;
use crate::collection::list::ObservableList;
use crate::collection::observer::ChangeObserver;
use crate::render::presenter::RowPresenter;
use crate::render::surface::{ListDataSource, ListSurface, RowAnimation, RowPath};
use log::trace;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Binds one observable list to one rendered surface.
pub struct TableAdapter<T, P, S> {
    list: Weak<RefCell<ObservableList<T>>>,
    surface: Weak<S>,
    presenter: P,
    animation: RowAnimation,
}

impl<T, P, S> TableAdapter<T, P, S>
where
    T: 'static,
    P: RowPresenter<T> + 'static,
    S: ListSurface + 'static,
{
    /// Creates the adapter and registers it as the list's observer.
    ///
    /// The caller keeps the returned `Rc` alive for as long as updates
    /// should reach the surface.
    pub fn attach(
        list: &Rc<RefCell<ObservableList<T>>>,
        surface: &Rc<S>,
        presenter: P,
    ) -> Rc<Self> {
        let adapter = Rc::new(Self {
            list: Rc::downgrade(list),
            surface: Rc::downgrade(surface),
            presenter,
            animation: RowAnimation::default(),
        });
        let observer: Rc<dyn ChangeObserver> = adapter.clone();
        list.borrow_mut().set_observer(Rc::downgrade(&observer));
        adapter
    }

    /// Weak data-source handle to hand to the surface.
    pub fn data_source(self: &Rc<Self>) -> Weak<dyn ListDataSource> {
        let source: Rc<dyn ListDataSource> = self.clone();
        Rc::downgrade(&source)
    }

    /// Row visual for `path`, or `None` outside the list.
    pub fn row_at(&self, path: RowPath) -> Option<P::Row> {
        if path.section != 0 {
            return None;
        }
        let list = self.list.upgrade()?;
        let list = list.borrow();
        list.get(path.row).map(|element| self.presenter.present(element))
    }

    pub fn prototype_id(&self) -> &'static str {
        self.presenter.prototype_id()
    }

    pub fn is_bound(&self) -> bool {
        self.surface.strong_count() > 0
    }
}

impl<T, P, S> ChangeObserver for TableAdapter<T, P, S>
where
    S: ListSurface,
{
    fn full_reload(&self) {
        if let Some(surface) = self.surface.upgrade() {
            surface.reload_data();
        }
    }

    fn apply(&self, operation: ChangeOperation) {
        let Some(surface) = self.surface.upgrade() else {
            trace!("event=surface_gone module=render op={operation}");
            return;
        };
        match operation {
            ChangeOperation::BeginBatch => surface.begin_updates(),
            ChangeOperation::EndBatch => surface.end_updates(),
            ChangeOperation::Insert(row) => surface.insert_rows(&[RowPath::flat(row)], self.animation),
            ChangeOperation::Delete(row) => surface.delete_rows(&[RowPath::flat(row)], self.animation),
            ChangeOperation::Update(row) => surface.reload_rows(&[RowPath::flat(row)], self.animation),
        }
    }
}

impl<T, P, S> ListDataSource for TableAdapter<T, P, S> {
    fn number_of_sections(&self) -> usize {
        1
    }

    fn number_of_rows(&self, section: usize) -> usize {
        if section != 0 {
            return 0;
        }
        self.list
            .upgrade()
            .map(|list| list.borrow().len())
            .unwrap_or(0)
    }
}
