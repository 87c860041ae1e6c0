//! Headless surface that records every structural call.
//!
//! Tracks its own row count the way a real list view does and checks it
//! against the data source whenever an update scope closes.

use crate::render::surface::{ListDataSource, ListSurface, RowAnimation, RowPath};
use log::{error, trace};
use std::cell::{Cell, RefCell};
use std::fmt::{Display, Formatter};
use std::rc::Weak;

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    ReloadData,
    BeginUpdates,
    EndUpdates,
    InsertRows(Vec<RowPath>),
    DeleteRows(Vec<RowPath>),
    ReloadRows(Vec<RowPath>),
}

impl Display for SurfaceCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (name, paths) = match self {
            Self::ReloadData => return f.write_str("reload_data"),
            Self::BeginUpdates => return f.write_str("begin_updates"),
            Self::EndUpdates => return f.write_str("end_updates"),
            Self::InsertRows(paths) => ("insert_rows", paths),
            Self::DeleteRows(paths) => ("delete_rows", paths),
            Self::ReloadRows(paths) => ("reload_rows", paths),
        };
        write!(f, "{name}[")?;
        for (position, path) in paths.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{path}")?;
        }
        f.write_str("]")
    }
}

/// In-memory [`ListSurface`] used by the CLI and tests.
#[derive(Default)]
pub struct RecordingSurface {
    calls: RefCell<Vec<SurfaceCall>>,
    data_source: RefCell<Option<Weak<dyn ListDataSource>>>,
    rows: Cell<usize>,
    update_depth: Cell<usize>,
    mismatches: Cell<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects the data source and loads the initial row count.
    pub fn set_data_source(&self, source: Weak<dyn ListDataSource>) {
        *self.data_source.borrow_mut() = Some(source);
        self.rows.set(self.source_rows());
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    /// Returns and clears the recorded calls.
    pub fn take_calls(&self) -> Vec<SurfaceCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    /// Row count as currently displayed by the surface.
    pub fn visible_rows(&self) -> usize {
        self.rows.get()
    }

    /// Number of update scopes that closed with a row count differing from
    /// the data source.
    pub fn mismatches(&self) -> usize {
        self.mismatches.get()
    }

    fn record(&self, call: SurfaceCall) {
        trace!("event=surface_call module=render call={call}");
        self.calls.borrow_mut().push(call);
    }

    fn source_rows(&self) -> usize {
        self.data_source
            .borrow()
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|source| source.number_of_rows(0))
            .unwrap_or(0)
    }

    fn reconcile(&self) {
        let expected = self.source_rows();
        let visible = self.rows.get();
        if expected != visible {
            error!(
                "event=row_count_mismatch module=render status=error visible={visible} expected={expected}"
            );
            self.mismatches.set(self.mismatches.get() + 1);
            self.rows.set(expected);
        }
    }
}

impl ListSurface for RecordingSurface {
    fn reload_data(&self) {
        self.record(SurfaceCall::ReloadData);
        self.rows.set(self.source_rows());
    }

    fn begin_updates(&self) {
        self.record(SurfaceCall::BeginUpdates);
        self.update_depth.set(self.update_depth.get() + 1);
    }

    fn end_updates(&self) {
        self.record(SurfaceCall::EndUpdates);
        let depth = self.update_depth.get().saturating_sub(1);
        self.update_depth.set(depth);
        if depth == 0 {
            self.reconcile();
        }
    }

    fn insert_rows(&self, paths: &[RowPath], _animation: RowAnimation) {
        self.record(SurfaceCall::InsertRows(paths.to_vec()));
        self.rows.set(self.rows.get() + paths.len());
        if self.update_depth.get() == 0 {
            self.reconcile();
        }
    }

    fn delete_rows(&self, paths: &[RowPath], _animation: RowAnimation) {
        self.record(SurfaceCall::DeleteRows(paths.to_vec()));
        self.rows.set(self.rows.get().saturating_sub(paths.len()));
        if self.update_depth.get() == 0 {
            self.reconcile();
        }
    }

    fn reload_rows(&self, paths: &[RowPath], _animation: RowAnimation) {
        self.record(SurfaceCall::ReloadRows(paths.to_vec()));
    }
}
