//! Single-threaded deferred task queue.
//!
//! # Responsibility
//! - Hold work that must run after the current call stack unwinds, on the
//!   thread that owns the rendering context.
//!
//! # Invariants
//! - Tasks run in the order they were dispatched (FIFO).
//! - Tasks dispatched while draining run in the same drain, after every task
//!   queued before them.
//! - The queue is never borrowed while a task runs, so tasks may dispatch.

use log::trace;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

/// Cloneable handle to one thread-owned FIFO of pending tasks.
///
/// All clones share the same queue.
#[derive(Clone, Default)]
pub struct DispatchQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl DispatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to run on the next drain.
    pub fn dispatch(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    /// Number of tasks waiting for the next drain.
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Runs queued tasks until the queue is empty.
    ///
    /// Returns how many tasks ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            // Pop in its own statement so the borrow ends before the task runs.
            let next = self.tasks.borrow_mut().pop_front();
            let Some(task) = next else {
                break;
            };
            task();
            ran += 1;
        }
        if ran > 0 {
            trace!("event=queue_drain module=dispatch status=ok tasks={ran}");
        }
        ran
    }
}

impl Debug for DispatchQueue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchQueue")
            .field("pending", &self.pending())
            .finish()
    }
}
