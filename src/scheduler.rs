//! Scheduling capabilities.
//!
//! Two small traits cover everything the operators need:
//!
//! - [`Scheduler`] defers a callback (used by `observe_on`). Any
//!   `Fn(Task)` closure is a scheduler, so
//!   `observe_on(|task: Task| queue.push(task))` works out of the box.
//! - [`Timer`] runs a callback after a delay and can cancel it (used by
//!   `timeout`).
//!
//! Backends:
//!
//! | Type | Scheduler | Timer | Feature |
//! |------|-----------|-------|---------|
//! | [`ImmediateScheduler`] | runs inline | - | always |
//! | [`TestScheduler`] | virtual time | virtual time | always |
//! | [`LocalPoolScheduler`] | futures `LocalPool` | `futures-time` sleep | `futures-scheduler` (+ `timer`) |
//! | [`TokioLocalScheduler`] | tokio `LocalSet` | `tokio::time::sleep` | `tokio-scheduler` |

use std::{
  cell::{Cell, RefCell},
  rc::Rc,
};

pub use std::time::Duration;

use crate::subscription::Subscription;

#[cfg(feature = "futures-scheduler")]
mod futures_scheduler;
pub mod test_scheduler;
#[cfg(feature = "tokio-scheduler")]
mod tokio_scheduler;

#[cfg(feature = "futures-scheduler")]
pub use futures_scheduler::LocalPoolScheduler;
pub use test_scheduler::TestScheduler;
#[cfg(feature = "tokio-scheduler")]
pub use tokio_scheduler::TokioLocalScheduler;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Arranges for a task to run later.
///
/// The ordering between tasks is whatever the implementation guarantees;
/// every backend in this crate runs zero-delay tasks in FIFO order.
pub trait Scheduler {
  fn schedule(&self, task: Task);
}

impl<F> Scheduler for F
where
  F: Fn(Task),
{
  #[inline]
  fn schedule(&self, task: Task) { self(task) }
}

/// Runs a task after a delay, with the option to cancel it.
pub trait Timer {
  /// Arm `task` to run once `delay` has elapsed. Unsubscribing the returned
  /// handle before then guarantees the task never runs.
  fn schedule_after(&self, delay: Duration, task: Task) -> TaskHandle;
}

/// Runs every task synchronously, on the caller's stack.
#[derive(Clone, Copy, Default, Debug)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
  #[inline]
  fn schedule(&self, task: Task) { task() }
}

// ==================== TaskHandle ====================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskState {
  Pending,
  Finished,
  Cancelled,
}

/// Cancellation handle of a task armed on a [`Timer`].
///
/// The handle gates the task itself: a task obtained from
/// [`wrap`](Self::wrap) only runs while the handle is pending, so a backend
/// that cannot abort in time still never delivers after cancellation. The
/// backend's own abort hook, registered with [`on_cancel`](Self::on_cancel),
/// runs at most once.
#[derive(Clone)]
pub struct TaskHandle(Rc<TaskHandleInner>);

struct TaskHandleInner {
  state: Cell<TaskState>,
  on_cancel: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl TaskHandle {
  pub fn new() -> Self {
    Self(Rc::new(TaskHandleInner { state: Cell::new(TaskState::Pending), on_cancel: RefCell::new(None) }))
  }

  pub fn state(&self) -> TaskState { self.0.state.get() }

  /// Gate `task` on this handle.
  pub fn wrap(&self, task: Task) -> Task {
    let handle = self.clone();
    Box::new(move || {
      if handle.state() == TaskState::Pending {
        handle.0.state.set(TaskState::Finished);
        handle.0.on_cancel.borrow_mut().take();
        task();
      }
    })
  }

  /// Register the backend-specific abort. Runs right away if the handle was
  /// already cancelled.
  pub fn on_cancel(&self, abort: impl FnOnce() + 'static) {
    match self.state() {
      TaskState::Pending => *self.0.on_cancel.borrow_mut() = Some(Box::new(abort)),
      TaskState::Cancelled => abort(),
      TaskState::Finished => {}
    }
  }
}

impl Default for TaskHandle {
  fn default() -> Self { Self::new() }
}

impl Subscription for TaskHandle {
  fn unsubscribe(&mut self) {
    if self.state() != TaskState::Pending {
      return;
    }
    self.0.state.set(TaskState::Cancelled);
    let abort = self.0.on_cancel.borrow_mut().take();
    if let Some(abort) = abort {
      abort();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.state() != TaskState::Pending }
}
