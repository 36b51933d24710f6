//! Test Scheduler for deterministic testing of time-based operators.
//!
//! Provides virtual time that only advances when explicitly instructed,
//! enabling deterministic testing of `timeout` and `observe_on`.
//!
//! # Usage
//!
//! ```rust
//! use std::{cell::Cell, convert::Infallible, rc::Rc};
//!
//! use minirx::prelude::*;
//!
//! let scheduler = TestScheduler::new();
//! let fired = Rc::new(Cell::new(false));
//! let c_fired = fired.clone();
//!
//! Observable::<(), Infallible>::timeout(Duration::from_millis(100), scheduler.clone())
//!   .subscribe(move |_| c_fired.set(true));
//!
//! scheduler.advance_by(Duration::from_millis(99));
//! assert!(!fired.get());
//! scheduler.advance_by(Duration::from_millis(1));
//! assert!(fired.get());
//! ```
//!
//! Every clone of a `TestScheduler` shares the same clock and queue.

use std::{cmp::Ordering, collections::BinaryHeap};

use super::{Duration, Scheduler, Task, TaskHandle, Timer};
use crate::{
  rc::{MutRc, RcDeref, RcDerefMut},
  subscription::Subscription,
};

// ==================== Internal State ====================

#[derive(Default)]
struct TestSchedulerState {
  virtual_time: Duration,
  task_queue: BinaryHeap<ScheduledTask>,
  next_task_id: usize,
}

struct ScheduledTask {
  scheduled_time: Duration,
  task_id: usize,
  task: Task,
  handle: TaskHandle,
}

impl PartialEq for ScheduledTask {
  fn eq(&self, other: &Self) -> bool {
    self.scheduled_time == other.scheduled_time && self.task_id == other.task_id
  }
}

impl Eq for ScheduledTask {}

impl PartialOrd for ScheduledTask {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for ScheduledTask {
  fn cmp(&self, other: &Self) -> Ordering {
    // Min-heap: earlier times first, then FIFO by task_id
    other
      .scheduled_time
      .cmp(&self.scheduled_time)
      .then_with(|| other.task_id.cmp(&self.task_id))
  }
}

// ==================== TestScheduler ====================

/// A virtual time scheduler for deterministic testing.
#[derive(Clone, Default)]
pub struct TestScheduler(MutRc<TestSchedulerState>);

impl TestScheduler {
  pub fn new() -> Self { Self::default() }

  /// Current virtual time, measured from the scheduler's creation.
  pub fn now(&self) -> Duration { self.0.rc_deref().virtual_time }

  /// Number of armed tasks that have not run or been cancelled.
  pub fn pending_tasks(&self) -> usize {
    self.0.rc_deref().task_queue.iter().filter(|t| !t.handle.is_closed()).count()
  }

  /// Advance virtual time by `duration`, running every task that falls due.
  ///
  /// Tasks scheduled while advancing run too if they are due before the new
  /// time.
  pub fn advance_by(&self, duration: Duration) {
    let target = self.now() + duration;
    while let Some(task) = self.pop_due(Some(target)) {
      task();
    }
    self.0.rc_deref_mut().virtual_time = target;
  }

  /// Run every pending task, jumping the clock forward as needed.
  pub fn flush(&self) {
    while let Some(task) = self.pop_due(None) {
      task();
    }
  }

  fn pop_due(&self, until: Option<Duration>) -> Option<Task> {
    let mut state = self.0.rc_deref_mut();
    loop {
      let due = state.task_queue.peek().map(|t| until.map_or(true, |until| t.scheduled_time <= until))?;
      if !due {
        return None;
      }
      let scheduled = state.task_queue.pop()?;
      if scheduled.handle.is_closed() {
        continue;
      }
      if scheduled.scheduled_time > state.virtual_time {
        state.virtual_time = scheduled.scheduled_time;
      }
      return Some(scheduled.task);
    }
  }

  fn push(&self, delay: Duration, task: Task) -> TaskHandle {
    let handle = TaskHandle::new();
    let mut state = self.0.rc_deref_mut();
    let task_id = state.next_task_id;
    state.next_task_id += 1;
    let scheduled_time = state.virtual_time + delay;
    state.task_queue.push(ScheduledTask {
      scheduled_time,
      task_id,
      task: handle.wrap(task),
      handle: handle.clone(),
    });
    handle
  }
}

impl Scheduler for TestScheduler {
  fn schedule(&self, task: Task) { self.push(Duration::ZERO, task); }
}

impl Timer for TestScheduler {
  fn schedule_after(&self, delay: Duration, task: Task) -> TaskHandle { self.push(delay, task) }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use super::*;

  fn record(log: &Rc<RefCell<Vec<u32>>>, v: u32) -> Task {
    let log = log.clone();
    Box::new(move || log.borrow_mut().push(v))
  }

  #[test]
  fn runs_in_time_then_fifo_order() {
    let scheduler = TestScheduler::new();
    let log = Rc::new(RefCell::new(vec![]));

    scheduler.schedule_after(Duration::from_millis(20), record(&log, 3));
    scheduler.schedule(record(&log, 1));
    scheduler.schedule(record(&log, 2));
    assert_eq!(scheduler.pending_tasks(), 3);

    scheduler.advance_by(Duration::ZERO);
    assert_eq!(*log.borrow(), vec![1, 2]);

    scheduler.advance_by(Duration::from_millis(19));
    assert_eq!(*log.borrow(), vec![1, 2]);
    scheduler.advance_by(Duration::from_millis(1));
    assert_eq!(*log.borrow(), vec![1, 2, 3]);
    assert_eq!(scheduler.now(), Duration::from_millis(20));
  }

  #[test]
  fn cancelled_tasks_never_run() {
    let scheduler = TestScheduler::new();
    let log = Rc::new(RefCell::new(vec![]));

    let mut handle = scheduler.schedule_after(Duration::from_millis(5), record(&log, 1));
    handle.unsubscribe();
    assert_eq!(scheduler.pending_tasks(), 0);

    scheduler.flush();
    assert!(log.borrow().is_empty());
  }

  #[test]
  fn tasks_scheduled_while_running() {
    let scheduler = TestScheduler::new();
    let log = Rc::new(RefCell::new(vec![]));
    let (c_scheduler, c_log) = (scheduler.clone(), log.clone());

    scheduler.schedule_after(
      Duration::from_millis(10),
      Box::new(move || {
        c_log.borrow_mut().push(1);
        c_scheduler.schedule_after(Duration::from_millis(10), record(&c_log, 2));
      }),
    );

    scheduler.advance_by(Duration::from_millis(30));
    assert_eq!(*log.borrow(), vec![1, 2]);
    assert_eq!(scheduler.now(), Duration::from_millis(30));
  }

  #[test]
  fn flush_jumps_the_clock() {
    let scheduler = TestScheduler::new();
    let log = Rc::new(RefCell::new(vec![]));
    scheduler.schedule_after(Duration::from_secs(60), record(&log, 1));

    scheduler.flush();
    assert_eq!(*log.borrow(), vec![1]);
    assert_eq!(scheduler.now(), Duration::from_secs(60));
  }
}
