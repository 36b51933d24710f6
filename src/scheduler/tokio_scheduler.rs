use std::rc::Rc;

use tokio::task::LocalSet;

use super::{Duration, Scheduler, Task, TaskHandle, Timer};

/// Schedules onto a tokio `LocalSet`.
///
/// The set only makes progress while it is driven, e.g.
/// `scheduler.local_set().run_until(fut).await` inside a current-thread
/// runtime.
#[derive(Clone, Default)]
pub struct TokioLocalScheduler {
  local: Rc<LocalSet>,
}

impl TokioLocalScheduler {
  pub fn new() -> Self { Self::default() }

  pub fn local_set(&self) -> &LocalSet { &self.local }
}

impl Scheduler for TokioLocalScheduler {
  fn schedule(&self, task: Task) {
    self.local.spawn_local(async move { task() });
  }
}

impl Timer for TokioLocalScheduler {
  fn schedule_after(&self, delay: Duration, task: Task) -> TaskHandle {
    let handle = TaskHandle::new();
    let task = handle.wrap(task);
    let join = self.local.spawn_local(async move {
      tokio::time::sleep(delay).await;
      task();
    });
    handle.on_cancel(move || join.abort());
    handle
  }
}
