use futures::executor::LocalSpawner;
#[cfg(feature = "timer")]
use futures::future::abortable;
use futures::task::LocalSpawnExt;

#[cfg(feature = "timer")]
use super::{Duration, TaskHandle, Timer};
use super::{Scheduler, Task};
use crate::error::{report_unhandled, RxError};
#[cfg(feature = "timer")]
use crate::subscription::Subscription;

/// Schedules onto a `futures::executor::LocalPool`.
///
/// Tasks run when the pool is driven (`run`, `run_until_stalled`, ...), in
/// spawn order.
///
/// ```rust
/// use std::{cell::Cell, convert::Infallible, rc::Rc};
///
/// use futures::executor::LocalPool;
/// use minirx::prelude::*;
///
/// let mut pool = LocalPool::new();
/// let value = Rc::new(Cell::new(0));
/// let c_value = value.clone();
///
/// Observable::<i32, Infallible>::of(1)
///   .observe_on(LocalPoolScheduler::from(pool.spawner()))
///   .subscribe(move |v| c_value.set(v));
/// assert_eq!(value.get(), 0);
///
/// pool.run();
/// assert_eq!(value.get(), 1);
/// ```
#[derive(Clone)]
pub struct LocalPoolScheduler {
  spawner: LocalSpawner,
}

impl LocalPoolScheduler {
  pub fn new(spawner: LocalSpawner) -> Self { Self { spawner } }
}

impl From<LocalSpawner> for LocalPoolScheduler {
  fn from(spawner: LocalSpawner) -> Self { Self::new(spawner) }
}

impl Scheduler for LocalPoolScheduler {
  fn schedule(&self, task: Task) {
    if let Err(err) = self.spawner.spawn_local(async move { task() }) {
      report_unhandled(RxError::from(err));
    }
  }
}

#[cfg(feature = "timer")]
impl Timer for LocalPoolScheduler {
  fn schedule_after(&self, delay: Duration, task: Task) -> TaskHandle {
    let mut handle = TaskHandle::new();
    let task = handle.wrap(task);
    let (sleep, abort) = abortable(futures_time::task::sleep(delay.into()));
    let spawned = self.spawner.spawn_local(async move {
      if sleep.await.is_ok() {
        task();
      }
    });
    match spawned {
      Ok(()) => handle.on_cancel(move || abort.abort()),
      Err(err) => {
        handle.unsubscribe();
        report_unhandled(RxError::from(err));
      }
    }
    handle
  }
}
