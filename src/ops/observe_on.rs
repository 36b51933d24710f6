use std::rc::Rc;

use crate::{
  observable::Observable,
  observer::{BoxedObserver, Observer},
  scheduler::Scheduler,
  subscriber::Subscriber,
  subscription::{Subscription, TupleSubscription},
};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Re-emits every notification of the source through `scheduler`.
  ///
  /// Each value or error is captured when the source emits it and delivered
  /// whenever the scheduler runs the task. Tasks still pending when the
  /// downstream unsubscribes deliver nothing.
  ///
  /// ```rust
  /// use std::{cell::RefCell, convert::Infallible, rc::Rc};
  ///
  /// use minirx::prelude::*;
  ///
  /// let queue: Rc<RefCell<Vec<Task>>> = Rc::default();
  /// let c_queue = queue.clone();
  /// let seen = Rc::new(RefCell::new(vec![]));
  /// let c_seen = seen.clone();
  ///
  /// Observable::<i32, Infallible>::of(1)
  ///   .observe_on(move |task: Task| c_queue.borrow_mut().push(task))
  ///   .subscribe(move |v| c_seen.borrow_mut().push(v));
  /// assert!(seen.borrow().is_empty());
  ///
  /// let tasks: Vec<Task> = queue.borrow_mut().drain(..).collect();
  /// tasks.into_iter().for_each(|task| task());
  /// assert_eq!(*seen.borrow(), vec![1]);
  /// ```
  pub fn observe_on(self, scheduler: impl Scheduler + 'static) -> Self {
    let scheduler: Rc<dyn Scheduler> = Rc::new(scheduler);
    Observable::new(move |observer: BoxedObserver<Item, Err>| {
      let downstream = Subscriber::new(observer);
      let upstream = self.actual_subscribe(Box::new(ObserveOnObserver {
        downstream: downstream.clone(),
        scheduler: scheduler.clone(),
      }));
      TupleSubscription::new(downstream, upstream)
    })
  }
}

struct ObserveOnObserver<O> {
  downstream: Subscriber<O>,
  scheduler: Rc<dyn Scheduler>,
}

impl<Item, Err, O> Observer<Item, Err> for ObserveOnObserver<O>
where
  Item: 'static,
  Err: 'static,
  O: Observer<Item, Err> + 'static,
{
  fn next(&mut self, value: Item) {
    let mut downstream = self.downstream.clone();
    self.scheduler.schedule(Box::new(move || downstream.next(value)));
  }

  fn error(self, err: Err) {
    let downstream = self.downstream;
    self.scheduler.schedule(Box::new(move || downstream.error(err)));
  }

  fn complete(self) {
    let downstream = self.downstream;
    self.scheduler.schedule(Box::new(move || downstream.complete()));
  }

  fn is_closed(&self) -> bool { Subscription::is_closed(&self.downstream) }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, convert::Infallible};

  use super::*;
  use crate::scheduler::{ImmediateScheduler, Task, TestScheduler};

  type Queue = Rc<RefCell<Vec<Task>>>;

  fn run_all(queue: &Queue) {
    loop {
      let tasks: Vec<Task> = queue.borrow_mut().drain(..).collect();
      if tasks.is_empty() {
        break;
      }
      tasks.into_iter().for_each(|task| task());
    }
  }

  fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(i32), impl FnOnce(&'static str), impl FnOnce()) {
    let log = Rc::new(RefCell::new(vec![]));
    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());
    (
      log,
      move |v| l1.borrow_mut().push(format!("next {v}")),
      move |e| l2.borrow_mut().push(format!("error {e}")),
      move || l3.borrow_mut().push("complete".to_owned()),
    )
  }

  #[test]
  fn delivers_the_real_error() {
    let queue: Queue = Rc::default();
    let c_queue = queue.clone();
    let (log, next, error, complete) = recorder();

    Observable::<i32, &str>::throw_err("upstream failed")
      .observe_on(move |task: Task| c_queue.borrow_mut().push(task))
      .subscribe_all(next, error, complete);
    assert!(log.borrow().is_empty());

    run_all(&queue);
    assert_eq!(*log.borrow(), ["error upstream failed"]);
  }

  #[test]
  fn keeps_order_on_test_scheduler() {
    let scheduler = TestScheduler::new();
    let (log, next, error, complete) = recorder();

    Observable::<i32, &str>::from_iter([1, 2, 3])
      .observe_on(scheduler.clone())
      .subscribe_all(next, error, complete);
    assert_eq!(scheduler.pending_tasks(), 4);

    scheduler.flush();
    assert_eq!(*log.borrow(), ["next 1", "next 2", "next 3", "complete"]);
  }

  #[test]
  fn pending_tasks_are_dropped_after_unsubscribe() {
    let queue: Queue = Rc::default();
    let c_queue = queue.clone();
    let (log, next, error, complete) = recorder();

    let mut sub = Observable::<i32, &str>::from_iter([1, 2])
      .observe_on(move |task: Task| c_queue.borrow_mut().push(task))
      .subscribe_all(next, error, complete);
    sub.unsubscribe();

    run_all(&queue);
    assert!(log.borrow().is_empty());
  }

  #[test]
  fn immediate_scheduler_is_synchronous() {
    let (log, next, error, complete) = recorder();
    Observable::<i32, &str>::of(5).observe_on(ImmediateScheduler).subscribe_all(next, error, complete);
    assert_eq!(*log.borrow(), ["next 5", "complete"]);
  }
}
