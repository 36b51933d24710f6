use std::collections::VecDeque;

use super::trampoline::Trampoline;
use crate::{
  observable::Observable,
  observer::{BoxedObserver, Observer},
  subscription::{SerialSubscription, Subscription},
};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Subscribe to `sources` one after another, emitting all values of each
  /// before starting the next.
  ///
  /// Completes once the last source completes. The first error is forwarded
  /// and the sources not yet started are never subscribed.
  ///
  /// ```rust
  /// use std::{cell::RefCell, convert::Infallible, rc::Rc};
  ///
  /// use minirx::prelude::*;
  ///
  /// let seen = Rc::new(RefCell::new(vec![]));
  /// let c_seen = seen.clone();
  /// Observable::<i32, Infallible>::concat([
  ///   Observable::from_iter([1, 2]),
  ///   Observable::empty(),
  ///   Observable::of(3),
  /// ])
  /// .subscribe(move |v| c_seen.borrow_mut().push(v));
  /// assert_eq!(*seen.borrow(), vec![1, 2, 3]);
  /// ```
  pub fn concat<I>(sources: I) -> Self
  where
    I: IntoIterator<Item = Observable<Item, Err>>,
  {
    let sources: Vec<_> = sources.into_iter().collect();
    Observable::new(move |observer| {
      let serial = SerialSubscription::default();
      ConcatObserver {
        observer,
        queue: sources.iter().cloned().collect(),
        serial: serial.clone(),
        trampoline: Trampoline::default(),
      }
      .subscribe_next();
      serial
    })
  }
}

/// State of one `concat` execution, handed from source to source.
struct ConcatObserver<Item, Err> {
  observer: BoxedObserver<Item, Err>,
  queue: VecDeque<Observable<Item, Err>>,
  serial: SerialSubscription,
  trampoline: Trampoline<Self>,
}

impl<Item: 'static, Err: 'static> ConcatObserver<Item, Err> {
  /// Move on to the next source. A source that ends synchronously hands
  /// its successor back to the loop that subscribed it.
  fn subscribe_next(self) {
    let trampoline = self.trampoline.clone();
    trampoline.run(self, Self::subscribe_front);
  }

  fn subscribe_front(mut self) {
    let Some(source) = self.queue.pop_front() else {
      let mut serial = self.serial.clone();
      self.observer.complete();
      serial.unsubscribe();
      return;
    };
    log::trace!("concat: subscribing next source, {} queued", self.queue.len());
    let serial = self.serial.clone();
    let generation = serial.next_generation();
    let inner = source.subscribe_with(self);
    serial.install(generation, inner);
  }
}

impl<Item: 'static, Err: 'static> Observer<Item, Err> for ConcatObserver<Item, Err> {
  fn next(&mut self, value: Item) { self.observer.next(value) }

  fn error(self, err: Err) {
    let mut serial = self.serial.clone();
    self.observer.error(err);
    serial.unsubscribe();
  }

  fn complete(self) {
    if !self.is_closed() {
      self.subscribe_next();
    }
  }

  fn is_closed(&self) -> bool { self.serial.is_closed() || self.observer.is_closed() }
}

#[cfg(test)]
mod tests {
  use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    rc::Rc,
  };

  use super::*;
  use crate::subscription::FnSubscription;

  fn counted(source: Observable<i32, &'static str>, count: &Rc<Cell<usize>>) -> Observable<i32, &'static str> {
    let count = count.clone();
    Observable::new(move |observer| {
      count.set(count.get() + 1);
      source.actual_subscribe(observer)
    })
  }

  #[test]
  fn sources_run_in_order() {
    let log = Rc::new(RefCell::new(vec![]));
    let (l1, l2) = (log.clone(), log.clone());
    let sub = Observable::<i32, Infallible>::concat(vec![
      Observable::from_iter([1, 2]),
      Observable::from_iter([3]),
      Observable::from_iter([4, 5]),
    ])
    .subscribe_all(move |v| l1.borrow_mut().push(v), |_| {}, move || l2.borrow_mut().push(-1));
    assert_eq!(*log.borrow(), vec![1, 2, 3, 4, 5, -1]);
    assert!(sub.is_closed());
  }

  #[test]
  fn no_sources_completes() {
    let completed = Rc::new(Cell::new(false));
    let c_completed = completed.clone();
    Observable::<i32, Infallible>::concat(vec![]).subscribe_all(|_| {}, |_| {}, move || c_completed.set(true));
    assert!(completed.get());
  }

  #[test]
  fn error_abandons_the_queue() {
    let subscribed_c = Rc::new(Cell::new(0));
    let log = Rc::new(RefCell::new(vec![]));
    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());

    Observable::concat([
      Observable::of(1),
      Observable::throw_err("b failed"),
      counted(Observable::of(3), &subscribed_c),
    ])
    .subscribe_all(
      move |v| l1.borrow_mut().push(format!("next {v}")),
      move |e| l2.borrow_mut().push(format!("error {e}")),
      move || l3.borrow_mut().push("complete".to_owned()),
    );
    assert_eq!(*log.borrow(), ["next 1", "error b failed"]);
    assert_eq!(subscribed_c.get(), 0);
  }

  #[test]
  fn error_after_partial_emission() {
    let teardowns = Rc::new(Cell::new(0));
    let subscribed_c = Rc::new(Cell::new(0));
    let b = {
      let teardowns = teardowns.clone();
      Observable::new(move |mut observer: BoxedObserver<i32, &'static str>| {
        observer.next(2);
        observer.next(3);
        observer.error("b failed");
        let teardowns = teardowns.clone();
        FnSubscription::new(move || teardowns.set(teardowns.get() + 1))
      })
    };
    let log = Rc::new(RefCell::new(vec![]));
    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());

    let mut sub = Observable::concat([Observable::of(1), b, counted(Observable::of(4), &subscribed_c)])
      .subscribe_all(
        move |v| l1.borrow_mut().push(format!("next {v}")),
        move |e| l2.borrow_mut().push(format!("error {e}")),
        move || l3.borrow_mut().push("complete".to_owned()),
      );
    assert_eq!(*log.borrow(), ["next 1", "next 2", "next 3", "error b failed"]);
    assert_eq!(subscribed_c.get(), 0);
    assert_eq!(teardowns.get(), 1);
    assert!(sub.is_closed());

    sub.unsubscribe();
    assert_eq!(teardowns.get(), 1);
  }

  #[test]
  fn long_run_of_synchronous_sources() {
    let count = Rc::new(Cell::new(0));
    let completed = Rc::new(Cell::new(false));
    let (c_count, c_completed) = (count.clone(), completed.clone());

    let sub = Observable::<usize, Infallible>::concat((0..10_000).map(Observable::of)).subscribe_all(
      move |v| {
        assert_eq!(v, c_count.get());
        c_count.set(v + 1);
      },
      |_| {},
      move || c_completed.set(true),
    );
    assert_eq!(count.get(), 10_000);
    assert!(completed.get());
    assert!(sub.is_closed());
  }

  #[test]
  fn unsubscribe_tears_down_only_the_active_source() {
    let log = Rc::new(RefCell::new(vec![]));
    let slot: Rc<RefCell<Option<BoxedObserver<i32, &str>>>> = Rc::default();
    let manual = {
      let (log, slot) = (log.clone(), slot.clone());
      Observable::new(move |observer| {
        log.borrow_mut().push("manual subscribed");
        *slot.borrow_mut() = Some(observer);
        let log = log.clone();
        FnSubscription::new(move || log.borrow_mut().push("manual torn down"))
      })
    };
    let later = Rc::new(Cell::new(0));

    let mut sub = Observable::concat([Observable::of(0), manual, counted(Observable::of(9), &later)]).subscribe(|_| {});
    assert_eq!(*log.borrow(), ["manual subscribed"]);

    sub.unsubscribe();
    sub.unsubscribe();
    assert_eq!(*log.borrow(), ["manual subscribed", "manual torn down"]);

    if let Some(o) = slot.borrow_mut().take() {
      o.complete();
    }
    assert_eq!(later.get(), 0);
  }
}
