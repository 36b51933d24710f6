//! The `Observable` type and its factories.
//!
//! An [`Observable`] is a recipe for an execution: a subscribe function that
//! is handed an observer and returns the teardown of the execution it
//! started. It is cold, so every subscription runs the recipe again from
//! scratch. Cloning an observable only clones the `Rc` around that function.
//!
//! Factories live in their own files and add associated functions to
//! `Observable`:
//!
//! - [`of`](Observable::of), [`from_iter`](Observable::from_iter),
//!   [`empty`](Observable::empty), [`throw_err`](Observable::throw_err)
//! - [`timeout`](Observable::timeout)
//! - [`from_event`](Observable::from_event)
//!
//! Operators are in [`crate::ops`].

use std::rc::Rc;

use crate::{
  observer::{BoxedObserver, FnObserver, Observer},
  subscriber::Subscriber,
  subscription::{BoxedSubscription, Subscription, TupleSubscription},
};

mod from_event;
mod from_iter;
mod of;
mod timeout;
mod trivial;

type SubscribeFn<Item, Err> = dyn Fn(BoxedObserver<Item, Err>) -> BoxedSubscription;

/// A representation of any set of values over any amount of time.
pub struct Observable<Item, Err> {
  subscribe: Rc<SubscribeFn<Item, Err>>,
}

impl<Item, Err> Clone for Observable<Item, Err> {
  fn clone(&self) -> Self { Self { subscribe: self.subscribe.clone() } }
}

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// param `subscribe`: the function that is called each time the
  /// Observable is subscribed to. It is given the observer of that execution,
  /// to which values can be `next`ed, or `error`/`complete` called once to
  /// end it, and returns the execution's teardown.
  ///
  /// ```rust
  /// use std::{cell::RefCell, convert::Infallible, rc::Rc};
  ///
  /// use minirx::prelude::*;
  ///
  /// let numbers = Observable::<i32, Infallible>::new(|mut observer| {
  ///   observer.next(1);
  ///   observer.next(2);
  ///   observer.complete();
  /// });
  ///
  /// let seen = Rc::new(RefCell::new(vec![]));
  /// let c_seen = seen.clone();
  /// numbers.subscribe(move |v| c_seen.borrow_mut().push(v));
  /// assert_eq!(*seen.borrow(), vec![1, 2]);
  /// ```
  pub fn new<F, U>(subscribe: F) -> Self
  where
    F: Fn(BoxedObserver<Item, Err>) -> U + 'static,
    U: Subscription + 'static,
  {
    Self { subscribe: Rc::new(move |observer| BoxedSubscription::new(subscribe(observer))) }
  }

  /// Run the subscribe function with `observer` as is.
  ///
  /// No terminal guard is added and the returned subscription is the one
  /// the subscribe function produced. Operators that only transform values
  /// use this to stay a thin pass-through.
  #[inline]
  pub fn actual_subscribe(&self, observer: BoxedObserver<Item, Err>) -> BoxedSubscription {
    (self.subscribe)(observer)
  }

  /// Start an execution delivering to `observer`.
  ///
  /// The observer is guarded, so it sees nothing after the first `error` or
  /// `complete`, and nothing after the returned subscription is
  /// unsubscribed.
  pub fn subscribe_with(&self, observer: impl Observer<Item, Err> + 'static) -> BoxedSubscription {
    let subscriber = Subscriber::new(observer);
    let upstream = self.actual_subscribe(Box::new(subscriber.clone()));
    BoxedSubscription::new(TupleSubscription::new(subscriber, upstream))
  }

  /// Subscribe with a `next` handler only.
  ///
  /// An error reaching this subscription is reported to the unhandled-error
  /// hook.
  pub fn subscribe(&self, next: impl FnMut(Item) + 'static) -> BoxedSubscription {
    self.subscribe_with(FnObserver::new().on_next(next))
  }

  pub fn subscribe_all(
    &self,
    next: impl FnMut(Item) + 'static,
    error: impl FnOnce(Err) + 'static,
    complete: impl FnOnce() + 'static,
  ) -> BoxedSubscription {
    self.subscribe_with(FnObserver::new().on_next(next).on_error(error).on_complete(complete))
  }
}

#[cfg(test)]
mod tests {
  use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
  };

  use super::*;
  use crate::subscription::FnSubscription;

  #[test]
  fn each_subscription_is_a_new_execution() {
    let runs = Rc::new(Cell::new(0));
    let c_runs = runs.clone();
    let source = Observable::<i32, Infallible>::new(move |mut observer| {
      c_runs.set(c_runs.get() + 1);
      observer.next(c_runs.get());
      observer.complete();
    });

    let seen = Rc::new(RefCell::new(vec![]));
    let (s1, s2) = (seen.clone(), seen.clone());
    source.subscribe(move |v| s1.borrow_mut().push(v));
    source.clone().subscribe(move |v| s2.borrow_mut().push(v));
    assert_eq!(runs.get(), 2);
    assert_eq!(*seen.borrow(), vec![1, 2]);
  }

  #[test]
  fn terminal_closes_the_subscription() {
    let source = Observable::<i32, &str>::new(|mut observer| {
      observer.next(1);
      observer.complete();
    });
    let log = Rc::new(RefCell::new(vec![]));
    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());
    let sub = source.subscribe_all(
      move |v| l1.borrow_mut().push(format!("next {v}")),
      move |e| l2.borrow_mut().push(format!("error {e}")),
      move || l3.borrow_mut().push("complete".to_owned()),
    );
    assert_eq!(*log.borrow(), ["next 1", "complete"]);
    assert!(sub.is_closed());
  }

  #[test]
  fn unsubscribe_silences_and_tears_down_once() {
    let emit: Rc<RefCell<Option<BoxedObserver<i32, Infallible>>>> = Rc::default();
    let teardowns = Rc::new(Cell::new(0));
    let (c_emit, c_teardowns) = (emit.clone(), teardowns.clone());
    let source = Observable::new(move |observer| {
      *c_emit.borrow_mut() = Some(observer);
      let teardowns = c_teardowns.clone();
      FnSubscription::new(move || teardowns.set(teardowns.get() + 1))
    });

    let seen = Rc::new(RefCell::new(vec![]));
    let c_seen = seen.clone();
    let mut sub = source.subscribe(move |v| c_seen.borrow_mut().push(v));
    if let Some(o) = emit.borrow_mut().as_mut() {
      o.next(1);
    }
    assert!(!sub.is_closed());

    sub.unsubscribe();
    sub.unsubscribe();
    if let Some(o) = emit.borrow_mut().as_mut() {
      o.next(2);
    }
    assert_eq!(*seen.borrow(), vec![1]);
    assert_eq!(teardowns.get(), 1);
    assert!(sub.is_closed());
  }

  #[test]
  fn actual_subscribe_is_unguarded() {
    let source = Observable::<i32, Infallible>::new(|mut observer| {
      observer.next(1);
      FnSubscription::new(|| {})
    });
    let seen = Rc::new(Cell::new(0));
    let c_seen = seen.clone();
    let sub = source.actual_subscribe(Box::new(FnObserver::new().on_next(move |v| c_seen.set(v))));
    assert_eq!(seen.get(), 1);
    assert!(!sub.is_closed());
  }
}
