//! Subject: an observer and an observable at once.
//!
//! A [`Subject`] multicasts whatever it is fed to every observer currently
//! subscribed to it. It is hot: observers only see notifications sent after
//! they subscribed. Once it has seen `error` or `complete` it is stopped:
//! the set is cleared, further `next` calls are ignored, and a late
//! subscriber immediately receives that same terminal notification.
//!
//! ```rust
//! use std::{cell::RefCell, convert::Infallible, rc::Rc};
//!
//! use minirx::prelude::*;
//!
//! let mut subject = Subject::<i32, Infallible>::new();
//! let seen = Rc::new(RefCell::new(vec![]));
//! let (a, b) = (seen.clone(), seen.clone());
//!
//! subject.subscribe(move |v| a.borrow_mut().push(("a", v)));
//! subject.next(1);
//! subject.subscribe(move |v| b.borrow_mut().push(("b", v)));
//! subject.next(2);
//!
//! assert_eq!(*seen.borrow(), [("a", 1), ("a", 2), ("b", 2)]);
//! ```

mod subject_subscription;
mod subscribers;

pub use subject_subscription::SubjectSubscription;
use subscribers::{broadcast_complete, broadcast_error, broadcast_value, Subscribers};

use crate::{
  observable::Observable,
  observer::{BoxedObserver, FnObserver, Observer},
  rc::{MutRc, RcDeref, RcDerefMut},
  subscriber::Subscriber,
};

pub(crate) type Entry<Item, Err> = Subscriber<BoxedObserver<Item, Err>>;

pub(crate) struct SubjectState<Item, Err> {
  subscribers: Subscribers<Entry<Item, Err>>,
  terminal: Option<Terminal<Err>>,
}

#[derive(Clone)]
enum Terminal<Err> {
  Completed,
  Errored(Err),
}

pub struct Subject<Item, Err>(MutRc<SubjectState<Item, Err>>);

impl<Item, Err> Subject<Item, Err> {
  pub fn new() -> Self { Self(MutRc::own(SubjectState { subscribers: Subscribers::default(), terminal: None })) }

  /// Number of observers currently subscribed.
  pub fn subscriber_count(&self) -> usize { self.0.rc_deref().subscribers.len() }

  pub fn is_empty(&self) -> bool { self.0.rc_deref().subscribers.is_empty() }

  /// Whether the subject has seen `error` or `complete`.
  pub fn is_stopped(&self) -> bool { self.0.rc_deref().terminal.is_some() }
}

impl<Item, Err> Default for Subject<Item, Err> {
  fn default() -> Self { Self::new() }
}

impl<Item, Err> Clone for Subject<Item, Err> {
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<Item: 'static, Err: Clone + 'static> Subject<Item, Err> {
  /// Add `observer` to the set. The returned subscription removes it.
  pub fn subscribe_with(&self, observer: impl Observer<Item, Err> + 'static) -> SubjectSubscription<Item, Err> {
    let terminal = self.0.rc_deref().terminal.clone();
    let entry = match terminal {
      Some(Terminal::Completed) => {
        log::trace!("subject: late subscriber on a completed subject");
        observer.complete();
        None
      }
      Some(Terminal::Errored(err)) => {
        log::trace!("subject: late subscriber on an errored subject");
        observer.error(err);
        None
      }
      None => {
        let boxed: BoxedObserver<Item, Err> = Box::new(observer);
        let subscriber = Subscriber::new(boxed);
        let id = self.0.rc_deref_mut().subscribers.add(subscriber.clone());
        Some((id, subscriber))
      }
    };
    SubjectSubscription { state: self.0.clone(), entry }
  }

  pub fn subscribe(&self, next: impl FnMut(Item) + 'static) -> SubjectSubscription<Item, Err> {
    self.subscribe_with(FnObserver::new().on_next(next))
  }

  pub fn subscribe_all(
    &self,
    next: impl FnMut(Item) + 'static,
    error: impl FnOnce(Err) + 'static,
    complete: impl FnOnce() + 'static,
  ) -> SubjectSubscription<Item, Err> {
    self.subscribe_with(FnObserver::new().on_next(next).on_error(error).on_complete(complete))
  }

  /// The observable face of this subject, for use with operators.
  pub fn observable(&self) -> Observable<Item, Err> {
    let subject = self.clone();
    Observable::new(move |observer: BoxedObserver<Item, Err>| subject.subscribe_with(observer))
  }
}

impl<Item, Err> Observer<Item, Err> for Subject<Item, Err>
where
  Item: Clone + 'static,
  Err: Clone + 'static,
{
  fn next(&mut self, value: Item) {
    let observers = {
      let state = self.0.rc_deref();
      if state.terminal.is_some() {
        return;
      }
      state.subscribers.snapshot()
    };
    broadcast_value::<Item, Err, _>(observers, value);
  }

  fn error(self, err: Err) {
    let observers = {
      let mut state = self.0.rc_deref_mut();
      if state.terminal.is_some() {
        return;
      }
      state.terminal = Some(Terminal::Errored(err.clone()));
      state.subscribers.drain()
    };
    broadcast_error::<Item, Err, _>(observers, err);
  }

  fn complete(self) {
    let observers = {
      let mut state = self.0.rc_deref_mut();
      if state.terminal.is_some() {
        return;
      }
      state.terminal = Some(Terminal::Completed);
      state.subscribers.drain()
    };
    broadcast_complete::<Item, Err, _>(observers);
  }

  fn is_closed(&self) -> bool { self.is_stopped() }
}
