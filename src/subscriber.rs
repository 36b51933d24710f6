//! Per-execution guard around a downstream observer.
//!
//! A `Subscriber` is what an execution actually talks to. It owns the real
//! observer and a `closed` flag, and it is a cheap `Rc` handle so the same
//! guard can be given to the producer (as an observer) and to the returned
//! subscription (as a teardown).
//!
//! Once `error` or `complete` has been accepted, or `unsubscribe` has been
//! called, every later notification is dropped. This is what upholds the
//! "nothing after a terminal" contract even for producers that do not.
//!
//! A notification that arrives while the observer is running one of its own
//! callbacks (a `Subject` fed from inside its subscriber, say) is queued and
//! delivered, in arrival order, as soon as that callback returns. Terminals
//! are queued the same way, so they are never lost.

use std::{
  cell::{Cell, RefCell},
  collections::VecDeque,
  rc::Rc,
};

use crate::{observer::Observer, subscription::Subscription};

type Deferred<O> = Box<dyn FnOnce(&mut Option<O>)>;

pub struct Subscriber<O>(Rc<SubscriberInner<O>>);

struct SubscriberInner<O> {
  closed: Cell<bool>,
  observer: RefCell<Option<O>>,
  deferred: RefCell<VecDeque<Deferred<O>>>,
}

impl<O> Subscriber<O> {
  pub fn new(observer: O) -> Self {
    Self(Rc::new(SubscriberInner {
      closed: Cell::new(false),
      observer: RefCell::new(Some(observer)),
      deferred: RefCell::new(VecDeque::new()),
    }))
  }

  /// Run `notify` on the observer slot.
  ///
  /// If the slot is already borrowed further up the stack, `notify` is
  /// queued instead, and the frame holding the borrow runs it after its own
  /// notification. That frame also drops the observer once the guard is
  /// closed.
  fn deliver<F>(&self, notify: F)
  where
    F: FnOnce(&mut Option<O>) + 'static,
  {
    let Ok(mut slot) = self.0.observer.try_borrow_mut() else {
      log::trace!("observer busy, notification deferred");
      self.0.deferred.borrow_mut().push_back(Box::new(notify));
      return;
    };
    notify(&mut slot);
    loop {
      let deferred = self.0.deferred.borrow_mut().pop_front();
      match deferred {
        Some(notify) => notify(&mut slot),
        None => break,
      }
    }
    let finished = if self.0.closed.get() { slot.take() } else { None };
    drop(slot);
    drop(finished);
  }
}

impl<O> Clone for Subscriber<O> {
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<Item, Err, O> Observer<Item, Err> for Subscriber<O>
where
  O: Observer<Item, Err>,
  Item: 'static,
  Err: 'static,
{
  fn next(&mut self, value: Item) {
    if self.0.closed.get() {
      return;
    }
    self.deliver(move |slot| {
      if let Some(observer) = slot.as_mut() {
        observer.next(value);
      }
    });
  }

  fn error(self, err: Err) {
    if self.0.closed.replace(true) {
      return;
    }
    self.deliver(move |slot| {
      if let Some(observer) = slot.take() {
        observer.error(err);
      }
    });
  }

  fn complete(self) {
    if self.0.closed.replace(true) {
      return;
    }
    self.deliver(|slot| {
      if let Some(observer) = slot.take() {
        observer.complete();
      }
    });
  }

  fn is_closed(&self) -> bool {
    self.0.closed.get()
      || self.0.observer.try_borrow().map_or(false, |o| o.as_ref().map_or(true, |o| o.is_closed()))
  }
}

impl<O> Subscription for Subscriber<O> {
  fn unsubscribe(&mut self) {
    if self.0.closed.replace(true) {
      return;
    }
    let pending = std::mem::take(&mut *self.0.deferred.borrow_mut());
    drop(pending);
    // From inside the observer's own callback the observer stays in place
    // until that callback returns.
    let observer = self.0.observer.try_borrow_mut().ok().and_then(|mut slot| slot.take());
    drop(observer);
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.closed.get() }
}
