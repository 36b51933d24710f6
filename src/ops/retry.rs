//! Retry operator.
//!
//! `retry(n)` resubscribes to the source up to `n` more times when it
//! errors. The previous attempt is unsubscribed before the next one starts,
//! so an attempt that errored asynchronously gets its resources released.
//!
//! ```rust
//! use std::{
//!   cell::{Cell, RefCell},
//!   rc::Rc,
//! };
//!
//! use minirx::prelude::*;
//!
//! let attempts = Rc::new(Cell::new(0));
//! let c_attempts = attempts.clone();
//! let flaky = Observable::<i32, &str>::new(move |mut observer| {
//!   c_attempts.set(c_attempts.get() + 1);
//!   if c_attempts.get() < 3 {
//!     observer.error("not yet");
//!   } else {
//!     observer.next(1);
//!     observer.complete();
//!   }
//! });
//!
//! let seen = Rc::new(RefCell::new(vec![]));
//! let c_seen = seen.clone();
//! flaky.retry(3).subscribe(move |v| c_seen.borrow_mut().push(v));
//! assert_eq!(*seen.borrow(), vec![1]);
//! assert_eq!(attempts.get(), 3);
//! ```

use super::trampoline::Trampoline;
use crate::{
  observable::Observable,
  observer::{BoxedObserver, Observer},
  subscription::{SerialSubscription, Subscription},
};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Resubscribe to the source up to `count` more times when it errors.
  ///
  /// `retry(0)` forwards the first error. Once the attempts are exhausted the
  /// last error is forwarded as is.
  pub fn retry(self, count: usize) -> Self {
    Observable::new(move |observer| {
      let serial = SerialSubscription::default();
      RetryObserver {
        source: self.clone(),
        observer,
        remaining: count,
        serial: serial.clone(),
        trampoline: Trampoline::default(),
      }
      .subscribe_attempt();
      serial
    })
  }
}

/// State of one `retry` execution, moved from attempt to attempt.
struct RetryObserver<Item, Err> {
  source: Observable<Item, Err>,
  observer: BoxedObserver<Item, Err>,
  remaining: usize,
  serial: SerialSubscription,
  trampoline: Trampoline<Self>,
}

impl<Item: 'static, Err: 'static> RetryObserver<Item, Err> {
  fn subscribe_attempt(self) {
    let trampoline = self.trampoline.clone();
    trampoline.run(self, Self::attempt);
  }

  fn attempt(self) {
    let serial = self.serial.clone();
    let source = self.source.clone();
    let generation = serial.next_generation();
    let attempt = source.subscribe_with(self);
    serial.install(generation, attempt);
  }
}

impl<Item: 'static, Err: 'static> Observer<Item, Err> for RetryObserver<Item, Err> {
  fn next(&mut self, value: Item) { self.observer.next(value) }

  fn error(self, err: Err) {
    if self.remaining == 0 {
      let mut serial = self.serial.clone();
      self.observer.error(err);
      serial.unsubscribe();
    } else if !self.is_closed() {
      log::debug!("retry: source errored, {} attempt(s) left", self.remaining);
      Self { remaining: self.remaining - 1, ..self }.subscribe_attempt();
    }
  }

  fn complete(self) {
    let mut serial = self.serial.clone();
    self.observer.complete();
    serial.unsubscribe();
  }

  fn is_closed(&self) -> bool { self.serial.is_closed() || self.observer.is_closed() }
}
