//! Observer trait and implementations
//!
//! The Observer trait defines the consumer of data in the reactive pattern.
//! It provides three methods: next (for values), error (for errors), and
//! complete (for stream completion).

use crate::error::{report_unhandled, RxError};

// ============================================================================
// Observer Trait
// ============================================================================

/// Observer trait: The consumer of data in reactive programming
///
/// An Observer receives values, errors, and completion notifications from
/// an Observable.
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable
  fn next(&mut self, value: Item);

  /// Handle an error from the observable
  ///
  /// This consumes the observer, as no more values can be emitted after an
  /// error
  fn error(self, err: Err);

  /// Handle completion of the observable
  ///
  /// This consumes the observer, as no more values can be emitted after
  /// completion
  fn complete(self);

  /// Checks if the observer is closed.
  ///
  /// Synchronous sources (like `from_iter`) use this to stop emitting early
  /// once the downstream has unsubscribed.
  fn is_closed(&self) -> bool;
}

// ============================================================================
// DynObserver Trait - Object-safe Observer
// ============================================================================

/// Helper trait to enable object-safe Observers (Box<dyn Observer>)
///
/// Standard Observer trait is not object-safe because its terminal methods
/// take `self` by value. DynObserver mirrors the interface but adapts it for
/// vtables.
pub trait DynObserver<Item, Err> {
  fn box_next(&mut self, value: Item);
  fn box_error(self: Box<Self>, err: Err);
  fn box_complete(self: Box<Self>);
  fn box_is_closed(&self) -> bool;
}

impl<T, Item, Err> DynObserver<Item, Err> for T
where
  T: Observer<Item, Err>,
{
  fn box_next(&mut self, value: Item) { self.next(value); }
  fn box_error(self: Box<Self>, err: Err) { self.error(err); }
  fn box_complete(self: Box<Self>) { self.complete(); }
  fn box_is_closed(&self) -> bool { self.is_closed() }
}

/// Boxed observer handed to every subscribe function.
pub type BoxedObserver<Item, Err> = Box<dyn DynObserver<Item, Err>>;

impl<Item, Err> Observer<Item, Err> for BoxedObserver<Item, Err> {
  #[inline]
  fn next(&mut self, value: Item) { (**self).box_next(value) }

  #[inline]
  fn error(self, err: Err) { self.box_error(err) }

  #[inline]
  fn complete(self) { self.box_complete() }

  #[inline]
  fn is_closed(&self) -> bool { (**self).box_is_closed() }
}

// ============================================================================
// FnObserver - Closure adapter with optional channels
// ============================================================================

type NextFn<Item> = Box<dyn FnMut(Item)>;
type ErrorFn<Err> = Box<dyn FnOnce(Err)>;
type CompleteFn = Box<dyn FnOnce()>;

/// Observer assembled from optional closures.
///
/// Any channel left unset is a no-op, except `error`: an error that reaches
/// an `FnObserver` without an error handler is reported to the
/// unhandled-error hook instead of being silently dropped.
///
/// ```rust
/// use std::{cell::RefCell, rc::Rc};
///
/// use minirx::prelude::*;
///
/// let log = Rc::new(RefCell::new(vec![]));
/// let (l1, l2) = (log.clone(), log.clone());
/// let observer = FnObserver::new()
///   .on_next(move |v: i32| l1.borrow_mut().push(format!("next {v}")))
///   .on_complete(move || l2.borrow_mut().push("done".to_owned()));
///
/// Observable::<i32, ()>::of(7).subscribe_with(observer);
/// assert_eq!(*log.borrow(), ["next 7", "done"]);
/// ```
pub struct FnObserver<Item, Err> {
  next: Option<NextFn<Item>>,
  error: Option<ErrorFn<Err>>,
  complete: Option<CompleteFn>,
}

impl<Item, Err> FnObserver<Item, Err> {
  /// An observer that ignores every notification.
  pub fn new() -> Self { Self { next: None, error: None, complete: None } }

  pub fn on_next(mut self, next: impl FnMut(Item) + 'static) -> Self {
    self.next = Some(Box::new(next));
    self
  }

  pub fn on_error(mut self, error: impl FnOnce(Err) + 'static) -> Self {
    self.error = Some(Box::new(error));
    self
  }

  pub fn on_complete(mut self, complete: impl FnOnce() + 'static) -> Self {
    self.complete = Some(Box::new(complete));
    self
  }
}

impl<Item, Err> Default for FnObserver<Item, Err> {
  fn default() -> Self { Self::new() }
}

impl<Item, Err> Observer<Item, Err> for FnObserver<Item, Err> {
  fn next(&mut self, value: Item) {
    if let Some(next) = self.next.as_mut() {
      next(value);
    }
  }

  fn error(self, err: Err) {
    match self.error {
      Some(error) => error(err),
      None => report_unhandled(RxError::MissingErrorHandler),
    }
  }

  fn complete(self) {
    if let Some(complete) = self.complete {
      complete();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { false }
}

// ============================================================================
// Tests
// ============================================================================
