//! Subscription trait and the handles built on it.
//!
//! A subscription is the teardown side of one execution. Unsubscribing
//! releases whatever that execution acquired (timers, listeners, upstream
//! subscriptions) and is always safe to repeat.

mod boxed;
mod serial;
mod tuple;

pub use boxed::BoxedSubscription;
pub use serial::SerialSubscription;
pub use tuple::TupleSubscription;

/// Handle to an active execution.
pub trait Subscription {
  /// Stop the execution and release its resources.
  ///
  /// Calling this more than once must be a no-op after the first call.
  fn unsubscribe(&mut self);

  /// Whether the execution has finished or been unsubscribed.
  fn is_closed(&self) -> bool;

  /// Activates "RAII" behavior for this subscription. That means
  /// `unsubscribe()` will be called automatically as soon as the returned
  /// value goes out of scope.
  ///
  /// **Attention:** If you don't assign the return value to a variable,
  /// `unsubscribe()` is called immediately, which is probably not what you
  /// want!
  fn unsubscribe_when_dropped(self) -> SubscriptionGuard<Self>
  where
    Self: Sized,
  {
    SubscriptionGuard::new(self)
  }
}

/// The subscription of an execution that finished before anyone could hold
/// a handle to it.
impl Subscription for () {
  #[inline]
  fn unsubscribe(&mut self) {}

  #[inline]
  fn is_closed(&self) -> bool { true }
}

impl<T: Subscription + ?Sized> Subscription for Box<T> {
  #[inline]
  fn unsubscribe(&mut self) { (**self).unsubscribe() }

  #[inline]
  fn is_closed(&self) -> bool { (**self).is_closed() }
}

/// Subscription running a teardown closure exactly once.
pub struct FnSubscription<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> FnSubscription<F> {
  pub fn new(teardown: F) -> Self { Self(Some(teardown)) }
}

impl<F: FnOnce()> Subscription for FnSubscription<F> {
  fn unsubscribe(&mut self) {
    if let Some(teardown) = self.0.take() {
      teardown();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.is_none() }
}

/// An RAII implementation of a "scoped subscribed" of a subscription.
/// When this structure is dropped (falls out of scope), the subscription will
/// be unsubscribed.
///
/// If you want to drop it immediately, wrap it in its own scope
#[must_use]
pub struct SubscriptionGuard<T: Subscription>(T);

impl<T: Subscription> SubscriptionGuard<T> {
  /// Wraps an existing subscription with a guard to enable RAII behavior for
  /// it.
  pub fn new(subscription: T) -> SubscriptionGuard<T> { SubscriptionGuard(subscription) }
}

impl<T: Subscription> Drop for SubscriptionGuard<T> {
  #[inline]
  fn drop(&mut self) { self.0.unsubscribe() }
}
