use super::Subscription;

/// A type-erased subscription.
///
/// Every [`Observable`](crate::observable::Observable) subscribe function
/// returns one of these, so heterogeneous executions can be stored side by
/// side (the active attempt of a `retry`, the active source of a `concat`).
///
/// # Examples
///
/// ```rust
/// use minirx::prelude::*;
///
/// let subs: Vec<BoxedSubscription> = vec![BoxedSubscription::new(()), BoxedSubscription::new(())];
///
/// for mut sub in subs {
///   sub.unsubscribe();
/// }
/// ```
pub struct BoxedSubscription(Box<dyn Subscription>);

impl BoxedSubscription {
  /// Create a new boxed subscription from any subscription type.
  #[inline]
  pub fn new(subscription: impl Subscription + 'static) -> Self { Self(Box::new(subscription)) }
}

impl Subscription for BoxedSubscription {
  #[inline]
  fn unsubscribe(&mut self) { self.0.unsubscribe() }

  #[inline]
  fn is_closed(&self) -> bool { self.0.is_closed() }
}
