use super::Subscription;

/// Two subscriptions torn down together, first then second.
///
/// `Observable::subscribe_with` pairs the downstream guard with the upstream
/// subscription this way, so unsubscribing silences the observer before the
/// producer is asked to stop.
pub struct TupleSubscription<U1, U2> {
  unsub1: U1,
  unsub2: U2,
}

impl<U1, U2> TupleSubscription<U1, U2> {
  pub fn new(unsub1: U1, unsub2: U2) -> Self { TupleSubscription { unsub1, unsub2 } }
}

impl<U1, U2> Subscription for TupleSubscription<U1, U2>
where
  U1: Subscription,
  U2: Subscription,
{
  fn unsubscribe(&mut self) {
    self.unsub1.unsubscribe();
    self.unsub2.unsubscribe();
  }

  fn is_closed(&self) -> bool {
    // Return true only when both subscriptions are closed
    self.unsub1.is_closed() && self.unsub2.is_closed()
  }
}
