use super::{BoxedSubscription, Subscription};
use crate::rc::{MutRc, RcDeref, RcDerefMut};

/// Holds the subscription of whichever inner execution is currently active.
///
/// Operators that run executions one after another (`retry`, `concat`) start
/// each one with [`next_generation`](Self::next_generation), which tears down
/// the previous execution, and then [`install`](Self::install) the new
/// subscription once `subscribe` returns. An inner execution may end, or the
/// whole serial be unsubscribed, before its own `subscribe` call has
/// returned; the generation and closed checks make such a late handle get
/// unsubscribed instead of overwriting a successor's.
#[derive(Clone, Default)]
pub struct SerialSubscription(MutRc<SerialState>);

#[derive(Default)]
struct SerialState {
  closed: bool,
  generation: usize,
  current: Option<BoxedSubscription>,
}

impl SerialSubscription {
  /// Tear down the active execution and open a new generation for the next.
  pub fn next_generation(&self) -> usize {
    let previous = {
      let mut state = self.0.rc_deref_mut();
      state.generation += 1;
      state.current.take()
    };
    if let Some(mut previous) = previous {
      previous.unsubscribe();
    }
    self.0.rc_deref().generation
  }

  /// Store `subscription` as the active one if `generation` is still current.
  ///
  /// A stale generation, or a serial that was already unsubscribed, gets the
  /// subscription torn down immediately.
  pub fn install(&self, generation: usize, subscription: impl Subscription + 'static) {
    let mut subscription = BoxedSubscription::new(subscription);
    {
      let mut state = self.0.rc_deref_mut();
      if !state.closed && state.generation == generation {
        state.current = Some(subscription);
        return;
      }
    }
    subscription.unsubscribe();
  }
}

impl Subscription for SerialSubscription {
  fn unsubscribe(&mut self) {
    let current = {
      let mut state = self.0.rc_deref_mut();
      if state.closed {
        return;
      }
      state.closed = true;
      state.current.take()
    };
    if let Some(mut current) = current {
      current.unsubscribe();
    }
  }

  fn is_closed(&self) -> bool { self.0.rc_deref().closed }
}
