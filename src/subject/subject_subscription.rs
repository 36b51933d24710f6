use super::{Entry, SubjectState};
use crate::{
  rc::{MutRc, RcDerefMut},
  subscription::Subscription,
};

/// Subscription handle for a Subject.
///
/// Unsubscribing closes the observer's guard first, so a broadcast already
/// in flight skips it, then removes it from the Subject's set.
pub struct SubjectSubscription<Item, Err> {
  pub(crate) state: MutRc<SubjectState<Item, Err>>,
  pub(crate) entry: Option<(usize, Entry<Item, Err>)>,
}

impl<Item, Err> Subscription for SubjectSubscription<Item, Err> {
  fn unsubscribe(&mut self) {
    let Some((id, mut subscriber)) = self.entry.take() else {
      return;
    };
    subscriber.unsubscribe();
    let removed = self.state.rc_deref_mut().subscribers.remove(id);
    drop(removed);
  }

  fn is_closed(&self) -> bool {
    self.entry.as_ref().map_or(true, |(_, subscriber)| Subscription::is_closed(subscriber))
  }
}
