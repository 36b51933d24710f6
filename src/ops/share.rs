use crate::{observable::Observable, subject::Subject};

impl<Item, Err> Observable<Item, Err>
where
  Item: Clone + 'static,
  Err: Clone + 'static,
{
  /// Turns this cold observable into a hot one.
  ///
  /// The source is subscribed right away, exactly once, by a [`Subject`]
  /// that every subscriber of the returned observable attaches to. Values
  /// emitted before someone subscribes are not replayed; a subscriber that
  /// arrives after the source ended only receives that `complete` or
  /// `error`. The shared execution runs until the source ends.
  pub fn share(self) -> Self {
    let subject = Subject::new();
    self.subscribe_with(subject.clone());
    subject.observable()
  }
}
