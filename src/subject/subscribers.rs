use smallvec::SmallVec;

use crate::observer::Observer;

/// Observers delivered to by one broadcast.
pub(crate) type Snapshot<Ob> = SmallVec<[Ob; 2]>;

/// ID-keyed observer set of a Subject.
///
/// Removal is by the ID handed out from [`add`](Self::add), so an observer
/// can be removed without comparing observers. `SmallVec` keeps the common
/// zero-to-two subscriber case off the heap.
pub(crate) struct Subscribers<Ob> {
  next_id: usize,
  items: SmallVec<[(usize, Ob); 2]>,
}

impl<Ob> Default for Subscribers<Ob> {
  fn default() -> Self { Self { next_id: 0, items: SmallVec::new() } }
}

impl<Ob> Subscribers<Ob> {
  /// Add an observer and return its unique ID.
  pub fn add(&mut self, observer: Ob) -> usize {
    let id = self.next_id;
    self.next_id += 1;
    self.items.push((id, observer));
    id
  }

  /// Remove an observer by ID.
  pub fn remove(&mut self, id: usize) -> Option<Ob> {
    self
      .items
      .iter()
      .position(|(i, _)| *i == id)
      .map(|pos| self.items.remove(pos).1)
  }

  #[inline]
  pub fn len(&self) -> usize { self.items.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.items.is_empty() }

  /// Remove every observer, in subscription order.
  pub fn drain(&mut self) -> Snapshot<Ob> { self.items.drain(..).map(|(_, ob)| ob).collect() }
}

impl<Ob: Clone> Subscribers<Ob> {
  /// Copy of the current set, so delivery can run without holding a borrow
  /// on the Subject.
  pub fn snapshot(&self) -> Snapshot<Ob> { self.items.iter().map(|(_, ob)| ob.clone()).collect() }
}

/// Deliver `value` to every observer.
///
/// The value is cloned for all observers except the last one, which
/// receives the moved value.
pub(crate) fn broadcast_value<Item, Err, Ob>(observers: Snapshot<Ob>, value: Item)
where
  Ob: Observer<Item, Err>,
  Item: Clone,
{
  let mut iter = observers.into_iter().peekable();
  while let Some(mut observer) = iter.next() {
    if iter.peek().is_some() {
      observer.next(value.clone());
    } else {
      observer.next(value);
      break;
    }
  }
}

pub(crate) fn broadcast_error<Item, Err, Ob>(observers: Snapshot<Ob>, err: Err)
where
  Ob: Observer<Item, Err>,
  Err: Clone,
{
  let mut iter = observers.into_iter().peekable();
  while let Some(observer) = iter.next() {
    if iter.peek().is_some() {
      observer.error(err.clone());
    } else {
      observer.error(err);
      break;
    }
  }
}

pub(crate) fn broadcast_complete<Item, Err, Ob>(observers: Snapshot<Ob>)
where
  Ob: Observer<Item, Err>,
{
  for observer in observers {
    observer.complete();
  }
}
