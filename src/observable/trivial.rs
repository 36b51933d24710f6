use super::Observable;
use crate::observer::Observer;

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Creates an observable that produces no values and completes
  /// immediately.
  pub fn empty() -> Self { Self::new(|observer| observer.complete()) }

  /// Creates an observable that emits no items, just terminates with `err`.
  pub fn throw_err(err: Err) -> Self
  where
    Err: Clone,
  {
    Self::new(move |observer| observer.error(err.clone()))
  }
}
