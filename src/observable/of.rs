use super::Observable;
use crate::observer::Observer;

impl<Item, Err> Observable<Item, Err>
where
  Item: Clone + 'static,
  Err: 'static,
{
  /// Creates an observable producing a single value.
  ///
  /// Emits `value` and completes synchronously, before `subscribe` returns.
  /// Never emits an error. Each subscription gets its own clone of `value`.
  ///
  /// ```rust
  /// use std::{cell::RefCell, convert::Infallible, rc::Rc};
  ///
  /// use minirx::prelude::*;
  ///
  /// let seen = Rc::new(RefCell::new(vec![]));
  /// let c_seen = seen.clone();
  /// Observable::<_, Infallible>::of(123).subscribe(move |v| c_seen.borrow_mut().push(v));
  /// assert_eq!(*seen.borrow(), vec![123]);
  /// ```
  pub fn of(value: Item) -> Self {
    Self::new(move |mut observer| {
      observer.next(value.clone());
      observer.complete();
    })
  }
}
