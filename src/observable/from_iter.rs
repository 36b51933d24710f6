use super::Observable;
use crate::observer::Observer;

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Creates an observable that emits every value of `iter`, then completes.
  ///
  /// Emission is synchronous. It stops early once the observer is closed,
  /// e.g. when it unsubscribes from inside its own `next`.
  pub fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = Item> + Clone + 'static,
  {
    Self::new(move |mut observer| {
      for value in iter.clone() {
        if observer.is_closed() {
          return;
        }
        observer.next(value);
      }
      if !observer.is_closed() {
        observer.complete();
      }
    })
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, convert::Infallible, rc::Rc};

  use super::*;
  use crate::subscription::Subscription;

  #[test]
  fn emits_in_order_then_completes() {
    let log = Rc::new(RefCell::new(vec![]));
    let (l1, l2) = (log.clone(), log.clone());
    Observable::<i32, Infallible>::from_iter(1..=3).subscribe_all(
      move |v| l1.borrow_mut().push(v),
      |_| {},
      move || l2.borrow_mut().push(0),
    );
    assert_eq!(*log.borrow(), vec![1, 2, 3, 0]);
  }

  struct TakeThree(Rc<RefCell<Vec<u64>>>);

  impl Observer<u64, Infallible> for TakeThree {
    fn next(&mut self, value: u64) { self.0.borrow_mut().push(value); }

    fn error(self, _: Infallible) {}

    fn complete(self) { self.0.borrow_mut().push(u64::MAX); }

    fn is_closed(&self) -> bool { self.0.borrow().len() >= 3 }
  }

  #[test]
  fn stops_once_observer_is_closed() {
    let seen = Rc::new(RefCell::new(vec![]));
    let sub = Observable::<u64, Infallible>::from_iter(0..).subscribe_with(TakeThree(seen.clone()));
    assert_eq!(*seen.borrow(), vec![0, 1, 2]);
    assert!(!sub.is_closed());
  }
}
