use std::rc::Rc;

use crate::{
  observable::Observable,
  observer::{BoxedObserver, Observer},
};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Emit only those items that pass `predicate`.
  pub fn filter<P>(self, predicate: P) -> Self
  where
    P: Fn(&Item) -> bool + 'static,
  {
    let predicate = Rc::new(predicate);
    Observable::new(move |observer: BoxedObserver<Item, Err>| {
      self.actual_subscribe(Box::new(FilterObserver { observer, predicate: predicate.clone() }))
    })
  }
}

struct FilterObserver<O, P> {
  observer: O,
  predicate: Rc<P>,
}

impl<Item, Err, O, P> Observer<Item, Err> for FilterObserver<O, P>
where
  O: Observer<Item, Err>,
  P: Fn(&Item) -> bool,
{
  fn next(&mut self, value: Item) {
    if (self.predicate)(&value) {
      self.observer.next(value)
    }
  }

  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
