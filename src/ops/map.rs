use std::rc::Rc;

use crate::{
  observable::Observable,
  observer::{BoxedObserver, Observer},
};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Creates a new stream which calls a closure on each element and uses
  /// its return as the value.
  ///
  /// Errors and completion pass through untouched, and so does the upstream
  /// subscription.
  pub fn map<B, F>(self, func: F) -> Observable<B, Err>
  where
    B: 'static,
    F: Fn(Item) -> B + 'static,
  {
    let func = Rc::new(func);
    Observable::new(move |observer: BoxedObserver<B, Err>| {
      self.actual_subscribe(Box::new(MapObserver { observer, func: func.clone() }))
    })
  }
}

struct MapObserver<O, F> {
  observer: O,
  func: Rc<F>,
}

impl<Item, B, Err, O, F> Observer<Item, Err> for MapObserver<O, F>
where
  O: Observer<B, Err>,
  F: Fn(Item) -> B,
{
  fn next(&mut self, value: Item) { self.observer.next((self.func)(value)) }

  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
