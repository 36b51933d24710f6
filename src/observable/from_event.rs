use std::rc::Rc;

use super::Observable;
use crate::{
  event_target::{EventTarget, Listener},
  observer::Observer,
  subscriber::Subscriber,
  subscription::FnSubscription,
};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Emits every `event_name` event fired on `target`. Never errors or
  /// completes.
  ///
  /// Each subscription registers exactly one listener, and unsubscribing
  /// removes that same listener once.
  pub fn from_event<T>(target: T, event_name: impl Into<String>) -> Self
  where
    T: EventTarget<Item> + Clone + 'static,
  {
    let event_name = event_name.into();
    Self::new(move |observer| {
      let subscriber = Subscriber::new(observer);
      let listener: Listener<Item> = Rc::new(move |event| subscriber.clone().next(event));
      target.add_event_listener(&event_name, listener.clone());

      let (target, event_name) = (target.clone(), event_name.clone());
      FnSubscription::new(move || target.remove_event_listener(&event_name, &listener))
    })
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, convert::Infallible};

  use super::*;
  use crate::{event_target::EventEmitter, subscription::Subscription};

  #[test]
  fn forwards_events_until_unsubscribed() {
    let emitter = EventEmitter::<&str>::new();
    let seen = Rc::new(RefCell::new(vec![]));
    let c_seen = seen.clone();

    let mut sub = Observable::<&str, Infallible>::from_event(emitter.clone(), "click")
      .subscribe(move |e| c_seen.borrow_mut().push(e));
    assert_eq!(emitter.listener_count("click"), 1);

    emitter.emit("click", "a");
    emitter.emit("other", "ignored");
    emitter.emit("click", "b");
    sub.unsubscribe();
    emitter.emit("click", "c");

    assert_eq!(*seen.borrow(), ["a", "b"]);
  }

  #[test]
  fn double_unsubscribe_removes_listener_once() {
    let emitter = EventEmitter::<u8>::new();
    let source = Observable::<u8, Infallible>::from_event(emitter.clone(), "tick");
    let mut first = source.subscribe(|_| {});
    let _second = source.subscribe(|_| {});
    assert_eq!(emitter.listener_count("tick"), 2);

    first.unsubscribe();
    first.unsubscribe();
    assert_eq!(emitter.listener_count("tick"), 1);
    assert!(first.is_closed());
  }

  #[test]
  fn event_fired_from_inside_the_observer() {
    let emitter = EventEmitter::<u8>::new();
    let seen = Rc::new(RefCell::new(vec![]));
    let (c_emitter, c_seen) = (emitter.clone(), seen.clone());
    let _sub = Observable::<u8, Infallible>::from_event(emitter.clone(), "tick").subscribe(move |n| {
      c_seen.borrow_mut().push(n);
      if n == 1 {
        c_emitter.emit("tick", 2);
      }
    });

    emitter.emit("tick", 1);
    assert_eq!(*seen.borrow(), vec![1, 2]);
  }
}
