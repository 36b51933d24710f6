//! Event sources that [`Observable::from_event`](crate::observable::Observable::from_event)
//! can listen to.

use std::{collections::HashMap, rc::Rc};

use crate::rc::{MutRc, RcDeref, RcDerefMut};

/// A registered event callback. Listeners are compared by `Rc` identity.
pub type Listener<E> = Rc<dyn Fn(E)>;

/// Anything that can register and unregister named event listeners.
pub trait EventTarget<E> {
  fn add_event_listener(&self, event_name: &str, listener: Listener<E>);

  /// Remove `listener` if it is registered for `event_name`. The listener is
  /// matched by pointer identity with the one that was added.
  fn remove_event_listener(&self, event_name: &str, listener: &Listener<E>);
}

/// In-process [`EventTarget`]. Clones share the same listener table.
///
/// ```rust
/// use std::{cell::RefCell, convert::Infallible, rc::Rc};
///
/// use minirx::prelude::*;
///
/// let emitter = EventEmitter::<u32>::new();
/// let clicks = Rc::new(RefCell::new(vec![]));
/// let c_clicks = clicks.clone();
///
/// let mut sub = Observable::<u32, Infallible>::from_event(emitter.clone(), "click")
///   .subscribe(move |x| c_clicks.borrow_mut().push(x));
/// emitter.emit("click", 1);
/// sub.unsubscribe();
/// emitter.emit("click", 2);
///
/// assert_eq!(*clicks.borrow(), vec![1]);
/// assert_eq!(emitter.listener_count("click"), 0);
/// ```
pub struct EventEmitter<E> {
  listeners: MutRc<HashMap<String, Vec<Listener<E>>>>,
}

impl<E> EventEmitter<E> {
  pub fn new() -> Self { Self::default() }

  pub fn listener_count(&self, event_name: &str) -> usize {
    self.listeners.rc_deref().get(event_name).map_or(0, Vec::len)
  }

  /// Call every listener of `event_name`, in registration order.
  ///
  /// Listeners added or removed by a listener take effect from the next
  /// `emit`.
  pub fn emit(&self, event_name: &str, event: E)
  where
    E: Clone,
  {
    let listeners = match self.listeners.rc_deref().get(event_name) {
      Some(listeners) => listeners.clone(),
      None => return,
    };
    for listener in listeners {
      listener(event.clone());
    }
  }
}

impl<E> Default for EventEmitter<E> {
  fn default() -> Self { Self { listeners: MutRc::own(HashMap::new()) } }
}

impl<E> Clone for EventEmitter<E> {
  fn clone(&self) -> Self { Self { listeners: self.listeners.clone() } }
}

impl<E> EventTarget<E> for EventEmitter<E> {
  fn add_event_listener(&self, event_name: &str, listener: Listener<E>) {
    self
      .listeners
      .rc_deref_mut()
      .entry(event_name.to_owned())
      .or_default()
      .push(listener);
  }

  fn remove_event_listener(&self, event_name: &str, listener: &Listener<E>) {
    let mut table = self.listeners.rc_deref_mut();
    if let Some(listeners) = table.get_mut(event_name) {
      if let Some(pos) = listeners.iter().position(|l| Rc::ptr_eq(l, listener)) {
        listeners.remove(pos);
      }
      if listeners.is_empty() {
        table.remove(event_name);
      }
    }
  }
}
