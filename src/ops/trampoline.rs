use std::{
  cell::{Cell, RefCell},
  rc::Rc,
};

/// Drives the steps of a sequential operator from a loop instead of by
/// recursion.
///
/// A step that subscribes an inner execution can see that execution end
/// synchronously and ask for the next step before `subscribe` has returned.
/// That request is parked here and picked up by the loop already running, so
/// a long run of synchronous sources keeps a constant stack depth.
pub(crate) struct Trampoline<T>(Rc<TrampolineState<T>>);

struct TrampolineState<T> {
  running: Cell<bool>,
  parked: RefCell<Option<T>>,
}

impl<T> Default for Trampoline<T> {
  fn default() -> Self { Self(Rc::new(TrampolineState { running: Cell::new(false), parked: RefCell::new(None) })) }
}

impl<T> Clone for Trampoline<T> {
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> Trampoline<T> {
  /// Run `step(state)`, then every state parked while it ran.
  ///
  /// Called while a step is already running, this only parks `state`.
  pub fn run(&self, state: T, step: impl Fn(T)) {
    if self.0.running.get() {
      let previous = self.0.parked.replace(Some(state));
      debug_assert!(previous.is_none(), "one step parked more than one successor");
      return;
    }
    self.0.running.set(true);
    let mut state = Some(state);
    while let Some(current) = state {
      step(current);
      state = self.0.parked.take();
    }
    self.0.running.set(false);
  }
}
