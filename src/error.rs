//! Library-level error kinds and the unhandled-error hook.
//!
//! Errors that travel through an observable are the stream's own `Err`
//! payload and are never wrapped. `RxError` only describes failures of the
//! library plumbing itself: an error reaching an observer that supplied no
//! error handler, or a scheduler that could not spawn a task. Neither is
//! allowed to panic; both are reported through [`report_unhandled`].

use std::{cell::RefCell, rc::Rc};

use futures::task::SpawnError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RxError {
  #[error("an error reached an observer that has no error handler")]
  MissingErrorHandler,

  #[error("failed to spawn a scheduled task: {0}")]
  Spawn(#[from] SpawnError),
}

type Hook = Rc<dyn Fn(&RxError)>;

thread_local! {
  static UNHANDLED_ERROR_HOOK: RefCell<Option<Hook>> = const { RefCell::new(None) };
}

/// Install a hook that receives every [`RxError`] reported on this thread.
///
/// The hook replaces any previous one. Without a hook, unhandled errors are
/// only logged.
///
/// ```rust
/// use std::{cell::Cell, convert::Infallible, rc::Rc};
///
/// use minirx::prelude::*;
///
/// let seen = Rc::new(Cell::new(0));
/// let seen_c = seen.clone();
/// set_unhandled_error_hook(move |_| seen_c.set(seen_c.get() + 1));
///
/// Observable::<i32, &str>::throw_err("boom").subscribe(|_| {});
/// assert_eq!(seen.get(), 1);
/// clear_unhandled_error_hook();
/// ```
pub fn set_unhandled_error_hook(hook: impl Fn(&RxError) + 'static) {
  UNHANDLED_ERROR_HOOK.with(|h| *h.borrow_mut() = Some(Rc::new(hook)));
}

/// Remove the hook installed by [`set_unhandled_error_hook`].
pub fn clear_unhandled_error_hook() { UNHANDLED_ERROR_HOOK.with(|h| h.borrow_mut().take()); }

pub(crate) fn report_unhandled(err: RxError) {
  log::warn!("unhandled rx error: {err}");
  // Clone out of the cell so the hook may replace itself.
  let hook = UNHANDLED_ERROR_HOOK.with(|h| h.borrow().clone());
  if let Some(hook) = hook {
    hook(&err);
  }
}
