use super::Observable;
use crate::{
  observer::Observer,
  scheduler::{Duration, Timer},
};

impl<Err: 'static> Observable<(), Err> {
  /// Emits `()` once `delay` has elapsed on `timer`, then completes.
  ///
  /// Unsubscribing before then cancels the timer, and nothing is delivered
  /// even if the backend could not abort it in time.
  pub fn timeout(delay: Duration, timer: impl Timer + 'static) -> Self {
    Self::new(move |observer| {
      timer.schedule_after(
        delay,
        Box::new(move || {
          let mut observer = observer;
          observer.next(());
          observer.complete();
        }),
      )
    })
  }
}
