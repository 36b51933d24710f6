//! Prelude module for convenient imports.

#[cfg(feature = "futures-scheduler")]
pub use crate::scheduler::LocalPoolScheduler;
#[cfg(feature = "tokio-scheduler")]
pub use crate::scheduler::TokioLocalScheduler;
pub use crate::{
  error::{clear_unhandled_error_hook, set_unhandled_error_hook, RxError},
  event_target::{EventEmitter, EventTarget, Listener},
  observable::Observable,
  observer::{BoxedObserver, FnObserver, Observer},
  scheduler::{
    Duration, ImmediateScheduler, Scheduler, Task, TaskHandle, TaskState, TestScheduler, Timer,
  },
  subject::{Subject, SubjectSubscription},
  subscription::{
    BoxedSubscription, FnSubscription, SerialSubscription, Subscription, SubscriptionGuard,
    TupleSubscription,
  },
};
