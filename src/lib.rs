//! # minirx: a small push-based reactive stream library
//!
//! Producers emit values, then at most one `error` or `complete`, to the
//! observers subscribed to them. Consumers compose operators and tear the
//! whole chain down with a single `unsubscribe`.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::{cell::RefCell, convert::Infallible, rc::Rc};
//!
//! use minirx::prelude::*;
//!
//! let seen = Rc::new(RefCell::new(vec![]));
//! let c_seen = seen.clone();
//!
//! Observable::<i32, Infallible>::from_iter([1, 2, 3, 4])
//!   .map(|v| v * 2)
//!   .filter(|v| *v > 4)
//!   .subscribe(move |v| c_seen.borrow_mut().push(v));
//!
//! assert_eq!(*seen.borrow(), vec![6, 8]);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | Cold stream: each subscription is a new execution |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`Subscription`] | Handle to cancel an active execution |
//! | [`Subject`] | Hot stream you push values into |
//! | [`Scheduler`] / [`Timer`] | Where deferred and delayed work runs |
//!
//! Everything is single-threaded (`Rc`-based).
//!
//! ## Feature Flags
//!
//! - **`futures-scheduler`** (default): `LocalPoolScheduler` over a futures
//!   `LocalPool`.
//! - **`timer`** (default): timer support for `LocalPoolScheduler`, via
//!   `futures-time`.
//! - **`tokio-scheduler`**: `TokioLocalScheduler` over a tokio `LocalSet`.
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Subscription`]: subscription::Subscription
//! [`Subject`]: subject::Subject
//! [`Scheduler`]: scheduler::Scheduler
//! [`Timer`]: scheduler::Timer

pub mod error;
pub mod event_target;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub mod scheduler;
pub mod subject;
pub mod subscriber;
pub mod subscription;

pub use prelude::*;

// Run the README code blocks as doctests.
#[cfg(doctest)]
mod readme {
  #![doc = include_str!("../README.md")]
}
