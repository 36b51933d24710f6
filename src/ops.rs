//! Operators.
//!
//! Each file adds methods to [`Observable`](crate::observable::Observable):
//! `map` and `filter` transform values; `retry`, `concat` and `observe_on`
//! control how executions are started and delivered; `share` multicasts one
//! execution through a [`Subject`](crate::subject::Subject).

pub mod concat;
pub mod filter;
pub mod map;
pub mod observe_on;
pub mod retry;
pub mod share;
mod trampoline;
