//! The monad core: asynchronous optional values and fallible computations.
//!
//! This module provides the two dual monads and their shared error types:
//!
//! - [`AsyncOption`]: a value that may be absent (some / none)
//! - [`AsyncResult`]: a value or an error (Ok / Err)
//! - [`UnwrapError`]: returned when a monad is forced open in the wrong
//!   state
//! - [`SideEffectError`]: the normalized error channel of
//!   [`AsyncResult::exec`]
//!
//! Both monads wrap a deferred computation. Producers ([`some`], [`none`],
//! [`ok`], [`err`], `defer`, `from_future`) construct wrappers; combinators
//! chain without inspecting internal state; terminal operations (`.await`,
//! `fold`, `try_unwrap`, tag queries) are the only points where resolution
//! is forced.
//!
//! # Laziness
//!
//! ```rust,ignore
//! use async_monads::monad::some;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! #[tokio::main]
//! async fn main() {
//!     let counter = Arc::new(AtomicUsize::new(0));
//!     let effect = counter.clone();
//!
//!     let chain = some(5).inspect(move |_| {
//!         effect.fetch_add(1, Ordering::SeqCst);
//!     });
//!     // Nothing has run yet
//!     assert_eq!(counter.load(Ordering::SeqCst), 0);
//!
//!     assert_eq!(chain.await, Some(5));
//!     assert_eq!(counter.load(Ordering::SeqCst), 1);
//! }
//! ```
//!
//! # Aggregation
//!
//! [`AsyncOption::all`] collapses to none as soon as any member is none;
//! [`AsyncResult::all`] collects EVERY error payload in input order.
//! Members are evaluated concurrently, with output order fixed to input
//! order. The fixed-arity `zip`/`zip3` and `join`/`join3` variants combine
//! members of different payload types.

mod deferred;
mod error;
mod option;
mod result;

pub use error::{MonadKind, SideEffectError, UnwrapError, UnwrapExpectation};
pub use option::{AsyncOption, none, some};
pub use result::{AsyncResult, err, ok};
