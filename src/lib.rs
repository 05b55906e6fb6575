//! # async-monads
//!
//! Asynchronous `Option` and `Result` monads for modeling optional values
//! and fallible computations without exceptions.
//!
//! ## Overview
//!
//! The two core types, [`AsyncOption`](monad::AsyncOption) and
//! [`AsyncResult`](monad::AsyncResult), wrap a deferred computation that
//! eventually settles into a native `Option<T>` or `Result<T, E>`.
//! Combinators (`map`, `and_then`, `inspect`, ...) build a description of
//! work without suspending; nothing runs until a terminal operation -
//! `.await`, `fold`, `try_unwrap`, a tag query - forces resolution.
//!
//! - **Producers**: `some`, `none`, `ok`, `err`, `defer`, `from_future`
//! - **Combinators**: `map`, `and_then`, `map_err`, `inspect`, `exec`,
//!   conversions between the two monads
//! - **Aggregation**: `all`, `zip`/`zip3`, `join`/`join3` - evaluate many
//!   monadic values concurrently and combine them into one
//! - **Adapters** (feature `adapters`): narrow collaborator capabilities
//!   consuming the core - schema validation, key/value input-output, and
//!   leveled logging
//!
//! ## Feature Flags
//!
//! - `adapters`: collaborator traits and adapters (`serde`, `serde_json`,
//!   `tracing`); enabled by default
//!
//! ## Example
//!
//! ```rust,ignore
//! use async_monads::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let value = some(21)
//!         .map(|x| x * 2)
//!         .and_then(|x| if x > 0 { some(x) } else { none() })
//!         .await;
//!     assert_eq!(value, Some(42));
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and producer functions.
///
/// # Usage
///
/// ```rust
/// use async_monads::prelude::*;
/// ```
pub mod prelude {

    pub use crate::monad::*;

    #[cfg(feature = "adapters")]
    pub use crate::adapter::*;
}

pub mod monad;

#[cfg(feature = "adapters")]
pub mod adapter;
