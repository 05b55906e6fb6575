//! `AsyncResult` - an asynchronous fallible computation.
//!
//! `AsyncResult<T, E>` represents a value or an error, asynchronous by
//! construction: the wrapper holds a deferred computation that eventually
//! settles into a native `Result<T, E>`. The error payload is fully
//! generic - domain errors travel as data through the chain and are only
//! surfaced at an explicit unwrap.
//!
//! # impl `Future`
//!
//! `AsyncResult<T, E>` implements `Future` with `Output = Result<T, E>`,
//! so awaiting the wrapper is the native projection: it yields whichever
//! payload is present and never fails.
//!
//! # Side effects
//!
//! [`inspect`](AsyncResult::inspect) runs an effect on the Ok channel and
//! does not catch panics; [`exec`](AsyncResult::exec) is the
//! catching counterpart, normalizing whatever the effect failed with into
//! a [`SideEffectError`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use async_monads::monad::{ok, err};
//!
//! #[tokio::main]
//! async fn main() {
//!     let value = ok::<_, String>(20).map(|x| x + 1).await;
//!     assert_eq!(value, Ok(21));
//!
//!     // and_then short-circuits: the closure never runs on Err
//!     let failed = err::<i32, _>("broken").and_then(|x| ok(x * 2)).await;
//!     assert_eq!(failed, Err("broken"));
//! }
//! ```

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use pin_project_lite::pin_project;

use super::deferred::Deferred;
use super::error::{MonadKind, SideEffectError, UnwrapError, UnwrapExpectation};
use super::option::AsyncOption;

pin_project! {
    /// A value or an error, asynchronous by construction.
    ///
    /// The wrapper owns a deferred computation settling into
    /// `Result<T, E>`. It is never mutated after construction; every
    /// combinator consumes the parent and returns an independent child.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::ok;
    ///
    /// let value = ok::<_, String>(5).map(|x| x + 1).await;
    /// assert_eq!(value, Ok(6));
    /// ```
    pub struct AsyncResult<T, E> {
        #[pin]
        pub(crate) inner: Deferred<Result<T, E>>,
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<T, E> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Normalizes a future of a result monad into a result monad.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::{ok, AsyncResult};
    ///
    /// let pending = async { ok::<_, String>(72) };
    /// let result = AsyncResult::from_future(pending);
    /// assert_eq!(result.await, Ok(72));
    /// ```
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Self> + Send + 'static,
    {
        Self {
            inner: Deferred::defer(move || async move { future.await.await }),
        }
    }

    /// Invokes a deferred-producing closure and normalizes its result.
    ///
    /// The closure is not called until the wrapper is first polled.
    pub fn defer<F, Fut>(thunk: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Self> + Send + 'static,
    {
        Self {
            inner: Deferred::defer(move || async move { thunk().await.await }),
        }
    }
}

// =============================================================================
// Tag Queries (Terminal)
// =============================================================================

impl<T, E> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Resolves the wrapper and reports whether it settled as Ok.
    ///
    /// Never fails.
    pub async fn is_ok(self) -> bool {
        self.await.is_ok()
    }

    /// Resolves the wrapper and reports whether it settled as Err.
    ///
    /// Never fails.
    pub async fn is_err(self) -> bool {
        self.await.is_err()
    }
}

// =============================================================================
// Functor Operations
// =============================================================================

impl<T, E> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Transforms the Ok payload; propagates Err unchanged.
    ///
    /// The mapper is never invoked for Err.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::ok;
    ///
    /// let value = ok::<_, String>(21).map(|x| x * 2).await;
    /// assert_eq!(value, Ok(42));
    /// ```
    #[must_use]
    pub fn map<U, F>(self, mapper: F) -> AsyncResult<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move { self.await.map(mapper) }),
        }
    }

    /// Like [`map`](Self::map), with an asynchronous mapper.
    #[must_use]
    pub fn map_async<U, F, Fut>(self, mapper: F) -> AsyncResult<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move {
                match self.await {
                    Ok(value) => Ok(mapper(value).await),
                    Err(error) => Err(error),
                }
            }),
        }
    }

    /// Transforms the Err payload; propagates Ok unchanged.
    ///
    /// The mapper is never invoked for Ok.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::err;
    ///
    /// let error = err::<i32, _>(404).map_err(|code| format!("status {code}")).await;
    /// assert_eq!(error, Err("status 404".to_string()));
    /// ```
    #[must_use]
    pub fn map_err<Y, F>(self, mapper: F) -> AsyncResult<T, Y>
    where
        Y: Send + 'static,
        F: FnOnce(E) -> Y + Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move { self.await.map_err(mapper) }),
        }
    }

    /// Like [`map_err`](Self::map_err), with an asynchronous mapper.
    #[must_use]
    pub fn map_err_async<Y, F, Fut>(self, mapper: F) -> AsyncResult<T, Y>
    where
        Y: Send + 'static,
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Y> + Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move {
                match self.await {
                    Ok(value) => Ok(value),
                    Err(error) => Err(mapper(error).await),
                }
            }),
        }
    }
}

// =============================================================================
// Monad Operations
// =============================================================================

impl<T, E> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Chains into another result monad when Ok.
    ///
    /// Short-circuits: the binder is never called on Err, and if the
    /// produced result settles as Err, that Err is the final state.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::{ok, err};
    ///
    /// let value = ok::<_, String>(10).and_then(|x| ok(x * 2)).await;
    /// assert_eq!(value, Ok(20));
    ///
    /// let failed = ok::<i32, _>(10).and_then(|_| err("downstream")).await;
    /// assert_eq!(failed, Err("downstream"));
    /// ```
    #[must_use]
    pub fn and_then<U, F>(self, binder: F) -> AsyncResult<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> AsyncResult<U, E> + Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move {
                match self.await {
                    Ok(value) => binder(value).await,
                    Err(error) => Err(error),
                }
            }),
        }
    }
}

// =============================================================================
// Terminal Reducers
// =============================================================================

impl<T, E> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Terminal reducer: maps both channels to a unified value.
    ///
    /// Exactly one branch runs.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::ok;
    ///
    /// let described = ok::<_, String>(5)
    ///     .fold(|v| format!("value {v}"), |e| format!("error {e}"))
    ///     .await;
    /// assert_eq!(described, "value 5");
    /// ```
    pub async fn fold<U, S, F>(self, on_ok: S, on_err: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self.await {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    /// Like [`fold`](Self::fold), with asynchronous branches.
    pub async fn fold_async<U, S, SFut, F, FFut>(self, on_ok: S, on_err: F) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = U>,
    {
        match self.await {
            Ok(value) => on_ok(value).await,
            Err(error) => on_err(error).await,
        }
    }
}

// =============================================================================
// Side Effects
// =============================================================================

impl<T, E> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Runs a side effect on the Ok payload; passes the wrapper through
    /// equivalent (same channel and value).
    ///
    /// The effect is never invoked for Err. Panics inside the effect are
    /// NOT caught - they unwind at the awaiting terminal. [`exec`](Self::exec)
    /// is the catching counterpart.
    #[must_use]
    pub fn inspect<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self {
            inner: Deferred::defer(move || async move {
                let settled = self.await;
                if let Ok(ref value) = settled {
                    effect(value);
                }
                settled
            }),
        }
    }

    /// Like [`inspect`](Self::inspect), with an asynchronous effect.
    ///
    /// The effect receives a reference and must assemble its future from
    /// what it copies out synchronously.
    #[must_use]
    pub fn inspect_async<F, Fut>(self, effect: F) -> Self
    where
        F: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            inner: Deferred::defer(move || async move {
                let settled = self.await;
                if let Ok(ref value) = settled {
                    effect(value).await;
                }
                settled
            }),
        }
    }

    /// Runs a side effect on the Ok payload, capturing its failures.
    ///
    /// The caught-exception counterpart of [`inspect`](Self::inspect):
    ///
    /// - an `Err` returned by the effect becomes the new Err state;
    /// - panics raised inside the effect (while producing the future or
    ///   while it runs) are caught; string payloads keep their text, other
    ///   payloads collapse to a fixed message;
    /// - on success the original Ok value passes through unchanged;
    /// - when the wrapper was already Err, the effect is never invoked and
    ///   the existing error is normalized through its `Display` output.
    ///
    /// The output error channel is always [`SideEffectError`], regardless
    /// of the original `E`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::{ok, err, SideEffectError};
    ///
    /// let failed = ok::<_, String>(5)
    ///     .exec(|_| async { Err(SideEffectError::msg("boom")) })
    ///     .await;
    /// assert_eq!(failed.unwrap_err().message(), "boom");
    ///
    /// let already = err::<i32, _>(5).exec(|_| async { Ok(()) }).await;
    /// assert_eq!(already.unwrap_err().message(), "5");
    /// ```
    #[must_use]
    pub fn exec<F, Fut>(self, effect: F) -> AsyncResult<T, SideEffectError>
    where
        E: std::fmt::Display,
        F: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), SideEffectError>> + Send + 'static,
    {
        self.exec_with(effect, |error| SideEffectError::msg(error.to_string()))
    }

    /// Like [`exec`](Self::exec), with an explicit mapper for a
    /// pre-existing Err payload.
    #[must_use]
    pub fn exec_with<F, Fut, M>(self, effect: F, mapper: M) -> AsyncResult<T, SideEffectError>
    where
        F: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), SideEffectError>> + Send + 'static,
        M: FnOnce(E) -> SideEffectError + Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move {
                match self.await {
                    Err(error) => Err(mapper(error)),
                    Ok(value) => {
                        // Catch panics both in the closure body (before the
                        // future exists) and during the future's execution.
                        let invocation =
                            std::panic::catch_unwind(AssertUnwindSafe(|| effect(&value)));
                        let outcome = match invocation {
                            Ok(future) => AssertUnwindSafe(future).catch_unwind().await,
                            Err(panic) => Err(panic),
                        };
                        match outcome {
                            Ok(Ok(())) => Ok(value),
                            Ok(Err(failure)) => Err(failure),
                            Err(panic) => Err(SideEffectError::from_panic(panic)),
                        }
                    }
                }
            }),
        }
    }
}

// =============================================================================
// Unwrap Operations (Terminal)
// =============================================================================

impl<T, E> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Forces the Ok channel open, failing when the wrapper settled as Err.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] with expectation "Expected Ok got Error"
    /// when the wrapper is Err.
    pub async fn try_unwrap(self) -> Result<T, UnwrapError> {
        self.await
            .map_err(|_| UnwrapError::new(MonadKind::Result, UnwrapExpectation::OkGotError))
    }

    /// Forces the Err channel open, failing when the wrapper settled as Ok.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] with expectation "Expected Err got Ok"
    /// when the wrapper is Ok.
    pub async fn try_unwrap_err(self) -> Result<E, UnwrapError> {
        match self.await {
            Ok(_) => Err(UnwrapError::new(
                MonadKind::Result,
                UnwrapExpectation::ErrGotOk,
            )),
            Err(error) => Ok(error),
        }
    }

    /// Returns the Ok payload, or the provided default when Err.
    pub async fn unwrap_or(self, default: T) -> T {
        self.await.unwrap_or(default)
    }

    /// Returns the Ok payload, or evaluates the closure on the Err payload.
    pub async fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.await.unwrap_or_else(default)
    }
}

// =============================================================================
// Projections to AsyncOption
// =============================================================================

impl<T, E> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Projects the Ok channel into an option monad; Err becomes none.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::{ok, err};
    ///
    /// assert_eq!(ok::<_, String>(5).ok().await, Some(5));
    /// assert_eq!(err::<i32, _>("broken").ok().await, None);
    /// ```
    #[must_use]
    pub fn ok(self) -> AsyncOption<T> {
        AsyncOption {
            inner: Deferred::defer(move || async move { self.await.ok() }),
        }
    }

    /// Projects the Err channel into an option monad; Ok becomes none.
    #[must_use]
    pub fn err(self) -> AsyncOption<E> {
        AsyncOption {
            inner: Deferred::defer(move || async move { self.await.err() }),
        }
    }
}

// =============================================================================
// Aggregation
// =============================================================================

impl<T, E> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Combines many result monads: Ok of all values when every member is
    /// Ok, otherwise Err of EVERY error payload.
    ///
    /// Members are evaluated concurrently - all deferred computations are
    /// initiated before any is awaited - and both output vectors preserve
    /// input order regardless of completion order. Members that succeeded
    /// contribute nothing to the error list.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::{ok, err, AsyncResult};
    ///
    /// let combined = AsyncResult::all([ok::<_, String>(1), ok(2)]).await;
    /// assert_eq!(combined, Ok(vec![1, 2]));
    ///
    /// let failed = AsyncResult::all([ok(1), err("e1"), ok(3), err("e2")]).await;
    /// assert_eq!(failed, Err(vec!["e1", "e2"]));
    /// ```
    #[must_use]
    pub fn all<I>(results: I) -> AsyncResult<Vec<T>, Vec<E>>
    where
        I: IntoIterator<Item = Self>,
    {
        let members: Vec<Self> = results.into_iter().collect();
        AsyncResult {
            inner: Deferred::defer(move || async move {
                let settled = futures::future::join_all(members).await;
                let mut values = Vec::with_capacity(settled.len());
                let mut errors = Vec::new();
                for outcome in settled {
                    match outcome {
                        Ok(value) => values.push(value),
                        Err(error) => errors.push(error),
                    }
                }
                if errors.is_empty() {
                    Ok(values)
                } else {
                    Err(errors)
                }
            }),
        }
    }

    /// Combines two result monads of different value types into one.
    ///
    /// Both members are awaited concurrently. All-Ok produces the value
    /// pair; otherwise every error payload is collected in positional
    /// order.
    #[must_use]
    pub fn join<U>(self, other: AsyncResult<U, E>) -> AsyncResult<(T, U), Vec<E>>
    where
        U: Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move {
                let (first, second) = futures::join!(self, other);
                match (first, second) {
                    (Ok(first), Ok(second)) => Ok((first, second)),
                    (first, second) => {
                        Err([first.err(), second.err()].into_iter().flatten().collect())
                    }
                }
            }),
        }
    }

    /// Combines three result monads of different value types into one.
    #[must_use]
    pub fn join3<U, V>(
        self,
        second: AsyncResult<U, E>,
        third: AsyncResult<V, E>,
    ) -> AsyncResult<(T, U, V), Vec<E>>
    where
        U: Send + 'static,
        V: Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move {
                let (first, second, third) = futures::join!(self, second, third);
                match (first, second, third) {
                    (Ok(first), Ok(second), Ok(third)) => Ok((first, second, third)),
                    (first, second, third) => Err([first.err(), second.err(), third.err()]
                        .into_iter()
                        .flatten()
                        .collect()),
                }
            }),
        }
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<T, E> Future for AsyncResult<T, E> {
    type Output = Result<T, E>;

    /// Awaiting the wrapper is the native projection: whichever payload is
    /// present, Ok or Err. Never fails.
    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(context)
    }
}

// =============================================================================
// Conversions from native values
// =============================================================================

impl<T, E> From<Result<T, E>> for AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn from(result: Result<T, E>) -> Self {
        Self {
            inner: Deferred::settled(result),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T, E> std::fmt::Display for AsyncResult<T, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<AsyncResult>")
    }
}

// =============================================================================
// Producers
// =============================================================================

/// Creates a result monad on the Ok channel.
///
/// # Examples
///
/// ```rust,ignore
/// use async_monads::monad::ok;
///
/// assert_eq!(ok::<_, String>(72).await, Ok(72));
/// ```
pub fn ok<T, E>(value: T) -> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    AsyncResult {
        inner: Deferred::settled(Ok(value)),
    }
}

/// Creates a result monad on the Err channel.
///
/// # Examples
///
/// ```rust,ignore
/// use async_monads::monad::err;
///
/// assert_eq!(err::<i32, _>("broken").await, Err("broken"));
/// ```
pub fn err<T, E>(error: E) -> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    AsyncResult {
        inner: Deferred::settled(Err(error)),
    }
}
