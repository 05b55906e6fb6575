//! `AsyncOption` - an asynchronous optional value.
//!
//! `AsyncOption<T>` represents a value that may be absent, asynchronous by
//! construction: the wrapper holds a deferred computation that eventually
//! settles into a native `Option<T>`. Combinators never suspend - they
//! consume the parent wrapper and describe a new deferred computation.
//! Only a terminal operation (`.await`, `is_some`, `fold`, `try_unwrap`,
//! ...) forces resolution.
//!
//! # impl `Future`
//!
//! `AsyncOption<T>` implements `Future` with `Output = Option<T>`, so
//! awaiting the wrapper is the native projection: it yields the raw payload
//! or `None`, the only resolution that discards the monad without failing.
//!
//! # Examples
//!
//! ```rust,ignore
//! use async_monads::monad::{some, none, AsyncOption};
//!
//! #[tokio::main]
//! async fn main() {
//!     let value = some(21).map(|x| x * 2).await;
//!     assert_eq!(value, Some(42));
//!
//!     // and_then short-circuits: the closure never runs on none
//!     let absent = none::<i32>().and_then(|x| some(x + 1)).await;
//!     assert_eq!(absent, None);
//! }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::deferred::Deferred;
use super::error::{MonadKind, UnwrapError, UnwrapExpectation};
use super::result::AsyncResult;

pin_project! {
    /// A value that may be absent, asynchronous by construction.
    ///
    /// The wrapper owns a deferred computation settling into `Option<T>`.
    /// It is never mutated after construction; every combinator consumes
    /// the parent and returns an independent child.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::some;
    ///
    /// let value = some(5).map(|x| x + 1).await;
    /// assert_eq!(value, Some(6));
    /// ```
    pub struct AsyncOption<T> {
        #[pin]
        pub(crate) inner: Deferred<Option<T>>,
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<T: Send + 'static> AsyncOption<T> {
    /// Normalizes a future of an option monad into an option monad.
    ///
    /// The caller gets a handle with the usual deferred contract without
    /// having to await the outer future first.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::{some, AsyncOption};
    ///
    /// let pending = async { some(72) };
    /// let option = AsyncOption::from_future(pending);
    /// assert_eq!(option.await, Some(72));
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
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::{some, AsyncOption};
    ///
    /// let option = AsyncOption::defer(|| async { some(72) });
    /// assert_eq!(option.await, Some(72));
    /// ```
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

impl<T: Send + 'static> AsyncOption<T> {
    /// Resolves the wrapper and reports whether it settled as some.
    ///
    /// Never fails.
    pub async fn is_some(self) -> bool {
        self.await.is_some()
    }

    /// Resolves the wrapper and reports whether it settled as none.
    ///
    /// Never fails.
    pub async fn is_none(self) -> bool {
        self.await.is_none()
    }
}

// =============================================================================
// Functor Operations
// =============================================================================

impl<T: Send + 'static> AsyncOption<T> {
    /// Transforms the payload when some; propagates none unchanged.
    ///
    /// The mapper is never invoked for none.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::some;
    ///
    /// let value = some(21).map(|x| x * 2).await;
    /// assert_eq!(value, Some(42));
    /// ```
    #[must_use]
    pub fn map<U, F>(self, mapper: F) -> AsyncOption<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncOption {
            inner: Deferred::defer(move || async move { self.await.map(mapper) }),
        }
    }

    /// Like [`map`](Self::map), with an asynchronous mapper.
    #[must_use]
    pub fn map_async<U, F, Fut>(self, mapper: F) -> AsyncOption<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        AsyncOption {
            inner: Deferred::defer(move || async move {
                match self.await {
                    Some(value) => Some(mapper(value).await),
                    None => None,
                }
            }),
        }
    }
}

// =============================================================================
// Monad Operations
// =============================================================================

impl<T: Send + 'static> AsyncOption<T> {
    /// Chains into another option monad when some.
    ///
    /// Short-circuits: the binder is never called on none, and if the
    /// produced option settles as none, the result is none.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::{some, none};
    ///
    /// let value = some(10).and_then(|x| some(x * 2)).await;
    /// assert_eq!(value, Some(20));
    ///
    /// let absent = some(10).and_then(|_| none::<i32>()).await;
    /// assert_eq!(absent, None);
    /// ```
    #[must_use]
    pub fn and_then<U, F>(self, binder: F) -> AsyncOption<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> AsyncOption<U> + Send + 'static,
    {
        AsyncOption {
            inner: Deferred::defer(move || async move {
                match self.await {
                    Some(value) => binder(value).await,
                    None => None,
                }
            }),
        }
    }
}

// =============================================================================
// Terminal Reducers
// =============================================================================

impl<T: Send + 'static> AsyncOption<T> {
    /// Terminal reducer: maps both variants to a unified value.
    ///
    /// Exactly one branch runs.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::{some, none};
    ///
    /// let described = some(5).fold(|v| format!("got {v}"), || "nothing".to_string()).await;
    /// assert_eq!(described, "got 5");
    /// ```
    pub async fn fold<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self.await {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    /// Like [`fold`](Self::fold), with asynchronous branches.
    pub async fn fold_async<U, S, SFut, N, NFut>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = U>,
    {
        match self.await {
            Some(value) => on_some(value).await,
            None => on_none().await,
        }
    }
}

// =============================================================================
// Side Effects
// =============================================================================

impl<T: Send + 'static> AsyncOption<T> {
    /// Runs a side effect on the payload when some; passes the wrapper
    /// through equivalent (same tag and value).
    ///
    /// The effect is never invoked for none. Panics inside the effect are
    /// NOT caught - they unwind at the awaiting terminal. Use this only for
    /// effects the caller trusts not to panic.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::some;
    ///
    /// let value = some(5).inspect(|v| println!("saw {v}")).await;
    /// assert_eq!(value, Some(5));
    /// ```
    #[must_use]
    pub fn inspect<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self {
            inner: Deferred::defer(move || async move {
                let settled = self.await;
                if let Some(ref value) = settled {
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
                if let Some(ref value) = settled {
                    effect(value).await;
                }
                settled
            }),
        }
    }
}

// =============================================================================
// Unwrap Operations (Terminal)
// =============================================================================

impl<T: Send + 'static> AsyncOption<T> {
    /// Forces the wrapper open, failing when it settled as none.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] with expectation "Expected Some got None"
    /// when the wrapper is none.
    pub async fn try_unwrap(self) -> Result<T, UnwrapError> {
        self.await
            .ok_or_else(|| UnwrapError::new(MonadKind::Option, UnwrapExpectation::SomeGotNone))
    }

    /// Returns the payload when some, otherwise the provided default.
    pub async fn unwrap_or(self, default: T) -> T {
        self.await.unwrap_or(default)
    }

    /// Returns the payload when some, otherwise evaluates the closure.
    pub async fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.await.unwrap_or_else(default)
    }
}

// =============================================================================
// Conversions to AsyncResult
// =============================================================================

impl<T: Send + 'static> AsyncOption<T> {
    /// Lifts into a result monad: some becomes Ok, none becomes Err of the
    /// supplied error payload.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::{some, none};
    ///
    /// assert_eq!(some(5).ok_or("absent").await, Ok(5));
    /// assert_eq!(none::<i32>().ok_or("absent").await, Err("absent"));
    /// ```
    #[must_use]
    pub fn ok_or<E>(self, error: E) -> AsyncResult<T, E>
    where
        E: Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move { self.await.ok_or(error) }),
        }
    }

    /// Like [`ok_or`](Self::ok_or), with the error payload supplied lazily.
    #[must_use]
    pub fn ok_or_else<E, F>(self, error: F) -> AsyncResult<T, E>
    where
        E: Send + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move { self.await.ok_or_else(error) }),
        }
    }

    /// Lifts into a result monad on the error channel: some becomes Err of
    /// the payload, none becomes Ok of the supplied value.
    #[must_use]
    pub fn err_or<O>(self, ok: O) -> AsyncResult<O, T>
    where
        O: Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move {
                match self.await {
                    Some(value) => Err(value),
                    None => Ok(ok),
                }
            }),
        }
    }

    /// Like [`err_or`](Self::err_or), with the ok payload supplied lazily.
    #[must_use]
    pub fn err_or_else<O, F>(self, ok: F) -> AsyncResult<O, T>
    where
        O: Send + 'static,
        F: FnOnce() -> O + Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move {
                match self.await {
                    Some(value) => Err(value),
                    None => Ok(ok()),
                }
            }),
        }
    }

    /// Maps both variants to a result monad.
    ///
    /// The some branch receives the payload; the none branch supplies the
    /// result for the absent case. Exactly one branch runs.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::{some, ok, err};
    ///
    /// let result = some(5)
    ///     .to_result(|v| ok::<_, String>(v * 2), || err("missing".to_string()))
    ///     .await;
    /// assert_eq!(result, Ok(10));
    /// ```
    #[must_use]
    pub fn to_result<O, E, S, N>(self, on_some: S, on_none: N) -> AsyncResult<O, E>
    where
        O: Send + 'static,
        E: Send + 'static,
        S: FnOnce(T) -> AsyncResult<O, E> + Send + 'static,
        N: FnOnce() -> AsyncResult<O, E> + Send + 'static,
    {
        AsyncResult {
            inner: Deferred::defer(move || async move {
                match self.await {
                    Some(value) => on_some(value).await,
                    None => on_none().await,
                }
            }),
        }
    }
}

// =============================================================================
// Aggregation
// =============================================================================

impl<T: Send + 'static> AsyncOption<T> {
    /// Combines many option monads: some of all values when every member is
    /// some, none as soon as any member is none.
    ///
    /// Members are evaluated concurrently - all deferred computations are
    /// initiated before any is awaited - and the output vector preserves
    /// input order regardless of completion order. The some payloads of
    /// other members are discarded when any member is none.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_monads::monad::{some, none, AsyncOption};
    ///
    /// let combined = AsyncOption::all([some(1), some(2), some(3)]).await;
    /// assert_eq!(combined, Some(vec![1, 2, 3]));
    ///
    /// let collapsed = AsyncOption::all([some(1), none(), some(3)]).await;
    /// assert_eq!(collapsed, None);
    /// ```
    #[must_use]
    pub fn all<I>(options: I) -> AsyncOption<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        let members: Vec<Self> = options.into_iter().collect();
        AsyncOption {
            inner: Deferred::defer(move || async move {
                futures::future::join_all(members).await.into_iter().collect()
            }),
        }
    }

    /// Combines two option monads of different payload types into one.
    ///
    /// Both members are awaited concurrently; any none collapses the pair
    /// to none.
    #[must_use]
    pub fn zip<U>(self, other: AsyncOption<U>) -> AsyncOption<(T, U)>
    where
        U: Send + 'static,
    {
        AsyncOption {
            inner: Deferred::defer(move || async move {
                let (first, second) = futures::join!(self, other);
                Some((first?, second?))
            }),
        }
    }

    /// Combines three option monads of different payload types into one.
    #[must_use]
    pub fn zip3<U, V>(self, second: AsyncOption<U>, third: AsyncOption<V>) -> AsyncOption<(T, U, V)>
    where
        U: Send + 'static,
        V: Send + 'static,
    {
        AsyncOption {
            inner: Deferred::defer(move || async move {
                let (first, second, third) = futures::join!(self, second, third);
                Some((first?, second?, third?))
            }),
        }
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<T> Future for AsyncOption<T> {
    type Output = Option<T>;

    /// Awaiting the wrapper is the native projection: the raw payload when
    /// some, `None` otherwise. Never fails.
    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(context)
    }
}

// =============================================================================
// Conversions from native values
// =============================================================================

impl<T: Send + 'static> From<Option<T>> for AsyncOption<T> {
    fn from(option: Option<T>) -> Self {
        Self {
            inner: Deferred::settled(option),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T> std::fmt::Display for AsyncOption<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<AsyncOption>")
    }
}

// =============================================================================
// Producers
// =============================================================================

/// Creates an option monad holding a present value.
///
/// # Examples
///
/// ```rust,ignore
/// use async_monads::monad::some;
///
/// assert_eq!(some(72).await, Some(72));
/// ```
pub fn some<T: Send + 'static>(value: T) -> AsyncOption<T> {
    AsyncOption {
        inner: Deferred::settled(Some(value)),
    }
}

/// Creates an option monad holding no value.
///
/// # Examples
///
/// ```rust,ignore
/// use async_monads::monad::none;
///
/// assert_eq!(none::<i32>().await, None);
/// ```
pub fn none<T: Send + 'static>() -> AsyncOption<T> {
    AsyncOption {
        inner: Deferred::settled(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(AsyncOption<i32>: Send);
    assert_impl_all!(AsyncOption<Vec<String>>: Send);

    #[test]
    fn test_display_async_option() {
        let option = some(42);
        assert_eq!(format!("{option}"), "<AsyncOption>");
    }
}
