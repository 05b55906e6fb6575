//! Internal deferred-computation state machine shared by both monads.
//!
//! `Deferred<V>` drives a computation that eventually settles into a value
//! of type `V` (an `Option<T>` or a `Result<T, E>`). It implements `Future`
//! directly via `pin_project_lite`, without any unsafe code, so the public
//! wrappers can be awaited like any other future.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use pin_project_lite::pin_project;

/// A thunk producing the boxed future that resolves the computation.
type Thunk<V> = Box<dyn FnOnce() -> BoxFuture<'static, V> + Send>;

pin_project! {
    /// A deferred computation settling into a value of type `V`.
    ///
    /// Construction never runs anything; the wrapped work starts on the
    /// first poll and the settled value is handed out exactly once.
    pub(crate) struct Deferred<V> {
        #[pin]
        state: DeferredState<V>,
    }
}

pin_project! {
    /// State machine for `Deferred`.
    ///
    /// Transitions:
    ///
    /// - `Settled` -> `Completed` (value handed out on first poll)
    /// - `Defer` -> `Running` (thunk executed on first poll)
    /// - `Running` -> `Completed` (inner future resolved)
    #[project = DeferredStateProj]
    enum DeferredState<V> {
        /// The value is already known; no work is pending.
        Settled {
            value: Option<V>,
        },
        /// A thunk that creates the resolving future when first polled.
        Defer {
            thunk: Option<Thunk<V>>,
        },
        /// The resolving future, being polled to completion.
        Running {
            #[pin]
            future: BoxFuture<'static, V>,
        },
        /// The computation has completed (terminal transition state).
        Completed,
    }
}

impl<V> Deferred<V> {
    /// Wraps an already-settled value.
    pub(crate) fn settled(value: V) -> Self {
        Self {
            state: DeferredState::Settled { value: Some(value) },
        }
    }

    /// Wraps a thunk whose future is not created until the first poll.
    pub(crate) fn defer<F, Fut>(thunk: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = V> + Send + 'static,
    {
        Self {
            state: DeferredState::Defer {
                thunk: Some(Box::new(move || Box::pin(thunk()))),
            },
        }
    }
}

impl<V> Future for Deferred<V> {
    type Output = V;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.state.as_mut().project() {
                DeferredStateProj::Settled { value } => {
                    // INVARIANT: Settled is polled at most once before Completed
                    let result = value.take().expect(
                        "Deferred internal error: settled value was already consumed. \
                         This indicates the future was polled after completion.",
                    );
                    this.state.set(DeferredState::Completed);
                    return Poll::Ready(result);
                }
                DeferredStateProj::Defer { thunk } => {
                    // INVARIANT: Defer is polled at most once before Running
                    let thunk = thunk.take().expect(
                        "Deferred internal error: thunk was already consumed. \
                         This indicates a state machine invariant violation.",
                    );
                    let future = thunk();
                    this.state.set(DeferredState::Running { future });
                    // Loop to poll the newly created future
                }
                DeferredStateProj::Running { future } => match future.poll(context) {
                    Poll::Ready(result) => {
                        this.state.set(DeferredState::Completed);
                        return Poll::Ready(result);
                    }
                    Poll::Pending => return Poll::Pending,
                },
                DeferredStateProj::Completed => {
                    panic!("Deferred polled after completion")
                }
            }
        }
    }
}
