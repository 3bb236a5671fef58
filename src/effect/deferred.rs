//! Deferred monad - asynchronous computation with a rejection channel.
//!
//! A `Deferred<A>` describes a computation that eventually resolves to an
//! `A` or rejects with a [`Rejection`]. Suspended computations are not
//! executed until the `Deferred` is awaited; composition with `fmap` and
//! `flat_map` builds a description, and execution happens once, at the
//! `.await` point.
//!
//! # Evaluation semantics
//!
//! `Deferred::pure(value)` is already resolved, so `fmap`/`flat_map` applied
//! to it run the continuation immediately at composition time; a pure value
//! has no side effects, and the observable result is the same either way.
//! Computations built with [`Deferred::new`] stay suspended until awaited:
//!
//! ```rust,ignore
//! // Runs when awaited, not when constructed.
//! let deferred = Deferred::new(|| async {
//!     Ok(fetch_count().await + 1)
//! });
//! ```
//!
//! # Ordering and rejection
//!
//! Within `flat_map`, the continuation runs only after the source settles,
//! and at most once. A rejection - from the source or from the
//! continuation's result - propagates unchanged through the rest of the
//! chain without invoking subsequent steps.
//!
//! # Laws
//!
//! Under "equality of eventually-produced results", `Deferred` satisfies
//! the monad laws; [`laws::deferred`](crate::laws::deferred) awaits both
//! sides of each law before comparing.
//!
//! # Examples
//!
//! ```rust,ignore
//! use kindling::effect::Deferred;
//!
//! #[tokio::main]
//! async fn main() {
//!     let chained = Deferred::pure(5).flat_map(|n| Deferred::pure(n + 1));
//!     assert_eq!(chained.await, Ok(6));
//! }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use pin_project_lite::pin_project;

/// The payload carried by a rejected [`Deferred`].
///
/// Rejection is the deferred computation's failure channel, analogous to a
/// rejected promise. It propagates unchanged through `fmap` and `flat_map`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    message: String,
}

impl Rejection {
    /// Creates a rejection carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The rejection message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "rejected: {}", self.message)
    }
}

impl std::error::Error for Rejection {}

/// The settled or pending outcome a suspended computation produces.
type Resolution<A> = Result<A, Rejection>;

/// A boxed thunk producing the future of a suspended computation.
type Thunk<A> = Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = Resolution<A>> + Send>> + Send>;

pin_project! {
    /// A deferred asynchronous computation that resolves to an `A` or
    /// rejects with a [`Rejection`].
    ///
    /// `Deferred` implements `Future` with output `Result<A, Rejection>`,
    /// so it is executed by awaiting it. A `Deferred` is single-shot: it is
    /// consumed by composition and by awaiting.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let result = Deferred::pure(42).await;
    /// assert_eq!(result, Ok(42));
    /// ```
    pub struct Deferred<A> {
        #[pin]
        state: DeferredState<A>,
    }
}

pin_project! {
    /// Internal state machine for `Deferred`.
    ///
    /// Transitions: `Suspended` -> `Running` on first poll (the thunk runs
    /// to create the future), `Running` -> `Completed` when the future
    /// settles. `Resolved` and `Rejected` settle on the first poll.
    #[project = DeferredStateProj]
    enum DeferredState<A> {
        /// An already-resolved value.
        Resolved {
            value: Option<A>,
        },
        /// An already-failed computation.
        Rejected {
            rejection: Option<Rejection>,
        },
        /// A suspended computation awaiting its first poll.
        Suspended {
            thunk: Option<Thunk<A>>,
        },
        /// The future created from the suspended thunk.
        Running {
            #[pin]
            future: Pin<Box<dyn Future<Output = Resolution<A>> + Send>>,
        },
        /// Settled; polling again is a contract violation.
        Completed,
    }
}

impl<A> Future for Deferred<A> {
    type Output = Resolution<A>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.state.as_mut().project() {
                DeferredStateProj::Resolved { value } => {
                    // INVARIANT: a Resolved state is polled at most once.
                    let value = value.take().expect(
                        "Deferred internal error: Resolved value was already consumed. \
                         This indicates the Deferred was polled after completion.",
                    );
                    this.state.set(DeferredState::Completed);
                    return Poll::Ready(Ok(value));
                }
                DeferredStateProj::Rejected { rejection } => {
                    // INVARIANT: a Rejected state is polled at most once.
                    let rejection = rejection.take().expect(
                        "Deferred internal error: Rejected payload was already consumed. \
                         This indicates the Deferred was polled after completion.",
                    );
                    this.state.set(DeferredState::Completed);
                    return Poll::Ready(Err(rejection));
                }
                DeferredStateProj::Suspended { thunk } => {
                    // INVARIANT: the thunk runs exactly once.
                    let thunk = thunk.take().expect(
                        "Deferred internal error: Suspended thunk was already consumed. \
                         This indicates a state machine invariant violation.",
                    );
                    let future = thunk();
                    this.state.set(DeferredState::Running { future });
                    // Loop to poll the newly created future.
                }
                DeferredStateProj::Running { future } => match future.poll(context) {
                    Poll::Ready(resolution) => {
                        this.state.set(DeferredState::Completed);
                        return Poll::Ready(resolution);
                    }
                    Poll::Pending => return Poll::Pending,
                },
                DeferredStateProj::Completed => {
                    panic!(
                        "Deferred internal error: polled after completion. \
                         Futures must not be polled after returning Poll::Ready."
                    );
                }
            }
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static> Deferred<A> {
    /// Creates a suspended computation from an async closure.
    ///
    /// The closure does not run until the `Deferred` is awaited.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let deferred = Deferred::new(|| async {
    ///     tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    ///     Ok(42)
    /// });
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Resolution<A>> + Send + 'static,
    {
        Self {
            state: DeferredState::Suspended {
                thunk: Some(Box::new(move || Box::pin(action()))),
            },
        }
    }

    /// Wraps an existing future that settles to a resolution.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Resolution<A>> + Send + 'static,
    {
        Self {
            state: DeferredState::Suspended {
                thunk: Some(Box::new(move || Box::pin(future))),
            },
        }
    }

    /// An already-failed computation.
    ///
    /// Continuations chained onto it are never invoked; the rejection
    /// propagates unchanged.
    #[must_use]
    pub const fn rejected(rejection: Rejection) -> Self {
        Self {
            state: DeferredState::Rejected {
                rejection: Some(rejection),
            },
        }
    }
}

impl<A: Send + 'static> Deferred<A> {
    /// An already-resolved value.
    #[must_use]
    pub const fn pure(value: A) -> Self {
        Self {
            state: DeferredState::Resolved { value: Some(value) },
        }
    }
}

impl Deferred<()> {
    /// A computation that resolves with `()` after the given duration.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// Deferred::delay(Duration::from_millis(10))
    ///     .flat_map(|()| Deferred::pure("done"))
    ///     .await;
    /// ```
    #[must_use]
    pub fn delay(duration: Duration) -> Self {
        Self::new(move || async move {
            tokio::time::sleep(duration).await;
            Ok(())
        })
    }
}

// =============================================================================
// Functor / Monad Operations
// =============================================================================

impl<A: Send + 'static> Deferred<A> {
    /// Transforms the eventual result.
    ///
    /// Already-resolved values are transformed immediately; rejections pass
    /// through without invoking the function.
    pub fn fmap<B, F>(self, function: F) -> Deferred<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        match self {
            Self {
                state: DeferredState::Resolved { value: Some(value) },
            } => Deferred::pure(function(value)),
            Self {
                state:
                    DeferredState::Rejected {
                        rejection: Some(rejection),
                    },
            } => Deferred::rejected(rejection),
            other => Deferred::new(move || async move { other.await.map(function) }),
        }
    }

    /// Chains a dependent asynchronous computation.
    ///
    /// The continuation runs only after `self` resolves, exactly once. If
    /// `self` rejects, the continuation is never invoked and the rejection
    /// propagates; a rejection produced by the continuation's result
    /// propagates the same way.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let six = Deferred::pure(5).flat_map(|n| Deferred::pure(n + 1)).await;
    /// assert_eq!(six, Ok(6));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Deferred<B>
    where
        F: FnOnce(A) -> Deferred<B> + Send + 'static,
        B: Send + 'static,
    {
        match self {
            Self {
                state: DeferredState::Resolved { value: Some(value) },
            } => function(value),
            Self {
                state:
                    DeferredState::Rejected {
                        rejection: Some(rejection),
                    },
            } => Deferred::rejected(rejection),
            other => Deferred::new(move || async move {
                match other.await {
                    Ok(value) => function(value).await,
                    Err(rejection) => Err(rejection),
                }
            }),
        }
    }

    /// Alias for `flat_map` matching Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> Deferred<B>
    where
        F: FnOnce(A) -> Deferred<B> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// A rejection of `self` still propagates and `next` is dropped
    /// unexecuted.
    #[must_use]
    pub fn then<B>(self, next: Deferred<B>) -> Deferred<B>
    where
        B: Send + 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Executes the computation and returns its resolution.
    ///
    /// Equivalent to awaiting the `Deferred` directly.
    pub async fn run_async(self) -> Resolution<A> {
        self.await
    }
}
