//! Deferred Success/Failure container.
//!
//! [`OutcomeFuture`] wraps a single pending resolution of an
//! [`Outcome`](crate::Outcome) and re-exposes the whole container algebra
//! lazily. The wrapper is itself a future resolving to the inner container;
//! a `Failure` outcome is delivered as a value, never as a task-level error.

use core::fmt;
use core::future::{Future, Ready};
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::outcome::Outcome;

/// Type-erased [`OutcomeFuture`] so heterogeneous deferred steps can share
/// one type. No `Send` bound; resolution rides the host's single-threaded
/// cooperative scheduler.
pub type BoxOutcomeFuture<'a, T, E> =
    OutcomeFuture<Pin<Box<dyn Future<Output = Outcome<T, E>> + 'a>>>;

pin_project! {
    /// A deferred [`Outcome`]: a future that resolves to the container.
    ///
    /// Every composition operation of the eager container is available here
    /// with the same name and semantics, composed lazily over the single
    /// pending resolution. Combining operations (`and`, `or`) resolve self
    /// before other, strictly sequentially; no parallelism is introduced.
    ///
    /// Resolution is one-shot: awaiting the wrapper consumes it, which is
    /// the only memoization the underlying mechanism supports.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use outcome_rail::async_ext::OutcomeFuture;
    /// use outcome_rail::{Outcome, Success};
    ///
    /// async fn double(v: i32) -> Outcome<i32, &'static str> {
    ///     Success(v * 2)
    /// }
    ///
    /// let outcome = OutcomeFuture::new(double(21)).map(|v| v + 1).await;
    /// assert_eq!(outcome, Success(43));
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct OutcomeFuture<Fut> {
        #[pin]
        inner: Fut,
    }
}

impl<Fut> OutcomeFuture<Fut> {
    /// Wraps a pending resolution.
    #[inline]
    pub fn new(inner: Fut) -> Self {
        Self { inner }
    }

    /// Surrenders the inner future.
    #[inline]
    pub fn into_inner(self) -> Fut {
        self.inner
    }
}

impl<T, E> OutcomeFuture<Ready<Outcome<T, E>>> {
    /// A deferred container that is already resolved.
    #[inline]
    pub fn ready(outcome: Outcome<T, E>) -> Self {
        Self::new(core::future::ready(outcome))
    }

    /// An already-resolved success.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::ready(Outcome::Success(value))
    }

    /// An already-resolved failure.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::ready(Outcome::Failure(error))
    }
}

impl<Fut, T, E> Future for OutcomeFuture<Fut>
where
    Fut: Future<Output = Outcome<T, E>>,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx)
    }
}

impl<Fut, T, E> FusedFuture for OutcomeFuture<Fut>
where
    Fut: FusedFuture<Output = Outcome<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}

impl<Fut, T, E> OutcomeFuture<Fut>
where
    Fut: Future<Output = Outcome<T, E>>,
{
    /// Erases the inner future type.
    #[inline]
    pub fn boxed<'a>(self) -> BoxOutcomeFuture<'a, T, E>
    where
        Fut: 'a,
        T: 'a,
        E: 'a,
    {
        OutcomeFuture::new(Box::pin(self.inner) as Pin<Box<dyn Future<Output = Outcome<T, E>> + 'a>>)
    }

    /// Lazy [`Outcome::map`]: transforms the success value upon resolution.
    #[inline]
    pub fn map<U, F>(self, f: F) -> OutcomeFuture<impl Future<Output = Outcome<U, E>>>
    where
        F: FnOnce(T) -> U,
    {
        OutcomeFuture::new(async move { self.await.map(f) })
    }

    /// Lazy [`Outcome::map_err`].
    #[inline]
    pub fn map_err<F, O>(self, f: O) -> OutcomeFuture<impl Future<Output = Outcome<T, F>>>
    where
        O: FnOnce(E) -> F,
    {
        OutcomeFuture::new(async move { self.await.map_err(f) })
    }

    /// Lazy [`Outcome::and`]: resolves self, then `other`, then combines.
    #[inline]
    pub fn and<U, Fut2>(
        self,
        other: OutcomeFuture<Fut2>,
    ) -> OutcomeFuture<impl Future<Output = Outcome<U, E>>>
    where
        Fut2: Future<Output = Outcome<U, E>>,
    {
        OutcomeFuture::new(async move {
            let this = self.await;
            let other = other.await;
            this.and(other)
        })
    }

    /// Lazy [`Outcome::and_then`] over a synchronous continuation.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> OutcomeFuture<impl Future<Output = Outcome<U, E>>>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        OutcomeFuture::new(async move { self.await.and_then(f) })
    }

    /// Chains an asynchronous continuation on the success value.
    ///
    /// The continuation's future is only created and awaited when this
    /// wrapper resolves to a success.
    #[inline]
    pub fn and_then_future<U, F, Fut2>(
        self,
        f: F,
    ) -> OutcomeFuture<impl Future<Output = Outcome<U, E>>>
    where
        F: FnOnce(T) -> Fut2,
        Fut2: Future<Output = Outcome<U, E>>,
    {
        OutcomeFuture::new(async move {
            match self.await {
                Outcome::Success(value) => f(value).await,
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Lazy [`Outcome::or`]: resolves self, then `other`, then combines.
    #[inline]
    pub fn or<F, Fut2>(
        self,
        other: OutcomeFuture<Fut2>,
    ) -> OutcomeFuture<impl Future<Output = Outcome<T, F>>>
    where
        Fut2: Future<Output = Outcome<T, F>>,
    {
        OutcomeFuture::new(async move {
            let this = self.await;
            let other = other.await;
            this.or(other)
        })
    }

    /// Lazy [`Outcome::or_else`].
    #[inline]
    pub fn or_else<F, O>(self, f: O) -> OutcomeFuture<impl Future<Output = Outcome<T, F>>>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        OutcomeFuture::new(async move { self.await.or_else(f) })
    }

    /// Lazy [`Outcome::inspect`].
    #[inline]
    pub fn inspect<F>(self, f: F) -> OutcomeFuture<impl Future<Output = Outcome<T, E>>>
    where
        F: FnOnce(&T),
    {
        OutcomeFuture::new(async move { self.await.inspect(f) })
    }

    /// Lazy [`Outcome::inspect_err`].
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> OutcomeFuture<impl Future<Output = Outcome<T, E>>>
    where
        F: FnOnce(&E),
    {
        OutcomeFuture::new(async move { self.await.inspect_err(f) })
    }

    /// Resolves and folds the success side, substituting a default on failure.
    pub async fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.await.map_or(default, f)
    }

    /// Resolves and folds both variants, computing the default from the error.
    pub async fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        self.await.map_or_else(default, f)
    }

    /// Resolves and totally folds both variants.
    pub async fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        self.await.fold(on_success, on_failure)
    }

    /// Resolves and returns the success value or the given default.
    pub async fn unwrap_or(self, default: T) -> T {
        self.await.unwrap_or(default)
    }

    /// Resolves and returns the success value or a computed substitute.
    pub async fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.await.unwrap_or_else(f)
    }

    /// Resolves and unwraps the success value.
    ///
    /// # Panics
    ///
    /// Panics if the resolved outcome is a `Failure`, as
    /// [`Outcome::unwrap`] does.
    pub async fn unwrap(self) -> T
    where
        E: fmt::Display,
    {
        self.await.unwrap()
    }

    /// Resolves and unwraps the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the resolved outcome is a `Success`.
    pub async fn unwrap_err(self) -> E
    where
        T: fmt::Display,
    {
        self.await.unwrap_err()
    }

    /// Resolves and unwraps with a caller-supplied panic message prefix.
    ///
    /// # Panics
    ///
    /// Panics if the resolved outcome is a `Failure`.
    pub async fn expect(self, message: &str) -> T
    where
        E: fmt::Display,
    {
        self.await.expect(message)
    }

    /// Dual of [`expect`](OutcomeFuture::expect).
    ///
    /// # Panics
    ///
    /// Panics if the resolved outcome is a `Success`.
    pub async fn expect_err(self, message: &str) -> E
    where
        T: fmt::Display,
    {
        self.await.expect_err(message)
    }

    /// Resolves and escalates a failure into a panic, as [`Outcome::tap`] does.
    ///
    /// # Panics
    ///
    /// Panics if the resolved outcome is a `Failure`.
    pub async fn tap(self) -> T
    where
        E: fmt::Display,
    {
        self.await.tap()
    }

    /// Emits a `tracing` error event when the resolution is a failure.
    ///
    /// Pass-through otherwise; the resolved container is returned unchanged.
    #[cfg(feature = "tracing")]
    #[inline]
    pub fn trace_failure<'a>(
        self,
        label: &'a str,
    ) -> OutcomeFuture<impl Future<Output = Outcome<T, E>> + 'a>
    where
        E: fmt::Display,
        Fut: 'a,
    {
        use crate::tracing_ext::OutcomeTraceExt;

        OutcomeFuture::new(async move { self.await.trace_failure(label) })
    }
}
