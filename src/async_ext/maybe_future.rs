//! Deferred Present/Absent container.
//!
//! The presence-side sibling of
//! [`OutcomeFuture`](crate::async_ext::OutcomeFuture): a future resolving to
//! a [`Maybe`](crate::Maybe), with the eager algebra re-exposed lazily.

use core::future::{Future, Ready};
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::async_ext::outcome_future::OutcomeFuture;
use crate::types::maybe::Maybe;
use crate::types::outcome::Outcome;

/// Type-erased [`MaybeFuture`]. Not `Send`, like its outcome sibling.
pub type BoxMaybeFuture<'a, T> = MaybeFuture<Pin<Box<dyn Future<Output = Maybe<T>> + 'a>>>;

pin_project! {
    /// A deferred [`Maybe`]: a future that resolves to the container.
    ///
    /// An `Absent` resolution is delivered as a value, never as a
    /// task-level error. Combining operations (`and`, `or`, `xor`) resolve
    /// self before other, strictly sequentially.
    #[must_use = "futures do nothing unless polled"]
    pub struct MaybeFuture<Fut> {
        #[pin]
        inner: Fut,
    }
}

impl<Fut> MaybeFuture<Fut> {
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

impl<T> MaybeFuture<Ready<Maybe<T>>> {
    /// A deferred container that is already resolved.
    #[inline]
    pub fn ready(maybe: Maybe<T>) -> Self {
        Self::new(core::future::ready(maybe))
    }

    /// An already-resolved present value.
    #[inline]
    pub fn present(value: T) -> Self {
        Self::ready(Maybe::Present(value))
    }

    /// An already-resolved absence.
    #[inline]
    pub fn absent() -> Self {
        Self::ready(Maybe::Absent)
    }
}

impl<Fut, T> Future for MaybeFuture<Fut>
where
    Fut: Future<Output = Maybe<T>>,
{
    type Output = Maybe<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx)
    }
}

impl<Fut, T> FusedFuture for MaybeFuture<Fut>
where
    Fut: FusedFuture<Output = Maybe<T>>,
{
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}

impl<Fut, T> MaybeFuture<Fut>
where
    Fut: Future<Output = Maybe<T>>,
{
    /// Erases the inner future type.
    #[inline]
    pub fn boxed<'a>(self) -> BoxMaybeFuture<'a, T>
    where
        Fut: 'a,
        T: 'a,
    {
        MaybeFuture::new(Box::pin(self.inner) as Pin<Box<dyn Future<Output = Maybe<T>> + 'a>>)
    }

    /// Lazy [`Maybe::map`].
    #[inline]
    pub fn map<U, F>(self, f: F) -> MaybeFuture<impl Future<Output = Maybe<U>>>
    where
        F: FnOnce(T) -> U,
    {
        MaybeFuture::new(async move { self.await.map(f) })
    }

    /// Lazy [`Maybe::and`]: resolves self, then `other`, then combines.
    #[inline]
    pub fn and<U, Fut2>(
        self,
        other: MaybeFuture<Fut2>,
    ) -> MaybeFuture<impl Future<Output = Maybe<U>>>
    where
        Fut2: Future<Output = Maybe<U>>,
    {
        MaybeFuture::new(async move {
            let this = self.await;
            let other = other.await;
            this.and(other)
        })
    }

    /// Lazy [`Maybe::and_then`] over a synchronous continuation.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> MaybeFuture<impl Future<Output = Maybe<U>>>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        MaybeFuture::new(async move { self.await.and_then(f) })
    }

    /// Lazy [`Maybe::filter`].
    #[inline]
    pub fn filter<P>(self, predicate: P) -> MaybeFuture<impl Future<Output = Maybe<T>>>
    where
        P: FnOnce(&T) -> bool,
    {
        MaybeFuture::new(async move { self.await.filter(predicate) })
    }

    /// Lazy [`Maybe::or`]: resolves self, then `other`, then combines.
    #[inline]
    pub fn or<Fut2>(self, other: MaybeFuture<Fut2>) -> MaybeFuture<impl Future<Output = Maybe<T>>>
    where
        Fut2: Future<Output = Maybe<T>>,
    {
        MaybeFuture::new(async move {
            let this = self.await;
            let other = other.await;
            this.or(other)
        })
    }

    /// Lazy [`Maybe::or_else`].
    #[inline]
    pub fn or_else<F>(self, f: F) -> MaybeFuture<impl Future<Output = Maybe<T>>>
    where
        F: FnOnce() -> Maybe<T>,
    {
        MaybeFuture::new(async move { self.await.or_else(f) })
    }

    /// Lazy [`Maybe::xor`]: resolves self, then `other`, then combines.
    #[inline]
    pub fn xor<Fut2>(self, other: MaybeFuture<Fut2>) -> MaybeFuture<impl Future<Output = Maybe<T>>>
    where
        Fut2: Future<Output = Maybe<T>>,
    {
        MaybeFuture::new(async move {
            let this = self.await;
            let other = other.await;
            this.xor(other)
        })
    }

    /// Lazy [`Maybe::inspect`].
    #[inline]
    pub fn inspect<F>(self, f: F) -> MaybeFuture<impl Future<Output = Maybe<T>>>
    where
        F: FnOnce(&T),
    {
        MaybeFuture::new(async move { self.await.inspect(f) })
    }

    /// Lazy [`Maybe::ok_or`]: coerces into a deferred [`Outcome`].
    #[inline]
    pub fn ok_or<E>(self, err: E) -> OutcomeFuture<impl Future<Output = Outcome<T, E>>> {
        OutcomeFuture::new(async move { self.await.ok_or(err) })
    }

    /// Lazy [`Maybe::ok_or_else`].
    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> OutcomeFuture<impl Future<Output = Outcome<T, E>>>
    where
        F: FnOnce() -> E,
    {
        OutcomeFuture::new(async move { self.await.ok_or_else(err) })
    }

    /// Resolves and folds the present side, substituting a default when absent.
    pub async fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.await.map_or(default, f)
    }

    /// Resolves and folds both variants, computing the default lazily.
    pub async fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        self.await.map_or_else(default, f)
    }

    /// Resolves and totally folds both variants.
    pub async fn fold<U, P, A>(self, on_present: P, on_absent: A) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce() -> U,
    {
        self.await.fold(on_present, on_absent)
    }

    /// Resolves and returns the present value or the given default.
    pub async fn unwrap_or(self, default: T) -> T {
        self.await.unwrap_or(default)
    }

    /// Resolves and returns the present value or a computed substitute.
    pub async fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.await.unwrap_or_else(f)
    }

    /// Resolves and unwraps the present value.
    ///
    /// # Panics
    ///
    /// Panics if the resolution is `Absent`, as [`Maybe::unwrap`] does.
    pub async fn unwrap(self) -> T {
        self.await.unwrap()
    }

    /// Resolves and unwraps with a caller-supplied panic message.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the resolution is `Absent`.
    pub async fn expect(self, message: &str) -> T {
        self.await.expect(message)
    }

    /// Emits a `tracing` warning event when the resolution is absent.
    #[cfg(feature = "tracing")]
    #[inline]
    pub fn trace_absent<'a>(
        self,
        label: &'a str,
    ) -> MaybeFuture<impl Future<Output = Maybe<T>> + 'a>
    where
        Fut: 'a,
    {
        use crate::tracing_ext::MaybeTraceExt;

        MaybeFuture::new(async move { self.await.trace_absent(label) })
    }
}

impl<Fut, T> MaybeFuture<Fut>
where
    Fut: Future<Output = Maybe<Maybe<T>>>,
{
    /// Lazy [`Maybe::flatten`]: collapses one level of nesting upon resolution.
    #[inline]
    pub fn flatten(self) -> MaybeFuture<impl Future<Output = Maybe<T>>> {
        MaybeFuture::new(async move { self.await.flatten() })
    }
}
