//! The Success/Failure container and its composition algebra.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::fault::panic_fault;
use crate::types::maybe::Maybe;

/// A container holding either a success value or a failure value.
///
/// `Outcome<T, E>` is the crate's railway type: every composition operation
/// branches on the variant and nothing else. Recoverable failures travel as
/// ordinary `Failure` payloads; only the boundary operations (`unwrap`,
/// `expect`, `tap` and their duals) escalate a wrong-variant access into a
/// panic.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `T` and `E` do
/// (requires the `serde` feature).
///
/// # Variants
///
/// * `Success(T)` - The operation produced a value
/// * `Failure(E)` - The operation failed with a recoverable error
///
/// # Examples
///
/// ```
/// use outcome_rail::{Failure, Outcome, Success};
///
/// fn divide(a: i32, b: i32) -> Outcome<i32, &'static str> {
///     if b == 0 {
///         Failure("division by zero")
///     } else {
///         Success(a / b)
///     }
/// }
///
/// assert_eq!(divide(10, 2).map(|v| v * 10), Success(50));
/// assert_eq!(divide(1, 0), Failure("division by zero"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

use Outcome::{Failure, Success};

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Success};
    ///
    /// let o: Outcome<i32, &str> = Success(42);
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if the outcome is a `Failure`.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Converts into a [`Maybe`] over the success value, discarding the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Absent, Failure, Outcome, Present, Success};
    ///
    /// let o: Outcome<i32, &str> = Success(2);
    /// assert_eq!(o.success(), Present(2));
    ///
    /// let o: Outcome<i32, &str> = Failure("nope");
    /// assert_eq!(o.success(), Absent);
    /// ```
    #[inline]
    pub fn success(self) -> Maybe<T> {
        match self {
            Success(value) => Maybe::Present(value),
            Failure(_) => Maybe::Absent,
        }
    }

    /// Converts into a [`Maybe`] over the failure value, discarding the success.
    #[inline]
    pub fn failure(self) -> Maybe<E> {
        match self {
            Success(_) => Maybe::Absent,
            Failure(error) => Maybe::Present(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    ///
    /// The mapper is never invoked on a `Failure`.
    ///
    /// # Arguments
    ///
    /// * `f` - A function transforming the success value from `T` to `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Success};
    ///
    /// let o: Outcome<i32, &str> = Success(21);
    /// assert_eq!(o.map(|v| v * 2), Success(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Maps the failure value, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome};
    ///
    /// let o: Outcome<i32, i32> = Failure(4);
    /// assert_eq!(o.map_err(|e| e + 1), Failure(5));
    /// ```
    #[inline]
    pub fn map_err<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    /// Folds the success side to a plain value, substituting a default on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome, Success};
    ///
    /// let o: Outcome<&str, &str> = Success("ab");
    /// assert_eq!(o.map_or(0, |s| s.len()), 2);
    ///
    /// let o: Outcome<&str, &str> = Failure("nope");
    /// assert_eq!(o.map_or(0, |s| s.len()), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => f(value),
            Failure(_) => default,
        }
    }

    /// Folds both variants to a plain value, computing the default from the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => default(error),
        }
    }

    /// Total fold over both variants to a common result type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome, Success};
    ///
    /// let o: Outcome<i32, &str> = Success(3);
    /// let text = o.fold(|v| format!("got {v}"), |e| format!("lost: {e}"));
    /// assert_eq!(text, "got 3");
    /// ```
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Success(value) => on_success(value),
            Failure(error) => on_failure(error),
        }
    }

    /// Returns `other` if this outcome is a `Success`, otherwise the failure.
    ///
    /// `other` is already evaluated by the time this method runs; use
    /// [`and_then`](Outcome::and_then) when the second step is side-effecting
    /// and must not run on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome, Success};
    ///
    /// let a: Outcome<i32, &str> = Success(1);
    /// let b: Outcome<&str, &str> = Success("two");
    /// assert_eq!(a.and(b), Success("two"));
    ///
    /// let a: Outcome<i32, &str> = Failure("nope");
    /// let b: Outcome<&str, &str> = Success("two");
    /// assert_eq!(a.and(b), Failure("nope"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(_) => other,
            Failure(error) => Failure(error),
        }
    }

    /// Chains a container-returning computation on the success value.
    ///
    /// This is the primary chaining primitive. `f` is never invoked on a
    /// `Failure`; the failure propagates unchanged.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome, Success};
    ///
    /// fn half(v: i32) -> Outcome<i32, &'static str> {
    ///     if v % 2 == 0 { Success(v / 2) } else { Failure("odd") }
    /// }
    ///
    /// assert_eq!(Success(8).and_then(half), Success(4));
    /// assert_eq!(Success(3).and_then(half), Failure("odd"));
    /// assert_eq!(Failure("early").and_then(half), Failure("early"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// Returns `other` if this outcome is a `Failure`, otherwise the success.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(_) => other,
        }
    }

    /// Chains a container-returning computation on the failure value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome, Success};
    ///
    /// let o: Outcome<i32, &str> = Failure("nope");
    /// assert_eq!(o.or_else(|_| Success::<_, &str>(0)), Success(0));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => f(error),
        }
    }

    /// Invokes `f` on the success value for its side effect and returns self.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Success};
    ///
    /// let mut seen = 0;
    /// let o: Outcome<i32, &str> = Success(5);
    /// let same = o.inspect(|v| seen = *v);
    /// assert_eq!(same, Success(5));
    /// assert_eq!(seen, 5);
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Success(value) = &self {
            f(value);
        }
        self
    }

    /// Invokes `f` on the failure value for its side effect and returns self.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Returns the success value or substitutes a default on failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Returns the success value or computes a substitute from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(value) => value,
            Failure(error) => f(error),
        }
    }

    /// Returns the success value or `T::default()` on failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Success(value) => value,
            Failure(_) => T::default(),
        }
    }

    /// Converts into the standard [`Result`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Success};
    ///
    /// let o: Outcome<i32, &str> = Success(1);
    /// assert_eq!(o.into_result(), Ok(1));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }

    /// Wraps a standard [`Result`] into an `Outcome`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E: fmt::Display> Outcome<T, E> {
    /// Returns the success value, panicking on a `Failure`.
    ///
    /// The panic message embeds the error's display form. The panic is a
    /// non-recoverable signal; it is never captured back into a container
    /// by any operation of this crate.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Success};
    ///
    /// let o: Outcome<i32, &str> = Success(7);
    /// assert_eq!(o.unwrap(), 7);
    /// ```
    ///
    /// ```should_panic
    /// use outcome_rail::{Failure, Outcome};
    ///
    /// let o: Outcome<i32, &str> = Failure("broken");
    /// o.unwrap(); // panics with the error's display form
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Success(value) => value,
            Failure(error) => panic_fault(alloc::format!(
                "called `Outcome::unwrap()` on a `Failure` value: {error}"
            )),
        }
    }

    /// Like [`unwrap`](Outcome::unwrap) with a caller-supplied message prefix.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`, prefixing the panic message
    /// with `message`.
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Success(value) => value,
            Failure(error) => panic_fault(alloc::format!("{message}: {error}")),
        }
    }

    /// Returns the success value or escalates the failure into a panic.
    ///
    /// Used at boundaries where recoverable errors should stop being data.
    /// Unlike [`unwrap`](Outcome::unwrap), the panic message is the error's
    /// display form alone, with no accessor prefix.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`.
    #[inline]
    pub fn tap(self) -> T {
        match self {
            Success(value) => value,
            Failure(error) => panic_fault(alloc::format!("{error}")),
        }
    }
}

impl<T: fmt::Display, E> Outcome<T, E> {
    /// Returns the failure value, panicking on a `Success`.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome};
    ///
    /// let o: Outcome<i32, &str> = Failure("broken");
    /// assert_eq!(o.unwrap_err(), "broken");
    /// ```
    #[inline]
    pub fn unwrap_err(self) -> E {
        match self {
            Success(value) => panic_fault(alloc::format!(
                "called `Outcome::unwrap_err()` on a `Success` value: {value}"
            )),
            Failure(error) => error,
        }
    }

    /// Like [`unwrap_err`](Outcome::unwrap_err) with a caller-supplied message prefix.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`, prefixing the panic message
    /// with `message`.
    #[inline]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Success(value) => panic_fault(alloc::format!("{message}: {value}")),
            Failure(error) => error,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
