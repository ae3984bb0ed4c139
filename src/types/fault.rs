//! Fault capability: recoverable error objects and the non-recoverable
//! panic signal.
//!
//! A [`Fault`] carries a display name, a message, and an optional wrapped
//! origin error. [`StdFault`] is the standard recoverable kind; [`Panic`] is
//! the non-recoverable signal raised by the boundary operations and never
//! captured into a container by any composition operation.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::error::Error;
use core::fmt;

/// Capability trait for recoverable error objects.
///
/// Anything implementing `Fault` can travel as a `Failure` payload and
/// render itself with an origin-qualified display name.
pub trait Fault: Error {
    /// Display name of this fault kind.
    fn name(&self) -> &str;

    /// Human-readable description of what went wrong.
    fn message(&self) -> &str;

    /// The wrapped origin error, if any.
    fn origin(&self) -> Option<&(dyn Error + 'static)> {
        self.source()
    }

    /// Display name of the origin error, when one was captured.
    fn origin_name(&self) -> Option<&str> {
        None
    }

    /// The fault name qualified by its origin's name, e.g. `StdFault from Error`.
    fn expanded_name(&self) -> String {
        match self.origin_name() {
            Some(origin) => alloc::format!("{} from {}", self.name(), origin),
            None => self.name().into(),
        }
    }
}

/// The standard recoverable fault kind.
///
/// Wraps an arbitrary error value, keeping the original as its origin so the
/// chain stays inspectable through [`Error::source`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{Fault, StdFault};
///
/// let parse_err = "1x".parse::<i32>().unwrap_err();
/// let fault = StdFault::wrap(parse_err);
///
/// assert_eq!(fault.name(), "StdFault");
/// assert_eq!(fault.expanded_name(), "StdFault from ParseIntError");
/// assert!(fault.origin().is_some());
/// ```
#[derive(Debug)]
pub struct StdFault {
    message: String,
    origin: Option<Box<dyn Error + Send + Sync>>,
    origin_name: Option<String>,
}

impl StdFault {
    /// Creates a fault from a bare message, with no origin.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into(), origin: None, origin_name: None }
    }

    /// Wraps a concrete error value, capturing its type name as the origin name.
    pub fn wrap<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: error.to_string(),
            origin_name: Some(short_type_name::<E>().into()),
            origin: Some(Box::new(error)),
        }
    }

    /// Wraps an already-boxed error. The origin name is unknown at this point.
    pub fn from_boxed(error: Box<dyn Error + Send + Sync>) -> Self {
        Self { message: error.to_string(), origin_name: None, origin: Some(error) }
    }
}

impl fmt::Display for StdFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.expanded_name(), self.message)
    }
}

impl Error for StdFault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.origin.as_deref().map(|error| error as &(dyn Error + 'static))
    }
}

impl Fault for StdFault {
    fn name(&self) -> &str {
        "StdFault"
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn origin_name(&self) -> Option<&str> {
        self.origin_name.as_deref()
    }
}

/// The non-recoverable panic signal.
///
/// Raised (as a panic payload under `std`) by `unwrap`, `expect`, `tap` and
/// their duals, and by the external-failure conversion when handed a value
/// that does not satisfy the fault capability. A `Panic` must always
/// propagate; [`to_std_fault`](crate::convert::to_std_fault) re-raises it
/// unchanged rather than wrapping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panic {
    message: String,
}

impl Panic {
    /// Creates a panic signal with the given message.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }

    /// The panic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Panic: {}", self.message)
    }
}

impl Error for Panic {}

/// Last path segment of a type name, so `std::io::Error` reads as `Error`.
fn short_type_name<T>() -> &'static str {
    let full = core::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Raises a [`Panic`]. Under `std` the payload is the `Panic` value itself so
/// the conversion operation can recognize and re-raise it; without `std` the
/// same text goes through a plain `panic!`.
#[cfg(feature = "std")]
#[cold]
pub(crate) fn panic_fault(message: String) -> ! {
    std::panic::panic_any(Panic::new(message))
}

#[cfg(not(feature = "std"))]
#[cold]
pub(crate) fn panic_fault(message: String) -> ! {
    panic!("Panic: {}", message)
}
