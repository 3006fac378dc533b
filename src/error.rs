use alloc::{boxed::Box, sync::Arc};

/// An error that can occur in this crate.
///
/// Errors only arise from construction-time validation. For example, asking
/// for a negative subsecond precision via [`Component::subseconds`], or
/// building a [`Locale`] from an empty tag. Pattern resolution itself is
/// total and never produces an error: a translator failure during
/// localization degrades to the exact pattern instead.
///
/// # Design
///
/// This crate follows the "one true error type" pattern, where a single
/// error type covers every fallible operation. The operations here are few
/// enough that finer grained types would be more ceremony than signal.
///
/// [`Component::subseconds`]: crate::Component::subseconds
/// [`Locale`]: crate::Locale
#[derive(Clone, Debug)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheaply cloneable and one word
    /// in size.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Range(RangeError),
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from Rust's
    /// standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// # Example
    ///
    /// ```
    /// use datefmt::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated from a value being out of its
    /// allowed range.
    ///
    /// # Example
    ///
    /// ```
    /// use datefmt::Component;
    ///
    /// assert!(Component::subseconds(-1).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::Range(_))
    }

    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "subsecond precision")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind }) }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.inner.kind {
            ErrorKind::Adhoc(ref err) => err.fmt(f),
            ErrorKind::Range(ref err) => err.fmt(f),
        }
    }
}

/// A generic error message.
#[derive(Debug)]
struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and
/// maximum allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> RangeError {
        RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A convenience macro for constructing an ad hoc `Error` value.
macro_rules! err {
    ($($tt:tt)*) => {{
        crate::error::Error::from_args(core::format_args!($($tt)*))
    }}
}

pub(crate) use err;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    // We test that our 'Error' type is the size we expect. This isn't an API
    // guarantee, but if the size increases, we really want to make sure we
    // decide to do that intentionally. So this should be a speed bump.
    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_messages() {
        let err = err!("locale tag {tag:?} is invalid", tag = "");
        assert_eq!(err.to_string(), "locale tag \"\" is invalid");
        assert!(!err.is_range());

        let err = Error::range("subsecond precision", -1, 0, 9);
        assert_eq!(
            err.to_string(),
            "parameter 'subsecond precision' with value -1 \
             is not in the required range of 0..=9",
        );
        assert!(err.is_range());
    }
}
