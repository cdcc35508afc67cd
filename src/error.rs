//! # The error module
//! This module contains the error value carried by a failed Result

use std::error;
use std::fmt;
use std::sync::Arc;

/// A plain-text error, used when an Error is built from a message
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Message(String);

/// Represents the error side of a Result
///
/// Any type implementing `std::error::Error` can be wrapped. The wrapped
/// error is shared, so cloning an Error is cheap and every clone refers to
/// the same underlying value (see `Error::ptr_eq`).
#[derive(Clone)]
pub struct Error {
    inner: Arc<dyn error::Error + Send + Sync + 'static>,
}

impl Error {

    /// Wraps an arbitrary error value
    pub fn new<E>(err: E) -> Error
        where E: error::Error + Send + Sync + 'static {
        Error { inner: Arc::new(err) }
    }

    /// Creates an error that displays as the given message
    pub fn msg<M: Into<String>>(message: M) -> Error {
        Error::new(Message(message.into()))
    }

    /// Returns true if both errors are copies of the same error value
    pub fn ptr_eq(this: &Error, other: &Error) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// Returns a reference to the wrapped error if it is of type E
    pub fn downcast_ref<E>(&self) -> Option<&E>
        where E: error::Error + 'static {
        self.inner.downcast_ref::<E>()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, fmt)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, fmt)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.inner.source()
    }
}

impl<'a> From<&'a str> for Error {
    fn from(message: &'a str) -> Error {
        Error::msg(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Error {
        Error::msg(message)
    }
}

impl From<Box<dyn error::Error + Send + Sync + 'static>> for Error {
    fn from(err: Box<dyn error::Error + Send + Sync + 'static>) -> Error {
        Error { inner: Arc::from(err) }
    }
}

// Module containing error tests
#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::fmt;
    use super::Error;

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Inner {
        fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
            write!(fmt, "inner failure")
        }
    }

    impl std::error::Error for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);

    impl fmt::Display for Outer {
        fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
            write!(fmt, "outer failure")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    // Tests the msg function
    #[test]
    fn test_msg() {
        let err = Error::msg("disk full");

        assert_eq!(err.to_string(), "disk full");
        assert_eq!(format!("{:?}", err), "Message(\"disk full\")");
        assert!(err.source().is_none());
    }

    // Tests the From conversions
    #[test]
    fn test_from() {
        assert_eq!(Error::from("a").to_string(), "a");
        assert_eq!(Error::from(String::from("b")).to_string(), "b");

        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(Inner);
        assert_eq!(Error::from(boxed).to_string(), "inner failure");
    }

    // Tests the source forwarding
    #[test]
    fn test_source() {
        let err = Error::new(Outer(Inner));

        assert_eq!(err.to_string(), "outer failure");
        assert_eq!(err.source().unwrap().to_string(), "inner failure");
    }

    // Tests the ptr_eq function
    #[test]
    fn test_ptr_eq() {
        let err = Error::msg("x");
        let copy = err.clone();
        let other = Error::msg("x");

        // Clones share the wrapped value, equal messages do not
        assert!(Error::ptr_eq(&err, &copy));
        assert!(!Error::ptr_eq(&err, &other));
    }

    // Tests the downcast_ref function
    #[test]
    fn test_downcast_ref() {
        let err = Error::new(Inner);

        assert!(err.downcast_ref::<Inner>().is_some());
        assert!(err.downcast_ref::<Outer>().is_none());
    }
}
