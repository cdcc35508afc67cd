//! # The result module
//! This module contains the Result type and implementations

use std::fmt;
use std::hint;
use std::result;

use crate::error::Error;
use crate::option::Option;

const UNWRAP_ERROR: &str = "called `Result::unwrap()` on an error value";
const UNWRAP_VALUE: &str = "called `Result::unwrap_error()` on a success value";

/// Result is a type that represents either a successful value or an error
///
/// The error side is always an `Error`, so only the value type is generic.
/// Results have no in-place mutators: every combinator returns a new Result.
#[derive(Clone, Debug)]
pub enum Result<V> {
    Value(V),
    Error(Error)
}

impl <V> Result<V> {

    /// Creates a successful Result containing the given value
    pub fn with_value(value: V) -> Result<V> {
        Result::Value(value)
    }

    /// Creates a failed Result containing the given error
    pub fn with_error<E: Into<Error>>(err: E) -> Result<V> {
        Result::Error(err.into())
    }

    /// Returns true if the Result is successful
    pub fn is_value(&self) -> bool {
        match *self {
            Result::Value(_) => true,
            Result::Error(_) => false
        }
    }

    /// Returns true if the Result is successful and the predicate holds on its value
    pub fn is_value_and<F>(&self, predicate: F) -> bool
        where F: FnOnce(&V) -> bool {
        match *self {
            Result::Value(ref val) => predicate(val),
            Result::Error(_) => false
        }
    }

    /// Returns true if the Result is failed
    pub fn is_error(&self) -> bool {
        !self.is_value()
    }

    /// Returns true if the Result is failed and the predicate holds on its error
    pub fn is_error_and<F>(&self, predicate: F) -> bool
        where F: FnOnce(&Error) -> bool {
        match *self {
            Result::Value(_) => false,
            Result::Error(ref err) => predicate(err)
        }
    }

    /// Converts the Result into an Option of its value, discarding any error
    pub fn value_option(self) -> Option<V> {
        match self {
            Result::Value(val) => Option::with_value(val),
            Result::Error(_) => Option::empty()
        }
    }

    /// Converts the Result into an Option of its error, discarding any value
    pub fn error_option(self) -> Option<Error> {
        match self {
            Result::Value(_) => Option::empty(),
            Result::Error(err) => Option::with_value(err)
        }
    }

    /// Returns the contained value, panicking with the given message and the error if failed
    #[track_caller]
    pub fn expect(self, message: &str) -> V {
        match self {
            Result::Value(val) => val,
            Result::Error(err) => crate::contract_violation(&format!("{}: {}", message, err))
        }
    }

    /// Returns the contained value, panicking if the Result is failed
    #[track_caller]
    pub fn unwrap(self) -> V {
        self.expect(UNWRAP_ERROR)
    }

    /// Returns the contained value or the given default
    pub fn unwrap_or(self, default: V) -> V {
        match self {
            Result::Value(val) => val,
            Result::Error(_) => default
        }
    }

    /// Returns the contained value, without checking that the Result is successful
    ///
    /// # Safety
    ///
    /// Calling this on a failed Result is undefined behavior.
    pub unsafe fn unwrap_unchecked(self) -> V {
        match self {
            Result::Value(val) => val,
            // SAFETY: the caller guarantees the Result is successful
            Result::Error(_) => unsafe { hint::unreachable_unchecked() }
        }
    }

    /// Returns the contained error, without checking that the Result is failed
    ///
    /// # Safety
    ///
    /// Calling this on a successful Result is undefined behavior.
    pub unsafe fn unwrap_error_unchecked(self) -> Error {
        match self {
            // SAFETY: the caller guarantees the Result is failed
            Result::Value(_) => unsafe { hint::unreachable_unchecked() },
            Result::Error(err) => err
        }
    }

    /// Returns other if the Result is successful, otherwise returns the failed Result
    pub fn and(self, other: Result<V>) -> Result<V> {
        match self {
            Result::Value(_) => other,
            Result::Error(_) => self
        }
    }

    /// Calls the given closure on the contained value if successful, otherwise returns the failed Result
    ///
    /// The error of a failed Result is passed through untouched.
    pub fn and_then<F>(self, f: F) -> Result<V>
        where F: FnOnce(V) -> Result<V> {
        match self {
            Result::Value(val) => f(val),
            Result::Error(_) => self
        }
    }

    /// Returns the Result if successful, otherwise returns other
    pub fn or(self, other: Result<V>) -> Result<V> {
        match self {
            Result::Value(_) => self,
            Result::Error(_) => other
        }
    }

    /// Returns the Result if successful, otherwise calls the given closure with the error
    pub fn or_else<F>(self, f: F) -> Result<V>
        where F: FnOnce(Error) -> Result<V> {
        match self {
            Result::Value(_) => self,
            Result::Error(err) => f(err)
        }
    }

    /// Converts into the standard library's Result
    pub fn into_std(self) -> result::Result<V, Error> {
        match self {
            Result::Value(val) => Ok(val),
            Result::Error(err) => Err(err)
        }
    }
}

impl <V: Default> Result<V> {

    /// Returns the contained value or the default value of V
    pub fn unwrap_or_default(self) -> V {
        match self {
            Result::Value(val) => val,
            Result::Error(_) => V::default()
        }
    }
}

impl <V: fmt::Debug> Result<V> {

    /// Returns the contained error, panicking with the given message and the value if successful
    #[track_caller]
    pub fn expect_error(self, message: &str) -> Error {
        match self {
            Result::Value(val) => crate::contract_violation(&format!("{}: {:?}", message, val)),
            Result::Error(err) => err
        }
    }

    /// Returns the contained error, panicking if the Result is successful
    #[track_caller]
    pub fn unwrap_error(self) -> Error {
        self.expect_error(UNWRAP_VALUE)
    }
}

/// Successful Results compare their values, failed Results compare error identity
impl <V: PartialEq> PartialEq for Result<V> {
    fn eq(&self, other: &Result<V>) -> bool {
        match (self, other) {
            (&Result::Value(ref a), &Result::Value(ref b)) => a == b,
            (&Result::Error(ref a), &Result::Error(ref b)) => Error::ptr_eq(a, b),
            _ => false
        }
    }
}

impl <V, E: Into<Error>> From<result::Result<V, E>> for Result<V> {
    fn from(res: result::Result<V, E>) -> Result<V> {
        match res {
            Ok(val) => Result::Value(val),
            Err(err) => Result::with_error(err)
        }
    }
}
