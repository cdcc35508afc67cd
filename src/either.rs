//! # The either module
//! This module contains the Either type and implementations

use std::fmt;
use std::result;

use crate::error::Error;
use crate::option::Option;
use crate::result::Result;

const UNWRAP_LHS: &str = "called `Either::unwrap_lhs()` on a right-hand side value";
const UNWRAP_RHS: &str = "called `Either::unwrap_rhs()` on a left-hand side value";

/// Either is a type that represents either of two types
///
/// It is split up into a left-hand side and a right-hand side value.
/// Neither side has any special meaning: unlike Result, the right-hand
/// side is not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Lhs(L),
    Rhs(R)
}

impl <L, R> Either<L, R> {

    /// Creates an Either holding the given left-hand side value
    pub fn with_lhs(value: L) -> Either<L, R> {
        Either::Lhs(value)
    }

    /// Creates an Either holding the given right-hand side value
    pub fn with_rhs(value: R) -> Either<L, R> {
        Either::Rhs(value)
    }

    /// Returns true if the Either contains an element of type L
    pub fn is_lhs(&self) -> bool {
        match *self {
            Either::Lhs(_) => true,
            Either::Rhs(_) => false
        }
    }

    /// Returns true if the Either contains an element of type R
    pub fn is_rhs(&self) -> bool {
        match *self {
            Either::Lhs(_) => false,
            Either::Rhs(_) => true
        }
    }

    /// Converts the Either into an Option, holding the L value or nothing
    pub fn lhs(self) -> Option<L> {
        match self {
            Either::Lhs(val) => Option::with_value(val),
            Either::Rhs(_) => Option::empty()
        }
    }

    /// Converts the Either into an Option, holding the R value or nothing
    pub fn rhs(self) -> Option<R> {
        match self {
            Either::Lhs(_) => Option::empty(),
            Either::Rhs(val) => Option::with_value(val)
        }
    }

    /// Swaps the sides of the Either
    ///
    /// Flipping twice gives back the original Either.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Either::Lhs(val) => Either::Rhs(val),
            Either::Rhs(val) => Either::Lhs(val)
        }
    }

    /// Returns the L value or the given default
    pub fn lhs_or(self, default: L) -> L {
        match self {
            Either::Lhs(val) => val,
            Either::Rhs(_) => default
        }
    }

    /// Returns the R value or the given default
    pub fn rhs_or(self, default: R) -> R {
        match self {
            Either::Lhs(_) => default,
            Either::Rhs(val) => val
        }
    }

    /// Returns the L value, or converts the R value into one using the given closure
    pub fn lhs_or_else<F>(self, f: F) -> L
        where F: FnOnce(R) -> L {
        match self {
            Either::Lhs(val) => val,
            Either::Rhs(val) => f(val)
        }
    }

    /// Returns the R value, or converts the L value into one using the given closure
    pub fn rhs_or_else<F>(self, f: F) -> R
        where F: FnOnce(L) -> R {
        match self {
            Either::Lhs(val) => f(val),
            Either::Rhs(val) => val
        }
    }

    /// Converts the Either into a Result of its L value, failing with the given error otherwise
    pub fn lhs_or_error<E: Into<Error>>(self, err: E) -> Result<L> {
        match self {
            Either::Lhs(val) => Result::with_value(val),
            Either::Rhs(_) => Result::with_error(err)
        }
    }

    /// Converts the Either into a Result of its R value, failing with the given error otherwise
    pub fn rhs_or_error<E: Into<Error>>(self, err: E) -> Result<R> {
        match self {
            Either::Lhs(_) => Result::with_error(err),
            Either::Rhs(val) => Result::with_value(val)
        }
    }
}

impl <L: Default, R> Either<L, R> {

    /// Returns the L value or the default value of L
    pub fn lhs_or_default(self) -> L {
        self.lhs_or_else(|_| L::default())
    }
}

impl <L, R: Default> Either<L, R> {

    /// Returns the R value or the default value of R
    pub fn rhs_or_default(self) -> R {
        self.rhs_or_else(|_| R::default())
    }
}

impl <L, R: fmt::Debug> Either<L, R> {

    /// Returns the L value, panicking with the given message and the R value otherwise
    #[track_caller]
    pub fn expect_lhs(self, message: &str) -> L {
        match self {
            Either::Lhs(val) => val,
            Either::Rhs(val) => crate::contract_violation(&format!("{}: {:?}", message, val))
        }
    }

    /// Returns the L value, panicking if the Either holds an R value
    #[track_caller]
    pub fn unwrap_lhs(self) -> L {
        self.expect_lhs(UNWRAP_LHS)
    }
}

impl <L: fmt::Debug, R> Either<L, R> {

    /// Returns the R value, panicking with the given message and the L value otherwise
    #[track_caller]
    pub fn expect_rhs(self, message: &str) -> R {
        match self {
            Either::Lhs(val) => crate::contract_violation(&format!("{}: {:?}", message, val)),
            Either::Rhs(val) => val
        }
    }

    /// Returns the R value, panicking if the Either holds an L value
    #[track_caller]
    pub fn unwrap_rhs(self) -> R {
        self.expect_rhs(UNWRAP_RHS)
    }
}

/// Ok values become the left-hand side, Err values the right-hand side
impl <L, R> From<result::Result<L, R>> for Either<L, R> {
    fn from(res: result::Result<L, R>) -> Either<L, R> {
        match res {
            Ok(val) => Either::Lhs(val),
            Err(val) => Either::Rhs(val)
        }
    }
}


// Module containing either tests
#[cfg(test)]
mod tests {
    use super::Either;
    use crate::error::Error;

    fn left(value: i64) -> Either<i64, String> {
        Either::with_lhs(value)
    }

    fn right(value: &str) -> Either<i64, String> {
        Either::with_rhs(value.to_string())
    }

    // Tests the is_lhs and is_rhs functions
    #[test]
    fn test_is_lhs_is_rhs() {
        assert!(left(5).is_lhs());
        assert!(!left(5).is_rhs());
        assert!(right("a").is_rhs());
        assert!(!right("a").is_lhs());
    }

    // Tests the lhs and rhs functions
    #[test]
    fn test_lhs_rhs() {
        assert!(left(5).rhs().is_empty());
        assert_eq!(left(5).lhs().unwrap(), 5);

        assert!(right("a").lhs().is_empty());
        assert_eq!(right("a").rhs().unwrap(), "a");
    }

    // Tests the flip function
    #[test]
    fn test_flip() {
        let flipped = left(5).flip();
        assert!(flipped.is_rhs());
        assert_eq!(flipped.clone().rhs().unwrap(), 5);

        // Flipping twice is the identity, on both sides
        assert_eq!(flipped.flip(), left(5));
        assert_eq!(right("a").flip().flip(), right("a"));
    }

    // Tests the lhs_or and rhs_or functions
    #[test]
    fn test_or() {
        assert_eq!(left(5).lhs_or(7), 5);
        assert_eq!(right("a").lhs_or(7), 7);
        assert_eq!(right("a").rhs_or("b".to_string()), "a");
        assert_eq!(left(5).rhs_or("b".to_string()), "b");
    }

    // Tests the lhs_or_default and rhs_or_default functions
    #[test]
    fn test_or_default() {
        assert_eq!(left(5).lhs_or_default(), 5);
        assert_eq!(right("a").lhs_or_default(), 0);
        assert_eq!(right("a").rhs_or_default(), "a");
        assert_eq!(left(5).rhs_or_default(), "");
    }

    // Tests the lhs_or_else and rhs_or_else functions
    #[test]
    fn test_or_else() {
        assert_eq!(left(5).lhs_or_else(|_| panic!("closure called")), 5);
        assert_eq!(right("42").lhs_or_else(|r| r.parse().unwrap()), 42);
        assert_eq!(left(5).rhs_or_else(|l| l.to_string()), "5");
        assert_eq!(right("a").rhs_or_else(|_| panic!("closure called")), "a");
    }

    // Tests the lhs_or_error and rhs_or_error functions
    #[test]
    fn test_or_error() {
        let err = Error::msg("wrong side");

        assert_eq!(left(5).lhs_or_error(err.clone()).unwrap(), 5);
        let r = right("a").lhs_or_error(err.clone());
        assert!(Error::ptr_eq(&r.unwrap_error(), &err));

        assert_eq!(right("a").rhs_or_error(err.clone()).unwrap(), "a");
        let r = left(5).rhs_or_error(err.clone());
        assert!(Error::ptr_eq(&r.unwrap_error(), &err));
    }

    // Tests the unwrap_lhs and unwrap_rhs functions
    #[test]
    fn test_unwrap() {
        assert_eq!(left(5).unwrap_lhs(), 5);
        assert_eq!(right("a").unwrap_rhs(), "a");
        assert_eq!(left(5).expect_lhs("need a number"), 5);
        assert_eq!(right("a").expect_rhs("need a string"), "a");
    }

    // Tests the unwrap_lhs function on a right-hand side value
    #[test]
    #[should_panic(expected = "called `Either::unwrap_lhs()` on a right-hand side value: \"a\"")]
    fn test_unwrap_lhs_on_rhs() {
        let _ = env_logger::builder().is_test(true).try_init();

        right("a").unwrap_lhs();
    }

    // Tests the unwrap_rhs function on a left-hand side value
    #[test]
    #[should_panic(expected = "called `Either::unwrap_rhs()` on a left-hand side value: 5")]
    fn test_unwrap_rhs_on_lhs() {
        left(5).unwrap_rhs();
    }

    // Tests the expect_lhs function on a right-hand side value
    #[test]
    #[should_panic(expected = "need a number: \"a\"")]
    fn test_expect_lhs_on_rhs() {
        right("a").expect_lhs("need a number");
    }

    // Tests the expect_rhs function on a left-hand side value
    #[test]
    #[should_panic(expected = "need a string: 5")]
    fn test_expect_rhs_on_lhs() {
        left(5).expect_rhs("need a string");
    }

    // Tests the From conversion
    #[test]
    fn test_from_result() {
        assert_eq!(Either::from(Ok::<i64, String>(5)), left(5));
        assert_eq!(Either::from(Err::<i64, String>("a".to_string())), right("a"));
    }
}
