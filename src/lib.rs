//! # The either crate
//! This crate contains explicit wrappers for optional values, fallible results
//! and two-sided choices
//!
//! Functions that may have nothing to return, may fail, or may return one of
//! two things say so in their signature by returning one of the types in this
//! crate. The caller then has to inspect the value before using it, either by
//! querying it, by substituting a fallback, or by chaining further calls.
//!
//! ## Design
//! There are three independent value types:
//!
//! * `Option<V>` holds a value or nothing. It is the only type with in-place
//!   mutators (`insert`, `take`, `replace`, ...), which take `&mut self`.
//! * `Result<V>` holds a value or an `Error`. All of its combinators return a
//!   new Result.
//! * `Either<L, R>` holds exactly one of an `L` or an `R`.
//!
//! They convert into one another only through explicit bridging calls:
//! `Option::ok_or`, `Result::value_option`, `Either::lhs_or_error` and so on.
//! Combinators never change the wrapped type, so `and_then` on an
//! `Option<V>` always yields another `Option<V>`.
//!
//! Absence and failure are plain data and never unwind. The `unwrap` and
//! `expect` families are the exception: calling them when the precondition
//! does not hold is a bug in the caller, and they panic with a message that
//! includes the opposing state. That message is also logged through the `log`
//! facade at error level before the panic starts.

#[macro_use]
extern crate log;

pub mod either;
pub mod error;
pub mod option;
pub mod result;

pub use either::Either;
pub use error::Error;
pub use option::Option;
pub use result::Result;

// Reports a broken precondition of an unwrap/expect style call
#[cold]
#[track_caller]
fn contract_violation(message: &str) -> ! {
    error!("{}", message);
    panic!("{}", message)
}
