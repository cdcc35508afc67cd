//! # The option module
//! This module contains the Option type and implementations
//!
//! An Option either holds a value or is empty. Emptiness is ordinary data:
//! it is checked with `is_value`/`is_empty`, substituted with the
//! `unwrap_or*` family, or bridged into a Result with `ok_or`. Only the
//! `unwrap`/`expect` extractors treat emptiness as a programming error.

use std::hint;
use std::option;
use std::slice;

use crate::error::Error;
use crate::result::Result;

const UNWRAP_EMPTY: &str = "called `Option::unwrap()` on an empty value";

/// Option is a type that either contains a value of type V or nothing
///
/// Unlike `std::option::Option`, every combinator on this type is
/// type-preserving: `and_then` and `or_else` always produce another
/// `Option<V>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Option<V> {
    Value(V),
    Empty
}

impl <V> Option<V> {

    /// Creates an Option containing the given value
    pub fn with_value(value: V) -> Option<V> {
        Option::Value(value)
    }

    /// Creates an empty Option
    pub fn empty() -> Option<V> {
        Option::Empty
    }

    /// Returns true if the Option contains a value
    pub fn is_value(&self) -> bool {
        match *self {
            Option::Value(_) => true,
            Option::Empty => false
        }
    }

    /// Returns true if the Option contains a value for which the predicate holds
    ///
    /// The predicate is not called on an empty Option.
    pub fn is_value_and<F>(&self, predicate: F) -> bool
        where F: FnOnce(&V) -> bool {
        match *self {
            Option::Value(ref val) => predicate(val),
            Option::Empty => false
        }
    }

    /// Returns true if the Option is empty
    pub fn is_empty(&self) -> bool {
        !self.is_value()
    }

    /// Overwrites the Option with the given value, returning it for chaining
    pub fn as_value(&mut self, value: V) -> &mut Option<V> {
        *self = Option::Value(value);
        self
    }

    /// Clears the Option, returning it for chaining
    pub fn as_empty(&mut self) -> &mut Option<V> {
        trace!("Option cleared in place");
        *self = Option::Empty;
        self
    }

    /// Returns a slice over the contained value
    ///
    /// The slice has one element if the Option contains a value and is
    /// empty otherwise.
    pub fn as_slice(&self) -> &[V] {
        match *self {
            Option::Value(ref val) => slice::from_ref(val),
            Option::Empty => &[]
        }
    }

    /// Returns an iterator over the contained value
    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.as_slice().iter()
    }

    /// Returns the contained value, panicking with the given message if the Option is empty
    #[track_caller]
    pub fn expect(self, message: &str) -> V {
        match self {
            Option::Value(val) => val,
            Option::Empty => crate::contract_violation(message)
        }
    }

    /// Returns the contained value, panicking if the Option is empty
    #[track_caller]
    pub fn unwrap(self) -> V {
        self.expect(UNWRAP_EMPTY)
    }

    /// Returns the contained value or the given default
    pub fn unwrap_or(self, default: V) -> V {
        match self {
            Option::Value(val) => val,
            Option::Empty => default
        }
    }

    /// Returns the contained value or computes one from the given closure
    pub fn unwrap_or_else<F>(self, f: F) -> V
        where F: FnOnce() -> V {
        match self {
            Option::Value(val) => val,
            Option::Empty => f()
        }
    }

    /// Returns the contained value, without checking that the Option is not empty
    ///
    /// # Safety
    ///
    /// Calling this on an empty Option is undefined behavior.
    pub unsafe fn unwrap_unchecked(self) -> V {
        match self {
            Option::Value(val) => val,
            // SAFETY: the caller guarantees the Option contains a value
            Option::Empty => unsafe { hint::unreachable_unchecked() }
        }
    }

    /// Calls the given closure with a mutable reference to the contained value, if any
    ///
    /// The Option is returned afterwards with any changes the closure made.
    pub fn inspect<F>(mut self, f: F) -> Option<V>
        where F: FnOnce(&mut V) {
        if let Option::Value(ref mut val) = self {
            f(val);
        }
        self
    }

    /// Converts the Option into a Result, failing with the given error if empty
    pub fn ok_or<E: Into<Error>>(self, err: E) -> Result<V> {
        match self {
            Option::Value(val) => Result::with_value(val),
            Option::Empty => Result::with_error(err)
        }
    }

    /// Converts the Option into a Result, failing with the error computed by the given closure if empty
    ///
    /// The closure is only called on an empty Option.
    pub fn ok_or_else<E, F>(self, err: F) -> Result<V>
        where E: Into<Error>, F: FnOnce() -> E {
        match self {
            Option::Value(val) => Result::with_value(val),
            Option::Empty => Result::with_error(err())
        }
    }

    /// Returns other if the Option contains a value, otherwise returns the empty Option
    pub fn and(self, other: Option<V>) -> Option<V> {
        match self {
            Option::Value(_) => other,
            Option::Empty => Option::Empty
        }
    }

    /// Calls the given closure on the contained value, if any, and returns its result
    pub fn and_then<F>(self, f: F) -> Option<V>
        where F: FnOnce(V) -> Option<V> {
        match self {
            Option::Value(val) => f(val),
            Option::Empty => Option::Empty
        }
    }

    /// Returns the Option if the predicate holds on its value, otherwise an empty Option
    pub fn filter<P>(self, predicate: P) -> Option<V>
        where P: FnOnce(&V) -> bool {
        if let Option::Value(ref val) = self {
            if predicate(val) {
                return self;
            }
        }
        Option::Empty
    }

    /// Returns the Option if it contains a value, otherwise returns other
    pub fn or(self, other: Option<V>) -> Option<V> {
        match self {
            Option::Value(_) => self,
            Option::Empty => other
        }
    }

    /// Returns the Option if it contains a value, otherwise calls the given closure
    pub fn or_else<F>(self, f: F) -> Option<V>
        where F: FnOnce() -> Option<V> {
        match self {
            Option::Value(_) => self,
            Option::Empty => f()
        }
    }

    /// Returns whichever of the two Options contains a value, if exactly one does
    ///
    /// Two Options that both contain a value cancel out to an empty Option.
    pub fn xor(self, other: Option<V>) -> Option<V> {
        match (self, other) {
            (a @ Option::Value(_), Option::Empty) => a,
            (Option::Empty, b @ Option::Value(_)) => b,
            _ => Option::Empty
        }
    }

    /// Stores the given value, returning a mutable reference to it
    ///
    /// Any previously contained value is dropped.
    pub fn insert(&mut self, value: V) -> &mut V {
        *self = Option::Value(value);

        // SAFETY: the code above just filled the Option
        unsafe { self.slot_unchecked() }
    }

    /// Stores the given value if the Option is empty, then returns a mutable reference to the contained value
    pub fn get_or_insert(&mut self, value: V) -> &mut V {
        self.get_or_insert_with(|| value)
    }

    /// Stores the default value if the Option is empty, then returns a mutable reference to the contained value
    pub fn get_or_insert_default(&mut self) -> &mut V
        where V: Default {
        self.get_or_insert_with(V::default)
    }

    /// Stores the value computed by the given closure if the Option is empty, then returns a mutable reference to the contained value
    ///
    /// The closure is only called on an empty Option.
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut V
        where F: FnOnce() -> V {
        if let Option::Empty = *self {
            *self = Option::Value(f());
        }

        // SAFETY: an empty Option would have been filled by the code above
        unsafe { self.slot_unchecked() }
    }

    /// Moves the value out of the Option, leaving it empty
    ///
    /// Taking from an empty Option returns an empty Option.
    pub fn take(&mut self) -> Option<V> {
        if self.is_value() {
            trace!("Value taken out of Option");
        }
        ::std::mem::replace(self, Option::Empty)
    }

    /// Moves the value out of the Option if the predicate holds on it
    ///
    /// The predicate receives a mutable reference and may adjust the value
    /// before it is taken (or left in place).
    pub fn take_if<P>(&mut self, predicate: P) -> Option<V>
        where P: FnOnce(&mut V) -> bool {
        let taken = match *self {
            Option::Value(ref mut val) => predicate(val),
            Option::Empty => false
        };

        if taken { self.take() } else { Option::Empty }
    }

    /// Stores the given value, returning the previous contents as a detached Option
    pub fn replace(&mut self, value: V) -> Option<V> {
        trace!("Option contents replaced");
        ::std::mem::replace(self, Option::Value(value))
    }

    /// Converts into the standard library's Option
    pub fn into_std(self) -> option::Option<V> {
        match self {
            Option::Value(val) => Some(val),
            Option::Empty => None
        }
    }

    // Returns a mutable reference to the contained value without checking it is there
    unsafe fn slot_unchecked(&mut self) -> &mut V {
        match *self {
            Option::Value(ref mut val) => val,
            // SAFETY: upheld by the callers, which fill the Option first
            Option::Empty => unsafe { hint::unreachable_unchecked() }
        }
    }
}

impl <V: Default> Option<V> {

    /// Returns the contained value or the default value of V
    pub fn unwrap_or_default(self) -> V {
        match self {
            Option::Value(val) => val,
            Option::Empty => V::default()
        }
    }
}

impl <V> Default for Option<V> {
    fn default() -> Option<V> {
        Option::Empty
    }
}

impl <V> From<option::Option<V>> for Option<V> {
    fn from(opt: option::Option<V>) -> Option<V> {
        match opt {
            Some(val) => Option::Value(val),
            None => Option::Empty
        }
    }
}

impl <V> IntoIterator for Option<V> {
    type Item = V;
    type IntoIter = option::IntoIter<V>;

    fn into_iter(self) -> option::IntoIter<V> {
        self.into_std().into_iter()
    }
}

impl <'a, V> IntoIterator for &'a Option<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> slice::Iter<'a, V> {
        self.iter()
    }
}
