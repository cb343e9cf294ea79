// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Overflow Reaction Policies
//!
//! A reaction policy turns the verdicts of an
//! [`OverflowPredicate`](crate::overflow::predicate::OverflowPredicate) set
//! into control flow. Every policy exposes the same checking surface; they
//! differ only in what happens when an operation would overflow.
//!
//! - [`Ignore`]: every check succeeds without consulting any predicate. Raw
//!   arithmetic then wraps around in two's complement. This is an explicit
//!   opt-out, not a silent bug.
//! - [`Signal`]: consults a predicate set and returns a structured
//!   [`OverflowError`] carrying the offending operands. This is the default.
//! - [`AlwaysPass`]: the signalling path over hardwired `true` verdicts.
//!
//! Policies are zero-sized type-level markers; a binding is fixed per
//! instantiation and cannot be switched at runtime.

use crate::num::natural::Natural;
use crate::overflow::error::{
    BinaryOperation, BinaryOverflow, OverflowError, ShiftOverflow, UnaryOperation, UnaryOverflow,
};
use crate::overflow::predicate::{AlwaysRepresentable, BoundedPredicates, OverflowPredicate};
use std::marker::PhantomData;

/// The checking surface shared by all reaction policies.
///
/// Each check returns `Ok(())` if the operation may proceed.
pub trait OverflowPolicy<T>
where
    T: Natural,
{
    /// Checks `lhs + rhs`.
    fn check_plus(lhs: T, rhs: T) -> Result<(), OverflowError<T>>;

    /// Checks `lhs - rhs`.
    fn check_minus(lhs: T, rhs: T) -> Result<(), OverflowError<T>>;

    /// Checks `lhs * rhs`.
    fn check_multiply(lhs: T, rhs: T) -> Result<(), OverflowError<T>>;

    /// Checks `lhs / rhs`. A zero divisor is rejected like an overflow.
    fn check_divide(lhs: T, rhs: T) -> Result<(), OverflowError<T>>;

    /// Checks `lhs % rhs`. A zero divisor is rejected like an overflow.
    fn check_modulus(lhs: T, rhs: T) -> Result<(), OverflowError<T>>;

    /// Checks `-operand`.
    fn check_negate(operand: T) -> Result<(), OverflowError<T>>;

    /// Checks `operand + 1`.
    fn check_increment(operand: T) -> Result<(), OverflowError<T>>;

    /// Checks `operand - 1`.
    fn check_decrement(operand: T) -> Result<(), OverflowError<T>>;

    /// Checks `lhs << shift`. Only a positive `lhs` is shiftable.
    fn check_shl(lhs: T, shift: u32) -> Result<(), OverflowError<T>>;

    /// Dispatches a binary check by operation.
    #[inline]
    fn check_binary(op: BinaryOperation, lhs: T, rhs: T) -> Result<(), OverflowError<T>> {
        match op {
            BinaryOperation::Plus => Self::check_plus(lhs, rhs),
            BinaryOperation::Minus => Self::check_minus(lhs, rhs),
            BinaryOperation::Multiply => Self::check_multiply(lhs, rhs),
            BinaryOperation::Divide => Self::check_divide(lhs, rhs),
            BinaryOperation::Modulus => Self::check_modulus(lhs, rhs),
        }
    }

    /// Dispatches a unary check by operation.
    #[inline]
    fn check_unary(op: UnaryOperation, operand: T) -> Result<(), OverflowError<T>> {
        match op {
            UnaryOperation::Negate => Self::check_negate(operand),
            UnaryOperation::Increment => Self::check_increment(operand),
            UnaryOperation::Decrement => Self::check_decrement(operand),
        }
    }
}

/// A policy that never checks and never fails.
///
/// Overflowing operations under this policy return the wrapped result of
/// the raw arithmetic. Division or modulus by zero still panics, exactly
/// like the primitive operators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ignore;

impl<T> OverflowPolicy<T> for Ignore
where
    T: Natural,
{
    #[inline(always)]
    fn check_plus(_lhs: T, _rhs: T) -> Result<(), OverflowError<T>> {
        Ok(())
    }

    #[inline(always)]
    fn check_minus(_lhs: T, _rhs: T) -> Result<(), OverflowError<T>> {
        Ok(())
    }

    #[inline(always)]
    fn check_multiply(_lhs: T, _rhs: T) -> Result<(), OverflowError<T>> {
        Ok(())
    }

    #[inline(always)]
    fn check_divide(_lhs: T, _rhs: T) -> Result<(), OverflowError<T>> {
        Ok(())
    }

    #[inline(always)]
    fn check_modulus(_lhs: T, _rhs: T) -> Result<(), OverflowError<T>> {
        Ok(())
    }

    #[inline(always)]
    fn check_negate(_operand: T) -> Result<(), OverflowError<T>> {
        Ok(())
    }

    #[inline(always)]
    fn check_increment(_operand: T) -> Result<(), OverflowError<T>> {
        Ok(())
    }

    #[inline(always)]
    fn check_decrement(_operand: T) -> Result<(), OverflowError<T>> {
        Ok(())
    }

    #[inline(always)]
    fn check_shl(_lhs: T, _shift: u32) -> Result<(), OverflowError<T>> {
        Ok(())
    }
}

/// A policy that rejects any operation its predicate set deems unrepresentable.
///
/// # Examples
///
/// ```rust
/// # use quotient_core::overflow::policy::{OverflowPolicy, Signal};
/// # use quotient_core::overflow::error::OverflowError;
/// assert!(<Signal as OverflowPolicy<i8>>::check_plus(100, 27).is_ok());
/// let err = <Signal as OverflowPolicy<i8>>::check_plus(100, 28).unwrap_err();
/// assert_eq!(err.as_binary().map(|e| (e.lhs, e.rhs)), Some((100, 28)));
/// ```
pub struct Signal<S = BoundedPredicates>(PhantomData<fn() -> S>);

/// The signalling path over predicates that always pass.
pub type AlwaysPass = Signal<AlwaysRepresentable>;

impl<S> Signal<S> {
    /// Creates the policy marker. Usable in `const` contexts.
    #[inline(always)]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<S> Default for Signal<S> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for Signal<S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Signal<S> {}

impl<S> std::fmt::Debug for Signal<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signal<{}>", std::any::type_name::<S>())
    }
}

#[cold]
#[inline(never)]
fn reject_binary<T>(op: BinaryOperation, lhs: T, rhs: T) -> Result<(), OverflowError<T>>
where
    T: Natural,
{
    tracing::debug!(%op, %lhs, %rhs, "rejected binary operation");
    Err(BinaryOverflow { op, lhs, rhs }.into())
}

#[cold]
#[inline(never)]
fn reject_unary<T>(op: UnaryOperation, operand: T) -> Result<(), OverflowError<T>>
where
    T: Natural,
{
    tracing::debug!(%op, %operand, "rejected unary operation");
    Err(UnaryOverflow { op, operand }.into())
}

#[cold]
#[inline(never)]
fn reject_shift<T>(lhs: T, shift: u32) -> Result<(), OverflowError<T>>
where
    T: Natural,
{
    tracing::debug!(%lhs, shift, "rejected left shift");
    Err(ShiftOverflow { lhs, shift }.into())
}

macro_rules! signal_binary {
    ($method:ident, $op:expr) => {
        #[inline]
        fn $method(lhs: T, rhs: T) -> Result<(), OverflowError<T>> {
            if S::$method(lhs, rhs) {
                Ok(())
            } else {
                reject_binary($op, lhs, rhs)
            }
        }
    };
}

macro_rules! signal_unary {
    ($method:ident, $op:expr) => {
        #[inline]
        fn $method(operand: T) -> Result<(), OverflowError<T>> {
            if S::$method(operand) {
                Ok(())
            } else {
                reject_unary($op, operand)
            }
        }
    };
}

impl<T, S> OverflowPolicy<T> for Signal<S>
where
    T: Natural,
    S: OverflowPredicate<T>,
{
    signal_binary!(check_plus, BinaryOperation::Plus);
    signal_binary!(check_minus, BinaryOperation::Minus);
    signal_binary!(check_multiply, BinaryOperation::Multiply);
    signal_binary!(check_divide, BinaryOperation::Divide);
    signal_binary!(check_modulus, BinaryOperation::Modulus);
    signal_unary!(check_negate, UnaryOperation::Negate);
    signal_unary!(check_increment, UnaryOperation::Increment);
    signal_unary!(check_decrement, UnaryOperation::Decrement);

    #[inline]
    fn check_shl(lhs: T, shift: u32) -> Result<(), OverflowError<T>> {
        if S::check_shl(lhs, shift) {
            Ok(())
        } else {
            reject_shift(lhs, shift)
        }
    }
}
