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

//! # Operator Policy Wrapper
//!
//! `CheckedOps<T, P>` is the single place where check-then-act is enforced:
//! every operation first consults the policy `P`, and only if the policy
//! permits does the raw operation run. Code that cares about overflow never
//! calls raw arithmetic directly.
//!
//! The raw operations wrap in two's complement, so a permissive policy
//! observes the same wraparound the hardware produces instead of a debug
//! build panic.

use crate::num::natural::Natural;
use crate::overflow::error::{BinaryOperation, OverflowResult, UnaryOperation};
use crate::overflow::policy::OverflowPolicy;
use std::marker::PhantomData;

/// Performs a raw binary operation with wrapping semantics.
///
/// `MIN / -1` wraps to `MIN` and `MIN % -1` is zero.
///
/// # Panics
///
/// Panics if `op` is a division or modulus and `rhs` is zero.
#[inline]
pub fn raw_binary<T>(op: BinaryOperation, lhs: T, rhs: T) -> T
where
    T: Natural,
{
    match op {
        BinaryOperation::Plus => lhs.wrapping_add(&rhs),
        BinaryOperation::Minus => lhs.wrapping_sub(&rhs),
        BinaryOperation::Multiply => lhs.wrapping_mul(&rhs),
        BinaryOperation::Divide if rhs.is_minus_one() => lhs.wrapping_neg(),
        BinaryOperation::Divide => lhs / rhs,
        BinaryOperation::Modulus if rhs.is_minus_one() => T::ZERO,
        BinaryOperation::Modulus => lhs % rhs,
    }
}

/// Performs a raw unary operation with wrapping semantics.
#[inline]
pub fn raw_unary<T>(op: UnaryOperation, operand: T) -> T
where
    T: Natural,
{
    match op {
        UnaryOperation::Negate => operand.wrapping_neg(),
        UnaryOperation::Increment => operand.wrapping_add(&T::PLUS_ONE),
        UnaryOperation::Decrement => operand.wrapping_sub(&T::PLUS_ONE),
    }
}

/// Performs a raw left shift. The shift amount is masked to the bit width.
#[inline]
pub fn raw_shl<T>(lhs: T, shift: u32) -> T
where
    T: Natural,
{
    lhs.wrapping_shl(shift)
}

/// Arithmetic on `T` guarded by the overflow policy `P`.
///
/// # Examples
///
/// ```rust
/// # use quotient_core::overflow::ops::CheckedOps;
/// # use quotient_core::overflow::policy::{Ignore, Signal};
/// assert_eq!(CheckedOps::<i8, Signal>::plus(100, 27), Ok(127));
/// assert!(CheckedOps::<i8, Signal>::plus(100, 28).is_err());
/// assert_eq!(CheckedOps::<i8, Ignore>::plus(100, 28), Ok(-128));
/// ```
pub struct CheckedOps<T, P>(PhantomData<fn() -> (T, P)>);

impl<T, P> CheckedOps<T, P>
where
    T: Natural,
    P: OverflowPolicy<T>,
{
    /// Checks and applies a binary operation.
    #[inline]
    pub fn binary(op: BinaryOperation, lhs: T, rhs: T) -> OverflowResult<T> {
        P::check_binary(op, lhs, rhs)?;
        Ok(raw_binary(op, lhs, rhs))
    }

    /// Checks and applies a unary operation.
    #[inline]
    pub fn unary(op: UnaryOperation, operand: T) -> OverflowResult<T> {
        P::check_unary(op, operand)?;
        Ok(raw_unary(op, operand))
    }

    /// Checked addition.
    #[inline]
    pub fn plus(lhs: T, rhs: T) -> OverflowResult<T> {
        P::check_plus(lhs, rhs)?;
        Ok(raw_binary(BinaryOperation::Plus, lhs, rhs))
    }

    /// Checked subtraction.
    #[inline]
    pub fn minus(lhs: T, rhs: T) -> OverflowResult<T> {
        P::check_minus(lhs, rhs)?;
        Ok(raw_binary(BinaryOperation::Minus, lhs, rhs))
    }

    /// Checked multiplication.
    #[inline]
    pub fn multiply(lhs: T, rhs: T) -> OverflowResult<T> {
        P::check_multiply(lhs, rhs)?;
        Ok(raw_binary(BinaryOperation::Multiply, lhs, rhs))
    }

    /// Checked division.
    ///
    /// # Panics
    ///
    /// Panics on a zero divisor if `P` lets it through.
    #[inline]
    pub fn divide(lhs: T, rhs: T) -> OverflowResult<T> {
        P::check_divide(lhs, rhs)?;
        Ok(raw_binary(BinaryOperation::Divide, lhs, rhs))
    }

    /// Checked remainder.
    ///
    /// # Panics
    ///
    /// Panics on a zero divisor if `P` lets it through.
    #[inline]
    pub fn modulus(lhs: T, rhs: T) -> OverflowResult<T> {
        P::check_modulus(lhs, rhs)?;
        Ok(raw_binary(BinaryOperation::Modulus, lhs, rhs))
    }

    /// Checked negation.
    #[inline]
    pub fn negate(operand: T) -> OverflowResult<T> {
        P::check_negate(operand)?;
        Ok(raw_unary(UnaryOperation::Negate, operand))
    }

    /// Checked increment by one.
    #[inline]
    pub fn increment(operand: T) -> OverflowResult<T> {
        P::check_increment(operand)?;
        Ok(raw_unary(UnaryOperation::Increment, operand))
    }

    /// Checked decrement by one.
    #[inline]
    pub fn decrement(operand: T) -> OverflowResult<T> {
        P::check_decrement(operand)?;
        Ok(raw_unary(UnaryOperation::Decrement, operand))
    }

    /// Checked left shift. Fails for a non-positive `lhs` or if set bits
    /// would be shifted out.
    #[inline]
    pub fn shl(lhs: T, shift: u32) -> OverflowResult<T> {
        P::check_shl(lhs, shift)?;
        Ok(raw_shl(lhs, shift))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overflow::error::{BinaryOverflow, OverflowError, UnaryOverflow};
    use crate::overflow::policy::{AlwaysPass, Ignore, Signal};

    type Checked = CheckedOps<i32, Signal>;
    type Wrapping = CheckedOps<i32, Ignore>;

    #[test]
    fn test_raw_binary_wraps() {
        assert_eq!(raw_binary(BinaryOperation::Plus, i8::MAX, 1), i8::MIN);
        assert_eq!(raw_binary(BinaryOperation::Minus, 0u8, 1), u8::MAX);
        assert_eq!(raw_binary(BinaryOperation::Multiply, 16i8, 8), i8::MIN);
        assert_eq!(raw_binary(BinaryOperation::Multiply, 16i8, 16), 0);
        assert_eq!(raw_binary(BinaryOperation::Divide, i8::MIN, -1), i8::MIN);
        assert_eq!(raw_binary(BinaryOperation::Modulus, i8::MIN, -1), 0);
        assert_eq!(raw_binary(BinaryOperation::Modulus, -7i8, 3), -1);
    }

    #[test]
    fn test_raw_unary_wraps() {
        assert_eq!(raw_unary(UnaryOperation::Negate, i16::MIN), i16::MIN);
        assert_eq!(raw_unary(UnaryOperation::Negate, 1u16), u16::MAX);
        assert_eq!(raw_unary(UnaryOperation::Increment, u16::MAX), 0);
        assert_eq!(raw_unary(UnaryOperation::Decrement, i16::MIN), i16::MAX);
    }

    #[test]
    fn test_checked_success() {
        assert_eq!(Checked::plus(2, 3), Ok(5));
        assert_eq!(Checked::minus(2, 3), Ok(-1));
        assert_eq!(Checked::multiply(-4, 3), Ok(-12));
        assert_eq!(Checked::divide(7, 2), Ok(3));
        assert_eq!(Checked::modulus(7, 2), Ok(1));
        assert_eq!(Checked::negate(7), Ok(-7));
        assert_eq!(Checked::increment(7), Ok(8));
        assert_eq!(Checked::decrement(7), Ok(6));
        assert_eq!(Checked::shl(3, 4), Ok(48));
    }

    #[test]
    fn test_checked_rejection() {
        assert_eq!(
            Checked::multiply(i32::MAX, 2),
            Err(OverflowError::Binary(BinaryOverflow {
                op: BinaryOperation::Multiply,
                lhs: i32::MAX,
                rhs: 2
            }))
        );
        assert_eq!(
            Checked::negate(i32::MIN),
            Err(OverflowError::Unary(UnaryOverflow {
                op: UnaryOperation::Negate,
                operand: i32::MIN
            }))
        );
        assert!(Checked::divide(i32::MIN, -1).is_err());
        assert!(Checked::modulus(5, 0).is_err());
        assert!(Checked::shl(1 << 30, 1).is_err());
    }

    #[test]
    fn test_ignore_wraps() {
        assert_eq!(Wrapping::plus(i32::MAX, 1), Ok(i32::MIN));
        assert_eq!(Wrapping::multiply(i32::MAX, 2), Ok(-2));
        assert_eq!(Wrapping::negate(i32::MIN), Ok(i32::MIN));
        assert_eq!(Wrapping::divide(i32::MIN, -1), Ok(i32::MIN));
        assert_eq!(Wrapping::increment(i32::MAX), Ok(i32::MIN));
    }

    #[test]
    #[should_panic]
    fn test_ignore_division_by_zero_panics() {
        let _ = Wrapping::divide(1, 0);
    }

    #[test]
    fn test_dispatch_matches_named_operations() {
        for &(a, b) in &[(3, 4), (i32::MAX, 1), (i32::MIN, -1), (-9, 0)] {
            assert_eq!(Checked::binary(BinaryOperation::Plus, a, b), Checked::plus(a, b));
            assert_eq!(Checked::binary(BinaryOperation::Minus, a, b), Checked::minus(a, b));
            assert_eq!(
                Checked::binary(BinaryOperation::Multiply, a, b),
                Checked::multiply(a, b)
            );
            assert_eq!(Checked::binary(BinaryOperation::Divide, a, b), Checked::divide(a, b));
            assert_eq!(
                Checked::binary(BinaryOperation::Modulus, a, b),
                Checked::modulus(a, b)
            );
            assert_eq!(Checked::unary(UnaryOperation::Negate, a), Checked::negate(a));
        }
    }

    #[test]
    fn test_always_pass_uses_raw_arithmetic() {
        assert_eq!(CheckedOps::<u8, AlwaysPass>::plus(255, 1), Ok(0));
        assert_eq!(CheckedOps::<u8, AlwaysPass>::minus(0, 1), Ok(255));
    }
}
