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

//! # Natural Type Bundle
//!
//! `Natural` collects every capability the overflow engine, the reducer and
//! the fraction type require from their underlying integer domain into a
//! single bound: total ordering, the six arithmetic operators, bounds,
//! wrapping raw arithmetic and the associated constants from
//! [`constants`](crate::num::constants).
//!
//! It is blanket-implemented, so every primitive integer is a `Natural`
//! without further ceremony, and a custom fixed-width type qualifies as soon
//! as it implements the listed traits.

use crate::num::constants::{PlusOne, Signedness, Zero};
use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingNeg, WrappingShl, WrappingSub};
use std::hash::Hash;

/// A trait alias for the integer-like domains fractions can be built from.
///
/// Signed and unsigned domains are both admitted. Code that must treat them
/// differently branches on [`Natural::is_signed`], which is a constant and
/// folds away after monomorphization.
pub trait Natural:
    PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + WrappingShl
    + Zero
    + PlusOne
    + Signedness
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
    + Send
    + Sync
    + 'static
{
    /// Returns `true` if the domain contains negative values.
    #[inline(always)]
    fn is_signed() -> bool {
        <Self as Signedness>::SIGNED
    }

    /// Returns the number of value bits, excluding the sign bit.
    #[inline(always)]
    fn digits() -> u32 {
        <Self as Signedness>::DIGITS
    }

    /// Returns `true` if `self` is the additive inverse of one.
    ///
    /// Always `false` for unsigned domains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quotient_core::num::natural::Natural;
    /// assert!((-1i32).is_minus_one());
    /// assert!(!u32::MAX.is_minus_one());
    /// ```
    #[inline(always)]
    fn is_minus_one(self) -> bool {
        match <Self as Signedness>::MINUS_ONE {
            Some(minus_one) => self == minus_one,
            None => false,
        }
    }

    /// Returns `true` if `self` is the multiplicative identity.
    #[inline(always)]
    fn is_plus_one(self) -> bool {
        self == <Self as PlusOne>::PLUS_ONE
    }
}

impl<T> Natural for T where
    T: PrimInt
        + WrappingAdd
        + WrappingSub
        + WrappingMul
        + WrappingNeg
        + WrappingShl
        + Zero
        + PlusOne
        + Signedness
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
        + Send
        + Sync
        + 'static
{
}
