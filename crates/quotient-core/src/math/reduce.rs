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

//! Greatest common divisor and least common multiple under an overflow policy.
//!
//! Both functions route every intermediate step through
//! [`CheckedOps`], so a misbehaving input signals instead of silently
//! corrupting the result.

use crate::num::natural::Natural;
use crate::overflow::error::OverflowResult;
use crate::overflow::ops::CheckedOps;
use crate::overflow::policy::OverflowPolicy;

/// Computes the greatest common divisor of `lhs` and `rhs` using the
/// recursive Euclidean algorithm.
///
/// The sign of the result follows the truncating remainder, so it may be
/// negative when an operand is. `gcd(a, 0) == a`.
///
/// In signed domains each step also asks the policy whether `rhs` may be
/// negated; the domain minimum has no representable magnitude and is
/// rejected by a signalling policy.
///
/// # Examples
///
/// ```rust
/// # use quotient_core::math::reduce::gcd;
/// # use quotient_core::overflow::policy::Signal;
/// assert_eq!(gcd::<u32, Signal>(84, 36), Ok(12));
/// assert_eq!(gcd::<i32, Signal>(7, 0), Ok(7));
/// ```
pub fn gcd<T, P>(lhs: T, rhs: T) -> OverflowResult<T>
where
    T: Natural,
    P: OverflowPolicy<T>,
{
    if T::is_signed() {
        P::check_negate(rhs)?;
    }
    if rhs == T::ZERO {
        return Ok(lhs);
    }
    let remainder = CheckedOps::<T, P>::modulus(lhs, rhs)?;
    gcd::<T, P>(rhs, remainder)
}

/// Computes the least common multiple of `lhs` and `rhs` as
/// `(lhs / gcd(lhs, rhs)) * rhs`.
///
/// Dividing before multiplying keeps the intermediate value small, so the
/// computation succeeds whenever the result itself is representable.
///
/// # Examples
///
/// ```rust
/// # use quotient_core::math::reduce::lcm;
/// # use quotient_core::overflow::policy::Signal;
/// assert_eq!(lcm::<i32, Signal>(4, 6), Ok(12));
/// assert!(lcm::<i32, Signal>(i32::MAX, i32::MAX - 1).is_err());
/// ```
pub fn lcm<T, P>(lhs: T, rhs: T) -> OverflowResult<T>
where
    T: Natural,
    P: OverflowPolicy<T>,
{
    let divisor = gcd::<T, P>(lhs, rhs)?;
    let reduced = CheckedOps::<T, P>::divide(lhs, divisor)?;
    let multiple = CheckedOps::<T, P>::multiply(reduced, rhs)?;
    tracing::trace!(%lhs, %rhs, gcd = %divisor, lcm = %multiple, "computed common multiple");
    Ok(multiple)
}
