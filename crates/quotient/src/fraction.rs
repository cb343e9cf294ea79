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

//! Fraction value type and its combinators.
//!
//! A [`Fraction`] is an immutable numerator/denominator pair over a
//! [`Natural`] domain, bound at the type level to an overflow policy. It is
//! never reduced on construction. Addition and subtraction bring both
//! operands onto the least common multiple of their denominators and return
//! a fraction over that denominator, without further simplification.

use num_traits::ToPrimitive;
use quotient_core::{
    math::reduce::lcm,
    num::natural::Natural,
    overflow::{
        error::OverflowResult,
        ops::CheckedOps,
        policy::{Ignore, OverflowPolicy, Signal},
    },
};
use std::{
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, Neg, Sub},
};

/// An exact fraction `numerator / denominator` over the domain `T`.
///
/// The policy `P` decides how intermediate overflow is handled by the
/// combinators. It defaults to [`Signal`], which reports overflow as an
/// error. There is deliberately no `Default` implementation: a fraction is
/// always given both of its parts.
///
/// # Examples
///
/// ```rust
/// # use quotient::Fraction;
/// let half = Fraction::<i32>::new(1, 2);
/// let third = Fraction::<i32>::new(1, 3);
/// let sum = (half + third).unwrap();
/// assert_eq!(sum, Fraction::new(5, 6));
/// assert_eq!(sum.to_string(), "5/6");
/// ```
pub struct Fraction<T, P = Signal> {
    numerator: T,
    denominator: T,
    policy: PhantomData<fn() -> P>,
}

/// A fraction that reports overflow as an error.
pub type CheckedFraction<T> = Fraction<T, Signal>;

/// A fraction whose arithmetic wraps around silently on overflow.
pub type UncheckedFraction<T> = Fraction<T, Ignore>;

impl<T, P> Fraction<T, P>
where
    T: Natural,
    P: OverflowPolicy<T>,
{
    /// Creates a fraction from its parts, exactly as given.
    #[inline]
    pub const fn new(numerator: T, denominator: T) -> Self {
        Self {
            numerator,
            denominator,
            policy: PhantomData,
        }
    }

    /// Returns the numerator.
    #[inline]
    pub const fn numerator(&self) -> T {
        self.numerator
    }

    /// Returns the denominator.
    #[inline]
    pub const fn denominator(&self) -> T {
        self.denominator
    }

    /// Consumes the fraction and returns `(numerator, denominator)`.
    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.numerator, self.denominator)
    }

    /// Adds two fractions.
    ///
    /// Equal denominators are combined directly. Otherwise both numerators
    /// are scaled to the least common multiple of the denominators, which
    /// becomes the denominator of the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy rejects any intermediate step, for
    /// example a division by a zero denominator or a numerator overflow.
    ///
    /// # Panics
    ///
    /// Panics if a denominator is zero and the policy lets the division
    /// through, as [`Ignore`](quotient_core::overflow::policy::Ignore) and
    /// [`AlwaysPass`](quotient_core::overflow::policy::AlwaysPass) do.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quotient::Fraction;
    /// let a = Fraction::<u32>::new(1, 4);
    /// let b = Fraction::<u32>::new(2, 4);
    /// assert_eq!(a.try_add(b), Ok(Fraction::new(3, 4)));
    /// ```
    pub fn try_add(self, rhs: Self) -> OverflowResult<T, Self> {
        if self.denominator == rhs.denominator {
            let numerator = CheckedOps::<T, P>::plus(self.numerator, rhs.numerator)?;
            return Ok(Self::new(numerator, self.denominator));
        }
        let (lhs_scaled, rhs_scaled, common) = self.scale_to_common(rhs)?;
        let numerator = CheckedOps::<T, P>::plus(lhs_scaled, rhs_scaled)?;
        Ok(Self::new(numerator, common))
    }

    /// Subtracts `rhs` from `self`.
    ///
    /// Mirrors [`try_add`](Self::try_add): both numerators are scaled to the
    /// common denominator before the subtraction.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy rejects any intermediate step.
    ///
    /// # Panics
    ///
    /// Panics under a non-checking policy if a denominator is zero, like
    /// [`try_add`](Self::try_add).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quotient::Fraction;
    /// let a = Fraction::<i64>::new(1, 2);
    /// let b = Fraction::<i64>::new(1, 3);
    /// assert_eq!(a.try_sub(b), Ok(Fraction::new(1, 6)));
    /// ```
    pub fn try_sub(self, rhs: Self) -> OverflowResult<T, Self> {
        if self.denominator == rhs.denominator {
            let numerator = CheckedOps::<T, P>::minus(self.numerator, rhs.numerator)?;
            return Ok(Self::new(numerator, self.denominator));
        }
        let (lhs_scaled, rhs_scaled, common) = self.scale_to_common(rhs)?;
        let numerator = CheckedOps::<T, P>::minus(lhs_scaled, rhs_scaled)?;
        Ok(Self::new(numerator, common))
    }

    /// Negates the fraction by negating its numerator.
    ///
    /// # Errors
    ///
    /// Returns an error if the numerator cannot be negated, such as the
    /// minimum of a signed domain or any nonzero unsigned value.
    pub fn try_neg(self) -> OverflowResult<T, Self> {
        let numerator = CheckedOps::<T, P>::negate(self.numerator)?;
        Ok(Self::new(numerator, self.denominator))
    }

    /// Scales both numerators onto the least common multiple of the
    /// denominators and returns `(lhs, rhs, lcm)`.
    fn scale_to_common(self, rhs: Self) -> OverflowResult<T, (T, T, T)> {
        let common = lcm::<T, P>(self.denominator, rhs.denominator)?;
        let lhs_factor = CheckedOps::<T, P>::divide(common, self.denominator)?;
        let rhs_factor = CheckedOps::<T, P>::divide(common, rhs.denominator)?;
        let lhs_scaled = CheckedOps::<T, P>::multiply(self.numerator, lhs_factor)?;
        let rhs_scaled = CheckedOps::<T, P>::multiply(rhs.numerator, rhs_factor)?;
        tracing::trace!(
            lhs = %self,
            rhs = %rhs,
            common = %common,
            "scaled fractions to common denominator"
        );
        Ok((lhs_scaled, rhs_scaled, common))
    }

    /// Converts to `f64` by dividing numerator by denominator directly.
    ///
    /// No overflow checking applies; a zero denominator yields an infinity
    /// or NaN. Returns `None` if a part is not representable as `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quotient::Fraction;
    /// assert_eq!(Fraction::<i32>::new(3, 4).to_f64(), Some(0.75));
    /// ```
    #[inline]
    pub fn to_f64(&self) -> Option<f64> {
        Some(self.numerator.to_f64()? / self.denominator.to_f64()?)
    }

    /// Converts to `f32`. See [`to_f64`](Self::to_f64).
    #[inline]
    pub fn to_f32(&self) -> Option<f32> {
        Some(self.numerator.to_f32()? / self.denominator.to_f32()?)
    }
}

impl<T, P> Add for Fraction<T, P>
where
    T: Natural,
    P: OverflowPolicy<T>,
{
    type Output = OverflowResult<T, Self>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<T, P> Sub for Fraction<T, P>
where
    T: Natural,
    P: OverflowPolicy<T>,
{
    type Output = OverflowResult<T, Self>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<T, P> Neg for Fraction<T, P>
where
    T: Natural,
    P: OverflowPolicy<T>,
{
    type Output = OverflowResult<T, Self>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.try_neg()
    }
}

// The policy is a type-level marker; none of the impls below place bounds on it.

impl<T: Clone, P> Clone for Fraction<T, P> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
            policy: PhantomData,
        }
    }
}

impl<T: Copy, P> Copy for Fraction<T, P> {}

impl<T: PartialEq, P> PartialEq for Fraction<T, P> {
    /// Structural equality: `1/2` and `2/4` are different fractions.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl<T: Eq, P> Eq for Fraction<T, P> {}

impl<T: Hash, P> Hash for Fraction<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl<T: std::fmt::Debug, P> std::fmt::Debug for Fraction<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fraction")
            .field("numerator", &self.numerator)
            .field("denominator", &self.denominator)
            .finish()
    }
}

impl<T: std::fmt::Display, P> std::fmt::Display for Fraction<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotient_core::overflow::{
        error::{BinaryOperation, BinaryOverflow, OverflowError, UnaryOperation},
        policy::AlwaysPass,
    };

    type F = CheckedFraction<i32>;

    #[test]
    fn test_accessors() {
        let f = F::new(3, 7);
        assert_eq!(f.numerator(), 3);
        assert_eq!(f.denominator(), 7);
        assert_eq!(f.into_parts(), (3, 7));
    }

    #[test]
    fn test_construction_does_not_reduce() {
        let f = F::new(2, 4);
        assert_eq!(f.into_parts(), (2, 4));
        assert_ne!(f, F::new(1, 2));
    }

    #[test]
    fn test_add_same_denominator() {
        assert_eq!(F::new(1, 4) + F::new(2, 4), Ok(F::new(3, 4)));
    }

    #[test]
    fn test_add_different_denominators() {
        assert_eq!(F::new(1, 2) + F::new(1, 3), Ok(F::new(5, 6)));
        assert_eq!(F::new(1, 4) + F::new(1, 6), Ok(F::new(5, 12)));
    }

    #[test]
    fn test_add_keeps_common_denominator_unreduced() {
        // 1/4 + 1/4 shares the denominator, so the result is 2/4, not 1/2.
        assert_eq!(F::new(1, 4) + F::new(1, 4), Ok(F::new(2, 4)));
        // 1/6 + 1/3 = 3/6; the lcm of 6 and 3 is 6.
        assert_eq!(F::new(1, 6) + F::new(1, 3), Ok(F::new(3, 6)));
    }

    #[test]
    fn test_sub_scales_both_numerators() {
        assert_eq!(F::new(1, 2) - F::new(1, 3), Ok(F::new(1, 6)));
        assert_eq!(F::new(1, 3) - F::new(1, 2), Ok(F::new(-1, 6)));
        assert_eq!(F::new(5, 6) - F::new(3, 4), Ok(F::new(1, 12)));
        assert_eq!(F::new(3, 5) - F::new(1, 5), Ok(F::new(2, 5)));
    }

    #[test]
    fn test_add_then_sub_round_trip() {
        let a = F::new(7, 12);
        let b = F::new(5, 18);
        let sum = (a + b).unwrap();
        assert_eq!(sum, F::new(31, 36));
        let back = (sum - b).unwrap();
        assert_eq!(back.to_f64(), a.to_f64());
    }

    #[test]
    fn test_negative_denominator() {
        let sum = (F::new(1, -2) + F::new(1, 3)).unwrap();
        assert_eq!(sum.to_f64(), Some(-1.0 / 6.0));
    }

    #[test]
    fn test_zero_denominator_signals_division() {
        let err = (F::new(1, 3) + F::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            OverflowError::Binary(BinaryOverflow {
                op: BinaryOperation::Divide,
                lhs: 0,
                rhs: 0
            })
        );
        let err = (F::new(2, 0) - F::new(1, 3)).unwrap_err();
        assert_eq!(err.as_binary().map(|e| e.op), Some(BinaryOperation::Divide));
    }

    #[test]
    fn test_numerator_overflow_signals() {
        let err = (F::new(i32::MAX, 5) + F::new(1, 5)).unwrap_err();
        assert_eq!(
            err,
            OverflowError::Binary(BinaryOverflow {
                op: BinaryOperation::Plus,
                lhs: i32::MAX,
                rhs: 1
            })
        );
        let err = (F::new(i32::MAX, 2) + F::new(1, 3)).unwrap_err();
        assert_eq!(err.as_binary().map(|e| e.op), Some(BinaryOperation::Multiply));
    }

    #[test]
    fn test_unsigned_subtraction_below_zero_signals() {
        let err = (CheckedFraction::<u32>::new(1, 3) - CheckedFraction::<u32>::new(1, 2))
            .unwrap_err();
        assert_eq!(
            err,
            OverflowError::Binary(BinaryOverflow {
                op: BinaryOperation::Minus,
                lhs: 2,
                rhs: 3
            })
        );
    }

    #[test]
    fn test_large_denominators_share_factor() {
        let d = i64::MAX - 1;
        let sum = (CheckedFraction::<i64>::new(1, d) + CheckedFraction::<i64>::new(1, 2)).unwrap();
        assert_eq!(sum, CheckedFraction::new(1 + d / 2, d));
    }

    #[test]
    fn test_unchecked_wraps() {
        let sum = UncheckedFraction::<i8>::new(i8::MAX, 3) + UncheckedFraction::<i8>::new(1, 3);
        assert_eq!(sum, Ok(UncheckedFraction::new(i8::MIN, 3)));
        let sum = UncheckedFraction::<i8>::new(100, 2) + UncheckedFraction::<i8>::new(100, 3);
        // 100 * 3 and 100 * 2 wrap before the final addition.
        let expected = 100i8.wrapping_mul(3).wrapping_add(100i8.wrapping_mul(2));
        assert_eq!(sum, Ok(UncheckedFraction::new(expected, 6)));
    }

    #[test]
    fn test_always_pass_matches_unchecked() {
        let a = Fraction::<i8, AlwaysPass>::new(i8::MAX, 3);
        let b = Fraction::<i8, AlwaysPass>::new(1, 3);
        assert_eq!((a + b).map(Fraction::into_parts), Ok((i8::MIN, 3)));
    }

    #[test]
    #[should_panic]
    fn test_unchecked_zero_denominator_panics() {
        let _ = UncheckedFraction::<i32>::new(1, 3) + UncheckedFraction::new(1, 0);
    }

    #[test]
    #[should_panic]
    fn test_always_pass_zero_denominator_panics() {
        let _ = Fraction::<i32, AlwaysPass>::new(1, 3) - Fraction::new(1, 0);
    }

    #[test]
    fn test_neg() {
        assert_eq!(-F::new(3, 4), Ok(F::new(-3, 4)));
        let err = (-F::new(i32::MIN, 4)).unwrap_err();
        assert_eq!(err.as_unary().map(|e| e.op), Some(UnaryOperation::Negate));
        assert!((-CheckedFraction::<u8>::new(1, 2)).is_err());
        assert_eq!(-CheckedFraction::<u8>::new(0, 2), Ok(CheckedFraction::new(0, 2)));
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(F::new(2, 1).to_f64(), Some(2.0));
        assert_eq!(F::new(1, 4).to_f32(), Some(0.25));
        assert_eq!(F::new(1, 0).to_f64(), Some(f64::INFINITY));
        assert!(F::new(0, 0).to_f64().is_some_and(f64::is_nan));
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(F::new(-5, 6).to_string(), "-5/6");
        assert_eq!(
            format!("{:?}", F::new(1, 2)),
            "Fraction { numerator: 1, denominator: 2 }"
        );
    }

    #[test]
    fn test_copy_semantics() {
        let a = F::new(1, 2);
        let b = a;
        assert_eq!(a, b);
        let doubled = (a + b).unwrap();
        assert_eq!(doubled, F::new(2, 2));
    }
}
