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

//! # Overflow Predicate Engine
//!
//! Pure predicates that decide whether an arithmetic operation on a
//! [`Natural`] domain would leave its representable range, without performing
//! the operation. Every predicate is itself overflow-free: a naive test such
//! as `a + b > MAX` is always rearranged into a comparison against a bound
//! that can be computed safely, such as `a > MAX - b`.
//!
//! A verdict of `true` means "the result is representable". Verdicts are
//! never errors on their own; reaction policies in
//! [`policy`](crate::overflow::policy) decide what a `false` verdict means.
//!
//! ## Predicate sets
//!
//! - [`BoundedPredicates`]: the engine for fixed-width signed and unsigned
//!   integer domains.
//! - [`AlwaysRepresentable`]: hardwired `true` verdicts for domains that are
//!   overflow-free by construction.
//!
//! Custom sets are written by implementing [`OverflowPredicate`].

use crate::num::natural::Natural;

/// A set of overflow predicates for the domain `T`.
///
/// Each function answers whether the corresponding operation on the given
/// operands stays within the domain's range. Implementations must not
/// overflow while answering.
pub trait OverflowPredicate<T>
where
    T: Natural,
{
    /// `true` iff `lhs + rhs` is representable.
    fn check_plus(lhs: T, rhs: T) -> bool;

    /// `true` iff `lhs - rhs` is representable.
    fn check_minus(lhs: T, rhs: T) -> bool;

    /// `true` iff `lhs * rhs` is representable.
    fn check_multiply(lhs: T, rhs: T) -> bool;

    /// `true` iff `lhs / rhs` is defined and representable.
    fn check_divide(lhs: T, rhs: T) -> bool;

    /// `true` iff `-operand` is representable.
    fn check_negate(operand: T) -> bool;

    /// `true` iff negating the domain maximum is representable.
    fn check_max_negate() -> bool;

    /// `true` iff negating the domain minimum is representable.
    fn check_min_negate() -> bool;

    /// `true` iff `lhs % rhs` is defined and representable.
    fn check_modulus(lhs: T, rhs: T) -> bool;

    /// `true` iff `operand + 1` is representable.
    #[inline]
    fn check_increment(operand: T) -> bool {
        Self::check_plus(operand, T::PLUS_ONE)
    }

    /// `true` iff `operand - 1` is representable.
    #[inline]
    fn check_decrement(operand: T) -> bool {
        Self::check_minus(operand, T::PLUS_ONE)
    }

    /// `true` iff `lhs << shift` keeps every set bit of a positive `lhs`
    /// inside the value bits of the domain.
    fn check_shl(lhs: T, shift: u32) -> bool;
}

/// Overflow predicates for fixed-width integer domains with finite bounds.
///
/// Signed and unsigned domains share one implementation that branches on
/// [`Natural::is_signed`].
///
/// # Examples
///
/// ```rust
/// # use quotient_core::overflow::predicate::{BoundedPredicates, OverflowPredicate};
/// assert!(<BoundedPredicates as OverflowPredicate<i8>>::check_plus(100, 27));
/// assert!(!<BoundedPredicates as OverflowPredicate<i8>>::check_plus(100, 28));
/// assert!(!<BoundedPredicates as OverflowPredicate<i8>>::check_divide(i8::MIN, -1));
/// assert!(<BoundedPredicates as OverflowPredicate<u8>>::check_multiply(15, 17));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoundedPredicates;

impl<T> OverflowPredicate<T> for BoundedPredicates
where
    T: Natural,
{
    #[inline]
    fn check_plus(lhs: T, rhs: T) -> bool {
        if rhs > T::ZERO {
            lhs <= T::max_value() - rhs
        } else if rhs < T::ZERO {
            // `MIN - rhs` lies in `[MIN, 0]` for negative `rhs`.
            lhs >= T::min_value() - rhs
        } else {
            true
        }
    }

    #[inline]
    fn check_minus(lhs: T, rhs: T) -> bool {
        if rhs > T::ZERO {
            lhs >= T::min_value() + rhs
        } else if rhs < T::ZERO {
            lhs <= T::max_value() + rhs
        } else {
            true
        }
    }

    fn check_multiply(lhs: T, rhs: T) -> bool {
        if lhs == T::ZERO || rhs == T::ZERO || lhs.is_plus_one() || rhs.is_plus_one() {
            return true;
        }
        if lhs.is_minus_one() {
            return <Self as OverflowPredicate<T>>::check_negate(rhs);
        }
        if rhs.is_minus_one() {
            return <Self as OverflowPredicate<T>>::check_negate(lhs);
        }

        let max = T::max_value();
        let min = T::min_value();
        if rhs > T::ZERO {
            lhs <= max / rhs && lhs >= min / rhs
        } else {
            // rhs <= -2: dividing by a negative flips both bounds.
            lhs >= max / rhs && lhs <= min / rhs
        }
    }

    #[inline]
    fn check_divide(lhs: T, rhs: T) -> bool {
        rhs != T::ZERO
            && (!rhs.is_minus_one() || <Self as OverflowPredicate<T>>::check_negate(lhs))
    }

    #[inline]
    fn check_negate(operand: T) -> bool {
        if !T::is_signed() {
            return operand == T::ZERO;
        }
        if operand == T::max_value() {
            <Self as OverflowPredicate<T>>::check_max_negate()
        } else if operand == T::min_value() {
            <Self as OverflowPredicate<T>>::check_min_negate()
        } else {
            true
        }
    }

    #[inline]
    fn check_max_negate() -> bool {
        T::max_value() + T::min_value() <= T::ZERO
    }

    #[inline]
    fn check_min_negate() -> bool {
        T::max_value() + T::min_value() >= T::ZERO
    }

    #[inline]
    fn check_modulus(lhs: T, rhs: T) -> bool {
        if rhs == T::ZERO {
            return false;
        }
        if !T::is_signed() {
            return true;
        }
        !(lhs == T::min_value() && rhs.is_minus_one())
    }

    #[inline]
    fn check_increment(operand: T) -> bool {
        operand < T::max_value()
    }

    #[inline]
    fn check_decrement(operand: T) -> bool {
        operand > T::min_value()
    }

    #[inline]
    fn check_shl(lhs: T, shift: u32) -> bool {
        if lhs <= T::ZERO {
            return false;
        }
        if shift == 0 {
            return true;
        }
        if shift >= T::digits() {
            return false;
        }
        lhs < T::PLUS_ONE << (T::digits() - shift) as usize
    }
}

/// A predicate set whose verdicts are hardwired to `true`.
///
/// Suitable for domains that cannot overflow by construction, or as a
/// placeholder in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AlwaysRepresentable;

impl<T> OverflowPredicate<T> for AlwaysRepresentable
where
    T: Natural,
{
    #[inline(always)]
    fn check_plus(_lhs: T, _rhs: T) -> bool {
        true
    }

    #[inline(always)]
    fn check_minus(_lhs: T, _rhs: T) -> bool {
        true
    }

    #[inline(always)]
    fn check_multiply(_lhs: T, _rhs: T) -> bool {
        true
    }

    #[inline(always)]
    fn check_divide(_lhs: T, _rhs: T) -> bool {
        true
    }

    #[inline(always)]
    fn check_negate(_operand: T) -> bool {
        true
    }

    #[inline(always)]
    fn check_max_negate() -> bool {
        true
    }

    #[inline(always)]
    fn check_min_negate() -> bool {
        true
    }

    #[inline(always)]
    fn check_modulus(_lhs: T, _rhs: T) -> bool {
        true
    }

    #[inline(always)]
    fn check_increment(_operand: T) -> bool {
        true
    }

    #[inline(always)]
    fn check_decrement(_operand: T) -> bool {
        true
    }

    #[inline(always)]
    fn check_shl(_lhs: T, _shift: u32) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{NumCast, ToPrimitive};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    type P = BoundedPredicates;

    fn wide<T: Natural>(v: T) -> i128 {
        ToPrimitive::to_i128(&v).expect("test domains fit into i128")
    }

    fn fits<T: Natural>(v: i128) -> bool {
        v >= wide(T::min_value()) && v <= wide(T::max_value())
    }

    fn all_values<T: Natural>() -> Vec<T> {
        (wide(T::min_value())..=wide(T::max_value()))
            .map(|v| <T as NumCast>::from(v).expect("value within bounds"))
            .collect()
    }

    /// Checks every pair of the (narrow) domain against wider reference arithmetic.
    fn assert_binary_sound<T: Natural>() {
        let values = all_values::<T>();
        for &a in &values {
            for &b in &values {
                let (wa, wb) = (wide(a), wide(b));
                assert_eq!(P::check_plus(a, b), fits::<T>(wa + wb), "{a} + {b}");
                assert_eq!(P::check_minus(a, b), fits::<T>(wa - wb), "{a} - {b}");
                assert_eq!(P::check_multiply(a, b), fits::<T>(wa * wb), "{a} * {b}");
                assert_eq!(
                    P::check_divide(a, b),
                    wb != 0 && fits::<T>(wa / wb),
                    "{a} / {b}"
                );
                // The remainder is defined exactly when the quotient is.
                assert_eq!(
                    P::check_modulus(a, b),
                    wb != 0 && fits::<T>(wa / wb),
                    "{a} % {b}"
                );
            }
        }
    }

    fn assert_unary_sound<T: Natural>() {
        for a in all_values::<T>() {
            let wa = wide(a);
            assert_eq!(P::check_negate(a), fits::<T>(-wa), "-{a}");
            assert_eq!(P::check_increment(a), fits::<T>(wa + 1), "{a} + 1");
            assert_eq!(P::check_decrement(a), fits::<T>(wa - 1), "{a} - 1");
            assert_eq!(
                <P as OverflowPredicate<T>>::check_increment(a),
                P::check_plus(a, T::PLUS_ONE)
            );
            assert_eq!(
                <P as OverflowPredicate<T>>::check_decrement(a),
                P::check_minus(a, T::PLUS_ONE)
            );
        }
    }

    fn assert_shift_sound<T: Natural>() {
        let digits = T::digits();
        for a in all_values::<T>() {
            for shift in 0..(digits + 4) {
                let wa = wide(a);
                let expected = wa > 0
                    && (shift == 0 || (shift < digits && fits::<T>(wa << shift)));
                assert_eq!(P::check_shl(a, shift), expected, "{a} << {shift}");
            }
        }
    }

    #[test]
    fn test_i8_binary_exhaustive() {
        assert_binary_sound::<i8>();
    }

    #[test]
    fn test_u8_binary_exhaustive() {
        assert_binary_sound::<u8>();
    }

    #[test]
    fn test_unary_exhaustive() {
        assert_unary_sound::<i8>();
        assert_unary_sound::<u8>();
        assert_unary_sound::<i16>();
        assert_unary_sound::<u16>();
    }

    #[test]
    fn test_shift_exhaustive() {
        assert_shift_sound::<i8>();
        assert_shift_sound::<u8>();
    }

    #[test]
    fn test_shift_boundary() {
        assert!(!P::check_shl((i8::MAX >> 1) + 1, 1));
        assert!(!P::check_shl((i32::MAX >> 1) + 1, 1));
        assert!(!P::check_shl((i64::MAX >> 1) + 1, 1));
        assert!(P::check_shl(i64::MAX >> 1, 1));
        assert!(P::check_shl(5i32, 0));
        assert!(!P::check_shl(0i32, 0));
        assert!(!P::check_shl(-3i32, 0));
        assert!(!P::check_shl(1u32, 32));
        assert!(P::check_shl(1u32, 31));
        assert!(!P::check_shl(1i32, 31));
        assert!(P::check_shl(1i32, 30));
    }

    #[test]
    fn test_negate_extremes() {
        assert!(<P as OverflowPredicate<i32>>::check_max_negate());
        assert!(!<P as OverflowPredicate<i32>>::check_min_negate());
        assert!(P::check_negate(i32::MAX));
        assert!(!P::check_negate(i32::MIN));
        assert!(P::check_negate(0u32));
        assert!(!P::check_negate(1u32));
    }

    #[test]
    fn test_multiply_minus_one_min_edge() {
        assert!(!P::check_multiply(-1i64, i64::MIN));
        assert!(!P::check_multiply(i64::MIN, -1i64));
        assert!(P::check_multiply(-1i64, i64::MAX));
        assert!(P::check_multiply(i64::MIN, 1i64));
    }

    fn sample<T: Natural>(rng: &mut StdRng, edges: &[T]) -> T
    where
        rand::distr::StandardUniform: rand::distr::Distribution<T>,
    {
        if rng.random_bool(0.25) {
            edges[rng.random_range(0..edges.len())]
        } else if rng.random_bool(0.5) {
            // Small magnitudes exercise the sign handling near zero.
            let v: T = rng.random();
            v >> (T::digits() as usize / 2)
        } else {
            rng.random()
        }
    }

    fn assert_sampled_sound<T: Natural>(seed: u64)
    where
        rand::distr::StandardUniform: rand::distr::Distribution<T>,
    {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut edges = vec![T::ZERO, T::PLUS_ONE, T::max_value(), T::min_value()];
        edges.push(T::max_value() - T::PLUS_ONE);
        edges.push(T::min_value() + T::PLUS_ONE);
        if let Some(minus_one) = <T as crate::num::constants::Signedness>::MINUS_ONE {
            edges.push(minus_one);
        }

        for _ in 0..20_000 {
            let a = sample(&mut rng, &edges);
            let b = sample(&mut rng, &edges);
            let (wa, wb) = (wide(a), wide(b));
            assert_eq!(P::check_plus(a, b), a.checked_add(&b).is_some(), "{a} + {b}");
            assert_eq!(P::check_minus(a, b), a.checked_sub(&b).is_some(), "{a} - {b}");
            assert_eq!(P::check_multiply(a, b), a.checked_mul(&b).is_some(), "{a} * {b}");
            assert_eq!(P::check_divide(a, b), a.checked_div(&b).is_some(), "{a} / {b}");
            assert_eq!(
                P::check_modulus(a, b),
                wb != 0 && fits::<T>(wa / wb),
                "{a} % {b}"
            );
            assert_eq!(P::check_negate(a), fits::<T>(-wa), "-{a}");
            assert_eq!(P::check_plus(a, b), fits::<T>(wa + wb));
        }
    }

    #[test]
    fn test_i64_sampled() {
        assert_sampled_sound::<i64>(0x5EED);
    }

    #[test]
    fn test_u64_sampled() {
        assert_sampled_sound::<u64>(0xF00D);
    }

    #[test]
    fn test_i32_sampled() {
        assert_sampled_sound::<i32>(42);
    }

    #[test]
    fn test_always_representable() {
        type A = AlwaysRepresentable;
        assert!(A::check_plus(i8::MAX, 1));
        assert!(A::check_divide(1i32, 0));
        assert!(A::check_negate(i64::MIN));
        assert!(A::check_shl(0u8, 200));
        assert!(<A as OverflowPredicate<i8>>::check_min_negate());
    }
}
