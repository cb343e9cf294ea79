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

//! Associated-constant traits for the integer domains fractions are built from.
//!
//! `Zero` and `PlusOne` expose the additive and multiplicative identities as
//! constants, while `Signedness` describes the layout facts the overflow
//! engine needs to branch on: whether the domain is signed, how many value
//! bits it carries, and its `-1` sentinel when one exists.

/// A trait for integer types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// Layout facts about an integer domain.
///
/// # Examples
///
/// ```rust
/// # use quotient_core::num::constants::Signedness;
/// assert!(<i8 as Signedness>::SIGNED);
/// assert_eq!(<i8 as Signedness>::DIGITS, 7);
/// assert_eq!(<u8 as Signedness>::DIGITS, 8);
/// assert_eq!(<i32 as Signedness>::MINUS_ONE, Some(-1));
/// assert_eq!(<u32 as Signedness>::MINUS_ONE, None);
/// ```
pub trait Signedness: Sized {
    /// `true` if the domain contains negative values.
    const SIGNED: bool;

    /// The number of value bits, excluding the sign bit.
    const DIGITS: u32;

    /// The constant representing -1, or `None` for unsigned domains.
    const MINUS_ONE: Option<Self>;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_plus_one_for {
    ($t:ty) => {
        impl_const_for!(PlusOne, PLUS_ONE, 1, $t);
    };
}

macro_rules! impl_zero_for {
    ($t:ty) => {
        impl_const_for!(Zero, ZERO, 0, $t);
    };
}

macro_rules! impl_signed_for {
    ($t:ty) => {
        impl Signedness for $t {
            const SIGNED: bool = true;
            const DIGITS: u32 = <$t>::BITS - 1;
            const MINUS_ONE: Option<Self> = Some(-1);
        }
    };
}

macro_rules! impl_unsigned_for {
    ($t:ty) => {
        impl Signedness for $t {
            const SIGNED: bool = false;
            const DIGITS: u32 = <$t>::BITS;
            const MINUS_ONE: Option<Self> = None;
        }
    };
}

impl_plus_one_for!(i8);
impl_plus_one_for!(u8);
impl_plus_one_for!(i16);
impl_plus_one_for!(u16);
impl_plus_one_for!(i32);
impl_plus_one_for!(u32);
impl_plus_one_for!(i64);
impl_plus_one_for!(u64);
impl_plus_one_for!(i128);
impl_plus_one_for!(u128);
impl_plus_one_for!(isize);
impl_plus_one_for!(usize);

impl_zero_for!(i8);
impl_zero_for!(u8);
impl_zero_for!(i16);
impl_zero_for!(u16);
impl_zero_for!(i32);
impl_zero_for!(u32);
impl_zero_for!(i64);
impl_zero_for!(u64);
impl_zero_for!(i128);
impl_zero_for!(u128);
impl_zero_for!(isize);
impl_zero_for!(usize);

impl_signed_for!(i8);
impl_signed_for!(i16);
impl_signed_for!(i32);
impl_signed_for!(i64);
impl_signed_for!(i128);
impl_signed_for!(isize);

impl_unsigned_for!(u8);
impl_unsigned_for!(u16);
impl_unsigned_for!(u32);
impl_unsigned_for!(u64);
impl_unsigned_for!(u128);
impl_unsigned_for!(usize);
