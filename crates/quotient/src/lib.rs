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

//! # Quotient
//!
//! Exact fraction arithmetic over fixed-width integers with a compile-time
//! overflow policy.
//!
//! The policy is a type parameter of [`Fraction`]:
//!
//! - [`Signal`] (default): overflow and division by zero are returned as an
//!   [`OverflowError`] carrying the offending operands.
//! - [`Ignore`]: arithmetic wraps around silently. Choosing it is an
//!   explicit opt-out of overflow detection.
//! - [`AlwaysPass`]: the signalling path with predicates that always pass.
//! - `Signal<S>` with a custom
//!   [`OverflowPredicate`](quotient_core::overflow::predicate::OverflowPredicate)
//!   set `S`.
//!
//! ```rust
//! use quotient::{CheckedFraction, UncheckedFraction};
//!
//! let sum = (CheckedFraction::<i32>::new(1, 2) + CheckedFraction::new(1, 3)).unwrap();
//! assert_eq!(sum.to_string(), "5/6");
//!
//! assert!((CheckedFraction::<i8>::new(127, 3) + CheckedFraction::new(1, 3)).is_err());
//! let wrapped = (UncheckedFraction::<i8>::new(127, 3) + UncheckedFraction::new(1, 3)).unwrap();
//! assert_eq!(wrapped.numerator(), -128);
//! ```

pub mod fraction;

pub use fraction::{CheckedFraction, Fraction, UncheckedFraction};
pub use quotient_core::overflow::{
    error::{OverflowError, OverflowResult},
    policy::{AlwaysPass, Ignore, OverflowPolicy, Signal},
};
