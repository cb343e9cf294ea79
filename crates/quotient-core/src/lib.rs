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

//! # Quotient Core
//!
//! Overflow-checked integer arithmetic and the GCD/LCM reducer underpinning
//! exact fraction arithmetic.
//!
//! ## Modules
//!
//! - `num`: Associated-constant traits (`Zero`, `PlusOne`, `Signedness`) and
//!   the `Natural` bundle describing an integer-like domain.
//! - `overflow`: Overflow predicates, reaction policies, the checked
//!   operator wrapper and the error taxonomy.
//! - `math`: `gcd` and `lcm` evaluated through the checked operators.
//!
//! ## Example
//!
//! ```rust
//! use quotient_core::math::reduce::lcm;
//! use quotient_core::overflow::ops::CheckedOps;
//! use quotient_core::overflow::policy::{Ignore, Signal};
//!
//! assert_eq!(lcm::<i32, Signal>(4, 6), Ok(12));
//! assert!(CheckedOps::<u8, Signal>::multiply(16, 16).is_err());
//! assert_eq!(CheckedOps::<u8, Ignore>::multiply(16, 16), Ok(0));
//! ```

pub mod math;
pub mod num;
pub mod overflow;
