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

//! # Overflow Handling
//!
//! Everything needed to decide, report and react to arithmetic overflow in a
//! [`Natural`](crate::num::natural::Natural) domain.
//!
//! ## Submodules
//!
//! - `predicate`: Pure, overflow-free predicates answering whether an
//!   operation's result is representable (`BoundedPredicates`,
//!   `AlwaysRepresentable`).
//! - `policy`: Reaction policies that turn verdicts into control flow
//!   (`Ignore`, `Signal`, `AlwaysPass`).
//! - `ops`: `CheckedOps`, which runs the policy check before each raw
//!   operation.
//! - `error`: The structured `OverflowError` taxonomy.
//!
//! Data flows from `ops` to `policy` to `predicate`; the verdict flows back
//! and either the raw operation runs or an error is returned.

pub mod error;
pub mod ops;
pub mod policy;
pub mod predicate;
