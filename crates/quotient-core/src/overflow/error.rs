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

//! Structured overflow errors.
//!
//! A rejected operation is reported with the operands that provoked it so the
//! caller can tell exactly which step of a larger computation failed. Binary
//! arithmetic carries both operands, shifts carry the value and the shift
//! amount, and unary operations carry their single operand.

use std::fmt::{Debug, Display};

/// The binary arithmetic operations guarded by an overflow policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperation {
    /// `lhs + rhs`.
    Plus,
    /// `lhs - rhs`.
    Minus,
    /// `lhs * rhs`.
    Multiply,
    /// `lhs / rhs`, truncating toward zero.
    Divide,
    /// `lhs % rhs`, with the sign of `lhs`.
    Modulus,
}

impl BinaryOperation {
    /// The operator symbol, as written in source.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulus => "%",
        }
    }
}

impl Display for BinaryOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Plus => "addition",
            Self::Minus => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
            Self::Modulus => "modulus",
        };
        f.write_str(name)
    }
}

/// The unary arithmetic operations guarded by an overflow policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperation {
    /// `-operand`.
    Negate,
    /// `operand + 1`.
    Increment,
    /// `operand - 1`.
    Decrement,
}

impl Display for UnaryOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Negate => "negation",
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        };
        f.write_str(name)
    }
}

/// A binary operation whose result is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{op} overflow: {lhs} {} {rhs}", .op.symbol())]
pub struct BinaryOverflow<T>
where
    T: Debug + Display,
{
    /// The rejected operation.
    pub op: BinaryOperation,
    /// The left operand.
    pub lhs: T,
    /// The right operand.
    pub rhs: T,
}

/// A unary operation whose result is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{op} overflow: operand {operand}")]
pub struct UnaryOverflow<T>
where
    T: Debug + Display,
{
    /// The rejected operation.
    pub op: UnaryOperation,
    /// The sole operand.
    pub operand: T,
}

/// A left shift that would move set bits out of the representable width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("left shift overflow: {lhs} << {shift}")]
pub struct ShiftOverflow<T>
where
    T: Debug + Display,
{
    /// The shifted value.
    pub lhs: T,
    /// The shift amount in bits.
    pub shift: u32,
}

/// The error type raised by the signalling overflow policy.
///
/// # Examples
///
/// ```rust
/// # use quotient_core::overflow::error::{BinaryOperation, BinaryOverflow, OverflowError};
/// let err = OverflowError::from(BinaryOverflow { op: BinaryOperation::Plus, lhs: 100i8, rhs: 100i8 });
/// assert_eq!(err.to_string(), "addition overflow: 100 + 100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum OverflowError<T>
where
    T: Debug + Display,
{
    /// A binary operation (add, subtract, multiply, divide, modulus) was rejected.
    #[error("{0}")]
    Binary(BinaryOverflow<T>),
    /// A unary operation (negate, increment, decrement) was rejected.
    #[error("{0}")]
    Unary(UnaryOverflow<T>),
    /// A left shift was rejected.
    #[error("{0}")]
    Shift(ShiftOverflow<T>),
}

impl<T> OverflowError<T>
where
    T: Debug + Display,
{
    /// A human-readable name of the operation that was rejected.
    pub fn operation_name(&self) -> String {
        match self {
            Self::Binary(e) => e.op.to_string(),
            Self::Unary(e) => e.op.to_string(),
            Self::Shift(_) => "left shift".to_string(),
        }
    }

    /// Returns the binary error, if this is one.
    #[inline]
    pub fn as_binary(&self) -> Option<&BinaryOverflow<T>> {
        match self {
            Self::Binary(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the unary error, if this is one.
    #[inline]
    pub fn as_unary(&self) -> Option<&UnaryOverflow<T>> {
        match self {
            Self::Unary(e) => Some(e),
            _ => None,
        }
    }
}

impl<T> From<BinaryOverflow<T>> for OverflowError<T>
where
    T: Debug + Display,
{
    fn from(e: BinaryOverflow<T>) -> Self {
        Self::Binary(e)
    }
}

impl<T> From<UnaryOverflow<T>> for OverflowError<T>
where
    T: Debug + Display,
{
    fn from(e: UnaryOverflow<T>) -> Self {
        Self::Unary(e)
    }
}

impl<T> From<ShiftOverflow<T>> for OverflowError<T>
where
    T: Debug + Display,
{
    fn from(e: ShiftOverflow<T>) -> Self {
        Self::Shift(e)
    }
}

/// The result of a policy-checked computation.
pub type OverflowResult<T, V = T> = Result<V, OverflowError<T>>;
