//! Core arithmetic for the keypad calculator
//!
//! Everything in here is pure: operators, the structured pending expression,
//! the evaluator and the display number formatter. The stateful part lives in
//! [`crate::engine`].

pub mod evaluator;
pub mod expression;
pub mod format;
mod operations;

pub use operations::Operator;

use thiserror::Error;

/// Result type for evaluation
pub type CalcResult<T> = Result<T, EvaluationError>;

/// Why a committed expression could not produce a finite number.
///
/// The engine never lets one of these escape; it turns every variant into the
/// `MATH ERROR` display.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// Division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,

    /// Arithmetic produced NaN or an infinity
    #[error("Non-finite result: {0}")]
    NonFinite(f64),

    /// An operand is not a numeral
    #[error("Malformed operand: {0:?}")]
    MalformedOperand(String),

    /// A binary operator has nothing on its right-hand side
    #[error("Missing operand after {0}")]
    MissingOperand(Operator),

    /// A postfix operator used between two operands
    #[error("{0} is not a binary operator")]
    NotBinary(Operator),

    /// Nothing to evaluate
    #[error("Empty expression")]
    EmptyExpression,
}
