//! Hand-written evaluator over the keypad grammar
//!
//! The grammar is fixed: `operand (operator operand)*`, where `%` is a postfix
//! transform on the operand before it. Nothing here ever interprets text as
//! code.

use tracing::trace;

use crate::core::expression::Expression;
use crate::core::operations::check_finite;
use crate::core::{CalcResult, EvaluationError, Operator};

/// Parses an operand against the numeral grammar
/// `-?digits[.digits][e[+-]digits]`.
///
/// A trailing point (`"5."`) is accepted; at least one digit is required
/// before it. The exponent only appears on computed results (`"1e+21"`).
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    let malformed = || EvaluationError::MalformedOperand(text.to_string());

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (decimal, exponent) = match unsigned.split_once('e') {
        Some((decimal, exponent)) => (decimal, Some(exponent)),
        None => (unsigned, None),
    };
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return Err(malformed());
    }
    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if digits.is_empty() || !all_digits(digits) {
            return Err(malformed());
        }
    }

    text.parse::<f64>().map_err(|_| malformed())
}

/// Evaluates the pending expression followed by an optional trailing operand.
///
/// `trailing` is `None` only when the last pending operator is `%` and no
/// operand was typed after it.
pub fn evaluate(expression: &Expression, trailing: Option<&str>) -> CalcResult<f64> {
    if expression.is_empty() && trailing.is_none() {
        return Err(EvaluationError::EmptyExpression);
    }

    let terms = expression.terms();
    let mut values = Vec::with_capacity(terms.len() + 1);
    let mut operators = Vec::with_capacity(terms.len());

    for (index, term) in terms.iter().enumerate() {
        let value = parse_operand(&term.operand)?;
        if !term.operator.is_postfix() {
            values.push(value);
            operators.push(term.operator);
            continue;
        }

        // "X %" becomes (X / 100) in place; an operand right after it has
        // no operator joining the two
        values.push(check_finite(value / 100.0)?);
        let next = terms.get(index + 1).map(|t| t.operand.as_str()).or(trailing);
        if let Some(operand) = next {
            return Err(EvaluationError::MalformedOperand(operand.to_string()));
        }
    }

    if let Some(operand) = trailing {
        values.push(parse_operand(operand)?);
    }

    if values.len() != operators.len() + 1 {
        let dangling = operators.last().copied().unwrap_or(Operator::Add);
        return Err(EvaluationError::MissingOperand(dangling));
    }

    trace!(?values, ?operators, "reducing expression");
    reduce(&values, &operators)
}

/// Folds values and binary operators with `× ÷` binding tighter than `+ -`.
fn reduce(values: &[f64], operators: &[Operator]) -> CalcResult<f64> {
    let Some((&first, rest)) = values.split_first() else {
        return Err(EvaluationError::EmptyExpression);
    };

    let mut total = 0.0;
    let mut additive = Operator::Add;
    let mut product = first;

    for (&op, &rhs) in operators.iter().zip(rest) {
        match op.precedence() {
            Some(2) => product = op.apply(product, rhs)?,
            Some(_) => {
                total = additive.apply(total, product)?;
                additive = op;
                product = rhs;
            }
            None => return Err(EvaluationError::NotBinary(op)),
        }
    }

    additive.apply(total, product)
}
