//! Keypad operators and their arithmetic

use serde::{Deserialize, Serialize};

use crate::core::{CalcResult, EvaluationError};

/// Operators available on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Percent (%), postfix on the operand before it
    Percent,
}

impl Operator {
    /// Every operator, in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Percent,
    ];

    /// Returns the display glyph
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Percent => "%",
        }
    }

    /// Parses a display glyph or one of its ASCII keyboard aliases
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "×" | "*" | "x" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            "%" => Some(Self::Percent),
            _ => None,
        }
    }

    /// Binding strength of a binary operator (higher binds tighter).
    ///
    /// Percent is postfix and sits outside the binary tiers.
    #[must_use]
    pub const fn precedence(&self) -> Option<u8> {
        match self {
            Self::Add | Self::Subtract => Some(1),
            Self::Multiply | Self::Divide => Some(2),
            Self::Percent => None,
        }
    }

    /// Returns true for the postfix percent operator
    #[must_use]
    pub const fn is_postfix(&self) -> bool {
        matches!(self, Self::Percent)
    }

    /// Applies a binary operator to two operands.
    ///
    /// Percent only transforms the operand before it, so it is rejected here.
    pub fn apply(&self, a: f64, b: f64) -> CalcResult<f64> {
        let raw = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                }
                a / b
            }
            Self::Percent => return Err(EvaluationError::NotBinary(*self)),
        };
        check_finite(raw)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Rejects NaN and infinities
pub(crate) fn check_finite(value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvaluationError::NonFinite(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
        assert_eq!(Operator::Percent.symbol(), "%");
    }

    #[test]
    fn test_from_symbol_glyphs() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_from_symbol_ascii_aliases() {
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("x"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("^"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn test_precedence_tiers() {
        assert_eq!(Operator::Add.precedence(), Some(1));
        assert_eq!(Operator::Subtract.precedence(), Some(1));
        assert_eq!(Operator::Multiply.precedence(), Some(2));
        assert_eq!(Operator::Divide.precedence(), Some(2));
        assert_eq!(Operator::Percent.precedence(), None);
        assert!(Operator::Percent.is_postfix());
        assert!(!Operator::Add.is_postfix());
    }

    #[test]
    fn test_display_matches_symbol() {
        assert_eq!(Operator::Divide.to_string(), "÷");
    }

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(4.0, 3.0), Ok(12.0));
        assert_eq!(Operator::Divide.apply(12.0, 4.0), Ok(3.0));
    }

    #[test]
    fn test_apply_percent_is_not_binary() {
        assert_eq!(
            Operator::Percent.apply(50.0, 8.0),
            Err(EvaluationError::NotBinary(Operator::Percent))
        );
    }

    #[test]
    fn test_apply_division_by_zero() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(EvaluationError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(0.0, -0.0),
            Err(EvaluationError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_overflow_is_non_finite() {
        assert!(matches!(
            Operator::Multiply.apply(f64::MAX, 2.0),
            Err(EvaluationError::NonFinite(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_add_commutes(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert_eq!(Operator::Add.apply(a, b), Operator::Add.apply(b, a));
        }

        #[test]
        fn prop_nonzero_divisor_is_ok(a in -1e12f64..1e12, b in 1e-3f64..1e12) {
            prop_assert!(Operator::Divide.apply(a, b).is_ok());
        }
    }
}
