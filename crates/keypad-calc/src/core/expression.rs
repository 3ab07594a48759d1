//! Structured pending expression
//!
//! The left-hand side typed so far is kept as a list of `operand operator`
//! pairs instead of display text, so replacing the pending operator never
//! depends on how the text is spaced.

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// One completed `operand operator` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Operand text exactly as it was typed or computed
    pub operand: String,
    /// Operator pressed after the operand
    pub operator: Operator,
}

impl Term {
    /// Creates a new term
    #[must_use]
    pub fn new(operand: impl Into<String>, operator: Operator) -> Self {
        Self {
            operand: operand.into(),
            operator,
        }
    }
}

/// The accumulated left-hand side of a calculation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    /// Creates an empty expression
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed pair
    pub fn push(&mut self, operand: impl Into<String>, operator: Operator) {
        self.terms.push(Term::new(operand, operator));
    }

    /// Swaps the pending operator, keeping its operand.
    ///
    /// Returns false when there is no pending operator.
    pub fn replace_last_operator(&mut self, operator: Operator) -> bool {
        match self.terms.last_mut() {
            Some(term) => {
                term.operator = operator;
                true
            }
            None => false,
        }
    }

    /// Returns the pending operator, if any
    #[must_use]
    pub fn last_operator(&self) -> Option<Operator> {
        self.terms.last().map(|t| t.operator)
    }

    /// Returns the completed pairs in entry order
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true when nothing is pending
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Drops every pair
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Display text of the pending expression, e.g. `"12 + 3 × "`
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for term in &self.terms {
            out.push_str(&term.operand);
            out.push(' ');
            out.push_str(term.operator.symbol());
            out.push(' ');
        }
        out
    }

    /// Display text of the committed expression, e.g. `"12 + 3 × 4 ="`
    #[must_use]
    pub fn commit(&self, trailing: Option<&str>) -> String {
        let mut out = self.render();
        if let Some(operand) = trailing {
            out.push_str(operand);
            out.push(' ');
        }
        out.push('=');
        out
    }
}
