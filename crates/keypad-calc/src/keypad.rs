//! Keypad buttons and keyboard mapping
//!
//! Maps button activations (`data-action` / `data-value` pairs) and key
//! presses onto [`KeypadAction`]s, and describes the 5×4 button grid a front
//! end lays out.

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// Actions a button or key can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeypadAction {
    /// Type a digit (0-9)
    Digit(u8),
    /// Type a decimal point
    Decimal,
    /// Press an operator
    Operator(Operator),
    /// Evaluate
    Equals,
    /// Reset everything
    Clear,
    /// Delete one character
    Backspace,
    /// Flip the operand's sign
    ToggleSign,
}

impl KeypadAction {
    /// Button caption
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::ToggleSign => "±".to_string(),
        }
    }

    /// `data-action` name of the button
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Decimal => "decimal",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::Backspace => "backspace",
            Self::ToggleSign => "sign",
        }
    }

    /// `data-value` of the button, for digits and operators
    #[must_use]
    pub fn value(&self) -> Option<String> {
        match self {
            Self::Digit(d) => Some(d.to_string()),
            Self::Operator(op) => Some(op.symbol().to_string()),
            _ => None,
        }
    }

    /// Builds an action from a button's `data-action` / `data-value` pair
    #[must_use]
    pub fn from_button(action: &str, value: Option<&str>) -> Option<Self> {
        match action {
            "digit" => parse_digit(value?).map(Self::Digit),
            "decimal" => Some(Self::Decimal),
            "operator" => Operator::from_symbol(value?).map(Self::Operator),
            "equals" => Some(Self::Equals),
            "clear" => Some(Self::Clear),
            "backspace" => Some(Self::Backspace),
            "sign" => Some(Self::ToggleSign),
            _ => None,
        }
    }
}

fn parse_digit(text: &str) -> Option<u8> {
    let mut chars = text.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() {
        return None;
    }
    u8::try_from(digit).ok()
}

/// A single button in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// Action the button performs
    pub action: KeypadAction,
    /// Element id
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button, deriving its id from the action
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Operator(op) => format!("btn-{}", operator_name(op)),
            other => format!("btn-{}", other.action_name()),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }
}

fn operator_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
        Operator::Percent => "percent",
    }
}

/// Keypad layout
/// ```text
/// [ C ] [ ± ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ ⌫ ] [ 0 ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard grid
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{Backspace, Clear, Decimal, Digit, Equals, ToggleSign};
        let op = KeypadAction::Operator;

        let grid = [
            [Clear, ToggleSign, op(Operator::Percent), op(Operator::Divide)],
            [Digit(7), Digit(8), Digit(9), op(Operator::Multiply)],
            [Digit(4), Digit(5), Digit(6), op(Operator::Subtract)],
            [Digit(1), Digit(2), Digit(3), op(Operator::Add)],
            [Backspace, Digit(0), Decimal, Equals],
        ];

        let buttons = grid
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButton::new(*action, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons, row-major
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Button at a grid position
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Button with the given element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Button that performs an action
    #[must_use]
    pub fn find_by_action(&self, action: KeypadAction) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Action for a click on an element id
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_by_id(element_id).map(|b| b.action)
    }

    /// Button to highlight for a key press.
    ///
    /// Only digits and the four binary operators highlight.
    #[must_use]
    pub fn highlight_for_key(&self, key: &str) -> Option<&KeypadButton> {
        match Self::key_to_action(key)? {
            action @ KeypadAction::Digit(_) => self.find_by_action(action),
            action @ KeypadAction::Operator(op) if !op.is_postfix() => self.find_by_action(action),
            _ => None,
        }
    }

    /// Maps a keyboard key name to an action
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<KeypadAction> {
        match key {
            "Enter" | "=" => Some(KeypadAction::Equals),
            "Backspace" => Some(KeypadAction::Backspace),
            "Escape" => Some(KeypadAction::Clear),
            "." => Some(KeypadAction::Decimal),
            "+" | "-" | "*" | "/" | "%" => Operator::from_symbol(key).map(KeypadAction::Operator),
            _ => parse_digit(key).map(KeypadAction::Digit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadAction =====

    #[test]
    fn test_labels() {
        assert_eq!(KeypadAction::Digit(5).label(), "5");
        assert_eq!(KeypadAction::Decimal.label(), ".");
        assert_eq!(KeypadAction::Operator(Operator::Multiply).label(), "×");
        assert_eq!(KeypadAction::Equals.label(), "=");
        assert_eq!(KeypadAction::Clear.label(), "C");
        assert_eq!(KeypadAction::Backspace.label(), "⌫");
        assert_eq!(KeypadAction::ToggleSign.label(), "±");
    }

    #[test]
    fn test_from_button_pairs() {
        assert_eq!(
            KeypadAction::from_button("digit", Some("7")),
            Some(KeypadAction::Digit(7))
        );
        assert_eq!(
            KeypadAction::from_button("operator", Some("÷")),
            Some(KeypadAction::Operator(Operator::Divide))
        );
        assert_eq!(KeypadAction::from_button("decimal", None), Some(KeypadAction::Decimal));
        assert_eq!(KeypadAction::from_button("equals", None), Some(KeypadAction::Equals));
        assert_eq!(KeypadAction::from_button("clear", None), Some(KeypadAction::Clear));
        assert_eq!(
            KeypadAction::from_button("backspace", None),
            Some(KeypadAction::Backspace)
        );
        assert_eq!(KeypadAction::from_button("sign", None), Some(KeypadAction::ToggleSign));
    }

    #[test]
    fn test_from_button_rejects_bad_pairs() {
        assert_eq!(KeypadAction::from_button("digit", None), None);
        assert_eq!(KeypadAction::from_button("digit", Some("12")), None);
        assert_eq!(KeypadAction::from_button("operator", Some("^")), None);
        assert_eq!(KeypadAction::from_button("ripple", None), None);
    }

    #[test]
    fn test_button_pair_round_trip() {
        let keypad = Keypad::new();
        for btn in keypad.buttons() {
            let value = btn.action.value();
            assert_eq!(
                KeypadAction::from_button(btn.action.action_name(), value.as_deref()),
                Some(btn.action)
            );
        }
    }

    // ===== Keyboard =====

    #[test]
    fn test_key_digits() {
        for d in 0..=9u8 {
            assert_eq!(
                Keypad::key_to_action(&d.to_string()),
                Some(KeypadAction::Digit(d))
            );
        }
    }

    #[test]
    fn test_key_operators() {
        assert_eq!(
            Keypad::key_to_action("*"),
            Some(KeypadAction::Operator(Operator::Multiply))
        );
        assert_eq!(
            Keypad::key_to_action("/"),
            Some(KeypadAction::Operator(Operator::Divide))
        );
        assert_eq!(
            Keypad::key_to_action("%"),
            Some(KeypadAction::Operator(Operator::Percent))
        );
    }

    #[test]
    fn test_key_controls() {
        assert_eq!(Keypad::key_to_action("Enter"), Some(KeypadAction::Equals));
        assert_eq!(Keypad::key_to_action("="), Some(KeypadAction::Equals));
        assert_eq!(Keypad::key_to_action("Backspace"), Some(KeypadAction::Backspace));
        assert_eq!(Keypad::key_to_action("Escape"), Some(KeypadAction::Clear));
        assert_eq!(Keypad::key_to_action("."), Some(KeypadAction::Decimal));
    }

    #[test]
    fn test_key_unmapped() {
        for key in ["a", "x", "Tab", "10", "", "×"] {
            assert_eq!(Keypad::key_to_action(key), None, "{key:?}");
        }
    }

    // ===== Grid =====

    #[test]
    fn test_grid_shape() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 20);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_button_at() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(0, 0).unwrap().action, KeypadAction::Clear);
        assert_eq!(keypad.button_at(1, 0).unwrap().action, KeypadAction::Digit(7));
        assert_eq!(keypad.button_at(4, 3).unwrap().action, KeypadAction::Equals);
        assert!(keypad.button_at(5, 0).is_none());
        assert!(keypad.button_at(0, 4).is_none());
    }

    #[test]
    fn test_button_ids() {
        let keypad = Keypad::new();
        assert!(keypad.find_by_id("btn-7").is_some());
        assert!(keypad.find_by_id("btn-plus").is_some());
        assert!(keypad.find_by_id("btn-percent").is_some());
        assert!(keypad.find_by_id("btn-sign").is_some());
        assert!(keypad.find_by_id("btn-backspace").is_some());
        assert!(keypad.find_by_id("btn-nope").is_none());
    }

    #[test]
    fn test_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-equals"), Some(KeypadAction::Equals));
        assert_eq!(keypad.handle_click("display"), None);
    }

    #[test]
    fn test_every_action_has_a_button() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            assert!(keypad.find_by_action(KeypadAction::Digit(d)).is_some());
        }
        for op in Operator::ALL {
            assert!(keypad.find_by_action(KeypadAction::Operator(op)).is_some());
        }
    }

    #[test]
    fn test_highlight_for_key() {
        let keypad = Keypad::new();
        assert_eq!(keypad.highlight_for_key("5").unwrap().id, "btn-5");
        assert_eq!(keypad.highlight_for_key("*").unwrap().id, "btn-times");
        assert_eq!(keypad.highlight_for_key("/").unwrap().id, "btn-divide");
        assert!(keypad.highlight_for_key("%").is_none());
        assert!(keypad.highlight_for_key("Enter").is_none());
        assert!(keypad.highlight_for_key(".").is_none());
    }
}
