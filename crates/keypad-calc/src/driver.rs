//! Front-end independent calculator driver
//!
//! Any front end (the engine itself, the terminal session, a browser
//! binding) implements [`CalculatorDriver`]; the `verify_*` scenarios below
//! then run unchanged against each of them.
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut engine = Engine::new();
//! verify_basic_arithmetic(&mut engine);
//! ```

use crate::engine::{Engine, Renderer};
use crate::keypad::{Keypad, KeypadAction};

/// Drives a calculator through keypad actions
pub trait CalculatorDriver {
    /// Performs one keypad action
    fn press(&mut self, action: KeypadAction);

    /// Result line
    fn result_text(&self) -> String;

    /// Expression line
    fn expression_text(&self) -> String;

    /// True while the error display is up
    fn is_error(&self) -> bool;

    /// Presses a key by name; returns false for unmapped keys
    fn press_key(&mut self, key: &str) -> bool {
        match Keypad::key_to_action(key) {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    /// Presses a sequence of keys, stopping at the first unmapped one
    fn press_keys(&mut self, keys: &[&str]) -> bool {
        keys.iter().all(|key| self.press_key(key))
    }

    /// Back to the initial state
    fn reset(&mut self) {
        self.press(KeypadAction::Clear);
    }
}

impl<R: Renderer> CalculatorDriver for Engine<R> {
    fn press(&mut self, action: KeypadAction) {
        self.apply(action);
    }

    fn result_text(&self) -> String {
        self.current().to_string()
    }

    fn expression_text(&self) -> String {
        Engine::expression_text(self)
    }

    fn is_error(&self) -> bool {
        Engine::is_error(self)
    }
}

// ===== Shared scenarios =====

/// Four operators and precedence
///
/// # Panics
/// When the driver shows a different result.
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases: [(&[&str], &str); 5] = [
        (&["2", "+", "2", "Enter"], "4"),
        (&["1", "0", "-", "4", "Enter"], "6"),
        (&["6", "*", "7", "Enter"], "42"),
        (&["2", "0", "/", "8", "Enter"], "2.5"),
        (&["2", "+", "3", "*", "4", "Enter"], "14"),
    ];

    for (keys, expected) in cases {
        driver.reset();
        assert!(driver.press_keys(keys), "unmapped key in {keys:?}");
        assert_eq!(driver.result_text(), expected, "keys {keys:?}");
        assert!(!driver.is_error());
    }
    driver.reset();
}

/// Pressing a second operator replaces the first
///
/// # Panics
/// When the pending operator is not replaced.
pub fn verify_operator_replacement<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert!(driver.press_keys(&["9", "+", "-", "*"]));
    assert_eq!(driver.expression_text(), "9 × ");
    assert!(driver.press_keys(&["3", "Enter"]));
    assert_eq!(driver.result_text(), "27");
    driver.reset();
}

/// Division by zero lands in the error state and a digit escapes it
///
/// # Panics
/// When the error state is not entered or not left.
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert!(driver.press_keys(&["5", "/", "0", "Enter"]));
    assert!(driver.is_error());
    assert_eq!(driver.result_text(), crate::engine::ERROR_TEXT);
    assert_eq!(driver.expression_text(), "");

    // absorbed
    assert!(driver.press_keys(&["+", "."]));
    driver.press(KeypadAction::ToggleSign);
    assert!(driver.is_error());

    assert!(driver.press_key("7"));
    assert!(!driver.is_error());
    assert_eq!(driver.result_text(), "7");
    driver.reset();
}

/// Percent as a postfix transform
///
/// # Panics
/// When percent does not divide by one hundred.
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert!(driver.press_keys(&["5", "0", "%", "Enter"]));
    assert_eq!(driver.result_text(), "0.5");

    driver.reset();
    assert!(driver.press_keys(&["2", "0", "0", "+", "1", "0", "%", "Enter"]));
    assert_eq!(driver.result_text(), "200.1");
    driver.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RecordingRenderer;

    #[test]
    fn test_engine_basic_arithmetic() {
        verify_basic_arithmetic(&mut Engine::new());
    }

    #[test]
    fn test_engine_operator_replacement() {
        verify_operator_replacement(&mut Engine::new());
    }

    #[test]
    fn test_engine_error_recovery() {
        verify_error_recovery(&mut Engine::new());
    }

    #[test]
    fn test_engine_percent() {
        verify_percent(&mut Engine::new());
    }

    #[test]
    fn test_scenarios_with_recording_renderer() {
        let mut engine = Engine::with_renderer(RecordingRenderer::new());
        verify_basic_arithmetic(&mut engine);
        assert!(!engine.renderer().events().is_empty());
    }

    #[test]
    fn test_press_key_unmapped() {
        let mut engine = Engine::new();
        assert!(!engine.press_key("Tab"));
        assert_eq!(engine.result_text(), "0");
    }

    #[test]
    fn test_press_keys_stops_at_unmapped() {
        let mut engine = Engine::new();
        assert!(!engine.press_keys(&["1", "?", "2"]));
        assert_eq!(engine.result_text(), "1");
    }
}
