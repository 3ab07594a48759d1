//! Browser bindings
//!
//! Exposes the engine to JavaScript. The page owns the DOM: it forwards
//! clicks and key presses here and redraws from the render callback.

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

use crate::core::Operator;
use crate::driver::CalculatorDriver;
use crate::engine::{Engine, RenderEvent, Renderer};
use crate::keypad::{Keypad, KeypadAction};

/// Forwards render events to a JavaScript callback
/// `(current, expression, isError, feedback)`
#[derive(Debug, Default)]
struct JsRenderer {
    callback: Option<Function>,
}

impl Renderer for JsRenderer {
    fn render(&mut self, event: &RenderEvent) {
        let Some(callback) = &self.callback else {
            return;
        };

        let args = Array::new();
        args.push(&JsValue::from_str(&event.current));
        args.push(&JsValue::from_str(&event.expression));
        args.push(&JsValue::from_bool(event.is_error));
        args.push(&JsValue::from_str(event.feedback.as_str()));

        if let Err(err) = callback.apply(&JsValue::NULL, &args) {
            tracing::warn!(?err, "render callback threw");
        }
    }
}

/// Calculator entry point for the browser
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    engine: Engine<JsRenderer>,
    keypad: Keypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator in the initial state
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            engine: Engine::with_renderer(JsRenderer::default()),
            keypad: Keypad::new(),
        }
    }

    /// Installs the render callback and renders once
    #[wasm_bindgen(js_name = setRenderCallback)]
    pub fn set_render_callback(&mut self, callback: Function) {
        self.engine.renderer_mut().callback = Some(callback);
        let snapshot = self.engine.snapshot();
        self.engine.renderer_mut().render(&snapshot);
    }

    /// Result line
    #[wasm_bindgen(getter)]
    pub fn current(&self) -> String {
        self.engine.current().to_string()
    }

    /// Expression line
    #[wasm_bindgen(getter)]
    pub fn expression(&self) -> String {
        self.engine.expression_text()
    }

    /// Whether the error display is up
    #[wasm_bindgen(getter, js_name = isError)]
    pub fn is_error(&self) -> bool {
        self.engine.is_error()
    }

    /// CSS class for the result element (`""`, `"long"`, `"error"`)
    #[wasm_bindgen(getter, js_name = resultClass)]
    pub fn result_class(&self) -> String {
        self.engine.snapshot().style().css_class().to_string()
    }

    /// Handles a `keydown` key name; returns true if it was mapped
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Keypad::key_to_action(key) {
            Some(action) => {
                self.engine.apply(action);
                true
            }
            None => false,
        }
    }

    /// Element id of the button to highlight for a key, if any
    #[wasm_bindgen(js_name = highlightFor)]
    pub fn highlight_for(&self, key: &str) -> Option<String> {
        self.keypad.highlight_for_key(key).map(|b| b.id.clone())
    }

    /// Handles a button's `data-action` / `data-value`; returns true if
    /// it was recognised
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, action: &str, value: Option<String>) -> bool {
        match KeypadAction::from_button(action, value.as_deref()) {
            Some(action) => {
                self.engine.apply(action);
                true
            }
            None => false,
        }
    }

    /// Types a digit
    pub fn digit(&mut self, digit: char) {
        self.engine.input_digit(digit);
    }

    /// Types a decimal point
    pub fn decimal(&mut self) {
        self.engine.input_decimal();
    }

    /// Presses an operator given as its glyph or ASCII alias
    pub fn operator(&mut self, symbol: &str) -> bool {
        match Operator::from_symbol(symbol) {
            Some(op) => {
                self.engine.input_operator(op);
                true
            }
            None => false,
        }
    }

    /// Evaluates
    pub fn equals(&mut self) {
        self.engine.calculate();
    }

    /// Resets
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Deletes one character
    pub fn backspace(&mut self) {
        self.engine.backspace();
    }

    /// Flips the sign
    #[wasm_bindgen(js_name = toggleSign)]
    pub fn toggle_sign(&mut self) {
        self.engine.toggle_sign();
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorDriver for BrowserCalculator {
    fn press(&mut self, action: KeypadAction) {
        self.engine.apply(action);
    }

    fn result_text(&self) -> String {
        self.current()
    }

    fn expression_text(&self) -> String {
        self.expression()
    }

    fn is_error(&self) -> bool {
        self.engine.is_error()
    }
}
