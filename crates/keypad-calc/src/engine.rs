//! Calculator engine
//!
//! Owns the display state and exposes the seven keypad operations as plain
//! method calls. Every operation that changes the state hands a
//! [`RenderEvent`] to the engine's [`Renderer`]; operations that are not
//! allowed in the current state are silent no-ops.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::evaluator::evaluate;
use crate::core::expression::Expression;
use crate::core::format::format_number;
use crate::core::Operator;
use crate::display::ResultStyle;
use crate::keypad::KeypadAction;

/// Result text shown after a failed calculation
pub const ERROR_TEXT: &str = "MATH ERROR";

/// Longest operand that can be typed
pub const MAX_OPERAND_LEN: usize = 15;

/// Visual feedback attached to a render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// Plain redraw
    #[default]
    None,
    /// Successful calculation
    Flash,
    /// Failed calculation
    Shake,
}

impl Feedback {
    /// Lowercase name, as serialized
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Flash => "flash",
            Self::Shake => "shake",
        }
    }
}

/// What a front end needs to redraw the display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderEvent {
    /// Result line
    pub current: String,
    /// Expression line
    pub expression: String,
    /// Whether the engine is in the error state
    pub is_error: bool,
    /// Flash / shake signal for this render
    pub feedback: Feedback,
}

impl RenderEvent {
    /// Style hint for the result line
    #[must_use]
    pub fn style(&self) -> ResultStyle {
        ResultStyle::for_result(&self.current, self.is_error)
    }
}

/// Receives a render event after every state change
pub trait Renderer {
    /// Called once per state-changing operation
    fn render(&mut self, event: &RenderEvent);
}

impl<F> Renderer for F
where
    F: FnMut(&RenderEvent),
{
    fn render(&mut self, event: &RenderEvent) {
        self(event);
    }
}

/// Renderer that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _event: &RenderEvent) {}
}

/// Renderer that keeps every event it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in the order they were rendered
    #[must_use]
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Most recent event
    #[must_use]
    pub fn last(&self) -> Option<&RenderEvent> {
        self.events.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, event: &RenderEvent) {
        self.events.push(event.clone());
    }
}

/// Display state of the calculator
///
/// Invariants: `current` is a numeral, `"0"` or [`ERROR_TEXT`]; it holds at
/// most one point and never grows past [`MAX_OPERAND_LEN`] by typing;
/// `has_error` and `just_evaluated` are never both set; in the error state the
/// expression is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    current: String,
    expression: Expression,
    committed: Option<String>,
    just_evaluated: bool,
    has_error: bool,
    entry_started: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            current: "0".to_string(),
            expression: Expression::new(),
            committed: None,
            just_evaluated: false,
            has_error: false,
            entry_started: false,
        }
    }
}

impl EngineState {
    /// Operand being typed, or the last result
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Pending `operand operator` pairs
    #[must_use]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Expression line: the committed text after a result, else the pending
    /// pairs
    #[must_use]
    pub fn expression_text(&self) -> String {
        match &self.committed {
            Some(text) => text.clone(),
            None => self.expression.render(),
        }
    }

    /// True right after a successful calculation
    #[must_use]
    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// True after a failed calculation
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// True once an operand was typed since the last operator
    #[must_use]
    pub fn entry_started(&self) -> bool {
        self.entry_started
    }
}

/// The calculator engine
#[derive(Debug)]
pub struct Engine<R = NullRenderer> {
    state: EngineState,
    renderer: R,
}

impl Default for Engine<NullRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine<NullRenderer> {
    /// Creates an engine that renders nowhere
    #[must_use]
    pub fn new() -> Self {
        Self::with_renderer(NullRenderer)
    }
}

impl<R: Renderer> Engine<R> {
    /// Creates an engine in the initial state with the given renderer
    #[must_use]
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            state: EngineState::default(),
            renderer,
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Result line
    #[must_use]
    pub fn current(&self) -> &str {
        &self.state.current
    }

    /// Expression line
    #[must_use]
    pub fn expression_text(&self) -> String {
        self.state.expression_text()
    }

    /// True in the error state
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state.has_error
    }

    /// True right after a successful calculation
    #[must_use]
    pub fn just_evaluated(&self) -> bool {
        self.state.just_evaluated
    }

    /// Render event describing the current display, without feedback
    #[must_use]
    pub fn snapshot(&self) -> RenderEvent {
        RenderEvent {
            current: self.state.current.clone(),
            expression: self.state.expression_text(),
            is_error: self.state.has_error,
            feedback: Feedback::None,
        }
    }

    /// Borrow the renderer
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutably borrow the renderer
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the engine, returning its renderer
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Types a digit. Non-digit characters are ignored.
    ///
    /// In the error state this clears first; right after a result it starts a
    /// fresh operand.
    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            trace!(%digit, "ignoring non-digit");
            return;
        }

        if self.state.has_error {
            self.state = EngineState::default();
        }

        let state = &mut self.state;
        if state.just_evaluated {
            state.current = digit.to_string();
            state.expression.clear();
            state.committed = None;
            state.just_evaluated = false;
        } else if state.current == "0" {
            state.current = digit.to_string();
        } else if state.current.len() >= MAX_OPERAND_LEN {
            trace!(current = %state.current, "operand full, digit dropped");
            return;
        } else {
            state.current.push(digit);
        }
        state.entry_started = true;

        self.render(Feedback::None);
    }

    /// Types a decimal point
    pub fn input_decimal(&mut self) {
        let state = &mut self.state;
        if state.has_error {
            return;
        }

        if state.just_evaluated {
            state.current = "0.".to_string();
            state.expression.clear();
            state.committed = None;
            state.just_evaluated = false;
        } else if state.current.contains('.') || state.current.len() >= MAX_OPERAND_LEN {
            return;
        } else {
            state.current.push('.');
        }
        state.entry_started = true;

        self.render(Feedback::None);
    }

    /// Presses an operator.
    ///
    /// If no operand was typed since the pending operator, the pending
    /// operator is replaced; otherwise the current operand and the operator
    /// are appended and a new operand starts at `"0"`.
    pub fn input_operator(&mut self, operator: Operator) {
        let state = &mut self.state;
        if state.has_error {
            return;
        }

        if state.just_evaluated {
            // chain from the result
            state.just_evaluated = false;
            state.committed = None;
            state.expression.clear();
        }

        let replaced = !state.entry_started && state.expression.replace_last_operator(operator);
        if !replaced {
            let operand = std::mem::replace(&mut state.current, "0".to_string());
            state.expression.push(operand, operator);
            state.entry_started = false;
        }
        trace!(%operator, replaced, "operator");

        self.render(Feedback::None);
    }

    /// Evaluates the pending expression with the current operand.
    ///
    /// Does nothing without a pending operator. Failures land in the error
    /// state instead of propagating.
    pub fn calculate(&mut self) {
        let state = &mut self.state;
        if state.has_error || state.expression.is_empty() {
            return;
        }

        let untouched_percent =
            state.expression.last_operator() == Some(Operator::Percent) && !state.entry_started;
        let trailing = if untouched_percent {
            None
        } else {
            Some(state.current.as_str())
        };
        let committed = state.expression.commit(trailing);

        let feedback = match evaluate(&state.expression, trailing) {
            Ok(value) => {
                debug!(expression = %committed, value, "calculated");
                state.current = format_number(value);
                state.committed = Some(committed);
                state.just_evaluated = true;
                state.has_error = false;
                Feedback::Flash
            }
            Err(err) => {
                debug!(expression = %committed, error = %err, "calculation failed");
                state.current = ERROR_TEXT.to_string();
                state.committed = None;
                state.just_evaluated = false;
                state.has_error = true;
                Feedback::Shake
            }
        };
        state.expression.clear();
        state.entry_started = false;

        self.render(feedback);
    }

    /// Resets to the initial state
    pub fn clear(&mut self) {
        self.state = EngineState::default();
        self.render(Feedback::None);
    }

    /// Deletes the last character of the operand; clears after a result or
    /// an error
    pub fn backspace(&mut self) {
        if self.state.has_error || self.state.just_evaluated {
            self.clear();
            return;
        }

        let current = &mut self.state.current;
        if current.trim_start_matches('-').len() <= 1 {
            // never leave a bare sign behind
            *current = "0".to_string();
        } else {
            current.pop();
        }

        self.render(Feedback::None);
    }

    /// Flips the sign of a non-zero operand.
    ///
    /// A typed operand already at [`MAX_OPERAND_LEN`] characters keeps its
    /// sign off.
    pub fn toggle_sign(&mut self) {
        let state = &mut self.state;
        if state.has_error || state.current == "0" {
            return;
        }

        state.current = match state.current.strip_prefix('-') {
            Some(unsigned) => unsigned.to_string(),
            None if !state.just_evaluated && state.current.len() >= MAX_OPERAND_LEN => {
                trace!(current = %state.current, "operand full, sign dropped");
                return;
            }
            None => format!("-{}", state.current),
        };

        self.render(Feedback::None);
    }

    /// Dispatches a keypad action to the matching operation
    pub fn apply(&mut self, action: KeypadAction) {
        match action {
            KeypadAction::Digit(d) => {
                if let Some(digit) = char::from_digit(u32::from(d), 10) {
                    self.input_digit(digit);
                }
            }
            KeypadAction::Decimal => self.input_decimal(),
            KeypadAction::Operator(op) => self.input_operator(op),
            KeypadAction::Equals => self.calculate(),
            KeypadAction::Clear => self.clear(),
            KeypadAction::Backspace => self.backspace(),
            KeypadAction::ToggleSign => self.toggle_sign(),
        }
    }

    fn render(&mut self, feedback: Feedback) {
        let event = RenderEvent {
            feedback,
            ..self.snapshot()
        };
        self.renderer.render(&event);
    }
}
