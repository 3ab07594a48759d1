//! Keypad Calculator Engine
//!
//! The input and evaluation state machine behind a pocket-calculator widget:
//! operand entry with leading-zero suppression and a length cap, pending
//! operators that can be swapped before the next operand, postfix percent,
//! and a hand-written evaluator over that fixed grammar. Front ends drive it
//! through seven plain method calls and redraw from the render events it
//! emits.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut engine = Engine::with_renderer(RecordingRenderer::new());
//! engine.input_digit('2');
//! engine.input_operator(Operator::Add);
//! engine.input_digit('2');
//! engine.calculate();
//!
//! assert_eq!(engine.current(), "4");
//! assert_eq!(engine.expression_text(), "2 + 2 =");
//! assert_eq!(engine.renderer().last().unwrap().feedback, Feedback::Flash);
//!
//! engine.input_operator(Operator::Divide);
//! engine.input_digit('0');
//! engine.calculate();
//! assert!(engine.is_error());
//! assert_eq!(engine.current(), "MATH ERROR");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod display;
pub mod driver;
pub mod engine;
pub mod keypad;

/// Browser bindings (build with `--features wasm`)
#[cfg(feature = "wasm")]
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{evaluate, parse_operand};
    pub use crate::core::expression::{Expression, Term};
    pub use crate::core::format::format_number;
    pub use crate::core::{CalcResult, EvaluationError, Operator};
    pub use crate::display::ResultStyle;
    pub use crate::driver::{
        verify_basic_arithmetic, verify_error_recovery, verify_operator_replacement,
        verify_percent, CalculatorDriver,
    };
    pub use crate::engine::{
        Engine, EngineState, Feedback, NullRenderer, RecordingRenderer, RenderEvent, Renderer,
        ERROR_TEXT, MAX_OPERAND_LEN,
    };
    pub use crate::keypad::{Keypad, KeypadAction, KeypadButton};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;
}
