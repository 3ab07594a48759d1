//! Calculator session driven by text tokens
//!
//! A token is a key name (`7`, `+`, `Enter`, `Escape`), a button action name
//! (`sign`, `clear`, `equals`) or a run of single-character keys (`12+3=`).

use std::io::{BufRead, Write};

use keypad_calc::prelude::{CalculatorDriver, Engine, Keypad, KeypadAction, Operator};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};
use crate::output::Printer;

/// Words that end a REPL
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Parses one token into the actions it stands for
pub fn parse_token(token: &str) -> CliResult<Vec<KeypadAction>> {
    if let Some(action) = Keypad::key_to_action(token) {
        return Ok(vec![action]);
    }
    if let Some(action) = KeypadAction::from_button(token, None) {
        return Ok(vec![action]);
    }

    let mut buf = [0u8; 4];
    token
        .chars()
        .map(|c| {
            let key = c.encode_utf8(&mut buf);
            Keypad::key_to_action(key)
                .or_else(|| Operator::from_symbol(key).map(KeypadAction::Operator))
                .ok_or_else(|| CliError::unknown_key(token))
        })
        .collect()
}

/// Parses a whitespace-separated line; nothing is returned unless every
/// token is valid
pub fn parse_line(line: &str) -> CliResult<Vec<KeypadAction>> {
    let mut actions = Vec::new();
    for token in line.split_whitespace() {
        actions.extend(parse_token(token)?);
    }
    Ok(actions)
}

/// Engine plus the printer for its display
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    printer: Printer,
}

impl Session {
    /// Fresh session in the initial state
    #[must_use]
    pub fn new(printer: Printer) -> Self {
        Self {
            engine: Engine::new(),
            printer,
        }
    }

    /// Underlying engine
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Applies every token, validating all of them first
    pub fn apply_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> CliResult<()> {
        let mut actions = Vec::new();
        for token in tokens {
            actions.extend(parse_token(token.as_ref())?);
        }
        self.apply_actions(actions);
        Ok(())
    }

    /// Applies one line of tokens
    pub fn apply_line(&mut self, line: &str) -> CliResult<()> {
        let actions = parse_line(line)?;
        self.apply_actions(actions);
        Ok(())
    }

    fn apply_actions(&mut self, actions: Vec<KeypadAction>) {
        for action in actions {
            debug!(?action, "press");
            self.engine.apply(action);
        }
    }

    /// Current display in the configured format
    pub fn display(&self) -> CliResult<String> {
        self.printer.display(&self.engine.snapshot())
    }

    /// Reads lines until EOF or a quit word, printing the display after
    /// each line. Invalid lines are reported and skipped unless `strict`,
    /// in which case the first one aborts the loop. Returns the number of
    /// lines applied.
    pub fn run_repl<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
        strict: bool,
    ) -> CliResult<usize> {
        let mut applied = 0;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if QUIT_WORDS.contains(&line) {
                break;
            }

            match self.apply_line(line) {
                Ok(()) => {
                    applied += 1;
                    writeln!(output, "{}", self.display()?)?;
                }
                Err(err) if !strict => writeln!(output, "Error: {err}")?,
                Err(err) => return Err(err),
            }
        }

        info!(lines = applied, "repl finished");
        Ok(applied)
    }
}

impl CalculatorDriver for Session {
    fn press(&mut self, action: KeypadAction) {
        self.engine.apply(action);
    }

    fn result_text(&self) -> String {
        self.engine.current().to_string()
    }

    fn expression_text(&self) -> String {
        self.engine.expression_text()
    }

    fn is_error(&self) -> bool {
        self.engine.is_error()
    }
}
