//! Output formatting for displays and the keypad layout

use console::Style;
use keypad_calc::prelude::{Keypad, KeypadAction, RenderEvent, ResultStyle};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format for displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per display
    Json,
}

/// Display as printed in JSON mode
#[derive(Debug, Serialize)]
struct DisplayRecord<'a> {
    result: &'a str,
    expression: &'a str,
    error: bool,
    style: ResultStyle,
}

/// Turns engine displays into printable text
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
    use_color: bool,
    result_only: bool,
}

impl Printer {
    /// Create a printer
    #[must_use]
    pub const fn new(format: OutputFormat, use_color: bool) -> Self {
        Self {
            format,
            use_color,
            result_only: false,
        }
    }

    /// Drop the expression line from text output
    #[must_use]
    pub const fn with_result_only(mut self, result_only: bool) -> Self {
        self.result_only = result_only;
        self
    }

    /// Output format in use
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Renders a display: expression line above the result in text mode,
    /// a single JSON object otherwise
    pub fn display(&self, event: &RenderEvent) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => {
                let record = DisplayRecord {
                    result: &event.current,
                    expression: &event.expression,
                    error: event.is_error,
                    style: event.style(),
                };
                Ok(serde_json::to_string(&record)?)
            }
            OutputFormat::Text => Ok(self.display_text(event)),
        }
    }

    fn display_text(&self, event: &RenderEvent) -> String {
        let expression = event.expression.trim_end();
        let result = if self.use_color {
            result_style(event.style())
                .apply_to(&event.current)
                .to_string()
        } else {
            event.current.clone()
        };

        if expression.is_empty() || self.result_only {
            result
        } else if self.use_color {
            format!("{}\n{result}", Style::new().dim().apply_to(expression))
        } else {
            format!("{expression}\n{result}")
        }
    }

    /// Renders the button grid, one keypad row per line
    pub fn layout(&self, keypad: &Keypad) -> CliResult<String> {
        let (rows, cols) = keypad.dimensions();

        if self.format == OutputFormat::Json {
            let grid: Vec<Vec<String>> = (0..rows)
                .map(|row| {
                    (0..cols)
                        .filter_map(|col| keypad.button_at(row, col))
                        .map(|button| button.id.clone())
                        .collect()
                })
                .collect();
            return Ok(serde_json::to_string(&grid)?);
        }

        let lines: Vec<String> = (0..rows)
            .map(|row| {
                (0..cols)
                    .filter_map(|col| keypad.button_at(row, col))
                    .map(|button| {
                        let cell = format!("[{:^3}]", button.action.label());
                        if self.use_color && matches!(button.action, KeypadAction::Operator(_)) {
                            Style::new().cyan().apply_to(cell).to_string()
                        } else {
                            cell
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

fn result_style(style: ResultStyle) -> Style {
    match style {
        ResultStyle::Normal => Style::new().bold(),
        ResultStyle::Long => Style::new(),
        ResultStyle::Error => Style::new().red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypad_calc::prelude::Feedback;

    fn event(current: &str, expression: &str, is_error: bool) -> RenderEvent {
        RenderEvent {
            current: current.to_string(),
            expression: expression.to_string(),
            is_error,
            feedback: Feedback::None,
        }
    }

    #[test]
    fn test_default_format() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_text_display_plain() {
        let printer = Printer::new(OutputFormat::Text, false);
        let text = printer.display(&event("4", "2 + 2 =", false)).unwrap();
        assert_eq!(text, "2 + 2 =\n4");
    }

    #[test]
    fn test_text_display_without_expression() {
        let printer = Printer::new(OutputFormat::Text, false);
        assert_eq!(printer.display(&event("0", "", false)).unwrap(), "0");
    }

    #[test]
    fn test_text_display_trims_pending_operator_space() {
        let printer = Printer::new(OutputFormat::Text, false);
        let text = printer.display(&event("0", "12 + ", false)).unwrap();
        assert_eq!(text, "12 +\n0");
    }

    #[test]
    fn test_result_only() {
        let printer = Printer::new(OutputFormat::Text, false).with_result_only(true);
        assert_eq!(printer.display(&event("4", "2 + 2 =", false)).unwrap(), "4");
    }

    #[test]
    fn test_json_display() {
        let printer = Printer::new(OutputFormat::Json, false);
        let text = printer.display(&event("MATH ERROR", "", true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["result"], "MATH ERROR");
        assert_eq!(value["error"], true);
        assert_eq!(value["style"], "error");
    }

    #[test]
    fn test_text_layout() {
        let printer = Printer::new(OutputFormat::Text, false);
        let layout = printer.layout(&Keypad::new()).unwrap();
        let lines: Vec<&str> = layout.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("[ C ]"));
        assert!(lines[4].ends_with("[ = ]"));
    }

    #[test]
    fn test_json_layout() {
        let printer = Printer::new(OutputFormat::Json, false);
        let layout = printer.layout(&Keypad::new()).unwrap();
        let grid: Vec<Vec<String>> = serde_json::from_str(&layout).unwrap();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[1][0], "btn-7");
    }
}
