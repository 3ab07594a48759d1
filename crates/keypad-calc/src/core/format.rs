//! Display formatting for computed results

/// Significant digits kept when a result is displayed
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Text shown for a non-finite value
pub const NON_FINITE_TEXT: &str = "ERROR";

/// Formats a result for the display.
///
/// The value is rounded to [`SIGNIFICANT_DIGITS`] significant digits and then
/// printed as the shortest decimal that round-trips to the rounded value.
/// Magnitudes at or above `1e21` or below `1e-6` use exponential notation
/// (`1e+21`, `1.5e-7`); everything else is plain decimal.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return NON_FINITE_TEXT.to_string();
    }

    let rounded = round_significant(value);
    if rounded == 0.0 {
        // also folds negative zero
        return "0".to_string();
    }

    let magnitude = rounded.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{rounded}")
    } else {
        exponential(rounded)
    }
}

/// Rounds to [`SIGNIFICANT_DIGITS`] significant digits
fn round_significant(value: f64) -> f64 {
    let precision = SIGNIFICANT_DIGITS - 1;
    format!("{value:.precision$e}").parse().unwrap_or(value)
}

/// `1.5e-7` / `1e+21` style exponential text
fn exponential(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
