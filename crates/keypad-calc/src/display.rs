//! Display hints derived from a render event
//!
//! None of this feeds back into the engine; front ends use it to pick a font
//! size and colour for the result line.

use serde::{Deserialize, Serialize};

/// Result text longer than this gets the compact style
pub const LONG_TEXT_THRESHOLD: usize = 10;

/// How the result line should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStyle {
    /// Regular size
    #[default]
    Normal,
    /// Shrunk to fit a long number
    Long,
    /// Error display
    Error,
}

impl ResultStyle {
    /// Picks the style for a result line
    #[must_use]
    pub fn for_result(text: &str, is_error: bool) -> Self {
        if is_error {
            Self::Error
        } else if text.chars().count() > LONG_TEXT_THRESHOLD {
            Self::Long
        } else {
            Self::Normal
        }
    }

    /// CSS class a browser front end puts on the result element
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Long => "long",
            Self::Error => "error",
        }
    }
}
