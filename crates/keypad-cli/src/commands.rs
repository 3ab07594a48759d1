//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Keypad: pocket calculator in the terminal
#[derive(Parser, Debug)]
#[command(name = "keypad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (results only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format (text, json)
    #[arg(long, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keys and print the final display
    Press(PressArgs),

    /// Read key lines interactively or from a script
    Repl(ReplArgs),

    /// Print the keypad layout
    Layout,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Keys: names (7, +, Enter, Escape), button actions (sign, clear)
    /// or runs of single-character keys (12+3=)
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

/// Arguments for the repl command
#[derive(Parser, Debug)]
pub struct ReplArgs {
    /// Read lines from this file instead of stdin; the first bad line aborts
    #[arg(short, long)]
    pub script: Option<PathBuf>,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON lines
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_press() {
            let cli = Cli::parse_from(["keypad", "press", "2", "+", "2", "Enter"]);
            if let Commands::Press(args) = cli.command {
                assert_eq!(args.keys, vec!["2", "+", "2", "Enter"]);
            } else {
                panic!("expected Press command");
            }
        }

        #[test]
        fn test_parse_press_minus_key() {
            let cli = Cli::parse_from(["keypad", "press", "9", "-", "-3"]);
            if let Commands::Press(args) = cli.command {
                assert_eq!(args.keys, vec!["9", "-", "-3"]);
            } else {
                panic!("expected Press command");
            }
        }

        #[test]
        fn test_press_requires_keys() {
            assert!(Cli::try_parse_from(["keypad", "press"]).is_err());
        }

        #[test]
        fn test_parse_repl_script() {
            let cli = Cli::parse_from(["keypad", "repl", "--script", "keys.txt"]);
            if let Commands::Repl(args) = cli.command {
                assert_eq!(args.script, Some(PathBuf::from("keys.txt")));
            } else {
                panic!("expected Repl command");
            }
        }

        #[test]
        fn test_parse_layout() {
            let cli = Cli::parse_from(["keypad", "layout"]);
            assert!(matches!(cli.command, Commands::Layout));
        }

        #[test]
        fn test_global_flags() {
            let cli = Cli::parse_from(["keypad", "-vv", "--format", "json", "layout"]);
            assert_eq!(cli.verbose, 2);
            assert!(matches!(cli.format, FormatArg::Json));
            assert!(matches!(cli.color, ColorArg::Auto));
        }

        #[test]
        fn test_color_never() {
            let cli = Cli::parse_from(["keypad", "--color", "never", "layout"]);
            assert!(matches!(cli.color, ColorArg::Never));
        }
    }
}
