//! Keypad CLI: pocket calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad press 12 + 3 Enter        # 15
//! keypad press '12+3='             # same, as one run of keys
//! keypad repl                      # one line of keys at a time
//! keypad repl --script keys.txt    # replay a file
//! keypad --format json press 1/0=  # {"result":"MATH ERROR",...}
//! keypad layout                    # print the button grid
//! ```

use clap::Parser;
use keypad_calc::prelude::Keypad;
use keypad_cli::{
    Cli, CliConfig, CliError, CliResult, Commands, OutputFormat, PressArgs, Printer, ReplArgs,
    Session, Verbosity,
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    init_tracing(config.verbosity)?;
    tracing::debug!(?config, "starting");

    console::set_colors_enabled(config.use_color());
    let printer = Printer::new(config.format, config.use_color())
        .with_result_only(config.verbosity.is_quiet());

    match cli.command {
        Commands::Press(args) => run_press(printer, &args),
        Commands::Repl(args) => run_repl(printer, &args),
        Commands::Layout => run_layout(printer),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.clone().into())
        .with_format(cli.format.clone().into())
}

/// Logs go to stderr so stdout stays machine-readable; `RUST_LOG` wins over `-v`
fn init_tracing(verbosity: Verbosity) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(verbosity.filter_directive()))
        .map_err(|e| CliError::config(format!("invalid log filter: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::config(format!("logging already initialised: {e}")))
}

fn run_press(printer: Printer, args: &PressArgs) -> CliResult<()> {
    let mut session = Session::new(printer);
    session.apply_tokens(args.keys.as_slice())?;
    println!("{}", session.display()?);
    Ok(())
}

fn run_repl(printer: Printer, args: &ReplArgs) -> CliResult<()> {
    let mut session = Session::new(printer);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.script {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                CliError::config(format!("cannot open script {}: {e}", path.display()))
            })?;
            session.run_repl(BufReader::new(file), &mut out, true)?;
        }
        None => {
            if printer.format() == OutputFormat::Text {
                writeln!(out, "{}", session.display()?)?;
            }
            session.run_repl(io::stdin().lock(), &mut out, false)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn run_layout(printer: Printer) -> CliResult<()> {
    println!("{}", printer.layout(&Keypad::new())?);
    Ok(())
}
