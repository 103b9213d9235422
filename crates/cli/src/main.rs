use std::io::{stderr, stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use crossterm::style::Color;
use crossterm::tty::IsTty;
use log::debug;
use rust_prompt_core::config;
use rust_prompt_core::error::{Error, Result};
use rust_prompt_core::line_reader::LineReader;
use rust_prompt_core::prefill::default_prefill;
use rust_prompt_core::Console;

use rust_prompt_cli::cli_args::Args;
use rust_prompt_cli::colors::{paint, theme_color};
use rust_prompt_cli::commands;

/// Exit status when the prompt was cancelled or timed out
const CANCELLED_EXIT_CODE: u8 = 2;

fn execute(error_color: &mut Option<Color>) -> Result<ExitCode> {
    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);
    let defaults = config::load_defaults(&config_path)?;

    let result_color = theme_color(defaults.theme.result_color.as_ref())?;
    *error_color = theme_color(defaults.theme.error_color.as_ref())?;

    // Prompts go to stderr so stdout carries nothing but the answer.
    let mut console = Console::new(LineReader::stdin(), stderr()).with_prefill(default_prefill());
    let outcome = commands::run(&args.command, &defaults, &mut console, &args.cancellation())?;

    let mut out = stdout();
    let color = if out.is_tty() { result_color } else { None };
    commands::write_outcome(&mut out, &outcome, color)?;

    if outcome.is_negative() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn report(error: &Error, color: Option<Color>) {
    let message = error.to_string();
    if stderr().is_tty() {
        eprintln!("{}", paint(&message, color));
    } else {
        eprintln!("{message}");
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut error_color = None;
    match execute(&mut error_color) {
        Ok(code) => code,
        Err(e) if e.is_cancellation() => {
            // Finish the unanswered prompt line.
            let _ = writeln!(stderr());
            report(&e, error_color);
            ExitCode::from(CANCELLED_EXIT_CODE)
        }
        Err(e) => {
            report(&e, error_color);
            ExitCode::FAILURE
        }
    }
}
