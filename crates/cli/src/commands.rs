//! Runs the prompt named on the command line.

use std::io::Write;

use crossterm::style::Color;
use itertools::Itertools;
use log::debug;
use rust_prompt_core::error::Result;
use rust_prompt_core::{Cancellation, Console, Defaults};

use crate::cli_args::PromptCommand;
use crate::colors::paint;

/// What a prompt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Line(String),
    Answer(bool),
    Index(usize),
    Indices(Vec<usize>),
    /// Closing remark of the demo.
    Remark(String),
}

impl Outcome {
    /// The answer as printed on stdout.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Outcome::Line(line) => line.clone(),
            Outcome::Answer(true) => "yes".to_string(),
            Outcome::Answer(false) => "no".to_string(),
            Outcome::Index(index) => index.to_string(),
            Outcome::Indices(indices) => indices.iter().join(","),
            Outcome::Remark(remark) => remark.clone(),
        }
    }

    /// A "no" answer is reported through the exit status.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        matches!(self, Outcome::Answer(false))
    }
}

/// Runs `command` on `console`, with `defaults` under any command-line
/// overrides.
///
/// # Errors
///
/// Returns cancellation, I/O and empty selection errors from the prompt.
pub fn run<W: Write>(
    command: &PromptCommand,
    defaults: &Defaults,
    console: &mut Console<W>,
    cancel: &Cancellation,
) -> Result<Outcome> {
    debug!("Running {command:?}");

    match command {
        PromptCommand::ReadLine {
            message,
            default,
            verbose,
            prompt,
        } => {
            let mut read_prompt = defaults.prompt(message.as_str());
            read_prompt.default.clone_from(default);
            read_prompt.verbose |= *verbose;
            if let Some(prompt) = prompt {
                read_prompt.prompt.clone_from(prompt);
            }
            console.read_line(&read_prompt, cancel).map(Outcome::Line)
        }
        PromptCommand::Confirm {
            message,
            strict,
            default_no,
            mode,
        } => {
            let mut question = defaults.question(message.as_str());
            question.strict |= *strict;
            if *default_no {
                question.default = false;
            }
            if let Some(mode) = mode {
                question.mode = (*mode).into();
            }
            console.confirm(&question, cancel).map(Outcome::Answer)
        }
        PromptCommand::Select {
            message,
            options,
            multiple,
            no_filter,
            paging,
            matcher,
        } => {
            let mut select = defaults.select(message.as_str(), options.clone());
            if *no_filter {
                select.filter = false;
            }
            if let Some(paging) = paging {
                select.paging = *paging;
            }
            if let Some(matcher) = matcher {
                select.matcher = (*matcher).into();
            }

            if *multiple {
                console.select_multiple(&select, cancel).map(Outcome::Indices)
            } else {
                console.select_single(&select, cancel).map(Outcome::Index)
            }
        }
        PromptCommand::Demo => demo(defaults, console, cancel).map(Outcome::Remark),
    }
}

/// Writes the rendered outcome as the only line on `out`.
///
/// # Errors
///
/// Returns the write error if `out` fails.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, color: Option<Color>) -> Result<()> {
    writeln!(out, "{}", paint(&outcome.render(), color))?;
    out.flush()?;
    Ok(())
}

const CLUBS: [&str; 4] = [
    "FC Barcelona",
    "Spartak Moscow",
    "Manchester United",
    "Juventus",
];

fn demo<W: Write>(
    defaults: &Defaults,
    console: &mut Console<W>,
    cancel: &Cancellation,
) -> Result<String> {
    let name = console.read_line(&defaults.prompt("What's your name? "), cancel)?;

    let question = defaults.question(format!("{name}, do you want to continue?"));
    if !console.confirm(&question, cancel)? {
        return Ok("Maybe next time.".to_string());
    }

    let clubs: Vec<String> = CLUBS.iter().map(ToString::to_string).collect();
    let favorite = console.select_single(
        &defaults.select("Which football club is your favorite?", clubs.clone()),
        cancel,
    )?;
    let winners = console.select_multiple(
        &defaults.select("Which won Champions League?", clubs.clone()),
        cancel,
    )?;

    let club = &clubs[favorite];
    if winners.contains(&favorite) {
        Ok(format!("{club} have won Champions League!"))
    } else {
        Ok(format!("{club} haven't won Champions League yet :("))
    }
}
