//! Command-line argument parsing.
//!
//! This module defines the command-line interface of the `rp` binary using the
//! `clap` crate. Each subcommand runs one kind of prompt and prints its answer.

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use rust_prompt_core::confirm::QuestionMode;
use rust_prompt_core::matcher::MatchPolicy;
use rust_prompt_core::Cancellation;

/// Command-line arguments for the `rp` prompt tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rust_prompt_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rp", "confirm", "Deploy?"]);
/// assert!(args.timeout.is_none());
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "rp", term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the prompt defaults YAML.
    ///
    /// If not provided, defaults to `~/.rust-prompt/config.yml`.
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config_path: Option<String>,

    /// Give up waiting for an answer after this many seconds.
    #[arg(long, short = 't')]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: PromptCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    /// Read one line of free text.
    ReadLine {
        message: String,

        /// Answer pre-filled into the input line, where the terminal allows it.
        #[arg(long, short = 'd')]
        default: Option<String>,

        /// Print the message on its own line above the prompt.
        #[arg(long, short = 'v', action)]
        verbose: bool,

        /// Prompt text used with `--verbose`.
        #[arg(long, short = 'p')]
        prompt: Option<String>,
    },

    /// Ask a yes/no question. Exits with status 1 on "no".
    Confirm {
        message: String,

        /// Only accept `y` or `n`.
        #[arg(long, short = 's', action)]
        strict: bool,

        /// Treat an empty answer as "no".
        #[arg(long, action)]
        default_no: bool,

        /// Where to show the `[y/n]` hint.
        #[arg(long, short = 'm', value_enum)]
        mode: Option<ModeArg>,
    },

    /// Pick from a numbered list of options and print the chosen index(es).
    Select {
        message: String,

        /// The options, in display order.
        #[arg(required = true, num_args = 1..)]
        options: Vec<String>,

        /// Allow picking several options (`0,2` or `*`).
        #[arg(long, short = 'm', action)]
        multiple: bool,

        /// Disable `/pattern` filtering and `!` reset.
        #[arg(long, action)]
        no_filter: bool,

        /// Options per page; 0 lists everything.
        #[arg(long, short = 'p')]
        paging: Option<usize>,

        /// How `/pattern` matches options.
        #[arg(long, value_enum)]
        matcher: Option<MatcherArg>,
    },

    /// Walk through every prompt kind with a football quiz.
    Demo,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Empty,
    Suffix,
    NewLine,
}

impl From<ModeArg> for QuestionMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Empty => QuestionMode::Empty,
            ModeArg::Suffix => QuestionMode::Suffix,
            ModeArg::NewLine => QuestionMode::NewLine,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherArg {
    Fuzzy,
    ExactCase,
    Skim,
}

impl From<MatcherArg> for MatchPolicy {
    fn from(value: MatcherArg) -> Self {
        match value {
            MatcherArg::Fuzzy => MatchPolicy::Fuzzy,
            MatcherArg::ExactCase => MatchPolicy::ExactCase,
            MatcherArg::Skim => MatchPolicy::Skim,
        }
    }
}

impl Args {
    /// The token every prompt of this run waits on.
    #[must_use]
    pub fn cancellation(&self) -> Cancellation {
        match self.timeout {
            Some(seconds) => Cancellation::with_timeout(Duration::from_secs(seconds)),
            None => Cancellation::new(),
        }
    }
}
