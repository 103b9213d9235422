//! Yes/no questions.

use serde::Deserialize;

use crate::prompt::Prompt;

pub const UNEXPECTED_ANSWER: &str = "Unexpected answer";

/// Where the `[y/n]` hint goes.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionMode {
    /// No hint at all.
    Empty,
    /// Appended after the message on the same line.
    #[default]
    Suffix,
    /// On a `Command [y/n]: ` line under the message.
    NewLine,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub message: String,
    /// Answer used when the user just presses Enter.
    pub default: bool,
    /// Only `y` or `n` are accepted, and there is no default.
    pub strict: bool,
    pub mode: QuestionMode,
}

impl Default for Question {
    fn default() -> Self {
        Self {
            message: String::new(),
            default: true,
            strict: false,
            mode: QuestionMode::default(),
        }
    }
}

impl Question {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn hint(&self) -> &'static str {
        match (self.strict, self.default) {
            (true, _) => "[y/n]",
            (false, true) => "[Y/n]",
            (false, false) => "[y/N]",
        }
    }

    /// The line prompt asked on every round.
    #[must_use]
    pub fn prompt(&self) -> Prompt {
        let mut prompt = Prompt::new(self.message.clone());
        match self.mode {
            QuestionMode::Empty => {}
            QuestionMode::Suffix => {
                prompt.message = format!("{} {} ", self.message, self.hint());
            }
            QuestionMode::NewLine => {
                prompt.verbose = true;
                prompt.prompt = format!("Command {}: ", self.hint());
            }
        }
        prompt
    }

    /// Interprets one answer line, `None` when it has to be asked again.
    #[must_use]
    pub fn interpret(&self, line: &str) -> Option<bool> {
        if line.is_empty() && !self.strict {
            return Some(self.default);
        }
        if line.eq_ignore_ascii_case("y") {
            return Some(true);
        }
        if !self.strict || line.eq_ignore_ascii_case("n") {
            return Some(false);
        }
        None
    }
}
