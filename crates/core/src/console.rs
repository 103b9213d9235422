//! Runs prompts against a line reader and an output stream.

use std::io::{stdout, Stdout, Write};

use log::{debug, warn};

use crate::cancel::Cancellation;
use crate::confirm::{Question, UNEXPECTED_ANSWER};
use crate::error::Result;
use crate::line_reader::LineReader;
use crate::parser::{Multiple, Picker, Single};
use crate::prefill::{default_prefill, NoPrefill, Prefill};
use crate::prompt::Prompt;
use crate::select::Select;

pub struct Console<W> {
    reader: LineReader,
    out: W,
    prefill: Box<dyn Prefill + Send>,
}

impl<W> std::fmt::Debug for Console<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("reader", &self.reader)
            .finish_non_exhaustive()
    }
}

impl Console<Stdout> {
    /// Process stdin and stdout, with the platform's prefill.
    #[must_use]
    pub fn stdio() -> Self {
        Console::new(LineReader::stdin(), stdout()).with_prefill(default_prefill())
    }
}

impl<W: Write> Console<W> {
    /// A console that never pre-fills answers.
    pub fn new(reader: LineReader, out: W) -> Self {
        Self {
            reader,
            out,
            prefill: Box::new(NoPrefill),
        }
    }

    #[must_use]
    pub fn with_prefill(mut self, prefill: Box<dyn Prefill + Send>) -> Self {
        self.prefill = prefill;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Asks `prompt` and returns the trimmed answer.
    ///
    /// # Errors
    ///
    /// Returns cancellation, read and write errors unchanged.
    pub fn read_line(&mut self, prompt: &Prompt, cancel: &Cancellation) -> Result<String> {
        write!(self.out, "{}", prompt.render())?;
        self.out.flush()?;

        if let Some(default) = prompt.default.as_deref().filter(|d| !d.is_empty()) {
            if let Err(e) = self.prefill.prefill(default) {
                // The answer can still be typed in full.
                warn!("Could not pre-fill default answer: {e}");
            }
        }

        self.reader.read_line(cancel)
    }

    /// Asks `question` until it gets an acceptable answer.
    ///
    /// # Errors
    ///
    /// Returns cancellation, read and write errors unchanged.
    pub fn confirm(&mut self, question: &Question, cancel: &Cancellation) -> Result<bool> {
        let prompt = question.prompt();
        loop {
            let line = self.read_line(&prompt, cancel)?;
            if let Some(answer) = question.interpret(&line) {
                debug!("Question {:?} answered {answer}", question.message);
                return Ok(answer);
            }
            writeln!(self.out, "{UNEXPECTED_ANSWER}")?;
        }
    }

    /// Runs `select` and returns the index of the single option picked.
    ///
    /// # Errors
    ///
    /// See [`Select::run`].
    pub fn select_single(&mut self, select: &Select, cancel: &Cancellation) -> Result<usize> {
        self.select_one(select, &Single, cancel)
    }

    fn select_one(
        &mut self,
        select: &Select,
        picker: &dyn Picker,
        cancel: &Cancellation,
    ) -> Result<usize> {
        let picked = select.run(&self.reader, &mut self.out, picker, cancel)?;
        match picked.as_slice() {
            [index] => Ok(*index),
            other => panic!("inconsistent state: single pick resolved to {other:?}"),
        }
    }

    /// Runs `select` and returns the indices picked, in the order given.
    ///
    /// # Errors
    ///
    /// See [`Select::run`].
    pub fn select_multiple(
        &mut self,
        select: &Select,
        cancel: &Cancellation,
    ) -> Result<Vec<usize>> {
        select.run(&self.reader, &mut self.out, &Multiple, cancel)
    }
}
