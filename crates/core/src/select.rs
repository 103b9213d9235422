//! The selection menu.
//!
//! [`Select`] describes a menu; [`Select::run`] drives it. Each round renders
//! the current page of the current view, reads one command and either handles
//! it (help, filter, reset, paging) or hands it to a [`Picker`]. A successful
//! pick ends the loop and is reported as indices into [`Select::options`].
//!
//! Options are carried through filtering together with their original index,
//! so duplicate labels resolve to the right position.

use std::io::Write;

use log::{debug, trace};

use crate::cancel::Cancellation;
use crate::error::{Error, Result};
use crate::line_reader::LineReader;
use crate::matcher::MatchPolicy;
use crate::parser::{HelpEntry, Picker};

pub const COMMAND_PROMPT: &str = "Command (? for help): ";
pub const NO_OPTIONS_BEHIND: &str = "No options behind";
pub const NO_OPTIONS_AHEAD: &str = "No options ahead";

/// Text typed at the prompt, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    ResetView,
    FilterBy(&'a str),
    PagePrev,
    PageNext,
    Pick(&'a str),
}

impl<'a> Command<'a> {
    /// Meta commands are only recognised when the feature they drive is on;
    /// anything else is a pick.
    #[must_use]
    pub fn classify(line: &'a str, filter: bool, paging: bool) -> Self {
        match line {
            "?" => Command::Help,
            "!" if filter => Command::ResetView,
            _ if filter && line.starts_with('/') => Command::FilterBy(line[1..].trim()),
            "p" if paging => Command::PagePrev,
            "n" if paging => Command::PageNext,
            _ => Command::Pick(line),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub message: String,
    pub options: Vec<String>,
    /// Enables `/pattern` and `!`.
    pub filter: bool,
    /// Options per page, `0` lists everything at once.
    pub paging: usize,
    pub matcher: MatchPolicy,
}

impl Default for Select {
    fn default() -> Self {
        Self {
            message: String::new(),
            options: Vec::new(),
            filter: true,
            paging: 8,
            matcher: MatchPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry<'a> {
    index: usize,
    label: &'a str,
}

/// What the loop does after handling a command.
enum Next {
    Render,
    Prompt,
    Done(Vec<usize>),
}

struct Session<'a> {
    select: &'a Select,
    view: Vec<Entry<'a>>,
    offset: usize,
}

impl Select {
    pub fn new(message: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            message: message.into(),
            options,
            ..Self::default()
        }
    }

    fn page_size(&self) -> Option<usize> {
        (self.paging > 0).then_some(self.paging)
    }

    /// Runs the menu until `picker` accepts a command, returning the picked
    /// indices into [`Select::options`] in the order the picker produced them.
    ///
    /// # Errors
    ///
    /// - [`Error::NoOptions`] when there is nothing to choose from.
    /// - Any error from reading input or writing to `out`; these end the menu
    ///   immediately. Malformed picks are reported on `out` and re-prompted.
    pub fn run<W: Write>(
        &self,
        reader: &LineReader,
        out: &mut W,
        picker: &dyn Picker,
        cancel: &Cancellation,
    ) -> Result<Vec<usize>> {
        if self.options.is_empty() {
            return Err(Error::NoOptions);
        }

        let mut session = Session::new(self);
        let mut next = Next::Render;
        loop {
            if let Next::Render = next {
                session.render(out)?;
            }

            write!(out, "{COMMAND_PROMPT}")?;
            out.flush()?;
            let line = reader.read_line(cancel)?;

            match session.handle(&line, picker, out)? {
                Next::Done(picked) => {
                    debug!("Selection resolved to {picked:?}");
                    return Ok(picked);
                }
                other => next = other,
            }
        }
    }
}

impl<'a> Session<'a> {
    fn new(select: &'a Select) -> Self {
        Self {
            select,
            view: entries(&select.options),
            offset: 0,
        }
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.select.message)?;
        let page = self.select.page_size().unwrap_or(self.view.len());
        for (position, entry) in self.view.iter().enumerate().skip(self.offset).take(page) {
            writeln!(out, "{position}) {}", entry.label.trim())?;
        }
        Ok(())
    }

    fn handle<W: Write>(&mut self, line: &str, picker: &dyn Picker, out: &mut W) -> Result<Next> {
        let page = self.select.page_size();
        let command = Command::classify(line, self.select.filter, page.is_some());
        trace!("Handling {command:?} at offset {}", self.offset);

        match (command, page) {
            (Command::Help, _) => {
                self.write_help(picker, out)?;
                Ok(Next::Prompt)
            }
            (Command::ResetView, _) => {
                self.view = entries(&self.select.options);
                self.offset = 0;
                Ok(Next::Render)
            }
            (Command::FilterBy(pattern), _) => {
                self.view = self
                    .select
                    .matcher
                    .filter(&self.view, pattern, |entry| entry.label);
                self.offset = 0;
                debug!("Filter {pattern:?} left {} option(s)", self.view.len());
                Ok(Next::Render)
            }
            (Command::PagePrev, Some(page)) => {
                if self.offset == 0 {
                    writeln!(out, "{NO_OPTIONS_BEHIND}")?;
                    return Ok(Next::Prompt);
                }
                self.offset = self.offset.saturating_sub(page);
                Ok(Next::Render)
            }
            (Command::PageNext, Some(page)) => {
                if self.view.len().saturating_sub(self.offset) <= page {
                    writeln!(out, "{NO_OPTIONS_AHEAD}")?;
                    return Ok(Next::Prompt);
                }
                self.offset += page;
                Ok(Next::Render)
            }
            (Command::Pick(raw), _) => match picker.pick(self.view.len(), raw) {
                Ok(positions) => Ok(Next::Done(self.resolve(&positions))),
                Err(e) => {
                    writeln!(out, "Unexpected input: {e}")?;
                    Ok(Next::Prompt)
                }
            },
            (Command::PagePrev | Command::PageNext, None) => {
                unreachable!("paging commands are only classified when paging is on")
            }
        }
    }

    /// Maps view positions back to original indices.
    fn resolve(&self, positions: &[usize]) -> Vec<usize> {
        positions
            .iter()
            .map(|&position| match self.view.get(position) {
                Some(entry) => entry.index,
                None => panic!(
                    "inconsistent state: picker returned position {position} for a view of {} option(s)",
                    self.view.len()
                ),
            })
            .collect()
    }

    fn write_help<W: Write>(&self, picker: &dyn Picker, out: &mut W) -> Result<()> {
        let mut help = vec![HelpEntry::new("?", "Print this help message")];
        if let Some(page) = self.select.page_size() {
            if self.offset > 0 {
                help.push(HelpEntry::new(
                    "p",
                    format!("Show {page} previous option(s)"),
                ));
            }
            if self.view.len().saturating_sub(self.offset) > page {
                help.push(HelpEntry::new("n", format!("Show {page} next option(s)")));
            }
        }
        if self.select.filter {
            help.push(HelpEntry::new("/", "Filter options and repeat"));
            help.push(HelpEntry::new("!", "Reset view"));
        }
        help.extend(picker.help(self.view.len()));

        write_columns(out, &help)
    }
}

fn entries(options: &[String]) -> Vec<Entry<'_>> {
    options
        .iter()
        .enumerate()
        .map(|(index, label)| Entry { index, label })
        .collect()
}

/// Two-space indent, patterns padded to the widest plus four spaces.
fn write_columns<W: Write>(out: &mut W, help: &[HelpEntry]) -> Result<()> {
    let width = help
        .iter()
        .map(|entry| entry.pattern.chars().count())
        .max()
        .unwrap_or(0)
        + 4;
    for entry in help {
        writeln!(out, "  {:<width$}{}", entry.pattern, entry.description)?;
    }
    Ok(())
}
