//! Rust Prompt Core Library
//!
//! Blocking terminal prompts that can be cancelled: free text lines, yes/no
//! questions and numbered selection menus with paging and fuzzy filtering.
//!
//! # Key Features
//!
//! - **Cancellable Reads**: Every prompt races its read against a [`Cancellation`] token or deadline
//! - **Selection Menus**: Single or multiple choice, with `/pattern` filtering and `n`/`p` paging
//! - **Stable Indices**: Picks are reported as indices into the original option list
//! - **Confirmation Questions**: `[Y/n]` style prompts with strict and default modes
//! - **Configurable Defaults**: Defaults loaded from YAML and cloned per prompt
//!
//! # Examples
//!
//! ```no_run
//! use std::time::Duration;
//! use rust_prompt_core::{select_single, Cancellation};
//!
//! let clubs = vec!["FC Barcelona".to_string(), "Juventus".to_string()];
//! let cancel = Cancellation::with_timeout(Duration::from_secs(30));
//! let favourite = select_single(&cancel, "Which football club is your favorite?", clubs)?;
//! # Ok::<(), rust_prompt_core::error::Error>(())
//! ```

pub mod cancel;
pub mod config;
pub mod confirm;
pub mod console;
pub mod error;
pub mod line_reader;
pub mod matcher;
pub mod parser;
pub mod prefill;
pub mod prompt;
pub mod select;

pub use cancel::Cancellation;
pub use config::Defaults;
pub use console::Console;
pub use error::{Error, Result};

/// Reads one line from stdin after printing `message`.
///
/// # Errors
///
/// Returns cancellation and I/O errors.
pub fn read_line(cancel: &Cancellation, message: &str) -> Result<String> {
    Console::stdio().read_line(&Defaults::default().prompt(message), cancel)
}

/// Asks a `[Y/n]` question on stdin.
///
/// # Errors
///
/// Returns cancellation and I/O errors.
pub fn confirm(cancel: &Cancellation, message: &str) -> Result<bool> {
    Console::stdio().confirm(&Defaults::default().question(message), cancel)
}

/// Runs a single choice menu on stdin, returning the picked index.
///
/// # Errors
///
/// Returns cancellation and I/O errors, or [`Error::NoOptions`].
pub fn select_single(cancel: &Cancellation, message: &str, options: Vec<String>) -> Result<usize> {
    Console::stdio().select_single(&Defaults::default().select(message, options), cancel)
}

/// Runs a multiple choice menu on stdin, returning the picked indices.
///
/// # Errors
///
/// Returns cancellation and I/O errors, or [`Error::NoOptions`].
pub fn select_multiple(
    cancel: &Cancellation,
    message: &str,
    options: Vec<String>,
) -> Result<Vec<usize>> {
    Console::stdio().select_multiple(&Defaults::default().select(message, options), cancel)
}
