//! Prompt defaults and where to load them from.
//!
//! Nothing here is global: a [`Defaults`] value is loaded or built once and
//! callers derive a fresh [`Prompt`], [`Question`] or [`Select`] from it,
//! overriding fields as needed.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::confirm::{Question, QuestionMode};
use crate::error::{Error, Result};
use crate::matcher::MatchPolicy;
use crate::prompt::Prompt;
use crate::select::Select;

/// Default path for the defaults file
const DEFAULT_CONFIG_PATH: &str = "~/.rust-prompt/config.yml";

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Defaults {
    pub prompt: PromptDefaults,
    pub question: QuestionDefaults,
    pub select: SelectDefaults,
    pub theme: Theme,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PromptDefaults {
    pub verbose: bool,
    pub prompt: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct QuestionDefaults {
    pub strict: bool,
    pub mode: QuestionMode,
    pub default: bool,
}

impl Default for QuestionDefaults {
    fn default() -> Self {
        Self {
            strict: false,
            mode: QuestionMode::Suffix,
            default: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SelectDefaults {
    pub filter: bool,
    pub paging: usize,
    pub matcher: MatchPolicy,
}

impl Default for SelectDefaults {
    fn default() -> Self {
        Self {
            filter: true,
            paging: 8,
            matcher: MatchPolicy::Fuzzy,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

/// Colours for the results and errors printed by front ends.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    pub result_color: Option<ColorDefinition>,
    pub error_color: Option<ColorDefinition>,
}

impl Defaults {
    pub fn prompt(&self, message: impl Into<String>) -> Prompt {
        Prompt {
            message: message.into(),
            default: None,
            verbose: self.prompt.verbose,
            prompt: self.prompt.prompt.clone(),
        }
    }

    pub fn question(&self, message: impl Into<String>) -> Question {
        Question {
            message: message.into(),
            default: self.question.default,
            strict: self.question.strict,
            mode: self.question.mode,
        }
    }

    pub fn select(&self, message: impl Into<String>, options: Vec<String>) -> Select {
        Select {
            message: message.into(),
            options,
            filter: self.select.filter,
            paging: self.select.paging,
            matcher: self.select.matcher,
        }
    }
}

/// Resolves the defaults file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use rust_prompt_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path.as_str(),
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Loads defaults from the YAML file at `path`. A missing file gives the
/// built-in defaults.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML or unknown values
pub fn load_defaults(path: &str) -> Result<Defaults> {
    if !Path::exists(Path::new(path)) {
        debug!("No defaults file at `{path}`, using built-in defaults");
        return Ok(Defaults::default());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| Error::io_error("config".to_string(), path.to_string(), e))?;
    if contents.trim().is_empty() {
        return Ok(Defaults::default());
    }

    serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error("reading".to_string(), "config".to_string(), path.to_string(), e)
    })
}
