use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Prompt was cancelled.")]
    Cancelled,

    #[error("Prompt deadline exceeded.")]
    DeadlineExceeded,

    #[error("Input closed before a line was read.")]
    EndOfInput,

    #[error("Error reading input: {}", .0)]
    Read(std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("A selection needs at least one option.")]
    NoOptions,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),
}

impl Error {
    /// True for the errors raised when a cancellation token fires.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
