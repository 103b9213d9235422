/// A free text question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt {
    pub message: String,
    /// Pre-filled into the input line when the console supports it.
    pub default: Option<String>,
    /// Print `message` on its own line followed by `prompt`, instead of
    /// `message` alone as the inline prompt.
    pub verbose: bool,
    pub prompt: String,
}

impl Prompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Text written before reading the answer.
    #[must_use]
    pub fn render(&self) -> String {
        if self.verbose {
            format!("{}\n{}", self.message, self.prompt)
        } else {
            self.message.clone()
        }
    }
}
