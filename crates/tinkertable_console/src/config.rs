//! Configuration for the console facade and prompt.

/// Configuration for a [`Console`](crate::Console) and its prompt loop.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    /// Whether submitted lines are recorded into history.
    pub record_history: bool,

    /// Primary prompt shown by the interactive front end.
    pub prompt: String,

    /// Whether the interactive front end prints a welcome banner.
    pub show_banner: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            prompt: "/> ".to_string(),
            show_banner: true,
        }
    }
}

impl ConsoleConfig {
    /// Builder method to enable/disable history recording.
    #[must_use]
    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Builder method to set the prompt string.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to toggle the welcome banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }
}
