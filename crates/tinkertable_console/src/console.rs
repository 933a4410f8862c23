//! The console facade: one submitted line in, one result out.

use tinkertable_command::{CommandResult, execute};
use tinkertable_foundation::Severity;
use tinkertable_registry::FieldRegistry;
use tracing::info;

use crate::config::ConsoleConfig;
use crate::history::CommandHistory;

/// Callback receiving each command outcome as a `(Severity, text)` pair.
pub type ResultSink = Box<dyn FnMut(Severity, &str)>;

/// The developer console: registry, history, and dispatch glued together.
///
/// The console knows nothing about rendering. Each [`submit`](Self::submit)
/// produces a [`CommandResult`] and forwards it to the optional result
/// sink; the presentation layer (in-game panel, terminal prompt) decides
/// how to show it.
pub struct Console {
    registry: FieldRegistry,
    history: CommandHistory,
    config: ConsoleConfig,
    sink: Option<ResultSink>,
}

impl Console {
    /// Creates a console over the given registry with default
    /// configuration.
    #[must_use]
    pub fn new(registry: FieldRegistry) -> Self {
        Self::with_config(registry, ConsoleConfig::default())
    }

    /// Creates a console with an explicit configuration.
    #[must_use]
    pub fn with_config(registry: FieldRegistry, config: ConsoleConfig) -> Self {
        Self {
            registry,
            history: CommandHistory::new(),
            config,
            sink: None,
        }
    }

    /// Installs the result sink receiving every command outcome.
    pub fn set_result_sink(&mut self, sink: impl FnMut(Severity, &str) + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Executes one raw input line.
    ///
    /// Empty input is a no-op and returns `None`. Everything else yields
    /// exactly one result; the raw line (including malformed ones) is
    /// recorded into history first, then the outcome is sent to the sink.
    pub fn submit(&mut self, line: &str) -> Option<CommandResult> {
        if line.is_empty() {
            return None;
        }

        let result = execute(&mut self.registry, line);

        if self.config.record_history {
            self.history.record(line);
        }
        if let Some(sink) = &mut self.sink {
            sink(result.severity(), &result.message);
        }

        Some(result)
    }

    /// Recalls the previous history entry (up-arrow).
    pub fn recall_previous(&mut self) -> Option<&str> {
        self.history.recall_previous()
    }

    /// Recalls the next history entry (down-arrow).
    pub fn recall_next(&mut self) -> Option<&str> {
        self.history.recall_next()
    }

    /// Clears the command history.
    pub fn clear_history(&mut self) {
        if !self.history.is_empty() {
            self.history.clear();
            info!("cleared command history");
        }
    }

    /// The command history.
    #[must_use]
    pub const fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// The underlying field registry, e.g. to add providers or invalidate
    /// on scene transitions.
    pub fn registry_mut(&mut self) -> &mut FieldRegistry {
        &mut self.registry
    }

    /// The console configuration.
    #[must_use]
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }
}
