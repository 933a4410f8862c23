//! The interactive terminal prompt.

use tinkertable_foundation::Severity;

use crate::console::Console;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Interactive read-submit-render loop over a [`Console`].
///
/// Stands in for the in-game overlay a host engine would draw: reads lines
/// through a [`LineEditor`], submits them, and renders each result
/// color-coded by severity.
pub struct Prompt<E: LineEditor = RustylineEditor> {
    editor: E,
    console: Console,
}

impl Prompt<RustylineEditor> {
    /// Creates a prompt with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(console: Console) -> tinkertable_foundation::Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(console, editor))
    }
}

impl<E: LineEditor> Prompt<E> {
    /// Creates a prompt with the given editor.
    ///
    /// Triggers field discovery so tab completion knows the registered
    /// variable names up front.
    pub fn with_editor(mut console: Console, mut editor: E) -> Self {
        editor.set_variables(console.registry_mut().names());
        Self { editor, console }
    }

    /// Returns a reference to the console.
    #[must_use]
    pub const fn console(&self) -> &Console {
        &self.console
    }

    /// Returns a mutable reference to the console.
    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    /// Runs the prompt loop until EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> tinkertable_foundation::Result<()> {
        if self.console.config().show_banner {
            print_banner();
        }

        let prompt = self.console.config().prompt.clone();
        loop {
            match self.editor.read_line(&prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    self.editor.add_history(trimmed);
                    if let Some(result) = self.console.submit(trimmed) {
                        render(result.severity(), &result.message);
                    }
                }
                ReadResult::Interrupted => {
                    println!();
                }
                ReadResult::Eof => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }
}

fn render(severity: Severity, message: &str) {
    match severity {
        Severity::Info => println!("{message}"),
        Severity::Error => eprintln!("\x1b[31m{message}\x1b[0m"),
    }
}

fn print_banner() {
    println!("\x1b[1;36mTinkertable\x1b[0m developer console v{}", env!("CARGO_PKG_VERSION"));
    println!("Commands: /set <name> <value>, /reset <name>, /get <name>, /getAll");
    println!("Use Ctrl+D to exit.\n");
}
