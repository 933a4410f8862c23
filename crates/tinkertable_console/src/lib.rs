//! Console facade, command history, and interactive prompt for Tinkertable.
//!
//! [`Console`] ties the pieces together: it owns the field registry and the
//! command history, and [`Console::submit`] turns one raw input line into
//! one command result, recording the line and forwarding the
//! `(Severity, message)` pair to an optional result sink.
//!
//! The crate also ships a terminal front end ([`Prompt`] over a swappable
//! [`LineEditor`]) and a small CLI binary, standing in for the in-game
//! overlay a host engine would provide.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod console;
pub mod editor;
pub mod history;
pub mod prompt;

pub use config::ConsoleConfig;
pub use console::Console;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use history::CommandHistory;
pub use prompt::Prompt;
