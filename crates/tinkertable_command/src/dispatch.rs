//! Command dispatch: [`Command`] → [`CommandResult`].

use tinkertable_foundation::{ErrorKind, Severity};
use tinkertable_registry::FieldRegistry;

use crate::grammar::{Command, parse};

/// The closed outcome taxonomy for command execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandOutcome {
    /// Command executed successfully.
    Ok,
    /// Input malformed or keyword unrecognized.
    NotValidCommand,
    /// Recognized keyword, insufficient positional arguments.
    NotEnoughArguments,
    /// Variable name not found (including: found but instance dead).
    NotValidVariable,
    /// Value present but failed type coercion for the target field.
    NotValidArgument,
    /// Set or reset attempted on a read-only field.
    NotMutable,
}

/// The structured result of executing one command line.
///
/// Every branch of the dispatcher produces exactly one of these; user-input
/// errors are folded in rather than propagated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// What happened.
    pub kind: CommandOutcome,
    /// Rendered message for the presentation layer.
    pub message: String,
}

impl CommandResult {
    fn ok(message: String) -> Self {
        Self {
            kind: CommandOutcome::Ok,
            message,
        }
    }

    fn fail(kind: CommandOutcome, message: String) -> Self {
        Self { kind, message }
    }

    /// True if the command succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.kind == CommandOutcome::Ok
    }

    /// Severity for the result channel: `Info` on success, `Error`
    /// otherwise.
    #[must_use]
    pub fn severity(&self) -> Severity {
        if self.is_ok() {
            Severity::Info
        } else {
            Severity::Error
        }
    }
}

/// Parses and dispatches a raw command line.
///
/// This is the single entry point the console facade uses: any line in,
/// exactly one [`CommandResult`] out.
pub fn execute(registry: &mut FieldRegistry, line: &str) -> CommandResult {
    match parse(line) {
        Ok(command) => dispatch(registry, &command),
        Err(err) => match err.kind {
            ErrorKind::NotACommand => CommandResult::fail(
                CommandOutcome::NotValidCommand,
                "Valid command should start with '/'!".to_string(),
            ),
            ErrorKind::UnknownCommand(keyword) => CommandResult::fail(
                CommandOutcome::NotValidCommand,
                format!("Invalid command: '{keyword}'!"),
            ),
            ErrorKind::MissingArguments { command, .. } => CommandResult::fail(
                CommandOutcome::NotEnoughArguments,
                format!("Command '{command}' has not enough arguments!"),
            ),
            // parse emits no other kinds
            other => CommandResult::fail(CommandOutcome::NotValidCommand, format!("{other}")),
        },
    }
}

/// Dispatches a parsed command against the registry.
pub fn dispatch(registry: &mut FieldRegistry, command: &Command) -> CommandResult {
    match command {
        Command::Set { name, value } => {
            let Some(binding) = registry.resolve(name) else {
                return not_valid_variable(name);
            };
            let kind = binding.kind();
            match binding.write(value) {
                Ok(written) => {
                    CommandResult::ok(format!("{kind} {name} set to [{written}]"))
                }
                Err(err) => write_failure(&err.kind, name, value, command.keyword()),
            }
        }
        Command::Reset { name } => {
            let Some(binding) = registry.resolve(name) else {
                return not_valid_variable(name);
            };
            let kind = binding.kind();
            match binding.reset() {
                Ok(initial) => {
                    CommandResult::ok(format!("{kind} {name} set to [{initial}]"))
                }
                Err(err) => write_failure(&err.kind, name, "", command.keyword()),
            }
        }
        Command::Get { name } => {
            let Some(binding) = registry.resolve(name) else {
                return not_valid_variable(name);
            };
            let kind = binding.kind();
            match binding.read() {
                Ok(value) => CommandResult::ok(format!("{kind} {name} is [{value}]")),
                Err(_) => not_valid_variable(name),
            }
        }
        Command::GetAll => CommandResult::ok(registry.names().join(", ")),
    }
}

fn not_valid_variable(name: &str) -> CommandResult {
    CommandResult::fail(
        CommandOutcome::NotValidVariable,
        format!("Variable '{name}' not found!"),
    )
}

fn write_failure(kind: &ErrorKind, name: &str, value: &str, keyword: &str) -> CommandResult {
    match kind {
        ErrorKind::NotMutable(_) => CommandResult::fail(
            CommandOutcome::NotMutable,
            format!("Variable '{name}' is read-only!"),
        ),
        ErrorKind::InvalidValue { .. } => CommandResult::fail(
            CommandOutcome::NotValidArgument,
            format!("Invalid argument {value} for command: '{keyword}'!"),
        ),
        _ => not_valid_variable(name),
    }
}
