//! Command grammar: raw line → [`Command`].

use tinkertable_foundation::{Error, Result};

/// The command sigil marking a line as a command rather than plain text.
pub const SIGIL: char = '/';

/// A recognized console command.
///
/// The grammar is deliberately flat: a keyword plus positional string
/// arguments, no quoting, no expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `/set <name> <value>` — coerce and write a value.
    Set {
        /// Target variable name.
        name: String,
        /// Raw value, coerced by the binding's kind at dispatch time.
        value: String,
    },
    /// `/reset <name>` — restore the value captured at first discovery.
    Reset {
        /// Target variable name.
        name: String,
    },
    /// `/get <name>` — read the current value.
    Get {
        /// Target variable name.
        name: String,
    },
    /// `/getAll` — list every registered variable name.
    GetAll,
}

impl Command {
    /// The keyword for this command, including the sigil.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Set { .. } => "/set",
            Self::Reset { .. } => "/reset",
            Self::Get { .. } => "/get",
            Self::GetAll => "/getAll",
        }
    }
}

/// Parses a raw input line into a [`Command`].
///
/// Tokenization splits on single spaces with no quoting; the first token
/// (including the sigil) is the keyword and the rest are positional
/// arguments. Keywords are case-sensitive. Arguments beyond a command's
/// arity are ignored.
///
/// # Errors
///
/// - `NotACommand` if the line does not start with `/`.
/// - `UnknownCommand` for an unrecognized keyword.
/// - `MissingArguments` for a recognized keyword with too few arguments.
pub fn parse(line: &str) -> Result<Command> {
    if !line.starts_with(SIGIL) {
        return Err(Error::not_a_command());
    }

    let mut tokens = line.split(' ');
    let keyword = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();

    match keyword {
        "/set" => {
            if args.len() < 2 {
                return Err(Error::missing_arguments(keyword, 2, args.len()));
            }
            Ok(Command::Set {
                name: args[0].to_string(),
                value: args[1].to_string(),
            })
        }
        "/reset" => {
            if args.is_empty() {
                return Err(Error::missing_arguments(keyword, 1, 0));
            }
            Ok(Command::Reset {
                name: args[0].to_string(),
            })
        }
        "/get" => {
            if args.is_empty() {
                return Err(Error::missing_arguments(keyword, 1, 0));
            }
            Ok(Command::Get {
                name: args[0].to_string(),
            })
        }
        "/getAll" => Ok(Command::GetAll),
        other => Err(Error::unknown_command(other)),
    }
}
