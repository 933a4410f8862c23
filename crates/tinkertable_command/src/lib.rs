//! Slash-command grammar and dispatcher for Tinkertable.
//!
//! The grammar is a closed sum type: every recognized command line maps to
//! one [`Command`] variant, and [`dispatch`] handles each variant with an
//! exhaustive match, so adding a command form without handling it is a
//! compile error.
//!
//! ```text
//! "/set hp 42"
//!      │
//!      ▼
//! ┌──────────────┐
//! │ parse        │  → Command::Set { name: "hp", value: "42" }
//! └──────────────┘
//!      │
//!      ▼
//! ┌──────────────┐
//! │ dispatch     │  → registry resolve → binding write
//! └──────────────┘
//!      │
//!      ▼
//! CommandResult { kind: Ok, message: "Integer hp set to [42]" }
//! ```
//!
//! User-input failures never escape as errors; every line in, one
//! [`CommandResult`] out.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dispatch;
pub mod grammar;

pub use dispatch::{CommandOutcome, CommandResult, dispatch, execute};
pub use grammar::{Command, SIGIL, parse};
