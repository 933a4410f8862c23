//! Tinkertable - Embeddable developer console
//!
//! This crate re-exports all layers of the Tinkertable system for
//! convenient access. For detailed documentation, see the individual
//! layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: tinkertable_console    — Console facade, history, prompt, CLI
//! Layer 2: tinkertable_command    — Slash-command grammar and dispatch
//! Layer 1: tinkertable_registry   — Field registry and live bindings
//! Layer 0: tinkertable_foundation — Core types (Value, Severity, Error)
//! ```

pub use tinkertable_command as command;
pub use tinkertable_console as console;
pub use tinkertable_foundation as foundation;
pub use tinkertable_registry as registry;
