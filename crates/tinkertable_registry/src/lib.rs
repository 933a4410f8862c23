//! Field registry and live variable bindings for Tinkertable.
//!
//! Hosts expose variables to the console by implementing [`FieldProvider`]
//! and handing the provider to a [`FieldRegistry`]. Each provided
//! [`FieldSpec`] carries read/write closures over a weak handle to the
//! owning object, so the registry never owns instance lifetime: once the
//! host drops its [`VarCell`], the binding reports "gone" and the console
//! treats the name as not found.
//!
//! Discovery is lazy and cached. The first lookup walks every provider and
//! snapshots each field's initial value (used by `/reset`); subsequent
//! lookups hit the cache until [`FieldRegistry::invalidate`] is called,
//! which the host should do on scene or level transitions.
//!
//! The registry is single-threaded by design (`Rc`-backed handles make it
//! `!Send`); wrap it in a mutex-guarded abstraction if a multi-threaded
//! host ever needs one.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binding;
pub mod cell;
pub mod registry;

pub use binding::{FieldBinding, FieldSpec};
pub use cell::VarCell;
pub use registry::{FieldProvider, FieldRegistry};
