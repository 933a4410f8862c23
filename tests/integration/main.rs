//! Full-stack integration tests
//!
//! Tests exercising the whole stack: registry, dispatch, console facade,
//! and the prompt loop over a scripted editor.

mod prompt_loop;
mod transcript;
