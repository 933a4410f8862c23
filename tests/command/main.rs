//! Integration tests for Layer 2: Command
//!
//! Tests for the grammar and the registry-backed dispatcher.
