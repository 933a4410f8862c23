//! Integration tests for Layer 3: Console
//!
//! Tests for the console facade and history recall through the public API.

mod facade;
