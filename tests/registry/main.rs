//! Integration tests for Layer 1: Registry
//!
//! Tests for field discovery, binding resolution, and liveness handling.
