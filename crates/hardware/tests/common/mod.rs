//! Shared helpers for the test suite.

/// Tracing setup, scripted platform, and build-directory helpers.
pub mod harness;
