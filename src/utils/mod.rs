//! Utility functions and helpers for the InstantSeek gateway.
//!
//! # Submodules
//!
//! - `logging`: Tracing and logging initialization.

pub mod logging;
