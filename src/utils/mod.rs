//! Shared utility functions.

pub mod host;
