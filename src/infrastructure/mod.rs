//! Infrastructure layer: outbound adapters for external systems.

pub mod directory;
