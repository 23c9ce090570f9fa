//! Presentation layer: template registry and askama page rendering.

pub mod pages;
pub mod registry;
