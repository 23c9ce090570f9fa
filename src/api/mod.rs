//! HTTP layer: handlers, DTOs, and middleware.
//!
//! The storefront surface is HTML; JSON is used only for the health
//! endpoint and error bodies.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request observability middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
