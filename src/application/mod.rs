//! Application layer containing resolution services.

pub mod services;
