//! HTTP request handlers.

pub mod health;
pub mod storefront;

pub use health::health_handler;
pub use storefront::storefront_handler;
