//! Tenant-directory implementations.

pub mod http;

pub use http::HttpTenantDirectory;
