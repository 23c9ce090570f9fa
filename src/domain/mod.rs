//! Domain layer containing the resolution model and classification logic.
//!
//! # Architecture
//!
//! - [`host`] - Hostname classification (main / subdomain / custom domain)
//! - [`page`] - Path classification into canonical page types
//! - [`tenant`] - Tenant record and template identity
//! - [`resolution`] - Resolution state machine types
//! - [`directory`] - Tenant-lookup trait implemented by infrastructure
//!
//! # Design Principles
//!
//! - Classification is pure: no network access, no side effects, safe to
//!   call on every request
//! - The domain layer has no dependencies on infrastructure or
//!   presentation layers
//! - The directory trait defines the contract implemented by the
//!   infrastructure layer and mocked in tests

pub mod directory;
pub mod host;
pub mod page;
pub mod resolution;
pub mod tenant;
