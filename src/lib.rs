//! # Storefront Router
//!
//! Multi-tenant storefront routing service built with Axum.
//!
//! One deployment serves every store on the platform. Each incoming
//! request is resolved by hostname: the marketing domain gets the landing
//! page, tenant subdomains and custom domains get their store rendered
//! with the template the tenant chose.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Host classification, page
//!   classification, tenant/template types, resolution state machine
//! - **Application Layer** ([`application`]) - Tenant resolution with
//!   session caching and the route dispatcher
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client for the
//!   platform tenant-lookup API
//! - **API Layer** ([`api`]) - HTTP handlers and middleware
//! - **Web Layer** ([`web`]) - Template registry and Askama templates
//!
//! ## Features
//!
//! - Hostname classification: main domain, tenant subdomains, custom domains
//! - Session-cached tenant lookups with single-flight de-duplication
//! - Static template registry mapping (template, page type) to renderers
//! - Unknown template ids surface as errors, never a fallback template
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export TENANT_API_URL="https://api.igrowbig.com"
//! export BASE_DOMAIN="igrowbig.com"  # Optional
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RouteDispatcher, TenantResolver};
    pub use crate::domain::host::{DomainClass, DomainInfo, classify_host};
    pub use crate::domain::page::{PageType, classify_path};
    pub use crate::domain::resolution::{ResolutionState, RouteResolution};
    pub use crate::domain::tenant::{TemplateId, TenantRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
