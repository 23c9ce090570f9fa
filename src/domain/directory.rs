//! Tenant-lookup trait implemented by the infrastructure layer.

use crate::domain::tenant::TenantRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Failure reasons for a tenant lookup.
///
/// The two variants drive different user-visible outcomes: a hostname with
/// no configured tenant renders "Store Not Found", while a connectivity
/// failure renders an error page with an explicit retry affordance.
///
/// `Clone` because in-flight lookups are shared between concurrent callers
/// and each caller receives the same settled result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The hostname has no matching tenant, or the tenant record lacks a
    /// usable template id.
    #[error("no tenant is configured for this domain")]
    NotConfigured,

    /// Transient or permanent connectivity failure talking to the
    /// tenant-lookup API.
    #[error("tenant lookup failed: {0}")]
    Network(String),
}

/// Lookup interface for resolving a hostname to its tenant record.
///
/// # Implementations
///
/// - [`crate::infrastructure::directory::HttpTenantDirectory`] - calls the
///   platform tenant-lookup API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    /// Fetches the tenant record owning `hostname`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotConfigured`] if no tenant owns the
    /// hostname or the record carries no template id.
    /// Returns [`DirectoryError::Network`] on connectivity failures and
    /// unexpected upstream responses.
    async fn fetch_by_domain(&self, hostname: &str) -> Result<TenantRecord, DirectoryError>;

    /// Checks whether the lookup backend is reachable.
    ///
    /// Used by the health endpoint to report upstream status.
    async fn health_check(&self) -> bool;
}
