//! Route dispatch: hostname + path → terminal resolution state.
//!
//! State machine per request:
//!
//! 1. `Resolving` — classify the hostname (synchronous, always first).
//! 2. Main domain → `MainLanding`; the resolver is never invoked.
//! 3. Otherwise resolve the tenant, then classify the path and check the
//!    template registry:
//!    - valid template + mapped page → `TemplateReady`
//!    - valid template, unmapped or unclassifiable page → `NotFound(Page)`
//!    - template id outside the registry → `Failed(InvalidTemplate)`
//!    - no tenant for the hostname → `NotFound(Tenant)`
//!    - lookup network failure → `Failed(Network)`
//!
//! Every transition to a terminal state is logged and counted; lookup
//! errors never escape as panics or unhandled rejections.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, warn};

use crate::application::services::resolver::TenantResolver;
use crate::domain::directory::DirectoryError;
use crate::domain::host::{DomainInfo, classify_host};
use crate::domain::page::classify_path;
use crate::domain::resolution::{
    FailureReason, NotFoundReason, ResolutionState, RouteResolution,
};
use crate::domain::tenant::TemplateId;
use crate::web::registry;

/// Orchestrates domain classification, tenant resolution, page
/// classification, and registry lookup for one request at a time.
pub struct RouteDispatcher {
    resolver: Arc<TenantResolver>,
    base_domain: String,
}

impl RouteDispatcher {
    pub fn new(resolver: Arc<TenantResolver>, base_domain: impl Into<String>) -> Self {
        Self {
            resolver,
            base_domain: base_domain.into(),
        }
    }

    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    /// Runs the resolution state machine for one request.
    ///
    /// Always returns a terminal state; every failure mode is converted
    /// into a renderable outcome.
    pub async fn dispatch(&self, hostname: &str, path: &str) -> ResolutionState {
        let info = classify_host(hostname, &self.base_domain);
        debug!(hostname = %info.hostname, class = ?info.class, "classified request host");

        let state = if info.is_main() {
            ResolutionState::MainLanding
        } else {
            self.dispatch_tenant(&info, path).await
        };

        counter!("storefront_resolutions_total", "outcome" => state.outcome()).increment(1);
        tracing::info!(
            hostname = %info.hostname,
            path,
            outcome = state.outcome(),
            "route resolved"
        );

        state
    }

    async fn dispatch_tenant(&self, info: &DomainInfo, path: &str) -> ResolutionState {
        let tenant = match self.resolver.resolve(&info.hostname).await {
            Ok(tenant) => tenant,
            Err(DirectoryError::NotConfigured) => {
                return ResolutionState::NotFound(NotFoundReason::Tenant);
            }
            Err(DirectoryError::Network(reason)) => {
                warn!(hostname = %info.hostname, %reason, "tenant lookup failed");
                return ResolutionState::Failed(FailureReason::Network);
            }
        };

        let Some(template) = TemplateId::from_raw(tenant.template_id) else {
            warn!(
                hostname = %info.hostname,
                tenant_id = %tenant.id,
                template_id = tenant.template_id,
                "tenant references an unsupported template"
            );
            return ResolutionState::Failed(FailureReason::InvalidTemplate);
        };

        // from_raw and the registry share the template set, but the
        // registry stays the source of truth for what is renderable.
        if registry::layout_for(template.as_raw()).is_none() {
            return ResolutionState::Failed(FailureReason::InvalidTemplate);
        }

        let Some(page_type) = classify_path(path) else {
            debug!(path, "path outside the storefront page surface");
            return ResolutionState::NotFound(NotFoundReason::Page);
        };

        if registry::page_for(template.as_raw(), page_type).is_none() {
            debug!(
                template = %template,
                page_type = %page_type,
                "page type not mapped for template"
            );
            return ResolutionState::NotFound(NotFoundReason::Page);
        }

        ResolutionState::TemplateReady(RouteResolution {
            tenant,
            template,
            page_type,
        })
    }
}
