//! Resolution state machine types.
//!
//! A request's resolution starts at [`ResolutionState::Resolving`] and
//! transitions exactly once to a terminal state. States are constructed
//! fresh per request and never mutated in place; a new request starts its
//! own machine.

use crate::domain::page::PageType;
use crate::domain::tenant::{TenantRecord, TemplateId};
use std::sync::Arc;

/// Why a storefront request could not be served with a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The hostname resolves to no configured tenant.
    Tenant,
    /// The tenant is fine, but its template maps no component for the
    /// classified page type (or the path is outside the page surface).
    Page,
}

/// Why resolution failed outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The tenant-lookup call failed on the network level. Rendered with a
    /// retry affordance; never retried automatically.
    Network,
    /// The backend returned a template id outside the statically known
    /// set. Deliberately an error rather than a fallback template.
    InvalidTemplate,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::InvalidTemplate => "invalid-template",
        }
    }
}

/// The final, renderable selection for one request.
#[derive(Debug, Clone)]
pub struct RouteResolution {
    pub tenant: Arc<TenantRecord>,
    pub template: TemplateId,
    pub page_type: PageType,
}

/// Lifecycle of one request's resolution.
#[derive(Debug, Clone)]
pub enum ResolutionState {
    /// Initial state while classification and tenant lookup are pending.
    /// Never a terminal output; the renderer treats it as a defect.
    Resolving,
    /// The hostname is the marketing domain; the static landing page is
    /// served and no tenant lookup happens.
    MainLanding,
    /// Tenant, template, and page all resolved.
    TemplateReady(RouteResolution),
    NotFound(NotFoundReason),
    Failed(FailureReason),
}

impl ResolutionState {
    /// Outcome tag used in logs and metrics labels.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Resolving => "resolving",
            Self::MainLanding => "main-landing",
            Self::TemplateReady(_) => "template-ready",
            Self::NotFound(NotFoundReason::Tenant) => "not-found-tenant",
            Self::NotFound(NotFoundReason::Page) => "not-found-page",
            Self::Failed(FailureReason::Network) => "failed-network",
            Self::Failed(FailureReason::InvalidTemplate) => "failed-invalid-template",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_tags() {
        assert_eq!(ResolutionState::MainLanding.outcome(), "main-landing");
        assert_eq!(
            ResolutionState::NotFound(NotFoundReason::Tenant).outcome(),
            "not-found-tenant"
        );
        assert_eq!(
            ResolutionState::Failed(FailureReason::InvalidTemplate).outcome(),
            "failed-invalid-template"
        );
    }

    #[test]
    fn test_template_ready_carries_selection() {
        let tenant: TenantRecord = serde_json::from_value(json!({
            "id": "t-acme",
            "template_id": 2
        }))
        .unwrap();

        let state = ResolutionState::TemplateReady(RouteResolution {
            tenant: Arc::new(tenant),
            template: TemplateId::Boutique,
            page_type: PageType::Blog,
        });

        match state {
            ResolutionState::TemplateReady(res) => {
                assert_eq!(res.template, TemplateId::Boutique);
                assert_eq!(res.page_type, PageType::Blog);
                assert_eq!(res.tenant.id, "t-acme");
            }
            _ => panic!("expected TemplateReady"),
        }
    }
}
