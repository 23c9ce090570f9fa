use std::sync::Arc;

use crate::application::services::{RouteDispatcher, TenantResolver};
use crate::domain::directory::TenantDirectory;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<RouteDispatcher>,
    pub resolver: Arc<TenantResolver>,
    pub directory: Arc<dyn TenantDirectory>,
    pub base_domain: String,
}

impl AppState {
    /// Wires the resolver and dispatcher around a tenant directory.
    pub fn new(directory: Arc<dyn TenantDirectory>, base_domain: impl Into<String>) -> Self {
        let base_domain = base_domain.into();
        let resolver = Arc::new(TenantResolver::new(directory.clone()));
        let dispatcher = Arc::new(RouteDispatcher::new(resolver.clone(), base_domain.clone()));

        Self {
            dispatcher,
            resolver,
            directory,
            base_domain,
        }
    }

    /// Absolute URL of the operator's marketing site, used for the
    /// "back to main site" links on system pages.
    pub fn main_url(&self) -> String {
        format!("https://{}", self.base_domain)
    }
}
