#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use serde_json::json;
use storefront_router::api::handlers::{health_handler, storefront_handler};
use storefront_router::domain::directory::{DirectoryError, TenantDirectory};
use storefront_router::domain::tenant::TenantRecord;
use storefront_router::state::AppState;

pub const BASE_DOMAIN: &str = "igrowbig.com";

/// Directory stub with canned per-hostname results.
///
/// Unknown hostnames resolve to [`DirectoryError::NotConfigured`]; every
/// lookup is counted so tests can assert on caching behavior.
pub struct StaticDirectory {
    entries: HashMap<String, Result<TenantRecord, DirectoryError>>,
    calls: AtomicUsize,
    healthy: bool,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            calls: AtomicUsize::new(0),
            healthy: true,
        }
    }

    pub fn with_tenant(mut self, hostname: &str, template_id: i64, store_name: &str) -> Self {
        let record: TenantRecord = serde_json::from_value(json!({
            "id": format!("t-{hostname}"),
            "template_id": template_id,
            "store_name": store_name,
        }))
        .unwrap();
        self.entries.insert(hostname.to_string(), Ok(record));
        self
    }

    pub fn with_error(mut self, hostname: &str, error: DirectoryError) -> Self {
        self.entries.insert(hostname.to_string(), Err(error));
        self
    }

    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TenantDirectory for StaticDirectory {
    async fn fetch_by_domain(&self, hostname: &str) -> Result<TenantRecord, DirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.entries.get(hostname) {
            Some(result) => result.clone(),
            None => Err(DirectoryError::NotConfigured),
        }
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

pub fn make_server(directory: Arc<StaticDirectory>) -> TestServer {
    let state = AppState::new(directory, BASE_DOMAIN);
    let app = Router::new()
        .route("/health", get(health_handler))
        .fallback(get(storefront_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}
