//! HTTP implementation of the tenant directory.
//!
//! Talks to the platform tenant-lookup API:
//!
//! ```text
//! GET {TENANT_API_URL}/site/by-domain?domain={hostname}
//! → 200 { "tenant": { "id": "...", "template_id": 2, ... } }
//! → 404 when no tenant owns the hostname
//! ```
//!
//! Status mapping:
//! - 404, or a 200 whose payload has no usable `template_id`, becomes
//!   [`DirectoryError::NotConfigured`]
//! - transport failures and any other status become
//!   [`DirectoryError::Network`]

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::directory::{DirectoryError, TenantDirectory};
use crate::domain::tenant::TenantRecord;

/// Tenant directory backed by the platform lookup API.
pub struct HttpTenantDirectory {
    client: Client,
    base_url: String,
}

impl HttpTenantDirectory {
    /// Builds a directory with a pooled HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, connect_timeout_secs: u64) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(format!("storefront-router/{}", env!("CARGO_PKG_VERSION")))
            .use_rustls_tls()
            .build()
            .context("failed to build tenant-lookup HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.tenant_api_url,
            config.tenant_lookup_timeout,
            config.tenant_connect_timeout,
        )
    }

    fn lookup_url(&self) -> String {
        format!("{}/site/by-domain", self.base_url)
    }
}

#[async_trait]
impl TenantDirectory for HttpTenantDirectory {
    async fn fetch_by_domain(&self, hostname: &str) -> Result<TenantRecord, DirectoryError> {
        let response = self
            .client
            .get(self.lookup_url())
            .query(&[("domain", hostname)])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(hostname, "no tenant configured");
            return Err(DirectoryError::NotConfigured);
        }

        if !status.is_success() {
            let detail = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_default();
            warn!(hostname, %status, detail, "unexpected tenant-lookup status");
            return Err(DirectoryError::Network(format!(
                "tenant-lookup API returned {status}"
            )));
        }

        let body: Value = response.json().await.map_err(transport_error)?;
        parse_tenant(hostname, body)
    }

    async fn health_check(&self) -> bool {
        // Any HTTP response means the API host is reachable.
        match self.client.head(&self.base_url).send().await {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "tenant-lookup API unreachable");
                false
            }
        }
    }
}

fn transport_error(e: reqwest::Error) -> DirectoryError {
    let kind = if e.is_timeout() {
        "timeout"
    } else if e.is_connect() {
        "connect"
    } else if e.is_decode() {
        "decode"
    } else {
        "transport"
    };
    DirectoryError::Network(format!("{kind}: {e}"))
}

fn parse_tenant(hostname: &str, body: Value) -> Result<TenantRecord, DirectoryError> {
    let Some(tenant) = body.get("tenant").filter(|v| !v.is_null()) else {
        debug!(hostname, "lookup succeeded but returned no tenant");
        return Err(DirectoryError::NotConfigured);
    };

    // A record without a template id cannot be rendered; treat it the same
    // as an unconfigured domain rather than a server fault.
    if tenant.get("template_id").and_then(Value::as_i64).is_none() {
        warn!(hostname, "tenant record has no usable template_id");
        return Err(DirectoryError::NotConfigured);
    }

    serde_json::from_value(tenant.clone()).map_err(|e| {
        DirectoryError::Network(format!("malformed tenant payload: {e}"))
    })
}
