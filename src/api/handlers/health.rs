//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The tenant-lookup API is unreachable
///
/// # Components Checked
///
/// 1. **Tenant API**: Reachability of the platform lookup API
/// 2. **Resolver cache**: Number of session-cached hostnames (informational)
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let tenant_api = check_tenant_api(&state).await;
    let resolver_cache = CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "{} hosts cached",
            state.resolver.cached_hosts().await
        )),
    };

    let all_healthy = tenant_api.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        checks: HealthChecks {
            tenant_api,
            resolver_cache,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_tenant_api(state: &AppState) -> CheckStatus {
    if state.directory.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Tenant API reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Tenant API unreachable".to_string()),
        }
    }
}
