//! Catch-all handler serving the storefront surface.
//!
//! Every non-`/health`, non-`/static` request lands here. The handler
//! extracts the hostname, runs the dispatcher's resolution state machine,
//! and maps the terminal state to an HTTP response:
//!
//! | State                      | Response                                  |
//! |----------------------------|-------------------------------------------|
//! | `MainLanding`              | 200, marketing landing page               |
//! | `TemplateReady`            | 200, layout-wrapped page body             |
//! | `NotFound(Tenant)`         | 404, "Store Not Found"                    |
//! | `NotFound(Page)`           | 404, "Page unavailable" for the store     |
//! | `Failed(Network)`          | 502, error page with a retry link         |
//! | `Failed(InvalidTemplate)`  | 500, error page without a retry link      |

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

use crate::domain::resolution::{
    FailureReason, NotFoundReason, ResolutionState, RouteResolution,
};
use crate::error::{AppError, map_render_error};
use crate::state::AppState;
use crate::utils::host::extract_hostname;
use crate::web::pages::{
    ErrorTemplate, LandingTemplate, LayoutContext, PageContext, PageNotFoundTemplate,
    StoreNotFoundTemplate,
};
use crate::web::registry;

/// Resolves and renders one storefront request.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for a missing or malformed `Host`
/// header and [`AppError::Internal`] for registry or template defects.
/// Expected storefront outcomes (store/page not found, upstream failure)
/// are HTML responses, not errors.
pub async fn storefront_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let hostname = extract_hostname(&headers)?;
    let path = uri.path().to_string();

    let resolution = state.dispatcher.dispatch(&hostname, &path).await;
    let main_url = state.main_url();

    match resolution {
        ResolutionState::MainLanding => Ok(LandingTemplate {
            base_domain: state.base_domain.clone(),
        }
        .into_response()),

        ResolutionState::TemplateReady(res) => {
            let html = render_storefront_page(&res, &hostname, &path, &main_url)?;
            Ok(Html(html).into_response())
        }

        ResolutionState::NotFound(NotFoundReason::Tenant) => Ok((
            StatusCode::NOT_FOUND,
            StoreNotFoundTemplate { hostname, main_url },
        )
            .into_response()),

        ResolutionState::NotFound(NotFoundReason::Page) => {
            // The tenant resolved (and is session-cached); fetch it again
            // only to put the store's name on the 404 page.
            let store_name = match state.resolver.resolve(&hostname).await {
                Ok(tenant) => tenant.store_name().to_string(),
                Err(_) => hostname.clone(),
            };
            Ok((
                StatusCode::NOT_FOUND,
                PageNotFoundTemplate {
                    store_name,
                    main_url,
                },
            )
                .into_response())
        }

        ResolutionState::Failed(FailureReason::Network) => Ok((
            StatusCode::BAD_GATEWAY,
            ErrorTemplate {
                message: "We could not load this store right now.".to_string(),
                main_url,
                retry_url: Some(path),
            },
        )
            .into_response()),

        ResolutionState::Failed(FailureReason::InvalidTemplate) => Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorTemplate {
                message: "This store is misconfigured.".to_string(),
                main_url,
                retry_url: None,
            },
        )
            .into_response()),

        // The dispatcher always returns a terminal state; reaching this
        // arm is a defect, reported rather than rendered.
        ResolutionState::Resolving => Err(AppError::internal(
            "Resolution did not reach a terminal state",
            json!({ "hostname": hostname, "path": path }),
        )),
    }
}

/// Renders the page body for the resolved (template, page type) pair and
/// wraps it in the template's layout shell.
fn render_storefront_page(
    res: &RouteResolution,
    hostname: &str,
    path: &str,
    main_url: &str,
) -> Result<String, AppError> {
    let raw_id = res.template.as_raw();

    // The dispatcher already checked both lookups; a miss here means the
    // registry changed underneath us.
    let layout = registry::layout_for(raw_id).ok_or_else(|| {
        AppError::internal(
            "Template missing from registry",
            json!({ "template_id": raw_id }),
        )
    })?;
    let page = registry::page_for(raw_id, res.page_type).ok_or_else(|| {
        AppError::internal(
            "Page missing from registry",
            json!({ "template_id": raw_id, "page_type": res.page_type.as_str() }),
        )
    })?;

    let page_ctx = PageContext {
        store_name: res.tenant.store_name().to_string(),
        path: path.to_string(),
    };
    let body = (page.render_body)(&page_ctx).map_err(|e| map_render_error(page.name, e))?;

    let layout_ctx = LayoutContext {
        store_name: res.tenant.store_name().to_string(),
        hostname: hostname.to_string(),
        main_url: main_url.to_string(),
        page_title: format!("{} - {}", page_title(res.page_type), res.tenant.store_name()),
        body,
    };
    (layout.render)(&layout_ctx).map_err(|e| map_render_error(layout.name, e))
}

fn page_title(page_type: crate::domain::page::PageType) -> &'static str {
    use crate::domain::page::PageType::*;
    match page_type {
        Products | CategoryProducts => "Products",
        ProductDetail => "Product",
        Opportunity => "Opportunity",
        OpportunityOverview => "Opportunity Overview",
        JoinUs => "Join Us",
        Contact => "Contact",
        Blog => "Blog",
        BlogPost => "Blog Post",
    }
}
