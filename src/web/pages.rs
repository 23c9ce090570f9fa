//! Askama templates and render functions for storefront pages.
//!
//! Layout shells live in `templates/layouts/`, page bodies in
//! `templates/pages/`, and the standalone landing/not-found/error pages at
//! the top of `templates/`. The registry composes a body renderer with a
//! layout renderer; the standalone pages are returned directly by the
//! storefront handler.

use askama::Template;
use askama_web::WebTemplate;

/// Everything a layout shell needs to wrap a rendered page body.
pub struct LayoutContext {
    pub store_name: String,
    pub hostname: String,
    /// Link back to the operator's marketing site.
    pub main_url: String,
    pub page_title: String,
    /// Pre-rendered page body, inserted unescaped.
    pub body: String,
}

/// Input for page-body renderers.
pub struct PageContext {
    pub store_name: String,
    /// Request path, used to surface route parameters on detail pages.
    pub path: String,
}

impl PageContext {
    /// Returns the `idx`-th path segment, or an empty string.
    fn segment(&self, idx: usize) -> &str {
        self.path
            .trim_matches('/')
            .split('/')
            .nth(idx)
            .unwrap_or("")
    }
}

// ── Layout shells ───────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "layouts/classic.html")]
struct ClassicLayout<'a> {
    store_name: &'a str,
    page_title: &'a str,
    main_url: &'a str,
    body: &'a str,
}

#[derive(Template)]
#[template(path = "layouts/boutique.html")]
struct BoutiqueLayout<'a> {
    store_name: &'a str,
    page_title: &'a str,
    main_url: &'a str,
    body: &'a str,
}

#[derive(Template)]
#[template(path = "layouts/showcase.html")]
struct ShowcaseLayout<'a> {
    store_name: &'a str,
    page_title: &'a str,
    main_url: &'a str,
    body: &'a str,
}

pub fn render_classic_layout(ctx: &LayoutContext) -> askama::Result<String> {
    ClassicLayout {
        store_name: &ctx.store_name,
        page_title: &ctx.page_title,
        main_url: &ctx.main_url,
        body: &ctx.body,
    }
    .render()
}

pub fn render_boutique_layout(ctx: &LayoutContext) -> askama::Result<String> {
    BoutiqueLayout {
        store_name: &ctx.store_name,
        page_title: &ctx.page_title,
        main_url: &ctx.main_url,
        body: &ctx.body,
    }
    .render()
}

pub fn render_showcase_layout(ctx: &LayoutContext) -> askama::Result<String> {
    ShowcaseLayout {
        store_name: &ctx.store_name,
        page_title: &ctx.page_title,
        main_url: &ctx.main_url,
        body: &ctx.body,
    }
    .render()
}

// ── Page bodies ─────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "pages/products.html")]
struct ProductsBody<'a> {
    store_name: &'a str,
}

#[derive(Template)]
#[template(path = "pages/category_products.html")]
struct CategoryProductsBody<'a> {
    category: &'a str,
}

#[derive(Template)]
#[template(path = "pages/product_detail.html")]
struct ProductDetailBody<'a> {
    category: &'a str,
    product: &'a str,
}

#[derive(Template)]
#[template(path = "pages/opportunity.html")]
struct OpportunityBody<'a> {
    store_name: &'a str,
}

#[derive(Template)]
#[template(path = "pages/opportunity_overview.html")]
struct OpportunityOverviewBody<'a> {
    store_name: &'a str,
}

#[derive(Template)]
#[template(path = "pages/join_us.html")]
struct JoinUsBody<'a> {
    store_name: &'a str,
}

#[derive(Template)]
#[template(path = "pages/contact.html")]
struct ContactBody<'a> {
    store_name: &'a str,
}

#[derive(Template)]
#[template(path = "pages/blog.html")]
struct BlogBody<'a> {
    store_name: &'a str,
}

#[derive(Template)]
#[template(path = "pages/blog_post.html")]
struct BlogPostBody<'a> {
    post: &'a str,
}

pub fn render_products(ctx: &PageContext) -> askama::Result<String> {
    ProductsBody {
        store_name: &ctx.store_name,
    }
    .render()
}

pub fn render_category_products(ctx: &PageContext) -> askama::Result<String> {
    CategoryProductsBody {
        category: ctx.segment(1),
    }
    .render()
}

pub fn render_product_detail(ctx: &PageContext) -> askama::Result<String> {
    ProductDetailBody {
        category: ctx.segment(1),
        product: ctx.segment(2),
    }
    .render()
}

pub fn render_opportunity(ctx: &PageContext) -> askama::Result<String> {
    OpportunityBody {
        store_name: &ctx.store_name,
    }
    .render()
}

pub fn render_opportunity_overview(ctx: &PageContext) -> askama::Result<String> {
    OpportunityOverviewBody {
        store_name: &ctx.store_name,
    }
    .render()
}

pub fn render_join_us(ctx: &PageContext) -> askama::Result<String> {
    JoinUsBody {
        store_name: &ctx.store_name,
    }
    .render()
}

pub fn render_contact(ctx: &PageContext) -> askama::Result<String> {
    ContactBody {
        store_name: &ctx.store_name,
    }
    .render()
}

pub fn render_blog(ctx: &PageContext) -> askama::Result<String> {
    BlogBody {
        store_name: &ctx.store_name,
    }
    .render()
}

pub fn render_blog_post(ctx: &PageContext) -> askama::Result<String> {
    BlogPostBody {
        post: ctx.segment(1),
    }
    .render()
}

// ── Standalone pages ────────────────────────────────────────────────────

/// The marketing landing page served on the main domain.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub base_domain: String,
}

/// "Store Not Found" page for hostnames with no configured tenant.
#[derive(Template, WebTemplate)]
#[template(path = "store_not_found.html")]
pub struct StoreNotFoundTemplate {
    pub hostname: String,
    pub main_url: String,
}

/// "Page unavailable" page for valid tenants without the requested page.
#[derive(Template, WebTemplate)]
#[template(path = "page_not_found.html")]
pub struct PageNotFoundTemplate {
    pub store_name: String,
    pub main_url: String,
}

/// Error page for lookup failures and unsupported templates. `retry_url`
/// is present only when retrying can help (network failures).
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
    pub main_url: String,
    pub retry_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_ctx(path: &str) -> PageContext {
        PageContext {
            store_name: "Acme Wellness".to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_segment_extraction() {
        let ctx = page_ctx("/products/skincare/123-serum");
        assert_eq!(ctx.segment(0), "products");
        assert_eq!(ctx.segment(1), "skincare");
        assert_eq!(ctx.segment(2), "123-serum");
        assert_eq!(ctx.segment(3), "");
    }

    #[test]
    fn test_body_renderers_produce_markup() {
        let body = render_products(&page_ctx("/products")).unwrap();
        assert!(body.contains("Acme Wellness"));

        let body = render_category_products(&page_ctx("/products/skincare")).unwrap();
        assert!(body.contains("skincare"));

        let body = render_blog_post(&page_ctx("/blog/42")).unwrap();
        assert!(body.contains("42"));
    }

    #[test]
    fn test_layouts_embed_the_body() {
        let ctx = LayoutContext {
            store_name: "Acme Wellness".to_string(),
            hostname: "acme.igrowbig.com".to_string(),
            main_url: "https://igrowbig.com".to_string(),
            page_title: "Products".to_string(),
            body: "<p id=\"marker\">hello</p>".to_string(),
        };

        for render in [
            render_classic_layout,
            render_boutique_layout,
            render_showcase_layout,
        ] {
            let html = render(&ctx).unwrap();
            assert!(html.contains("id=\"marker\""));
            assert!(html.contains("Acme Wellness"));
        }
    }

    #[test]
    fn test_layouts_are_visually_distinct() {
        let ctx = LayoutContext {
            store_name: "Acme".to_string(),
            hostname: "acme.igrowbig.com".to_string(),
            main_url: "https://igrowbig.com".to_string(),
            page_title: "Products".to_string(),
            body: String::new(),
        };

        assert!(render_classic_layout(&ctx).unwrap().contains("theme-classic"));
        assert!(render_boutique_layout(&ctx).unwrap().contains("theme-boutique"));
        assert!(render_showcase_layout(&ctx).unwrap().contains("theme-showcase"));
    }

    #[test]
    fn test_body_is_inserted_unescaped() {
        let ctx = LayoutContext {
            store_name: "Acme".to_string(),
            hostname: "acme.igrowbig.com".to_string(),
            main_url: "https://igrowbig.com".to_string(),
            page_title: "Blog".to_string(),
            body: "<article>post</article>".to_string(),
        };

        let html = render_boutique_layout(&ctx).unwrap();
        assert!(html.contains("<article>post</article>"));
    }
}
