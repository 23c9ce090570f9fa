//! Static template registry.
//!
//! One table maps each template id to its layout shell, another maps
//! (template id, page type) pairs to page renderers. Adding a template or
//! a page is a table edit here; no code path elsewhere changes.
//!
//! Lookups take the backend's *raw* template id so that an id outside the
//! known set observably misses (`None`) instead of panicking or falling
//! back to a default template. `page_for` likewise returns `None` for an
//! unmapped combination; the dispatcher turns that into a
//! "page unavailable" state rather than an error.

use crate::domain::page::PageType;
use crate::domain::tenant::TemplateId;
use crate::web::pages::{self, LayoutContext, PageContext};

/// A template's layout shell: the chrome wrapped around every page body.
pub struct LayoutSpec {
    pub template: TemplateId,
    pub name: &'static str,
    pub render: fn(&LayoutContext) -> askama::Result<String>,
}

/// A renderable page body registered for one (template, page type) pair.
pub struct PageSpec {
    pub page_type: PageType,
    /// Registry key for logs, e.g. `boutique/blog-post`.
    pub name: &'static str,
    pub render_body: fn(&PageContext) -> askama::Result<String>,
}

static LAYOUTS: &[LayoutSpec] = &[
    LayoutSpec {
        template: TemplateId::Classic,
        name: "classic",
        render: pages::render_classic_layout,
    },
    LayoutSpec {
        template: TemplateId::Boutique,
        name: "boutique",
        render: pages::render_boutique_layout,
    },
    LayoutSpec {
        template: TemplateId::Showcase,
        name: "showcase",
        render: pages::render_showcase_layout,
    },
];

/// Full page table. The Showcase template deliberately registers no blog
/// pages; those combinations resolve to a "page unavailable" state.
static PAGES: &[(TemplateId, PageSpec)] = &[
    // Classic (1)
    page(TemplateId::Classic, PageType::Products, "classic/products", pages::render_products),
    page(TemplateId::Classic, PageType::CategoryProducts, "classic/category-products", pages::render_category_products),
    page(TemplateId::Classic, PageType::ProductDetail, "classic/product-detail", pages::render_product_detail),
    page(TemplateId::Classic, PageType::Opportunity, "classic/opportunity", pages::render_opportunity),
    page(TemplateId::Classic, PageType::OpportunityOverview, "classic/opportunity-overview", pages::render_opportunity_overview),
    page(TemplateId::Classic, PageType::JoinUs, "classic/join-us", pages::render_join_us),
    page(TemplateId::Classic, PageType::Contact, "classic/contact", pages::render_contact),
    page(TemplateId::Classic, PageType::Blog, "classic/blog", pages::render_blog),
    page(TemplateId::Classic, PageType::BlogPost, "classic/blog-post", pages::render_blog_post),
    // Boutique (2)
    page(TemplateId::Boutique, PageType::Products, "boutique/products", pages::render_products),
    page(TemplateId::Boutique, PageType::CategoryProducts, "boutique/category-products", pages::render_category_products),
    page(TemplateId::Boutique, PageType::ProductDetail, "boutique/product-detail", pages::render_product_detail),
    page(TemplateId::Boutique, PageType::Opportunity, "boutique/opportunity", pages::render_opportunity),
    page(TemplateId::Boutique, PageType::OpportunityOverview, "boutique/opportunity-overview", pages::render_opportunity_overview),
    page(TemplateId::Boutique, PageType::JoinUs, "boutique/join-us", pages::render_join_us),
    page(TemplateId::Boutique, PageType::Contact, "boutique/contact", pages::render_contact),
    page(TemplateId::Boutique, PageType::Blog, "boutique/blog", pages::render_blog),
    page(TemplateId::Boutique, PageType::BlogPost, "boutique/blog-post", pages::render_blog_post),
    // Showcase (3) - no blog pages
    page(TemplateId::Showcase, PageType::Products, "showcase/products", pages::render_products),
    page(TemplateId::Showcase, PageType::CategoryProducts, "showcase/category-products", pages::render_category_products),
    page(TemplateId::Showcase, PageType::ProductDetail, "showcase/product-detail", pages::render_product_detail),
    page(TemplateId::Showcase, PageType::Opportunity, "showcase/opportunity", pages::render_opportunity),
    page(TemplateId::Showcase, PageType::OpportunityOverview, "showcase/opportunity-overview", pages::render_opportunity_overview),
    page(TemplateId::Showcase, PageType::JoinUs, "showcase/join-us", pages::render_join_us),
    page(TemplateId::Showcase, PageType::Contact, "showcase/contact", pages::render_contact),
];

const fn page(
    template: TemplateId,
    page_type: PageType,
    name: &'static str,
    render_body: fn(&PageContext) -> askama::Result<String>,
) -> (TemplateId, PageSpec) {
    (
        template,
        PageSpec {
            page_type,
            name,
            render_body,
        },
    )
}

/// Looks up the layout shell for a raw template id.
///
/// Returns `None` for ids outside the statically known template set.
pub fn layout_for(raw_id: i64) -> Option<&'static LayoutSpec> {
    let template = TemplateId::from_raw(raw_id)?;
    LAYOUTS.iter().find(|layout| layout.template == template)
}

/// Looks up the page renderer for a raw template id and page type.
///
/// Returns `None` both for unknown template ids and for combinations the
/// template does not map.
pub fn page_for(raw_id: i64, page_type: PageType) -> Option<&'static PageSpec> {
    let template = TemplateId::from_raw(raw_id)?;
    PAGES
        .iter()
        .find(|(t, spec)| *t == template && spec.page_type == page_type)
        .map(|(_, spec)| spec)
}
