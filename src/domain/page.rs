//! Path classification into canonical page types.
//!
//! An ordered rule table maps request paths to page-type tags shared by
//! every template. The first matching rule wins, so rules are ordered
//! most-specific-first: the three-segment product-detail rule must sit
//! above the two-segment category rule or `/products/skincare/123` would
//! be captured as a category page. That ordering is a correctness
//! requirement, not a style choice.

use std::fmt;

/// Canonical tag identifying which kind of page a path represents,
/// independent of template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageType {
    Products,
    CategoryProducts,
    ProductDetail,
    Opportunity,
    OpportunityOverview,
    JoinUs,
    Contact,
    Blog,
    BlogPost,
}

impl PageType {
    /// Stable tag used in logs, metrics labels, and template lookup keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::CategoryProducts => "category-products",
            Self::ProductDetail => "product-detail",
            Self::Opportunity => "opportunity",
            Self::OpportunityOverview => "opportunity-overview",
            Self::JoinUs => "join-us",
            Self::Contact => "contact",
            Self::Blog => "blog",
            Self::BlogPost => "blog-post",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One segment of a path pattern.
enum Segment {
    /// Must equal this literal exactly (case-sensitive).
    Literal(&'static str),
    /// Matches any single non-empty segment.
    Param,
}

/// A single classification rule: a segment pattern and the page type it
/// yields.
struct Rule {
    pattern: &'static [Segment],
    page_type: PageType,
}

use Segment::{Literal, Param};

/// Ordered rule table, most specific first. First match wins.
const RULES: &[Rule] = &[
    Rule {
        pattern: &[Literal("products"), Param, Param],
        page_type: PageType::ProductDetail,
    },
    Rule {
        pattern: &[Literal("products"), Param],
        page_type: PageType::CategoryProducts,
    },
    Rule {
        pattern: &[Literal("products")],
        page_type: PageType::Products,
    },
    Rule {
        pattern: &[Literal("opportunity-overview")],
        page_type: PageType::OpportunityOverview,
    },
    Rule {
        pattern: &[Literal("opportunity")],
        page_type: PageType::Opportunity,
    },
    Rule {
        pattern: &[Literal("join-us")],
        page_type: PageType::JoinUs,
    },
    Rule {
        pattern: &[Literal("contact")],
        page_type: PageType::Contact,
    },
    Rule {
        pattern: &[Literal("blog"), Param],
        page_type: PageType::BlogPost,
    },
    Rule {
        pattern: &[Literal("blog")],
        page_type: PageType::Blog,
    },
];

/// Classifies a request path into a canonical page type.
///
/// Returns `None` for paths outside the storefront surface (including the
/// root path); the dispatcher renders those as "page not available" rather
/// than failing.
///
/// Leading and trailing slashes are tolerated; query strings are the
/// caller's concern (`axum` hands over the path component only).
pub fn classify_path(path: &str) -> Option<PageType> {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    RULES
        .iter()
        .find(|rule| matches(rule.pattern, &segments))
        .map(|rule| rule.page_type)
}

fn matches(pattern: &[Segment], segments: &[&str]) -> bool {
    pattern.len() == segments.len()
        && pattern.iter().zip(segments).all(|(pat, seg)| match pat {
            Segment::Literal(lit) => lit == seg,
            Segment::Param => true,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_family_ordering() {
        // Most-specific-first: three segments must not be captured by the
        // two-segment rule.
        assert_eq!(
            classify_path("/products/skincare/123-serum"),
            Some(PageType::ProductDetail)
        );
        assert_eq!(
            classify_path("/products/skincare"),
            Some(PageType::CategoryProducts)
        );
        assert_eq!(classify_path("/products"), Some(PageType::Products));
    }

    #[test]
    fn test_opportunity_pages() {
        assert_eq!(
            classify_path("/opportunity-overview"),
            Some(PageType::OpportunityOverview)
        );
        assert_eq!(classify_path("/opportunity"), Some(PageType::Opportunity));
    }

    #[test]
    fn test_static_pages() {
        assert_eq!(classify_path("/join-us"), Some(PageType::JoinUs));
        assert_eq!(classify_path("/contact"), Some(PageType::Contact));
    }

    #[test]
    fn test_blog_pages() {
        assert_eq!(classify_path("/blog/42"), Some(PageType::BlogPost));
        assert_eq!(classify_path("/blog"), Some(PageType::Blog));
    }

    #[test]
    fn test_unmatched_paths() {
        assert_eq!(classify_path("/unknown"), None);
        assert_eq!(classify_path("/"), None);
        assert_eq!(classify_path(""), None);
        assert_eq!(classify_path("/blog/42/comments"), None);
        assert_eq!(classify_path("/products/a/b/c"), None);
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        assert_eq!(classify_path("/products/"), Some(PageType::Products));
        assert_eq!(classify_path("/blog/42/"), Some(PageType::BlogPost));
    }

    #[test]
    fn test_literals_are_case_sensitive() {
        assert_eq!(classify_path("/Products"), None);
    }

    #[test]
    fn test_page_type_tags_are_stable() {
        assert_eq!(PageType::ProductDetail.as_str(), "product-detail");
        assert_eq!(PageType::CategoryProducts.as_str(), "category-products");
        assert_eq!(PageType::OpportunityOverview.as_str(), "opportunity-overview");
        assert_eq!(PageType::BlogPost.as_str(), "blog-post");
    }
}
