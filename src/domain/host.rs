//! Hostname classification.
//!
//! Decides, per request, whether a hostname is the operator's marketing
//! domain, a tenant subdomain under the base domain, or a tenant-owned
//! custom domain. Pure and synchronous; classification always completes
//! before any tenant resolution starts.

use std::fmt;

/// The category a hostname falls into, relative to the base domain.
///
/// An enum rather than three booleans so exactly one category can hold at
/// a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainClass {
    /// The marketing/operator domain (`base_domain`, `www.{base_domain}`,
    /// or `localhost`). No tenant lookup happens for these.
    Main,
    /// A tenant hostname under the base domain; carries the label
    /// preceding `.{base_domain}`.
    Subdomain(String),
    /// A tenant-owned hostname pointing at the platform.
    Custom,
}

/// A classified hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainInfo {
    /// Normalized hostname (lowercase, no port, no trailing dot).
    pub hostname: String,
    pub class: DomainClass,
}

impl DomainInfo {
    pub fn is_main(&self) -> bool {
        self.class == DomainClass::Main
    }

    pub fn is_subdomain(&self) -> bool {
        matches!(self.class, DomainClass::Subdomain(_))
    }

    pub fn is_custom_domain(&self) -> bool {
        self.class == DomainClass::Custom
    }

    /// The label preceding `.{base_domain}`, when this is a subdomain.
    pub fn subdomain_label(&self) -> Option<&str> {
        match &self.class {
            DomainClass::Subdomain(label) => Some(label),
            _ => None,
        }
    }
}

impl fmt::Display for DomainInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.class {
            DomainClass::Main => write!(f, "{} (main)", self.hostname),
            DomainClass::Subdomain(label) => write!(f, "{} (subdomain: {})", self.hostname, label),
            DomainClass::Custom => write!(f, "{} (custom)", self.hostname),
        }
    }
}

/// Classifies a hostname against the configured base domain.
///
/// The hostname is normalized first (lowercase, port and trailing dot
/// stripped), so callers may pass a raw `Host` header value.
///
/// Rules, in order:
/// 1. `localhost`, `{base_domain}`, and `www.{base_domain}` are main.
/// 2. `{label}.{base_domain}` with a non-empty, non-`www` label is a
///    subdomain.
/// 3. Everything else is a custom domain.
pub fn classify_host(hostname: &str, base_domain: &str) -> DomainInfo {
    let hostname = crate::utils::host::normalize_hostname(hostname);
    let base_domain = base_domain.to_ascii_lowercase();

    if hostname == "localhost"
        || hostname == base_domain
        || hostname == format!("www.{}", base_domain)
    {
        return DomainInfo {
            hostname,
            class: DomainClass::Main,
        };
    }

    let suffix = format!(".{}", base_domain);
    if let Some(label) = hostname.strip_suffix(&suffix)
        && !label.is_empty()
        && !label.contains('.')
    {
        let label = label.to_string();
        return DomainInfo {
            hostname,
            class: DomainClass::Subdomain(label),
        };
    }

    DomainInfo {
        hostname,
        class: DomainClass::Custom,
    }
}
