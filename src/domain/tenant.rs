//! Tenant record and template identity.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// One of the fixed set of storefront templates a tenant can choose.
///
/// The backend stores the choice as a small integer. Conversion from the
/// raw value is fallible on purpose: an id outside the known set must
/// surface as an error, never fall back to a default template, or one
/// tenant's visitors could be served another tenant's visual identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    Classic = 1,
    Boutique = 2,
    Showcase = 3,
}

impl TemplateId {
    /// Converts the backend's raw template id, rejecting unknown values.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            1 => Some(Self::Classic),
            2 => Some(Self::Boutique),
            3 => Some(Self::Showcase),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> i64 {
        *self as i64
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Boutique => "boutique",
            Self::Showcase => "showcase",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_raw())
    }
}

/// A tenant as returned by the platform's tenant-lookup API.
///
/// Fetched at most once per hostname per session and treated as immutable
/// for the lifetime of the process (no live invalidation). `template_id`
/// is kept raw here; validation against the known template set happens at
/// dispatch time so an unsupported id is reported accurately.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantRecord {
    pub id: String,
    pub template_id: i64,
    /// Remaining tenant settings (store name, branding, contact details).
    /// Kept as raw JSON; this service only reads presentation hints.
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl TenantRecord {
    /// The display name for the storefront, falling back to the tenant id.
    pub fn store_name(&self) -> &str {
        self.settings
            .get("store_name")
            .and_then(Value::as_str)
            .unwrap_or(&self.id)
    }
}
