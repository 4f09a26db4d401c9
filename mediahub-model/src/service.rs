use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::Domain;

/// API version reported for every domain in the service description.
pub const API_VERSION: u32 = 3;

/// Metadata a provider declares about itself at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    /// Display name.
    pub name: String,
    /// Backing-store identifier, e.g. `sqlite` or `fixture`.
    pub backend: String,
    pub version: String,
}

impl ProviderMetadata {
    pub fn new(
        name: impl Into<String>,
        backend: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            backend: backend.into(),
            version: version.into(),
        }
    }
}

/// Immutable registry entry: provider metadata bound to a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    pub domain: Domain,
    pub name: String,
    pub backend: String,
    pub version: String,
}

impl ProviderDescriptor {
    pub fn new(domain: Domain, metadata: &ProviderMetadata) -> Self {
        Self {
            domain,
            name: metadata.name.clone(),
            backend: metadata.backend.clone(),
            version: metadata.version.clone(),
        }
    }
}

/// Read-only discovery document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescription {
    /// Names of every registered provider, in registration order.
    pub available_providers: BTreeMap<Domain, Vec<String>>,
    /// Name of the provider serving each domain, if any.
    pub active_providers: BTreeMap<Domain, String>,
    pub api_versions: BTreeMap<Domain, u32>,
    pub service_version: String,
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Genre {
    pub name: String,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// User defined category. Providers that keep no separate id use the title.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Category {
    pub id: String,
    pub title: String,
}

impl Category {
    pub fn from_title(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: title.clone(),
            title,
        }
    }
}
