use mediahub_core::ExecutionPolicy;
use mediahub_model::Domain;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings as written in `mediahub.toml`.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    #[serde(default)]
    pub policy: ExecutionPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,
    /// Candidates in selection order: the first entry serving a domain
    /// becomes its active provider.
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

impl Settings {
    pub fn provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.providers.iter().find(|provider| provider.name == name)
    }

    /// Anchor relative fixture paths at `base`.
    pub(crate) fn resolve_relative_paths(&mut self, base: &Path) {
        for provider in &mut self.providers {
            if let BackendConfig::Fixture { path } = &mut provider.backend
                && path.is_relative()
            {
                *path = base.join(&*path);
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    pub name: String,
    #[serde(default = "default_provider_version")]
    pub version: String,
    pub domains: Vec<Domain>,
    #[serde(flatten)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum BackendConfig {
    Sqlite { database_url: String },
    /// JSON `CatalogDataset` served from memory.
    Fixture { path: PathBuf },
}

impl BackendConfig {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendConfig::Sqlite { .. } => "sqlite",
            BackendConfig::Fixture { .. } => "fixture",
        }
    }
}

fn default_provider_version() -> String {
    "1.0.0".to_string()
}
