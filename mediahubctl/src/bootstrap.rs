//! Registry population from [`Settings`].
//!
//! Each configured provider is opened once and its handle is registered for
//! every domain it lists, in file order.

use mediahub_core::contracts::{
    CatalogError, MovieLibrary, MusicLibrary, PictureLibrary, TvShowLibrary,
};
use mediahub_core::providers::{MemoryLibrary, SqliteLibrary};
use mediahub_core::{CatalogService, ProviderHandle, ProviderRegistry};
use mediahub_model::{CatalogDataset, Domain, ProviderMetadata};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::config::{BackendConfig, ProviderConfig, Settings};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to read dataset {path}")]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset {path}")]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("provider '{name}' failed to open")]
    Provider {
        name: String,
        #[source]
        source: CatalogError,
    },
    #[error("no provider named '{0}' is configured")]
    UnknownProvider(String),
    #[error("provider '{name}' uses the {backend} backend, expected sqlite")]
    NotSqlite { name: String, backend: &'static str },
}

/// Read a JSON [`CatalogDataset`].
pub fn read_dataset(path: &Path) -> Result<CatalogDataset, BootstrapError> {
    let contents =
        fs::read_to_string(path).map_err(|err| BootstrapError::DatasetIo {
            path: path.to_path_buf(),
            source: err,
        })?;
    serde_json::from_str(&contents).map_err(|err| {
        BootstrapError::DatasetParse {
            path: path.to_path_buf(),
            source: err,
        }
    })
}

fn handle_for<L>(domain: Domain, library: &Arc<L>) -> ProviderHandle
where
    L: MovieLibrary + MusicLibrary + PictureLibrary + TvShowLibrary + 'static,
{
    match domain {
        Domain::Movie => ProviderHandle::Movie(library.clone()),
        Domain::Music => ProviderHandle::Music(library.clone()),
        Domain::Picture => ProviderHandle::Picture(library.clone()),
        Domain::TvShow => ProviderHandle::TvShow(library.clone()),
    }
}

async fn open_sqlite(
    provider: &ProviderConfig,
    database_url: &str,
) -> Result<SqliteLibrary, BootstrapError> {
    SqliteLibrary::connect(provider.name.clone(), database_url)
        .await
        .map_err(|err| BootstrapError::Provider {
            name: provider.name.clone(),
            source: err,
        })
}

async fn open_handles(
    provider: &ProviderConfig,
) -> Result<Vec<ProviderHandle>, BootstrapError> {
    let handles = match &provider.backend {
        BackendConfig::Sqlite { database_url } => {
            let library = Arc::new(open_sqlite(provider, database_url).await?);
            provider
                .domains
                .iter()
                .map(|domain| handle_for(*domain, &library))
                .collect()
        }
        BackendConfig::Fixture { path } => {
            let library = Arc::new(MemoryLibrary::new(read_dataset(path)?));
            provider
                .domains
                .iter()
                .map(|domain| handle_for(*domain, &library))
                .collect()
        }
    };
    Ok(handles)
}

/// Open every configured provider and register it for its domains.
pub async fn build_registry(
    settings: &Settings,
) -> Result<ProviderRegistry, BootstrapError> {
    let mut builder = ProviderRegistry::builder();
    for provider in &settings.providers {
        let metadata = ProviderMetadata::new(
            provider.name.clone(),
            provider.backend.as_str(),
            provider.version.clone(),
        );
        for handle in open_handles(provider).await? {
            builder = builder.register(metadata.clone(), handle);
        }
        info!(
            provider = %provider.name,
            backend = provider.backend.as_str(),
            domains = ?provider.domains,
            "provider opened"
        );
    }
    Ok(builder.build())
}

pub async fn build_service(
    settings: &Settings,
) -> Result<CatalogService, BootstrapError> {
    let registry = build_registry(settings).await?;
    let service = CatalogService::new(registry).with_policy(settings.policy);
    Ok(match &settings.service_version {
        Some(version) => service.with_service_version(version.clone()),
        None => service,
    })
}

/// The SQLite provider named `name`, for dataset imports.
pub async fn open_sqlite_provider(
    settings: &Settings,
    name: &str,
) -> Result<SqliteLibrary, BootstrapError> {
    let provider = settings
        .provider(name)
        .ok_or_else(|| BootstrapError::UnknownProvider(name.to_string()))?;
    match &provider.backend {
        BackendConfig::Sqlite { database_url } => {
            open_sqlite(provider, database_url).await
        }
        other => Err(BootstrapError::NotSqlite {
            name: provider.name.clone(),
            backend: other.as_str(),
        }),
    }
}
