//! Configuration loading and models.

pub mod loader;
pub mod models;

pub use loader::{
    ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions,
    ConfigMetadata,
};
pub use models::{BackendConfig, ProviderConfig, Settings};
