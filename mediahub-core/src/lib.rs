//! # mediahub core
//!
//! Catalogue aggregation layer: a registry that binds one active provider to
//! each media domain, a capability-checked sort/filter dispatcher, and a lazy
//! query executor that pushes descriptors down into a provider's native store
//! or evaluates them in memory with identical results.
//!
//! ## Feature Flags
//!
//! - `sqlite`: Enables the SQLite reference provider (SQLx)
//!
//! ## Architecture
//!
//! - [`query`]: Sort keys, predicate evaluation, validation and the executor
//! - [`registry`]: Provider candidates and per-domain selection
//! - [`service`]: The [`CatalogService`] facade and its collection markers
//! - [`providers`]: In-memory and SQLite providers

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Error types shared with provider implementations
pub mod error;

/// Query execution with push-down and in-memory evaluation
pub mod query;

/// Provider registry and active provider selection
pub mod registry;

/// Aggregation facade
pub mod service;

/// Reference providers
pub mod providers;

#[cfg(feature = "sqlite")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub use error::{CatalogError, ErrorKind, Result};
pub use query::{ExecutionMode, ExecutionPolicy, QueryExecutor};
pub use registry::{
    ActiveProviders, ProviderHandle, ProviderRegistry, ProviderRegistryBuilder,
};
pub use service::{CatalogService, Collection};

pub use mediahub_contracts as contracts;
pub use mediahub_model as model;
