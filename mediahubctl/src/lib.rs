//! mediahub bootstrapper: configuration loading, provider registry
//! population and the catalogue query CLI.
#![allow(missing_docs)]

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod config;

pub use bootstrap::{BootstrapError, build_registry, build_service};
pub use config::{ConfigLoad, ConfigLoadError, ConfigLoader, Settings};
