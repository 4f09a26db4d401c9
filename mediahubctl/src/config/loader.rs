use mediahub_core::ExecutionPolicy;
use once_cell::sync::Lazy;
use std::{
    collections::HashSet,
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use super::models::Settings;

const CONFIG_PATH_ENV: &str = "MEDIAHUB_CONFIG";
const POLICY_ENV: &str = "MEDIAHUB_EXECUTION_POLICY";

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("mediahub.toml"),
        PathBuf::from("config/mediahub.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

/// Where the settings came from.
#[derive(Debug, Default, Clone)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub settings: Settings,
    pub metadata: ConfigMetadata,
    pub warnings: Vec<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut warnings = Vec::new();
        let (settings, config_path) = match self.resolve_path()? {
            Some(path) => (read_settings(&path)?, Some(path)),
            None => {
                warnings.push(
                    "No mediahub.toml detected; no providers are registered"
                        .to_string(),
                );
                (Settings::default(), None)
            }
        };
        let settings = apply_env_overrides(settings)?;
        validate(&settings)?;

        if settings.providers.is_empty() && config_path.is_some() {
            warnings.push("Configuration lists no providers".to_string());
        }

        Ok(ConfigLoad {
            settings,
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded,
            },
            warnings,
        })
    }

    /// Explicit path, then `MEDIAHUB_CONFIG`, then the default locations.
    /// A missing explicit or env path is an error; missing defaults are not.
    fn resolve_path(&self) -> Result<Option<PathBuf>, ConfigLoadError> {
        let requested = self
            .options
            .config_path
            .clone()
            .or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        match requested {
            Some(path) if path.exists() => Ok(Some(path)),
            Some(path) => Err(ConfigLoadError::MissingConfig { path }),
            None => Ok(DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
                .cloned()),
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
    let mut settings: Settings =
        toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source: err,
        })?;
    if let Some(base) = path.parent() {
        settings.resolve_relative_paths(base);
    }
    Ok(settings)
}

fn apply_env_overrides(
    mut settings: Settings,
) -> Result<Settings, ConfigLoadError> {
    if let Ok(value) = env::var(POLICY_ENV) {
        settings.policy = parse_policy(&value)?;
    }
    Ok(settings)
}

fn parse_policy(value: &str) -> Result<ExecutionPolicy, ConfigLoadError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "prefer_native" | "native" => Ok(ExecutionPolicy::PreferNative),
        "in_memory_only" | "in_memory" => Ok(ExecutionPolicy::InMemoryOnly),
        _ => Err(ConfigLoadError::InvalidPolicy {
            value: value.to_string(),
        }),
    }
}

fn validate(settings: &Settings) -> Result<(), ConfigLoadError> {
    let mut names = HashSet::new();
    for provider in &settings.providers {
        if provider.name.trim().is_empty() {
            return Err(ConfigLoadError::InvalidProvider {
                name: provider.name.clone(),
                reason: "name must not be empty",
            });
        }
        if provider.domains.is_empty() {
            return Err(ConfigLoadError::InvalidProvider {
                name: provider.name.clone(),
                reason: "at least one domain is required",
            });
        }
        if !names.insert(provider.name.as_str()) {
            return Err(ConfigLoadError::InvalidProvider {
                name: provider.name.clone(),
                reason: "provider names must be unique",
            });
        }
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid provider '{name}': {reason}")]
    InvalidProvider { name: String, reason: &'static str },
    #[error("unknown execution policy '{value}'")]
    InvalidPolicy { value: String },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_aliases() {
        assert_eq!(
            parse_policy("In_Memory").unwrap(),
            ExecutionPolicy::InMemoryOnly
        );
        assert_eq!(
            parse_policy(" native ").unwrap(),
            ExecutionPolicy::PreferNative
        );
        assert!(matches!(
            parse_policy("eager"),
            Err(ConfigLoadError::InvalidPolicy { .. })
        ));
    }
}
