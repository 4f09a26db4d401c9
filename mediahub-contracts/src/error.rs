use mediahub_model::{
    CapabilitySet, Domain, ItemKind, ModelError, Predicate, SortBy,
};
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoProviderAvailable,
    UnsupportedSort,
    UnsupportedFilter,
    InvalidRange,
    InvalidArgument,
    NotFound,
    AmbiguousId,
    Backend,
    Configuration,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("no provider available for domain {domain}")]
    NoProviderAvailable { domain: Domain },

    #[error("sorting {item} by {sort_by} is not supported (missing {missing})")]
    UnsupportedSort {
        sort_by: SortBy,
        item: &'static str,
        missing: CapabilitySet,
    },

    #[error("filter {predicate:?} is not supported for {item}")]
    UnsupportedFilter {
        predicate: Predicate,
        item: &'static str,
    },

    #[error("invalid range [{start}, {end}): {reason}")]
    InvalidRange {
        start: i64,
        end: i64,
        reason: &'static str,
    },

    #[error("invalid argument: unknown {kind} '{value}'")]
    InvalidArgument { kind: &'static str, value: String },

    #[error("{kind} '{id}' not found")]
    NotFound { kind: ItemKind, id: String },

    #[error("{kind} id '{id}' matched {matches} items")]
    AmbiguousId {
        kind: ItemKind,
        id: String,
        matches: usize,
    },

    #[error("provider '{provider}' failed: {source}")]
    Backend {
        provider: String,
        #[source]
        source: BoxError,
    },

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NoProviderAvailable { .. } => {
                ErrorKind::NoProviderAvailable
            }
            CatalogError::UnsupportedSort { .. } => ErrorKind::UnsupportedSort,
            CatalogError::UnsupportedFilter { .. } => {
                ErrorKind::UnsupportedFilter
            }
            CatalogError::InvalidRange { .. } => ErrorKind::InvalidRange,
            CatalogError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::AmbiguousId { .. } => ErrorKind::AmbiguousId,
            CatalogError::Backend { .. } => ErrorKind::Backend,
            CatalogError::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// Wrap a provider failure with the provider's name.
    pub fn backend(
        provider: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        CatalogError::Backend {
            provider: provider.into(),
            source: source.into(),
        }
    }
}

impl From<ModelError> for CatalogError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidRange { start, end, reason } => {
                CatalogError::InvalidRange { start, end, reason }
            }
            ModelError::UnknownVariant { kind, value } => {
                CatalogError::InvalidArgument { kind, value }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use mediahub_model::Range;

    #[test]
    fn model_range_errors_keep_their_kind() {
        let err: CatalogError = Range::new(-2, 1).unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert!(err.to_string().contains("start must not be negative"));
    }

    #[test]
    fn backend_errors_carry_provider_and_source() {
        let io = std::io::Error::other("disk gone");
        let err = CatalogError::backend("sqlite-music", io);
        assert_eq!(err.kind(), ErrorKind::Backend);
        assert!(err.to_string().contains("sqlite-music"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
