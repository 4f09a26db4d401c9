//! Provider registry and per-domain selection.
//!
//! The registry is populated once by a bootstrap step through
//! [`ProviderRegistryBuilder`] and is read-only afterwards. The first provider
//! registered for a domain is the active one; the rest stay listed for
//! discovery.

use mediahub_contracts::{
    CatalogError, MovieLibrary, MusicLibrary, PictureLibrary, Result,
    TvShowLibrary,
};
use mediahub_model::{Domain, ProviderDescriptor, ProviderMetadata};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Shared handle to a provider, tagged with the domain it serves.
#[derive(Clone)]
pub enum ProviderHandle {
    Movie(Arc<dyn MovieLibrary>),
    Music(Arc<dyn MusicLibrary>),
    Picture(Arc<dyn PictureLibrary>),
    TvShow(Arc<dyn TvShowLibrary>),
}

impl ProviderHandle {
    pub fn domain(&self) -> Domain {
        match self {
            ProviderHandle::Movie(_) => Domain::Movie,
            ProviderHandle::Music(_) => Domain::Music,
            ProviderHandle::Picture(_) => Domain::Picture,
            ProviderHandle::TvShow(_) => Domain::TvShow,
        }
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProviderHandle")
            .field(&self.domain())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct RegisteredProvider {
    pub descriptor: ProviderDescriptor,
    pub handle: ProviderHandle,
}

#[derive(Debug, Default)]
pub struct ProviderRegistryBuilder {
    entries: Vec<RegisteredProvider>,
}

impl ProviderRegistryBuilder {
    /// Add a candidate. The domain comes from the handle.
    pub fn register(
        mut self,
        metadata: ProviderMetadata,
        handle: ProviderHandle,
    ) -> Self {
        let descriptor = ProviderDescriptor::new(handle.domain(), &metadata);
        debug!(
            domain = %descriptor.domain,
            name = %descriptor.name,
            backend = %descriptor.backend,
            "registered provider candidate"
        );
        self.entries.push(RegisteredProvider { descriptor, handle });
        self
    }

    pub fn register_movie(
        self,
        metadata: ProviderMetadata,
        library: Arc<dyn MovieLibrary>,
    ) -> Self {
        self.register(metadata, ProviderHandle::Movie(library))
    }

    pub fn register_music(
        self,
        metadata: ProviderMetadata,
        library: Arc<dyn MusicLibrary>,
    ) -> Self {
        self.register(metadata, ProviderHandle::Music(library))
    }

    pub fn register_picture(
        self,
        metadata: ProviderMetadata,
        library: Arc<dyn PictureLibrary>,
    ) -> Self {
        self.register(metadata, ProviderHandle::Picture(library))
    }

    pub fn register_tvshow(
        self,
        metadata: ProviderMetadata,
        library: Arc<dyn TvShowLibrary>,
    ) -> Self {
        self.register(metadata, ProviderHandle::TvShow(library))
    }

    pub fn build(self) -> ProviderRegistry {
        let registry = ProviderRegistry {
            entries: self.entries,
        };
        for domain in Domain::ALL {
            match registry.active_descriptor(domain) {
                Some(active) => info!(
                    %domain,
                    provider = %active.name,
                    candidates = registry.list_candidates(domain).len(),
                    "selected active provider"
                ),
                None => debug!(%domain, "no provider registered"),
            }
        }
        registry
    }
}

/// Immutable set of provider candidates in registration order.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    entries: Vec<RegisteredProvider>,
}

impl ProviderRegistry {
    pub fn builder() -> ProviderRegistryBuilder {
        ProviderRegistryBuilder::default()
    }

    fn first(&self, domain: Domain) -> Option<&RegisteredProvider> {
        self.entries
            .iter()
            .find(|entry| entry.descriptor.domain == domain)
    }

    /// The active provider for `domain`: the first one registered.
    pub fn select_active(&self, domain: Domain) -> Result<&ProviderHandle> {
        self.first(domain)
            .map(|entry| &entry.handle)
            .ok_or(CatalogError::NoProviderAvailable { domain })
    }

    pub fn active_descriptor(
        &self,
        domain: Domain,
    ) -> Option<&ProviderDescriptor> {
        self.first(domain).map(|entry| &entry.descriptor)
    }

    /// Every candidate for `domain`, active one first.
    pub fn list_candidates(&self, domain: Domain) -> Vec<ProviderDescriptor> {
        self.entries
            .iter()
            .filter(|entry| entry.descriptor.domain == domain)
            .map(|entry| entry.descriptor.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the active binding for every domain.
    pub fn resolve(&self) -> ActiveProviders {
        let mut active = ActiveProviders::default();
        for entry in &self.entries {
            let name = &entry.descriptor.name;
            match &entry.handle {
                ProviderHandle::Movie(lib) if active.movie.is_none() => {
                    active.movie = Some((name.clone(), lib.clone()));
                }
                ProviderHandle::Music(lib) if active.music.is_none() => {
                    active.music = Some((name.clone(), lib.clone()));
                }
                ProviderHandle::Picture(lib) if active.picture.is_none() => {
                    active.picture = Some((name.clone(), lib.clone()));
                }
                ProviderHandle::TvShow(lib) if active.tvshow.is_none() => {
                    active.tvshow = Some((name.clone(), lib.clone()));
                }
                _ => {}
            }
        }
        active
    }
}

/// The per-domain active binding, resolved once at facade construction.
#[derive(Clone, Default)]
pub struct ActiveProviders {
    movie: Option<(String, Arc<dyn MovieLibrary>)>,
    music: Option<(String, Arc<dyn MusicLibrary>)>,
    picture: Option<(String, Arc<dyn PictureLibrary>)>,
    tvshow: Option<(String, Arc<dyn TvShowLibrary>)>,
}

impl ActiveProviders {
    pub fn movie(&self) -> Result<&dyn MovieLibrary> {
        self.movie
            .as_ref()
            .map(|(_, lib)| lib.as_ref())
            .ok_or(CatalogError::NoProviderAvailable {
                domain: Domain::Movie,
            })
    }

    pub fn music(&self) -> Result<&dyn MusicLibrary> {
        self.music
            .as_ref()
            .map(|(_, lib)| lib.as_ref())
            .ok_or(CatalogError::NoProviderAvailable {
                domain: Domain::Music,
            })
    }

    pub fn picture(&self) -> Result<&dyn PictureLibrary> {
        self.picture
            .as_ref()
            .map(|(_, lib)| lib.as_ref())
            .ok_or(CatalogError::NoProviderAvailable {
                domain: Domain::Picture,
            })
    }

    pub fn tvshow(&self) -> Result<&dyn TvShowLibrary> {
        self.tvshow
            .as_ref()
            .map(|(_, lib)| lib.as_ref())
            .ok_or(CatalogError::NoProviderAvailable {
                domain: Domain::TvShow,
            })
    }

    /// Name of the provider serving `domain`.
    pub fn name(&self, domain: Domain) -> Option<&str> {
        match domain {
            Domain::Movie => self.movie.as_ref().map(|(name, _)| name.as_str()),
            Domain::Music => self.music.as_ref().map(|(name, _)| name.as_str()),
            Domain::Picture => {
                self.picture.as_ref().map(|(name, _)| name.as_str())
            }
            Domain::TvShow => {
                self.tvshow.as_ref().map(|(name, _)| name.as_str())
            }
        }
    }
}

impl fmt::Debug for ActiveProviders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveProviders")
            .field("movie", &self.name(Domain::Movie))
            .field("music", &self.name(Domain::Music))
            .field("picture", &self.name(Domain::Picture))
            .field("tvshow", &self.name(Domain::TvShow))
            .finish()
    }
}
