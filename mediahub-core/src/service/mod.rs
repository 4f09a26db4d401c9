//! Aggregation facade.
//!
//! [`CatalogService`] resolves the active provider of a collection's domain,
//! turns request parameters into a [`QueryDescriptor`] and runs it through the
//! [`QueryExecutor`]. It holds no mutable state, so one instance can serve any
//! number of concurrent requests.

pub mod collections;

pub use collections::*;

use mediahub_contracts::{ItemSource, Result};
use mediahub_model::prelude::*;
use mediahub_model::service::API_VERSION;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::query::{ExecutionPolicy, QueryExecutor};
use crate::registry::{ActiveProviders, ProviderRegistry};

#[derive(Debug, Clone)]
pub struct CatalogService {
    registry: Arc<ProviderRegistry>,
    active: ActiveProviders,
    executor: QueryExecutor,
    service_version: String,
}

impl CatalogService {
    pub fn new(registry: ProviderRegistry) -> Self {
        let active = registry.resolve();
        Self {
            registry: Arc::new(registry),
            active,
            executor: QueryExecutor::default(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn with_policy(mut self, policy: ExecutionPolicy) -> Self {
        self.executor = QueryExecutor::new(policy);
        self
    }

    pub fn with_service_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = version.into();
        self
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn executor(&self) -> &QueryExecutor {
        &self.executor
    }

    fn source<C: Collection>(&self) -> Result<&dyn ItemSource<C::Item>> {
        C::source(&self.active)
    }

    /// Total number of items in the collection.
    #[instrument(skip(self), fields(collection = C::NAME))]
    pub async fn count<C: Collection>(&self) -> Result<u64> {
        self.count_matching::<C>(&QueryDescriptor::new()).await
    }

    /// Number of items satisfying the predicates of `descriptor`.
    pub async fn count_matching<C: Collection>(
        &self,
        descriptor: &QueryDescriptor,
    ) -> Result<u64> {
        self.executor.count(self.source::<C>()?, descriptor).await
    }

    /// Full listing in the requested order.
    #[instrument(skip(self), fields(collection = C::NAME))]
    pub async fn list<C: Collection>(
        &self,
        sort_by: SortBy,
        order: SortOrder,
    ) -> Result<Vec<C::Item>> {
        let descriptor =
            QueryDescriptor::builder().sort_by(sort_by, order).build();
        self.query::<C>(&descriptor).await
    }

    /// Ordered listing restricted to `[start, end)`. A short collection
    /// truncates the page.
    #[instrument(skip(self), fields(collection = C::NAME))]
    pub async fn list_by_range<C: Collection>(
        &self,
        sort_by: SortBy,
        order: SortOrder,
        start: i64,
        end: i64,
    ) -> Result<Vec<C::Item>> {
        let descriptor = QueryDescriptor::builder()
            .sort_by(sort_by, order)
            .range(Range::from_bounds(start, end)?)
            .build();
        self.query::<C>(&descriptor).await
    }

    /// Items whose genre set contains `genre`, in the requested order.
    #[instrument(skip(self), fields(collection = C::NAME))]
    pub async fn list_by_genre<C: Collection>(
        &self,
        genre: &str,
        sort_by: SortBy,
        order: SortOrder,
    ) -> Result<Vec<C::Item>> {
        let descriptor = QueryDescriptor::builder()
            .genre(genre)
            .sort_by(sort_by, order)
            .build();
        self.query::<C>(&descriptor).await
    }

    /// Items whose category set contains `category`, in the requested order.
    #[instrument(skip(self), fields(collection = C::NAME))]
    pub async fn list_by_category<C: Collection>(
        &self,
        category: &str,
        sort_by: SortBy,
        order: SortOrder,
    ) -> Result<Vec<C::Item>> {
        let descriptor = QueryDescriptor::builder()
            .category(category)
            .sort_by(sort_by, order)
            .build();
        self.query::<C>(&descriptor).await
    }

    /// Children of a parent: tracks of an album, episodes of a season, ...
    #[instrument(skip(self), fields(collection = C::NAME))]
    pub async fn list_related<C: Collection>(
        &self,
        relation: Relation,
        parent_id: &str,
        sort_by: SortBy,
        order: SortOrder,
        range: Option<Range>,
    ) -> Result<Vec<C::Item>> {
        let descriptor = QueryDescriptor::builder()
            .related_to(relation, parent_id)
            .sort_by(sort_by, order)
            .maybe_range(range)
            .build();
        self.query::<C>(&descriptor).await
    }

    #[instrument(skip(self), fields(collection = C::NAME))]
    pub async fn count_related<C: Collection>(
        &self,
        relation: Relation,
        parent_id: &str,
    ) -> Result<u64> {
        let descriptor = QueryDescriptor::builder()
            .related_to(relation, parent_id)
            .build();
        self.count_matching::<C>(&descriptor).await
    }

    /// Run an arbitrary descriptor.
    pub async fn query<C: Collection>(
        &self,
        descriptor: &QueryDescriptor,
    ) -> Result<Vec<C::Item>> {
        let source = self.source::<C>()?;
        let items = self.executor.execute(source, descriptor).await?;
        debug!(collection = C::NAME, returned = items.len(), "query complete");
        Ok(items)
    }

    /// Single item by provider-local id.
    #[instrument(skip(self), fields(collection = C::NAME))]
    pub async fn get_by_id<C: Collection>(&self, id: &str) -> Result<C::Item> {
        self.source::<C>()?.get_by_id(id).await
    }

    /// Single item of any kind, in its richest form.
    #[instrument(skip(self))]
    pub async fn get_item(
        &self,
        kind: ItemKind,
        id: &str,
    ) -> Result<MediaItem> {
        Ok(match kind {
            ItemKind::Movie => {
                self.get_by_id::<MoviesDetailed>(id).await?.into()
            }
            ItemKind::MusicTrack => {
                self.get_by_id::<MusicTracksDetailed>(id).await?.into()
            }
            ItemKind::MusicAlbum => {
                self.get_by_id::<MusicAlbums>(id).await?.into()
            }
            ItemKind::MusicArtist => {
                self.get_by_id::<MusicArtists>(id).await?.into()
            }
            ItemKind::Picture => {
                self.get_by_id::<PicturesDetailed>(id).await?.into()
            }
            ItemKind::TvShow => {
                self.get_by_id::<TvShowsDetailed>(id).await?.into()
            }
            ItemKind::TvSeason => {
                self.get_by_id::<TvSeasonsDetailed>(id).await?.into()
            }
            ItemKind::TvEpisode => {
                self.get_by_id::<TvEpisodesDetailed>(id).await?.into()
            }
        })
    }

    /// Distinct genres of a domain. Pictures carry no genres.
    #[instrument(skip(self))]
    pub async fn genres(&self, domain: Domain) -> Result<Vec<Genre>> {
        match domain {
            Domain::Movie => self.active.movie()?.genres().await,
            Domain::Music => self.active.music()?.genres().await,
            Domain::TvShow => self.active.tvshow()?.genres().await,
            Domain::Picture => {
                self.active.picture()?;
                Ok(Vec::new())
            }
        }
    }

    /// Distinct user categories of a domain. Music carries no categories.
    #[instrument(skip(self))]
    pub async fn categories(&self, domain: Domain) -> Result<Vec<Category>> {
        match domain {
            Domain::Movie => self.active.movie()?.categories().await,
            Domain::Picture => self.active.picture()?.categories().await,
            Domain::TvShow => self.active.tvshow()?.categories().await,
            Domain::Music => {
                self.active.music()?;
                Ok(Vec::new())
            }
        }
    }

    /// Discovery document: registered providers, API versions and the
    /// service version.
    pub fn service_description(&self) -> ServiceDescription {
        let mut available_providers = BTreeMap::new();
        let mut active_providers = BTreeMap::new();
        let mut api_versions = BTreeMap::new();
        for domain in Domain::ALL {
            let names = self
                .registry
                .list_candidates(domain)
                .into_iter()
                .map(|descriptor| descriptor.name)
                .collect();
            available_providers.insert(domain, names);
            if let Some(name) = self.active.name(domain) {
                active_providers.insert(domain, name.to_string());
            }
            api_versions.insert(domain, API_VERSION);
        }
        ServiceDescription {
            available_providers,
            active_providers,
            api_versions,
            service_version: self.service_version.clone(),
        }
    }
}
