//! Core data model definitions shared across mediahub crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod capability;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod items;
pub mod media_item;
pub mod prelude;
pub mod query;
pub mod service;

// Intentionally curated re-exports for downstream consumers.
pub use capability::{Capability, CapabilitySet};
pub use dataset::CatalogDataset;
pub use domain::{Domain, ItemKind, Relation};
pub use error::{ModelError, Result as ModelResult};
pub use items::{
    MovieBasic, MovieDetailed, MusicAlbumBasic, MusicArtistBasic,
    MusicTrackBasic, MusicTrackDetailed, PictureBasic, PictureDetailed,
    TvEpisodeBasic, TvEpisodeDetailed, TvSeasonBasic, TvSeasonDetailed,
    TvShowBasic, TvShowDetailed,
};
pub use media_item::MediaItem;
pub use query::{
    DescriptorVisitor, OrderKey, Predicate, QueryDescriptor,
    QueryDescriptorBuilder, Range, SortBy, SortComponent, SortOrder,
};
pub use service::{
    Category, Genre, ProviderDescriptor, ProviderMetadata, ServiceDescription,
};
