//! Common imports for crates that build on the model.

pub use crate::capability::{Capability, CapabilitySet};
pub use crate::dataset::CatalogDataset;
pub use crate::domain::{Domain, ItemKind, Relation};
pub use crate::items::*;
pub use crate::media_item::MediaItem;
pub use crate::query::{
    DescriptorVisitor, OrderKey, Predicate, QueryDescriptor,
    QueryDescriptorBuilder, Range, SortBy, SortComponent, SortOrder,
};
pub use crate::service::{
    Category, Genre, ProviderDescriptor, ProviderMetadata, ServiceDescription,
};
