use async_trait::async_trait;
use mediahub_model::QueryDescriptor;

use crate::error::{CatalogError, Result};
use crate::item::CatalogItem;

/// Read access to one collection of a provider.
#[async_trait]
pub trait ItemSource<T: CatalogItem>: Send + Sync {
    /// Every item, in the provider's natural order.
    async fn all(&self) -> Result<Vec<T>>;

    /// Look up a single item. Fails with `NotFound` on a miss and with
    /// `AmbiguousId` when more than one item carries `id`.
    async fn get_by_id(&self, id: &str) -> Result<T> {
        single_match(self.all().await?, id)
    }

    /// Push-down capability, when the backing store can evaluate descriptors
    /// itself.
    fn native(&self) -> Option<&dyn NativeQuery<T>> {
        None
    }
}

/// Filter, order and range evaluation inside the backing store.
///
/// Results must match in-memory evaluation of the same descriptor over
/// [`ItemSource::all`].
#[async_trait]
pub trait NativeQuery<T: CatalogItem>: Send + Sync {
    async fn fetch(&self, descriptor: &QueryDescriptor) -> Result<Vec<T>>;

    /// Number of items matching the predicates; order and range are ignored.
    async fn count(&self, descriptor: &QueryDescriptor) -> Result<u64>;
}

/// Pick the only item carrying `id`.
pub fn single_match<T: CatalogItem>(
    items: impl IntoIterator<Item = T>,
    id: &str,
) -> Result<T> {
    let mut matches = items.into_iter().filter(|item| item.id() == id);
    let first = matches.next().ok_or_else(|| CatalogError::NotFound {
        kind: T::KIND,
        id: id.to_string(),
    })?;
    let extra = matches.count();
    if extra > 0 {
        return Err(CatalogError::AmbiguousId {
            kind: T::KIND,
            id: id.to_string(),
            matches: extra + 1,
        });
    }
    Ok(first)
}
