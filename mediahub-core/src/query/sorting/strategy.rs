//! Capability-checked sort strategies
//!
//! Sorting a sequence first confirms that every item exposes the
//! capabilities the requested keys need, then performs a stable sort over the
//! extracted keys. Compound keys compare lexicographically, each component in
//! the direction of its order key.

use mediahub_contracts::{CatalogError, MediaCapabilities, Result};
use mediahub_model::{CapabilitySet, OrderKey};
use std::cmp::Ordering;
use tracing::warn;

use super::keys::ComponentKey;

/// A sorting strategy over owned sequences
pub trait SortStrategy<T>: Send + Sync {
    /// Sort `items`, failing when an item lacks a required capability.
    fn sort(&self, items: Vec<T>) -> Result<Vec<T>>;

    /// Whether `sample` exposes everything this strategy reads.
    fn can_apply(&self, sample: &T) -> bool;
}

/// Ordering over one or more `(sort key, direction)` pairs
#[derive(Debug, Clone)]
pub struct OrderSort {
    keys: Vec<OrderKey>,
    required: CapabilitySet,
}

impl OrderSort {
    pub fn new(keys: &[OrderKey]) -> Self {
        let required = keys.iter().fold(CapabilitySet::EMPTY, |set, key| {
            set.union(key.sort_by.required_capabilities())
        });
        Self {
            keys: keys.to_vec(),
            required,
        }
    }

    pub fn keys(&self) -> &[OrderKey] {
        &self.keys
    }

    pub fn required(&self) -> CapabilitySet {
        self.required
    }

    /// Fail with `UnsupportedSort` naming the first key `available` cannot
    /// serve.
    pub fn check<T: MediaCapabilities>(
        &self,
        available: CapabilitySet,
    ) -> Result<()> {
        for key in &self.keys {
            let missing =
                available.missing_from(key.sort_by.required_capabilities());
            if !missing.is_empty() {
                warn!(
                    item = T::ITEM_NAME,
                    sort_by = %key.sort_by,
                    %missing,
                    "Sorting on this property is not supported"
                );
                return Err(CatalogError::UnsupportedSort {
                    sort_by: key.sort_by,
                    item: T::ITEM_NAME,
                    missing,
                });
            }
        }
        Ok(())
    }

    fn extract<T: MediaCapabilities>(&self, item: &T) -> Vec<ComponentKey> {
        self.keys
            .iter()
            .flat_map(|key| key.sort_by.components())
            .map(|component| ComponentKey::extract(item, *component))
            .collect()
    }

    fn compare(&self, a: &[ComponentKey], b: &[ComponentKey]) -> Ordering {
        let directions = self
            .keys
            .iter()
            .flat_map(|key| {
                key.sort_by.components().iter().map(move |_| key.order)
            });
        a.iter()
            .zip(b)
            .zip(directions)
            .map(|((a, b), order)| a.compare_with_order(b, order))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl<T: MediaCapabilities + Send + Sync> SortStrategy<T> for OrderSort {
    fn sort(&self, items: Vec<T>) -> Result<Vec<T>> {
        if let Some(unsupported) = items
            .iter()
            .find(|item| !SortStrategy::<T>::can_apply(self, item))
        {
            self.check::<T>(unsupported.capabilities())?;
        }

        // Extract keys once, then rely on the stable sort for ties
        let mut decorated: Vec<_> = items
            .into_iter()
            .map(|item| (self.extract(&item), item))
            .collect();
        decorated.sort_by(|a, b| self.compare(&a.0, &b.0));

        Ok(decorated.into_iter().map(|(_, item)| item).collect())
    }

    fn can_apply(&self, sample: &T) -> bool {
        sample.capabilities().contains_all(self.required)
    }
}

/// Sort `items` by `keys`.
pub fn sort_items<T: MediaCapabilities + Send + Sync>(
    items: Vec<T>,
    keys: &[OrderKey],
) -> Result<Vec<T>> {
    OrderSort::new(keys).sort(items)
}
