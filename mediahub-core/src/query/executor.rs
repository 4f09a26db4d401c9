//! Lazy query execution
//!
//! The executor validates a descriptor against the item type, then either
//! forwards it to the provider's native query surface or materialises the
//! whole collection and filters, sorts and slices it in memory. Both paths
//! produce the same sequence for the same data.

use mediahub_contracts::{CatalogItem, ItemSource, Result};
use mediahub_model::QueryDescriptor;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::filtering::filter_items;
use super::sorting::sort_items;
use super::validation::validate;

/// Which execution paths the executor may use
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionPolicy {
    /// Push down whenever the provider offers a native query surface
    #[default]
    PreferNative,
    /// Always evaluate in memory
    InMemoryOnly,
}

/// The execution path chosen for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Filtering, ordering and range run inside the backing store
    PushDown,
    /// Full materialisation followed by in-memory evaluation
    InMemory,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryExecutor {
    policy: ExecutionPolicy,
}

impl QueryExecutor {
    pub fn new(policy: ExecutionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ExecutionPolicy {
        self.policy
    }

    pub fn mode_for<T: CatalogItem>(
        &self,
        source: &dyn ItemSource<T>,
    ) -> ExecutionMode {
        match (self.policy, source.native().is_some()) {
            (ExecutionPolicy::PreferNative, true) => ExecutionMode::PushDown,
            _ => ExecutionMode::InMemory,
        }
    }

    /// Evaluate `descriptor` over `source`.
    pub async fn execute<T: CatalogItem>(
        &self,
        source: &dyn ItemSource<T>,
        descriptor: &QueryDescriptor,
    ) -> Result<Vec<T>> {
        validate::<T>(descriptor)?;

        let mode = self.mode_for(source);
        debug!(
            kind = %T::KIND,
            ?mode,
            predicates = descriptor.predicates.len(),
            range = ?descriptor.range,
            "executing query"
        );

        match (mode, source.native()) {
            (ExecutionMode::PushDown, Some(native)) => {
                native.fetch(descriptor).await
            }
            _ => evaluate_in_memory(source.all().await?, descriptor),
        }
    }

    /// Number of items matching the predicates of `descriptor`. Order and
    /// range do not affect the count.
    pub async fn count<T: CatalogItem>(
        &self,
        source: &dyn ItemSource<T>,
        descriptor: &QueryDescriptor,
    ) -> Result<u64> {
        validate::<T>(descriptor)?;

        match (self.mode_for(source), source.native()) {
            (ExecutionMode::PushDown, Some(native)) => {
                native.count(descriptor).await
            }
            _ => {
                let items = source.all().await?;
                Ok(filter_items(items, &descriptor.predicates).len() as u64)
            }
        }
    }
}

/// Filter, order, then slice an already materialised collection.
pub fn evaluate_in_memory<T: CatalogItem>(
    items: Vec<T>,
    descriptor: &QueryDescriptor,
) -> Result<Vec<T>> {
    let filtered = filter_items(items, &descriptor.predicates);
    let ordered = sort_items(filtered, descriptor.effective_order())?;
    Ok(match descriptor.range {
        Some(range) => range.slice(ordered),
        None => ordered,
    })
}
