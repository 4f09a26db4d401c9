use mediahub_contracts::{CatalogError, CatalogItem, Result};
use mediahub_model::QueryDescriptor;
use tracing::warn;

use super::sorting::OrderSort;

/// Check a descriptor against the static capabilities of `T`.
///
/// Runs before either execution path so push-down and in-memory evaluation
/// reject the same descriptors, even over empty collections.
pub fn validate<T: CatalogItem>(descriptor: &QueryDescriptor) -> Result<()> {
    for predicate in &descriptor.predicates {
        let supported = match predicate.required_capability() {
            Some(capability) => T::CAPABILITIES.contains(capability),
            None => match predicate {
                mediahub_model::Predicate::RelatedTo { relation, .. } => {
                    T::KIND.relations().contains(relation)
                }
                _ => true,
            },
        };
        if !supported {
            warn!(item = T::ITEM_NAME, ?predicate, "unsupported filter");
            return Err(CatalogError::UnsupportedFilter {
                predicate: predicate.clone(),
                item: T::ITEM_NAME,
            });
        }
    }

    OrderSort::new(descriptor.effective_order()).check::<T>(T::CAPABILITIES)
}
