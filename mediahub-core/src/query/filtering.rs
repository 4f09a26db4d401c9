//! In-memory predicate evaluation.
//!
//! Genre and category predicates test exact, case-sensitive membership in the
//! item's multi-valued set. Relation predicates compare the parent id. All
//! predicates of a descriptor must hold.

use mediahub_contracts::{CatalogItem, MediaCapabilities};
use mediahub_model::Predicate;

pub fn matches<T: CatalogItem>(item: &T, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::GenreContains(genre) => {
            item.genres().iter().any(|value| value == genre)
        }
        Predicate::CategoryContains(category) => {
            item.categories().iter().any(|value| value == category)
        }
        Predicate::RelatedTo { relation, id } => {
            item.parent(*relation) == Some(id.as_str())
        }
        Predicate::IdEquals(id) => CatalogItem::id(item) == id.as_str(),
    }
}

pub fn matches_all<T: CatalogItem>(item: &T, predicates: &[Predicate]) -> bool {
    predicates.iter().all(|predicate| matches(item, predicate))
}

/// Keep the items satisfying every predicate, preserving their order.
pub fn filter_items<T: CatalogItem>(
    items: Vec<T>,
    predicates: &[Predicate],
) -> Vec<T> {
    if predicates.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| matches_all(item, predicates))
        .collect()
}
