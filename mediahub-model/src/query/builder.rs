use super::types::*;
use crate::domain::Relation;

/// Fluent API for building query descriptors
#[derive(Debug, Clone, Default)]
pub struct QueryDescriptorBuilder {
    descriptor: QueryDescriptor,
}

impl QueryDescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // === Filter methods ===

    /// Keep items whose genre set contains `genre`
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.descriptor
            .predicates
            .push(Predicate::GenreContains(genre.into()));
        self
    }

    /// Keep items whose category set contains `category`
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.descriptor
            .predicates
            .push(Predicate::CategoryContains(category.into()));
        self
    }

    /// Keep items whose parent link equals `id`
    pub fn related_to(
        mut self,
        relation: Relation,
        id: impl Into<String>,
    ) -> Self {
        self.descriptor.predicates.push(Predicate::RelatedTo {
            relation,
            id: id.into(),
        });
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.descriptor.predicates.push(Predicate::IdEquals(id.into()));
        self
    }

    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.descriptor.predicates.push(predicate);
        self
    }

    // === Sort methods ===

    /// Replace the ordering with a single primary key
    pub fn sort_by(mut self, sort_by: SortBy, order: SortOrder) -> Self {
        self.descriptor.order = vec![OrderKey::new(sort_by, order)];
        self
    }

    /// Append a tie-breaking key
    pub fn then_by(mut self, sort_by: SortBy, order: SortOrder) -> Self {
        self.descriptor.order.push(OrderKey::new(sort_by, order));
        self
    }

    // === Range methods ===

    pub fn range(mut self, range: Range) -> Self {
        self.descriptor.range = Some(range);
        self
    }

    pub fn maybe_range(mut self, range: Option<Range>) -> Self {
        self.descriptor.range = range;
        self
    }

    pub fn build(self) -> QueryDescriptor {
        self.descriptor
    }
}
