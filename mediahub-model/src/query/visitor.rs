use super::types::{OrderKey, Predicate, Range};

/// Lowers a [`QueryDescriptor`](super::QueryDescriptor) into a backend's
/// native query form.
///
/// [`QueryDescriptor::accept`](super::QueryDescriptor::accept) calls
/// `visit_predicate` once per predicate, then `visit_order` with the effective
/// order, then `visit_range`.
pub trait DescriptorVisitor {
    type Error;

    fn visit_predicate(&mut self, predicate: &Predicate)
    -> Result<(), Self::Error>;

    fn visit_order(&mut self, keys: &[OrderKey]) -> Result<(), Self::Error>;

    fn visit_range(&mut self, range: Option<Range>) -> Result<(), Self::Error>;
}
