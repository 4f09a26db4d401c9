//! Backend-agnostic query descriptors: filter predicates, ordering and a
//! result range, described once and lowered by each backend.

pub mod builder;
pub mod types;
pub mod visitor;

pub use builder::QueryDescriptorBuilder;
pub use types::*;
pub use visitor::DescriptorVisitor;
