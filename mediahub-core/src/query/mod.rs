pub mod executor;
pub mod filtering;
pub mod sorting;
pub mod validation;

pub use executor::{
    ExecutionMode, ExecutionPolicy, QueryExecutor, evaluate_in_memory,
};
pub use filtering::{filter_items, matches, matches_all};
pub use sorting::*;
pub use validation::validate;
