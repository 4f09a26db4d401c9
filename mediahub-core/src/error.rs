pub use mediahub_contracts::error::{BoxError, CatalogError, ErrorKind, Result};
