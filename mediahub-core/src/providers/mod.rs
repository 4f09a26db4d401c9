//! Reference provider implementations.

pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::MemoryLibrary;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteLibrary;
