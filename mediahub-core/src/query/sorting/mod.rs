//! In-memory ordering for catalogue items
//!
//! This module provides:
//! - Sort key extraction with missing-last comparison
//! - The capability-checked sort strategy used by the executor's fallback path

pub mod keys;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use keys::*;
pub use strategy::*;
