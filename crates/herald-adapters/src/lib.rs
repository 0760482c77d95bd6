//! Infrastructure adapters for Herald.
//!
//! This crate implements the ports defined in `herald-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod value_source;

// Re-export commonly used adapters
pub use value_source::{FileValueSource, InMemoryValueSource, ValueFormat};
