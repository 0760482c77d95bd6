//! Value source adapters.

pub mod file;
pub mod memory;

pub use file::{FileValueSource, ValueFormat};
pub use memory::InMemoryValueSource;
