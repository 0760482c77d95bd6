//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `herald-adapters` crate provides implementations.

use crate::domain::Values;
use crate::error::HeraldResult;

/// Port for substitution values.
///
/// Implemented by:
/// - `herald_adapters::value_source::FileValueSource` (JSON / TOML files)
/// - `herald_adapters::value_source::InMemoryValueSource` (`--set` pairs, testing)
///
/// ## Design Notes
///
/// - Sources are loaded on every call; nothing is cached here
/// - Merge order is owned by `MessageService`, not by the sources
#[cfg_attr(test, mockall::automock)]
pub trait ValueSource: Send + Sync {
    /// Short human-readable name used in logs and errors (e.g. a file path).
    fn describe(&self) -> String;

    /// Load the full substitution map.
    fn load(&self) -> HeraldResult<Values>;
}
