//! Application layer for Herald.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (MessageService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! template logic itself. All substitution rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{MessageService, Rendered};

// Re-export port traits (for adapter implementation)
pub use ports::ValueSource;

pub use error::ApplicationError;
