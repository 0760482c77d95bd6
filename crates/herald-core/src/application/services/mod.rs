//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "render a template with these value files".

pub mod message_service;

pub use message_service::{MessageService, Rendered};
