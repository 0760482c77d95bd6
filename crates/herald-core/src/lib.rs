//! Herald Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Herald, a
//! message template interpolator and payload composer, following hexagonal
//! (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           herald-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (MessageService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: ValueSource)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     herald-adapters (Infrastructure)    │
//! │ (FileValueSource, InMemoryValueSource)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │       (Template, Values, Message)       │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use herald_core::prelude::*;
//!
//! let values: Values = [("name", "David"), ("age", "95")].into_iter().collect();
//!
//! let text = interpolate("Hello ${name}. You are ${age} years old.", &values);
//! assert_eq!(text, "Hello David. You are 95 years old.");
//!
//! let wire = compose(&text, "{\"kind\":\"greeting\"}");
//! let message = Message::parse(&wire).unwrap();
//! assert_eq!(message.display_text(), text);
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{MessageService, ports::ValueSource};
    pub use crate::domain::{
        DELIMITER, Lookup, Message, Segment, Template, Values, compose, interpolate,
    };
    pub use crate::error::{HeraldError, HeraldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
