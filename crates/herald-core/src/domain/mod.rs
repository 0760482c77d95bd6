//! Domain layer for Herald.
//!
//! Pure logic with no I/O:
//!
//! - [`Template`]: parsed `${name}` templates and the [`interpolate`] entry point
//! - [`Values`]: the substitution map, plus the [`Lookup`] abstraction
//! - [`Message`]: payload + display text joined by [`DELIMITER`]

pub mod error;
pub mod message;
pub mod template;
pub mod values;

pub use error::DomainError;
pub use message::{DELIMITER, Message, compose};
pub use template::{Segment, Template, interpolate};
pub use values::{Lookup, Values};
