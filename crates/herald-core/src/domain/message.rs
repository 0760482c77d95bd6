//! Composed messages: a machine-readable payload followed by display text.
//!
//! The wire form is `payload + DELIMITER + display_text`. The delimiter starts
//! and ends with a newline, which a JSON payload can only contain as
//! insignificant whitespace, so splitting at the first delimiter recovers a
//! JSON payload exactly.

use std::fmt;

use crate::domain::error::DomainError;

/// Separator between payload and display text.
pub const DELIMITER: &str = "\n~~~\n";

/// Join `payload` and `display_text` with [`DELIMITER`].
///
/// ```
/// use herald_core::domain::{DELIMITER, compose};
///
/// let wire = compose("Hello everyone. We have a new baby.", "{fake: 4}");
/// assert_eq!(wire, format!("{{fake: 4}}{DELIMITER}Hello everyone. We have a new baby."));
/// ```
pub fn compose(display_text: &str, payload: &str) -> String {
    let mut out = String::with_capacity(payload.len() + DELIMITER.len() + display_text.len());
    out.push_str(payload);
    out.push_str(DELIMITER);
    out.push_str(display_text);
    out
}

/// A payload and the human-readable text shown alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    payload: String,
    display_text: String,
}

impl Message {
    pub fn new(payload: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            display_text: display_text.into(),
        }
    }

    /// Split a composed message at the first [`DELIMITER`].
    ///
    /// # Errors
    ///
    /// [`DomainError::MissingDelimiter`] if `raw` contains no delimiter.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let (payload, display_text) = raw
            .split_once(DELIMITER)
            .ok_or(DomainError::MissingDelimiter)?;
        Ok(Self::new(payload, display_text))
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// The wire form, see [`compose`].
    pub fn compose(&self) -> String {
        compose(&self.display_text, &self.payload)
    }

    pub fn into_parts(self) -> (String, String) {
        (self.payload, self.display_text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.payload, DELIMITER, self.display_text)
    }
}
