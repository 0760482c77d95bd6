//! File-backed value source.
//!
//! Reads a flat map of placeholder values from disk. The format comes from
//! the file extension: `.toml` is TOML, everything else is JSON.
//!
//! ```json
//! { "name": "David", "age": 95, "verified": true }
//! ```
//!
//! ```toml
//! name     = "David"
//! age      = 95
//! verified = true
//! ```
//!
//! Strings are used verbatim; numbers, booleans (and TOML datetimes) are
//! stringified. Nulls, arrays and nested objects are rejected.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, instrument};

use herald_core::{
    application::{ApplicationError, ports::ValueSource},
    domain::{DomainError, Values},
    error::{HeraldError, HeraldResult},
};

/// On-disk encoding of a value file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Json,
    Toml,
}

impl ValueFormat {
    /// `.toml` (any case) is TOML, everything else JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Toml(#[from] toml::de::Error),

    #[error("top level must be an object of values")]
    NotAMap,

    #[error("{kind} is not a supported value")]
    Unsupported { key: String, kind: &'static str },
}

impl LoadError {
    fn into_herald(self, source_name: String) -> HeraldError {
        match self {
            Self::Io(e) => ApplicationError::SourceUnavailable {
                source_name,
                reason: e.to_string(),
            }
            .into(),
            Self::Unsupported { key, kind } => DomainError::InvalidValues {
                key,
                reason: format!("{kind} is not a supported value"),
            }
            .into(),
            other => ApplicationError::SourceFormat {
                source_name,
                reason: other.to_string(),
            }
            .into(),
        }
    }
}

/// Loads values from a JSON or TOML file on every [`ValueSource::load`].
#[derive(Debug, Clone)]
pub struct FileValueSource {
    path: PathBuf,
    format: ValueFormat,
}

impl FileValueSource {
    /// Create a source, inferring the format from the extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = ValueFormat::from_path(&path);
        Self { path, format }
    }

    /// Create a source with an explicit format.
    pub fn with_format(path: impl Into<PathBuf>, format: ValueFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ValueFormat {
        self.format
    }

    fn read(&self) -> Result<Values, LoadError> {
        let text = fs::read_to_string(&self.path)?;
        match self.format {
            ValueFormat::Json => parse_json(&text),
            ValueFormat::Toml => parse_toml(&text),
        }
    }
}

impl ValueSource for FileValueSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip_all, fields(path = %self.path.display(), format = ?self.format))]
    fn load(&self) -> HeraldResult<Values> {
        let values = self.read().map_err(|e| e.into_herald(self.describe()))?;
        debug!(count = values.len(), "value file loaded");
        Ok(values)
    }
}

fn parse_json(text: &str) -> Result<Values, LoadError> {
    use serde_json::Value;

    let Value::Object(map) = serde_json::from_str::<Value>(text)? else {
        return Err(LoadError::NotAMap);
    };

    map.into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => return Err(LoadError::Unsupported { key, kind: "null" }),
                Value::Array(_) => return Err(LoadError::Unsupported { key, kind: "array" }),
                Value::Object(_) => return Err(LoadError::Unsupported { key, kind: "object" }),
            };
            Ok((key, text))
        })
        .collect()
}

fn parse_toml(text: &str) -> Result<Values, LoadError> {
    use toml::Value;

    let table: toml::Table = toml::from_str(text)?;

    table
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Integer(i) => i.to_string(),
                Value::Float(f) => f.to_string(),
                Value::Boolean(b) => b.to_string(),
                Value::Datetime(d) => d.to_string(),
                Value::Array(_) => return Err(LoadError::Unsupported { key, kind: "array" }),
                Value::Table(_) => return Err(LoadError::Unsupported { key, kind: "table" }),
            };
            Ok((key, text))
        })
        .collect()
}
