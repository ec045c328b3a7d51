// src/error.rs

/// Everything that can stop a single record from being extracted.
///
/// Shape errors (`MissingField`, `TypeMismatch`, `InvalidValue`) mean the
/// document does not look the way the path table expects. `UnknownKey` means
/// a lookup table is out of date (new in-game item), which is fixed by
/// refreshing data rather than code.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("Missing field: {path}")]
    MissingField { path: String },
    #[error("Wrong type at {path}: expected {expected}")]
    TypeMismatch { path: String, expected: &'static str },
    #[error("Unknown key in {table} table: {key}")]
    UnknownKey { table: &'static str, key: String },
    #[error("Could not decode {input:?}: {reason}")]
    Decode { input: String, reason: String },
    #[error("Could not detect battle mode: {reason}")]
    ModeDetection { reason: String },
    #[error("Invalid value at {path}: {reason}")]
    InvalidValue { path: String, reason: String },
    #[error("Bad lookup data: {0}")]
    LookupData(String),
    #[error("Bad config: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    pub(crate) fn decode(input: &str, reason: impl Into<String>) -> Self {
        ExtractError::Decode { input: input.to_string(), reason: reason.into() }
    }

    pub(crate) fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ExtractError::InvalidValue { path: path.into(), reason: reason.into() }
    }

    pub(crate) fn unknown(table: &'static str, key: &str) -> Self {
        ExtractError::UnknownKey { table, key: key.to_string() }
    }

    /// True when the failure means lookup data needs refreshing.
    pub fn is_stale_lookup(&self) -> bool {
        matches!(self, ExtractError::UnknownKey { .. })
    }

    /// True when the document itself is malformed or shaped unexpectedly.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            ExtractError::MissingField { .. }
                | ExtractError::TypeMismatch { .. }
                | ExtractError::InvalidValue { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
