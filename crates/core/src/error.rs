//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The dashboard core is total over well-formed input, so this stays small:
/// unknown option strings coming from the calling layer, and the few
/// parameters that have no sensible degenerate value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A status filter or sort key string was not recognized.
    #[error("unknown {kind}: {value:?}")]
    UnknownOption { kind: &'static str, value: String },

    /// A value failed validation (e.g. zero page size).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn unknown_option(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            kind,
            value: value.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
