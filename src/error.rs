//! Error types for the Cocina to MODS write path.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`VocabularyError`] - fixed lookup-table misses
//! - [`XmlError`] - XML serialization failures
//! - [`WriteError`] - top-level write orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Only genuinely unrecoverable shape violations surface through these
//! types. Data-quality problems (unknown note type, suppressed role) are
//! reported as [`crate::diagnostics::Notice`]s and never abort a write.

use thiserror::Error;

// =============================================================================
// Vocabulary Errors
// =============================================================================

/// Errors from the fixed vocabulary tables.
///
/// A miss means the input carries a type the MODS mapping does not know.
/// Callers should treat this as a data-quality bug to fix upstream, not a
/// recoverable runtime condition.
#[derive(Debug, Error, PartialEq)]
pub enum VocabularyError {
    /// Unknown contributor/name type.
    #[error("Unknown name type: {0}")]
    UnknownNameType(String),

    /// Unknown structured-title sub-part type.
    #[error("Unknown title part type: {0}")]
    UnknownTitlePartType(String),

    /// Unknown related-resource type.
    #[error("Unknown related resource type: {0}")]
    UnknownRelatedResourceType(String),
}

// =============================================================================
// XML Errors
// =============================================================================

/// Errors during XML serialization.
#[derive(Debug, Error)]
pub enum XmlError {
    /// Underlying writer failure.
    #[error("XML write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Output was not valid UTF-8.
    #[error("XML output encoding error: {0}")]
    Encoding(String),
}

// =============================================================================
// Write Errors (top-level)
// =============================================================================

/// Top-level errors from the descriptive write.
///
/// This is the main error type returned by
/// [`crate::write::write_descriptive`]. A `Vocabulary` variant aborts the
/// write of the top-level collection that triggered it.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Vocabulary lookup miss.
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// A structured value with no usable sub-parts at all.
    #[error("Structured {0} has no recognizable sub-parts")]
    EmptyStructuredValue(&'static str),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for vocabulary lookups.
pub type VocabResult<T> = Result<T, VocabularyError>;

/// Result type for XML serialization.
pub type XmlResult<T> = Result<T, XmlError>;

/// Result type for write operations.
pub type WriteResult<T> = Result<T, WriteError>;
