//! Error types for the registry release tools.
//!
//! This module defines the fatal error taxonomy shared by the validator and
//! updater binaries. Per-manifest validation problems are not errors; they
//! are accumulated as [`crate::finding::Finding`] values and never abort
//! processing of the remaining manifests.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Fatal errors that abort a validator or updater run.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The manifest schema file does not exist.
    #[error("Schema not found: {path}")]
    SchemaNotFound {
        /// Path where the schema was expected.
        path: Utf8PathBuf,
    },

    /// The schema file exists but could not be decoded or compiled.
    #[error("invalid schema at {path}: {reason}")]
    SchemaInvalid {
        /// Path to the unusable schema document.
        path: Utf8PathBuf,
        /// Description of the decode or compile failure.
        reason: String,
    },

    /// Manifest discovery produced nothing to validate.
    #[error("No manifests found")]
    NoManifestsFound,

    /// The registry index could not be loaded.
    ///
    /// The updater has no create-from-scratch path; an index must already
    /// exist at the given location.
    #[error("failed to load index at {path}: {reason}")]
    IndexLoad {
        /// Path to the index file.
        path: Utf8PathBuf,
        /// Description of the read or decode failure.
        reason: String,
    },

    /// The updated index could not be persisted.
    #[error("failed to write index at {path}: {reason}")]
    IndexWrite {
        /// Path to the index file.
        path: Utf8PathBuf,
        /// Description of the serialization or I/O failure.
        reason: String,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`RegistryError`].
pub type Result<T> = std::result::Result<T, RegistryError>;
