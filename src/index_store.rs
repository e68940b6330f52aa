//! Registry index loading and atomic persistence.
//!
//! The index is modelled as an explicit load, mutate-in-memory, write
//! sequence. A run either fully replaces the index file or leaves it
//! untouched: the updated document is written to a temporary file in the
//! index's parent directory and renamed into place.

use crate::error::{RegistryError, Result};
use crate::index::RegistryIndex;
use camino::Utf8Path;
use std::io::Write;
use tempfile::NamedTempFile;

/// Load the index document at `path`.
///
/// # Errors
///
/// Returns [`RegistryError::IndexLoad`] when the file is missing or cannot
/// be decoded. There is no create-from-scratch path; an index must already
/// exist.
pub fn load_index(path: &Utf8Path) -> Result<RegistryIndex> {
    let text = std::fs::read_to_string(path).map_err(|e| RegistryError::IndexLoad {
        path: path.to_owned(),
        reason: e.to_string(),
    })?;
    serde_yaml::from_str(&text).map_err(|e| RegistryError::IndexLoad {
        path: path.to_owned(),
        reason: e.to_string(),
    })
}

/// Persist the full index document back to `path`.
///
/// Serialization is block-style YAML with declaration-order fields and
/// insertion-order maps, so repeated runs produce minimal diffs for
/// unrelated entries.
///
/// # Errors
///
/// Returns [`RegistryError::IndexWrite`] when serialization, the temporary
/// file write, or the final rename fails. On failure the existing index
/// file is left untouched.
pub fn save_index(path: &Utf8Path, index: &RegistryIndex) -> Result<()> {
    let text = serde_yaml::to_string(index).map_err(|e| write_error(path, e.to_string()))?;

    // The temp file must live in the same directory as the index so the
    // final rename stays on one filesystem.
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| write_error(path, e.to_string()))?;
    temp.write_all(text.as_bytes())
        .map_err(|e| write_error(path, e.to_string()))?;
    temp.persist(path.as_std_path())
        .map_err(|e| write_error(path, e.to_string()))?;

    Ok(())
}

fn write_error(path: &Utf8Path, reason: String) -> RegistryError {
    RegistryError::IndexWrite {
        path: path.to_owned(),
        reason,
    }
}
