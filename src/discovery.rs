//! Recursive manifest discovery under a modules root.
//!
//! When the validator is not given an explicit manifest path, it checks
//! every `manifest.yaml` found anywhere under the modules directory. The
//! traversal order is whatever the glob engine yields (lexicographic per
//! directory), which is stable within a run.

use camino::{Utf8Path, Utf8PathBuf};

/// The fixed filename discovery matches on.
pub const MANIFEST_FILE_NAME: &str = "manifest.yaml";

/// Find every manifest file under `modules_dir`, recursively.
///
/// Unreadable directory entries and non-UTF-8 paths are skipped rather than
/// failing the run; an empty result is the caller's signal that there was
/// nothing to validate.
#[must_use]
pub fn find_manifests(modules_dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    let pattern = format!("{modules_dir}/**/{MANIFEST_FILE_NAME}");
    let Ok(paths) = glob::glob(&pattern) else {
        return Vec::new();
    };

    let mut manifests = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => match Utf8PathBuf::from_path_buf(path) {
                Ok(path) => manifests.push(path),
                Err(path) => log::debug!("skipping non-UTF-8 path {}", path.display()),
            },
            Err(e) => log::debug!("skipping unreadable entry during discovery: {e}"),
        }
    }

    log::debug!("discovered {} manifest(s) under {modules_dir}", manifests.len());
    manifests
}
