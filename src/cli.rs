//! CLI argument definitions for the registry release tools.
//!
//! This module defines both binaries' interfaces using clap. It is
//! separated from the entrypoints to keep each binary small and focused on
//! orchestration.

use crate::module_type::ModuleType;
use camino::Utf8PathBuf;
use clap::Parser;

/// Validate module manifests against the registry schema.
#[derive(Parser, Debug, Clone)]
#[command(name = "check-manifests")]
#[command(version, about)]
#[command(long_about = concat!(
    "Validate module manifests against the registry schema.\n\n",
    "Every manifest.yaml under the modules directory is checked against the ",
    "shared JSON-Schema contract plus the registry's semantic rules: the ",
    "manifest id must match its directory name, and the declared module type ",
    "must come with a correspondingly named section.\n\n",
    "Pass --manifest to check a single file instead of discovering manifests.",
))]
pub struct CheckArgs {
    /// Path to the manifest schema document.
    #[arg(long, value_name = "PATH", default_value = "pages/manifests/schema.yaml")]
    pub schema: Utf8PathBuf,

    /// Root directory to discover manifests under.
    #[arg(long, value_name = "DIR", default_value = "modules")]
    pub modules_dir: Utf8PathBuf,

    /// Validate a single manifest instead of discovering.
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<Utf8PathBuf>,
}

/// Record a released artifact in the registry index.
#[derive(Parser, Debug, Clone)]
#[command(name = "update-index")]
#[command(about, disable_version_flag = true)]
#[command(long_about = concat!(
    "Record a released artifact in the registry index.\n\n",
    "Loads the index, inserts or updates the module's version record, ",
    "refreshes the generated timestamp, and writes the index back ",
    "atomically. The index file must already exist; this tool never ",
    "creates one from scratch.",
))]
pub struct UpdateArgs {
    /// Id of the released module.
    #[arg(long, value_name = "ID")]
    pub module_id: String,

    /// Version string being recorded.
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// The module's type.
    #[arg(long, value_enum, value_name = "TYPE")]
    pub module_type: ModuleType,

    /// Filename of the released artifact.
    #[arg(long, value_name = "FILE")]
    pub artifact_name: String,

    /// SHA-256 hash of the released artifact, recorded as supplied.
    #[arg(long, value_name = "SHA256")]
    pub artifact_hash: String,

    /// Path to the registry index file.
    #[arg(long, value_name = "PATH", default_value = "pages/index.yaml")]
    pub index_path: Utf8PathBuf,
}
