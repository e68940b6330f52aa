//! Registry index data model and release recording.
//!
//! The index is a singleton YAML document mapping module ids to their known
//! versions and artifacts, plus a `generated` timestamp refreshed on every
//! update. All maps preserve insertion order so repeated updates produce
//! minimal diffs for unrelated entries.

use crate::module_type::ModuleType;
use chrono::{SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The only platform currently published to the registry.
pub const PLATFORM_LINUX_AMD64: &str = "linux-amd64";

/// One released artifact for a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// The artifact's filename.
    pub file: String,
    /// Content hash of the artifact, supplied and trusted as-is by the
    /// release pipeline.
    pub sha256: String,
    /// Name of the sigstore bundle sitting next to the artifact.
    pub bundle: String,
}

impl ArtifactRecord {
    /// Build a record for `file`, deriving the bundle name.
    ///
    /// # Examples
    ///
    /// ```
    /// use modreg::index::ArtifactRecord;
    ///
    /// let record = ArtifactRecord::for_file("scanner-1.0.0-linux-amd64.tar.gz", "abc123");
    /// assert_eq!(record.bundle, "scanner-1.0.0-linux-amd64.tar.gz.sigstore.json");
    /// ```
    #[must_use]
    pub fn for_file(file: impl Into<String>, sha256: impl Into<String>) -> Self {
        let file = file.into();
        let bundle = format!("{file}.sigstore.json");
        Self {
            file,
            sha256: sha256.into(),
            bundle,
        }
    }
}

/// One recorded version of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Release tag, derived as `<module_id>-v<version>`.
    pub tag: String,
    /// Artifact records keyed by platform.
    pub artifacts: IndexMap<String, ArtifactRecord>,
}

/// A module's record in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    /// The module's type, fixed when the entry is first created and not
    /// revisited on later updates.
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    /// The most recently recorded version. Last write wins; no version
    /// ordering is applied.
    pub latest: String,
    /// Registry-relative location of the module's published manifest.
    pub manifest_url: String,
    /// Version entries keyed by version string.
    pub versions: IndexMap<String, VersionEntry>,
}

/// The persisted registry index document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIndex {
    /// ISO-8601 UTC timestamp of the last update, refreshed on every run
    /// whether or not module content changed.
    pub generated: String,
    /// Module entries keyed by module id.
    pub modules: IndexMap<String, ModuleEntry>,
}

/// The inputs describing one released artifact to record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Module id the release belongs to.
    pub module_id: String,
    /// Version string being recorded; opaque, no format constraints.
    pub version: String,
    /// The module's type, used only when its entry is first created.
    pub module_type: ModuleType,
    /// Filename of the released artifact.
    pub artifact_file: String,
    /// Content hash of the released artifact, trusted as-is.
    pub artifact_sha256: String,
}

impl Release {
    /// Derive the release tag: `<module_id>-v<version>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use modreg::index::Release;
    /// use modreg::module_type::ModuleType;
    ///
    /// let release = Release {
    ///     module_id: "scanner".into(),
    ///     version: "1.0.0".into(),
    ///     module_type: ModuleType::Abi,
    ///     artifact_file: "scanner-1.0.0-linux-amd64.tar.gz".into(),
    ///     artifact_sha256: "abc123".into(),
    /// };
    /// assert_eq!(release.tag(), "scanner-v1.0.0");
    /// ```
    #[must_use]
    pub fn tag(&self) -> String {
        format!("{}-v{}", self.module_id, self.version)
    }

    /// Derive the registry-relative manifest location for the module.
    #[must_use]
    pub fn manifest_url(&self) -> String {
        format!("manifests/{}.yaml", self.module_id)
    }

    /// Build the version entry to assign under `versions[version]`.
    fn version_entry(&self) -> VersionEntry {
        let mut artifacts = IndexMap::new();
        artifacts.insert(
            PLATFORM_LINUX_AMD64.to_owned(),
            ArtifactRecord::for_file(self.artifact_file.clone(), self.artifact_sha256.clone()),
        );
        VersionEntry {
            tag: self.tag(),
            artifacts,
        }
    }
}

impl RegistryIndex {
    /// Record a release, refreshing `generated` to the current UTC time.
    ///
    /// Known limitation, preserved deliberately: `latest` is overwritten
    /// unconditionally with the release's version. A pipeline that records
    /// releases out of order will regress `latest`; serializing updates in
    /// release order is the caller's responsibility.
    pub fn record(&mut self, release: &Release) {
        self.record_at(release, current_timestamp());
    }

    /// Record a release with an explicit `generated` timestamp.
    ///
    /// Recording the same (module id, version) pair twice replaces the
    /// existing version entry wholesale rather than merging it.
    pub fn record_at(&mut self, release: &Release, generated: String) {
        self.generated = generated;

        let entry = self
            .modules
            .entry(release.module_id.clone())
            .or_insert_with(|| ModuleEntry {
                module_type: release.module_type,
                latest: release.version.clone(),
                manifest_url: release.manifest_url(),
                versions: IndexMap::new(),
            });

        entry.latest = release.version.clone();
        entry
            .versions
            .insert(release.version.clone(), release.version_entry());

        log::debug!(
            "recorded {} v{} ({} version(s) known)",
            release.module_id,
            release.version,
            entry.versions.len()
        );
    }
}

/// The current UTC time as an ISO-8601 string with a `Z` suffix.
#[must_use]
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
