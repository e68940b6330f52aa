//! End-to-end release flow scenarios over the public API.
//!
//! Covers the validate-then-update pipeline: manifest discovery and
//! validation against a schema file on disk, followed by recording released
//! artifacts into a persisted index.

use camino::{Utf8Path, Utf8PathBuf};
use modreg::discovery::find_manifests;
use modreg::index::{Release, PLATFORM_LINUX_AMD64};
use modreg::index_store::{load_index, save_index};
use modreg::module_type::ModuleType;
use modreg::schema::ManifestSchema;
use modreg::validator::validate_manifest;
use rstest::{fixture, rstest};
use tempfile::TempDir;

const SCHEMA: &str = concat!(
    "$schema: http://json-schema.org/draft-07/schema#\n",
    "type: object\n",
    "required: [id, type]\n",
    "properties:\n",
    "  id: {type: string}\n",
    "  type: {enum: [abi, container, grpc]}\n",
);

struct Registry {
    _temp: TempDir,
    root: Utf8PathBuf,
}

impl Registry {
    fn schema(&self) -> ManifestSchema {
        let path = self.root.join("schema.yaml");
        std::fs::write(&path, SCHEMA).expect("write schema");
        ManifestSchema::load(&path).expect("schema loads")
    }

    fn modules_dir(&self) -> Utf8PathBuf {
        self.root.join("modules")
    }

    fn write_manifest(&self, module_dir: &str, contents: &str) {
        let dir = self.modules_dir().join(module_dir);
        std::fs::create_dir_all(&dir).expect("create module dir");
        std::fs::write(dir.join("manifest.yaml"), contents).expect("write manifest");
    }

    fn index_path(&self) -> Utf8PathBuf {
        self.root.join("index.yaml")
    }

    fn seed_index(&self) -> Utf8PathBuf {
        let path = self.index_path();
        std::fs::write(&path, "generated: 2020-01-01T00:00:00Z\nmodules: {}\n")
            .expect("write index");
        path
    }
}

#[fixture]
fn registry() -> Registry {
    let temp = TempDir::new().expect("create temp dir");
    let root = Utf8Path::from_path(temp.path())
        .expect("temp path is UTF-8")
        .to_owned();
    std::fs::create_dir_all(root.join("modules")).expect("create modules dir");
    Registry { _temp: temp, root }
}

fn release(module_id: &str, version: &str, hash: &str) -> Release {
    Release {
        module_id: module_id.to_owned(),
        version: version.to_owned(),
        module_type: ModuleType::Abi,
        artifact_file: format!("{module_id}-{version}-linux-amd64.tar.gz"),
        artifact_sha256: hash.to_owned(),
    }
}

#[rstest]
fn clean_module_tree_validates_without_findings(registry: Registry) {
    registry.write_manifest("scanner", "id: scanner\ntype: abi\nabi:\n  entry: run\n");
    registry.write_manifest("probe", "id: probe\ntype: grpc\ngrpc:\n  port: 50051\n");

    let schema = registry.schema();
    let manifests = find_manifests(&registry.modules_dir());
    assert_eq!(manifests.len(), 2);

    for manifest in &manifests {
        let findings = validate_manifest(manifest, &schema);
        assert!(findings.is_empty(), "{manifest}: {findings:?}");
    }
}

#[rstest]
fn mixed_tree_reports_findings_per_manifest(registry: Registry) {
    registry.write_manifest("scanner", "id: scanner\ntype: abi\nabi: {}\n");
    registry.write_manifest("rogue", "id: scanner\ntype: container\n");
    registry.write_manifest("broken", "id: [unclosed\n");

    let schema = registry.schema();
    let manifests = find_manifests(&registry.modules_dir());
    assert_eq!(manifests.len(), 3);

    let mut failed = 0;
    for manifest in &manifests {
        let findings = validate_manifest(manifest, &schema);
        let dir = manifest
            .parent()
            .and_then(Utf8Path::file_name)
            .expect("module dir");
        match dir {
            "scanner" => assert!(findings.is_empty()),
            "rogue" => {
                // Identity mismatch plus the missing container section.
                assert_eq!(findings.len(), 2);
                assert!(findings[0].message().contains("does not match directory name"));
                assert_eq!(
                    findings[1].message(),
                    "Type 'container' requires 'container' section"
                );
            }
            "broken" => {
                assert_eq!(findings.len(), 1);
                assert!(findings[0].message().starts_with("YAML parse error:"));
            }
            other => panic!("unexpected module dir {other}"),
        }
        if !findings.is_empty() {
            failed += 1;
        }
    }
    assert_eq!(failed, 2);
}

#[rstest]
fn recording_a_release_populates_the_persisted_index(registry: Registry) {
    let path = registry.seed_index();

    let mut index = load_index(&path).expect("index loads");
    index.record(&release("scanner", "1.0.0", "abc123"));
    save_index(&path, &index).expect("index saves");

    let reloaded = load_index(&path).expect("index reloads");
    assert!(reloaded.generated.as_str() > "2020-01-01T00:00:00Z");

    let entry = reloaded.modules.get("scanner").expect("scanner entry");
    assert_eq!(entry.module_type, ModuleType::Abi);
    assert_eq!(entry.latest, "1.0.0");
    assert_eq!(entry.manifest_url, "manifests/scanner.yaml");
    assert_eq!(entry.versions.len(), 1);

    let version = entry.versions.get("1.0.0").expect("version entry");
    assert_eq!(version.tag, "scanner-v1.0.0");

    let artifact = version
        .artifacts
        .get(PLATFORM_LINUX_AMD64)
        .expect("artifact record");
    assert_eq!(artifact.file, "scanner-1.0.0-linux-amd64.tar.gz");
    assert_eq!(artifact.sha256, "abc123");
    assert_eq!(artifact.bundle, "scanner-1.0.0-linux-amd64.tar.gz.sigstore.json");
}

#[rstest]
fn re_recording_touches_only_the_target_module_and_timestamp(registry: Registry) {
    let path = registry.seed_index();

    let mut index = load_index(&path).expect("index loads");
    index.record_at(&release("scanner", "1.0.0", "abc123"), "2026-01-02T00:00:00Z".to_owned());
    index.record_at(&release("probe", "2.1.0", "fed789"), "2026-01-02T00:00:01Z".to_owned());
    save_index(&path, &index).expect("index saves");
    let before = std::fs::read_to_string(&path).expect("read index");

    let mut index = load_index(&path).expect("index reloads");
    index.record_at(&release("scanner", "1.0.0", "def456"), "2026-01-03T00:00:00Z".to_owned());
    save_index(&path, &index).expect("index saves again");
    let after = std::fs::read_to_string(&path).expect("read updated index");

    // Only the timestamp and scanner's hash change; every other line,
    // including probe's whole entry, is byte-for-byte identical.
    let before_lines: Vec<&str> = before.lines().collect();
    let after_lines: Vec<&str> = after.lines().collect();
    assert_eq!(before_lines.len(), after_lines.len());
    for (b, a) in before_lines.iter().zip(&after_lines) {
        if b != a {
            assert!(
                b.contains("generated:") || b.contains("sha256:"),
                "unexpected diff: {b:?} -> {a:?}"
            );
        }
    }

    let reloaded = load_index(&path).expect("final reload");
    let scanner = reloaded.modules.get("scanner").expect("scanner entry");
    assert_eq!(scanner.versions.len(), 1);
    assert_eq!(
        scanner.versions["1.0.0"].artifacts[PLATFORM_LINUX_AMD64].sha256,
        "def456"
    );
}

#[rstest]
fn out_of_order_updates_regress_latest_by_design(registry: Registry) {
    let path = registry.seed_index();

    let mut index = load_index(&path).expect("index loads");
    index.record(&release("scanner", "2.0.0", "abc123"));
    index.record(&release("scanner", "1.9.0", "def456"));
    save_index(&path, &index).expect("index saves");

    let reloaded = load_index(&path).expect("index reloads");
    let entry = reloaded.modules.get("scanner").expect("scanner entry");
    assert_eq!(entry.latest, "1.9.0");
    assert_eq!(entry.versions.len(), 2);
}
