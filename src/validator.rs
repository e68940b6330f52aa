//! The per-manifest validation pass.
//!
//! A manifest is decoded into a generic structured value and checked in a
//! fixed order: YAML decode, schema conformance, identity (the `id` field
//! must match the manifest's parent directory name), and type completeness
//! (the declared `type` requires a correspondingly named top-level section).
//! A decode failure short-circuits the pass with a single finding; all
//! other checks accumulate.

use crate::finding::Finding;
use crate::module_type::ModuleType;
use crate::schema::ManifestSchema;
use camino::Utf8Path;
use serde_json::Value;

/// Validate the manifest at `path` against the compiled schema and the
/// cross-cutting semantic rules.
///
/// Returns the accumulated findings in production order; an empty vector
/// means the manifest is valid. Problems are always local to this one
/// manifest and never abort a wider run.
#[must_use]
pub fn validate_manifest(path: &Utf8Path, schema: &ManifestSchema) -> Vec<Finding> {
    let document = match decode_manifest(path) {
        Ok(document) => document,
        Err(finding) => return vec![finding],
    };

    let mut findings = schema.violations(&document);
    check_identity(path, &document, &mut findings);
    check_type_sections(&document, &mut findings);

    log::debug!("{path}: {} finding(s)", findings.len());
    findings
}

/// Decode the manifest file into a generic document value.
fn decode_manifest(path: &Utf8Path) -> Result<Value, Finding> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Finding::document(format!("failed to read manifest: {e}")))?;
    serde_yaml::from_str(&text).map_err(|e| Finding::document(format!("YAML parse error: {e}")))
}

/// A non-empty `id` field must equal the manifest's parent directory name.
///
/// An absent or empty `id` skips the check; the schema pass already reports
/// that class of problem.
fn check_identity(path: &Utf8Path, document: &Value, findings: &mut Vec<Finding>) {
    let Some(id) = document.get("id").and_then(Value::as_str) else {
        return;
    };
    if id.is_empty() {
        return;
    }
    let Some(dir_name) = path.parent().and_then(Utf8Path::file_name) else {
        return;
    };
    if id != dir_name {
        findings.push(Finding::document(format!(
            "Manifest id '{id}' does not match directory name '{dir_name}'"
        )));
    }
}

/// The declared `type` requires a same-named top-level section.
///
/// At most one of the three checks fires per manifest, since `type` holds a
/// single value. An absent `type` skips all of them.
fn check_type_sections(document: &Value, findings: &mut Vec<Finding>) {
    let Some(declared) = document.get("type").and_then(Value::as_str) else {
        return;
    };
    for module_type in ModuleType::ALL {
        let section = module_type.as_str();
        if declared == section && document.get(section).is_none() {
            findings.push(Finding::document(format!(
                "Type '{section}' requires '{section}' section"
            )));
        }
    }
}
