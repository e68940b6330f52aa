//! Manifest schema loading and compiled validation.
//!
//! The schema is an externally authored YAML document with JSON-Schema
//! Draft-07 semantics. It is loaded and compiled once per validator run and
//! treated as immutable for the run's duration. Violations are reported as
//! [`Finding`] values whose location is the dot-joined path of the offending
//! value inside the manifest.

use crate::error::{RegistryError, Result};
use crate::finding::Finding;
use camino::Utf8Path;
use jsonschema::{Draft, Validator};

/// A compiled manifest schema ready to validate decoded documents.
pub struct ManifestSchema {
    validator: Validator,
}

impl ManifestSchema {
    /// Load and compile the schema document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SchemaNotFound`] when the file does not
    /// exist, and [`RegistryError::SchemaInvalid`] when it cannot be decoded
    /// as YAML or compiled as a Draft-07 schema.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        if !path.exists() {
            return Err(RegistryError::SchemaNotFound {
                path: path.to_owned(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        let document: serde_json::Value =
            serde_yaml::from_str(&text).map_err(|e| RegistryError::SchemaInvalid {
                path: path.to_owned(),
                reason: e.to_string(),
            })?;
        Self::compile(&document).map_err(|reason| RegistryError::SchemaInvalid {
            path: path.to_owned(),
            reason,
        })
    }

    /// Compile an already decoded schema document.
    ///
    /// # Errors
    ///
    /// Returns the engine's compilation message when the document is not a
    /// valid Draft-07 schema.
    pub fn compile(document: &serde_json::Value) -> std::result::Result<Self, String> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft7)
            .build(document)
            .map_err(|e| e.to_string())?;
        Ok(Self { validator })
    }

    /// Report every structural violation of `document` against the schema.
    ///
    /// Each violation becomes one finding; the location is the dot-joined
    /// sequence of path segments (empty for violations of the document
    /// root) and the message is the engine's, verbatim. Findings follow the
    /// engine's own traversal order.
    #[must_use]
    pub fn violations(&self, document: &serde_json::Value) -> Vec<Finding> {
        self.validator
            .iter_errors(document)
            .map(|error| {
                let location = dot_path(&error.instance_path.to_string());
                if location.is_empty() {
                    Finding::document(error.to_string())
                } else {
                    Finding::at(location, error.to_string())
                }
            })
            .collect()
    }
}

/// Convert a JSON-pointer style path (`/abi/ports/0`) to the dot-joined
/// form reported in findings (`abi.ports.0`).
fn dot_path(pointer: &str) -> String {
    pointer.trim_start_matches('/').replace('/', ".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn manifest_schema() -> ManifestSchema {
        let document = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "required": ["id", "type"],
            "properties": {
                "id": {"type": "string"},
                "type": {"enum": ["abi", "container", "grpc"]},
            },
        });
        ManifestSchema::compile(&document).expect("schema compiles")
    }

    #[rstest]
    #[case::empty_pointer("", "")]
    #[case::single_segment("/id", "id")]
    #[case::nested("/abi/entrypoint", "abi.entrypoint")]
    #[case::array_index("/grpc/ports/0", "grpc.ports.0")]
    fn dot_path_joins_segments(#[case] pointer: &str, #[case] expected: &str) {
        assert_eq!(dot_path(pointer), expected);
    }

    #[test]
    fn conforming_document_has_no_violations() {
        let schema = manifest_schema();
        let document = json!({"id": "scanner", "type": "abi"});
        assert!(schema.violations(&document).is_empty());
    }

    #[test]
    fn missing_required_field_is_reported_at_document_root() {
        let schema = manifest_schema();
        let document = json!({"id": "scanner"});
        let findings = schema.violations(&document);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].location().is_empty());
        assert!(findings[0].message().contains("type"));
    }

    #[test]
    fn wrong_field_type_is_reported_with_dot_path() {
        let schema = manifest_schema();
        let document = json!({"id": 7, "type": "abi"});
        let findings = schema.violations(&document);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].location(), "id");
    }

    #[test]
    fn compile_rejects_malformed_schema() {
        let document = json!({"type": "not-a-real-type"});
        assert!(ManifestSchema::compile(&document).is_err());
    }
}
