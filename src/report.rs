//! Per-manifest result formatting for the validator CLI.
//!
//! Formatting is kept pure so the binary only orchestrates I/O: a passing
//! manifest renders as a single `<path>: OK` line; a failing one renders as
//! a blank separator line, the path as a header, and one indented bullet
//! per finding.

use crate::finding::Finding;
use camino::Utf8PathBuf;

/// The validation outcome for one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestReport {
    /// Path of the manifest that was checked.
    pub path: Utf8PathBuf,
    /// Findings produced by the validation pass; empty means the manifest
    /// passed.
    pub findings: Vec<Finding>,
}

impl ManifestReport {
    /// Create a report from a validation pass.
    #[must_use]
    pub fn new(path: Utf8PathBuf, findings: Vec<Finding>) -> Self {
        Self { path, findings }
    }

    /// Return true when the manifest produced no findings.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    /// Render the report for stdout.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8PathBuf;
    /// use modreg::finding::Finding;
    /// use modreg::report::ManifestReport;
    ///
    /// let pass = ManifestReport::new(Utf8PathBuf::from("modules/scanner/manifest.yaml"), vec![]);
    /// assert_eq!(pass.render(), "modules/scanner/manifest.yaml: OK");
    ///
    /// let fail = ManifestReport::new(
    ///     Utf8PathBuf::from("modules/scanner/manifest.yaml"),
    ///     vec![Finding::document("Type 'abi' requires 'abi' section")],
    /// );
    /// assert!(fail.render().contains("  - Type 'abi' requires 'abi' section"));
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        if self.passed() {
            return format!("{}: OK", self.path);
        }

        let mut output = format!("\n{}:", self.path);
        for finding in &self.findings {
            output.push_str(&format!("\n  - {finding}"));
        }
        output
    }
}

/// Aggregate outcome of a validator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Number of manifests checked.
    pub checked: usize,
    /// Number of manifests with at least one finding.
    pub failed: usize,
}

impl RunSummary {
    /// Fold one manifest report into the summary.
    pub fn absorb(&mut self, report: &ManifestReport) {
        self.checked += 1;
        if !report.passed() {
            self.failed += 1;
        }
    }

    /// Return true when at least one manifest was checked and none failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checked > 0 && self.failed == 0
    }
}
