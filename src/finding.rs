//! Per-manifest validation finding value type.
//!
//! A finding pairs a location path inside the manifest document with a
//! human-readable message. Schema violations carry the dot-joined path of
//! the offending value; decode failures and semantic checks report at the
//! document level with an empty location.

use std::fmt;

/// One reported validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    location: String,
    message: String,
}

impl Finding {
    /// Create a finding at a specific location inside the document.
    ///
    /// # Examples
    ///
    /// ```
    /// use modreg::finding::Finding;
    ///
    /// let finding = Finding::at("abi.entrypoint", "'entrypoint' is a required property");
    /// assert_eq!(finding.to_string(), "abi.entrypoint: 'entrypoint' is a required property");
    /// ```
    #[must_use]
    pub fn at(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a document-level finding with no location path.
    ///
    /// # Examples
    ///
    /// ```
    /// use modreg::finding::Finding;
    ///
    /// let finding = Finding::document("Type 'abi' requires 'abi' section");
    /// assert_eq!(finding.to_string(), "Type 'abi' requires 'abi' section");
    /// ```
    #[must_use]
    pub fn document(message: impl Into<String>) -> Self {
        Self {
            location: String::new(),
            message: message.into(),
        }
    }

    /// Return the location path, empty for document-level findings.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Return the finding's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.location, self.message)
        }
    }
}
