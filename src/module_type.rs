//! The module type enum shared by the validator and updater.
//!
//! A module is one of three kinds: an ABI plugin, a container image, or a
//! gRPC service. The manifest's `type` field and the registry index's
//! per-module `type` field both carry one of these values, and each type
//! requires a correspondingly named top-level manifest section.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a registry module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    /// Native ABI plugin module.
    Abi,
    /// Container image module.
    Container,
    /// gRPC service module.
    Grpc,
}

impl ModuleType {
    /// All recognized module types, in the fixed order the validator
    /// reports missing-section findings.
    pub const ALL: [ModuleType; 3] = [ModuleType::Abi, ModuleType::Container, ModuleType::Grpc];

    /// Return the type's wire name, which is also the name of the
    /// mandatory top-level manifest section for that type.
    ///
    /// # Examples
    ///
    /// ```
    /// use modreg::module_type::ModuleType;
    ///
    /// assert_eq!(ModuleType::Grpc.as_str(), "grpc");
    /// ```
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleType::Abi => "abi",
            ModuleType::Container => "container",
            ModuleType::Grpc => "grpc",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
