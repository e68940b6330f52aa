//! Module registry release tooling.
//!
//! This crate provides the core functionality behind the `check-manifests`
//! and `update-index` binaries: validating module manifest documents against
//! a shared JSON-Schema contract plus cross-cutting semantic rules, and
//! recording released artifacts into the persistent registry index.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions for both binaries
//! - [`discovery`] - Recursive manifest discovery under a modules root
//! - [`error`] - Semantic error types for fatal conditions
//! - [`finding`] - Per-manifest validation finding value type
//! - [`index`] - Registry index data model and release recording
//! - [`index_store`] - Index loading and atomic persistence
//! - [`module_type`] - The three-value module type enum
//! - [`report`] - Per-manifest result formatting
//! - [`schema`] - Manifest schema loading and compiled validation
//! - [`validator`] - The per-manifest validation pass

pub mod cli;
pub mod discovery;
pub mod error;
pub mod finding;
pub mod index;
pub mod index_store;
pub mod module_type;
pub mod report;
pub mod schema;
pub mod validator;
