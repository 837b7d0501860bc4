//! Docrole — inline-role extension points for documentation builds.
//!
//! This crate defines the host-facing contract between a documentation
//! generator and its inline-role extensions: the output node model, the
//! handler signature, and the registry that binds role names to handlers.
//! It has no internal dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`nodes`]: Output document-tree nodes
//! - [`role`]: Handler contract and invocation context
//! - [`registry`]: Name → handler bindings and extension metadata

#![doc = include_str!("../README.md")]

pub mod error;
pub mod nodes;
pub mod registry;
pub mod role;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use nodes::{Attributes, Node, Reference, Severity, SystemMessage};
pub use registry::{ExtensionMetadata, RoleRegistry};
pub use role::{InlineContext, RoleHandler, RoleOutput};
