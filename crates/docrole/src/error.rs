//! Error types for role-registry operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used
//! across the workspace. Uses `thiserror` for derive macros.
//!
//! Role handlers themselves are infallible — the only failure surface is the
//! host side: binding a name twice, or dispatching to a name that was never
//! bound.

use thiserror::Error;

/// Errors that can occur in role-registry operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A role name was registered more than once.
    #[error("role already registered: {0}")]
    DuplicateRole(String),

    /// A role name was dispatched without a prior registration.
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

impl Error {
    /// Create a duplicate-role error.
    pub fn duplicate_role(name: impl Into<String>) -> Self {
        Self::DuplicateRole(name.into())
    }

    /// Create an unknown-role error.
    pub fn unknown_role(name: impl Into<String>) -> Self {
        Self::UnknownRole(name.into())
    }
}

/// Result type alias using docrole's Error type.
pub type Result<T> = std::result::Result<T, Error>;
