//! Role registry and extension metadata.
//!
//! The host owns one [`RoleRegistry`]. Extensions populate it during setup,
//! before any parallel reading starts; after that the registry is only ever
//! read, so workers can share it freely.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::nodes::Attributes;
use crate::role::{InlineContext, RoleHandler, RoleOutput};

// ============================================================================
// ExtensionMetadata
// ============================================================================

/// Capability declaration an extension returns from its setup function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionMetadata {
    /// Whether many instances of the extension may run concurrently across
    /// isolated build workers without shared mutable state.
    pub parallel_read_safe: bool,

    /// Revision identifier of the extension.
    pub version: String,
}

// ============================================================================
// RoleRegistry
// ============================================================================

/// Name → handler bindings for inline roles.
///
/// Population happens single-threaded during host setup; dispatch takes
/// `&self` and is safe from any number of parallel workers.
#[derive(Default)]
pub struct RoleRegistry {
    roles: BTreeMap<String, RoleHandler>,
}

impl RoleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a role name to a handler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRole`] if the name is already bound.
    pub fn add_role<F>(&mut self, name: impl Into<String>, handler: F) -> Result<()>
    where
        F: Fn(&str, &str, &str, usize, &InlineContext, Attributes, Vec<String>) -> RoleOutput
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        if self.roles.contains_key(&name) {
            return Err(Error::duplicate_role(name));
        }
        debug!("registered inline role: {name}");
        self.roles.insert(name, Arc::new(handler));
        Ok(())
    }

    /// Look up the handler bound to `name`.
    pub fn get(&self, name: &str) -> Option<&RoleHandler> {
        self.roles.get(name)
    }

    /// Whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.roles.contains_key(name)
    }

    /// Iterate over bound role names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    /// Number of bound roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether no roles are bound.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Dispatch one role invocation to its bound handler.
    ///
    /// Arguments follow the handler's fixed positional order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRole`] if `name` is not bound.
    #[allow(clippy::too_many_arguments)]
    pub fn expand(
        &self,
        name: &str,
        rawtext: &str,
        text: &str,
        lineno: usize,
        ctx: &InlineContext,
        options: Attributes,
        content: Vec<String>,
    ) -> Result<RoleOutput> {
        let handler = self.get(name).ok_or_else(|| Error::unknown_role(name))?;
        Ok(handler(name, rawtext, text, lineno, ctx, options, content))
    }
}

impl std::fmt::Debug for RoleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleRegistry")
            .field("roles", &self.roles.keys().collect::<Vec<_>>())
            .finish()
    }
}
