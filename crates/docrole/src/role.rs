//! The inline-role handler contract.
//!
//! An inline role is invoked in document source as `role-name:token`. At
//! build time the host calls the bound handler with a fixed positional
//! argument list and splices the returned nodes into its document tree.
//!
//! # Handler signature
//!
//! Handlers receive, in order:
//!
//! 1. `name` — the role name as invoked
//! 2. `rawtext` — the literal source markup, for echoing into output nodes
//! 3. `text` — the token between the role delimiters
//! 4. `lineno` — the source line of the invocation
//! 5. `ctx` — positional context from the host ([`InlineContext`])
//! 6. `options` — pass-through attributes supplied by the host
//! 7. `content` — structural content lines, usually empty for inline roles
//!
//! and return `(nodes, messages)`. Handlers are pure: they must not touch
//! shared mutable state, which is what lets the host run them from parallel
//! build workers.

use std::sync::Arc;

use crate::nodes::{Attributes, Node, SystemMessage};

/// Positional context the host supplies to every role invocation.
///
/// Carries where in the source the invocation occurred. Handlers that do not
/// need it simply ignore the parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineContext {
    /// Path or name of the source document being processed.
    pub source: String,
}

impl InlineContext {
    /// Context for a named source document.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// What a role handler returns: output nodes plus diagnostics.
pub type RoleOutput = (Vec<Node>, Vec<SystemMessage>);

/// A bound role handler, shareable across build workers.
///
/// The `Send + Sync` bound is what makes a populated registry safe to read
/// from parallel workers without coordination.
pub type RoleHandler = Arc<
    dyn Fn(&str, &str, &str, usize, &InlineContext, Attributes, Vec<String>) -> RoleOutput
        + Send
        + Sync,
>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::Reference;

    #[test]
    fn test_inline_context_new() {
        let ctx = InlineContext::new("guide/intro.rst");
        assert_eq!(ctx.source, "guide/intro.rst");
    }

    #[test]
    fn test_inline_context_default_is_empty() {
        let ctx = InlineContext::default();
        assert_eq!(ctx.source, "");
    }

    #[test]
    fn test_role_handler_is_callable_through_arc() {
        let handler: RoleHandler =
            Arc::new(|_name, rawtext, text, _lineno, _ctx, _options, _content| {
                let node = Node::from(Reference::new(rawtext, text, "https://example.com"));
                (vec![node], vec![])
            });

        let ctx = InlineContext::default();
        let (nodes, messages) = handler("r", "raw", "tok", 1, &ctx, Attributes::new(), vec![]);
        assert_eq!(nodes.len(), 1);
        assert!(messages.is_empty());
    }

    #[test]
    fn test_role_handler_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RoleHandler>();
    }
}
