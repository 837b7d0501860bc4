//! Wolfram Language reference-link role.
//!
//! Registers the `wlref` inline role, which turns a symbol token into a
//! hyperlink to that symbol's page in the Wolfram Language reference
//! manual. Invoking the role on the token `Sin` produces a link to
//! `https://reference.wolfram.com/language/ref/Sin`.
//!
//! The expansion is a pure, stateless string interpolation: no I/O, no
//! validation, no shared state. That is why the extension declares itself
//! `parallel_read_safe` — any number of build workers can expand invocations
//! concurrently.

#![doc = include_str!("../README.md")]

use docrole::{
    Attributes, ExtensionMetadata, InlineContext, Reference, Result, RoleOutput, RoleRegistry,
};
use log::debug;

/// Name under which document authors invoke this role.
pub const ROLE_NAME: &str = "wlref";

/// Base of the reference-manual URL; the token is appended verbatim.
pub const REF_URL_BASE: &str = "https://reference.wolfram.com/language/ref/";

/// Revision identifier reported to the host.
pub const VERSION: &str = "0.1";

/// Register the `wlref` role with the host and declare capabilities.
///
/// # Errors
///
/// Propagates the host's registration error if the role name is already
/// bound; this extension defines no failures of its own.
pub fn setup(registry: &mut RoleRegistry) -> Result<ExtensionMetadata> {
    registry.add_role(ROLE_NAME, make_ref_link)?;
    debug!("wlref extension set up (version {VERSION})");
    Ok(ExtensionMetadata {
        parallel_read_safe: true,
        version: VERSION.to_string(),
    })
}

/// Expand one role invocation into one reference-manual link.
///
/// The token is interpolated into the URL verbatim, with no escaping and no
/// validation; empty or URL-unsafe tokens produce a well-formed node whose
/// target may be broken. `options` entries are passed through as node
/// attributes uninterpreted. Always returns exactly one node and no
/// messages.
pub fn make_ref_link(
    _name: &str,
    rawtext: &str,
    text: &str,
    _lineno: usize,
    _ctx: &InlineContext,
    options: Attributes,
    _content: Vec<String>,
) -> RoleOutput {
    let url = format!("{REF_URL_BASE}{text}");
    let node = Reference::new(rawtext, text, url).with_attributes(options);
    (vec![node.into()], vec![])
}
