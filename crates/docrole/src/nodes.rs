//! Output document-tree nodes.
//!
//! Role handlers produce nodes that the host rendering pipeline consumes.
//! Once a handler returns, the host's document tree owns the nodes outright;
//! nothing in this crate keeps a reference to them.
//!
//! # Design
//!
//! The model is deliberately small: the inline extension point only ever
//! needs plain text and external references. Node attributes are an open
//! JSON map so that hosts can attach whatever they understand without this
//! crate interpreting any of it.

use serde::{Deserialize, Serialize};

/// Open attribute map attached to nodes.
///
/// Entries are passed through to the host uninterpreted.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Reference
// ---------------------------------------------------------------------------

/// An external hyperlink node.
///
/// Carries the literal source markup (`rawsource`), the visible label
/// (`text`), the link target (`refuri`), and any pass-through attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// The literal source markup the author wrote, echoed for fidelity.
    pub rawsource: String,

    /// The visible label of the link.
    pub text: String,

    /// The link target URI.
    pub refuri: String,

    /// Pass-through attributes, uninterpreted.
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl Reference {
    /// Create a reference with empty attributes.
    pub fn new(
        rawsource: impl Into<String>,
        text: impl Into<String>,
        refuri: impl Into<String>,
    ) -> Self {
        Self {
            rawsource: rawsource.into(),
            text: text.into(),
            refuri: refuri.into(),
            attributes: Attributes::new(),
        }
    }

    /// Attach pass-through attributes.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// An element of the host's document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Plain inline text.
    Text { text: String },

    /// An external hyperlink.
    Reference(Reference),
}

impl Node {
    /// Create a plain text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// The reference payload, if this node is one.
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Reference(r) => Some(r),
            Self::Text { .. } => None,
        }
    }
}

impl From<Reference> for Node {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}

// ---------------------------------------------------------------------------
// System messages
// ---------------------------------------------------------------------------

/// Severity of a host diagnostic, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Severe,
}

/// A diagnostic produced during role expansion.
///
/// Handlers that detect problems report them as messages alongside their
/// nodes rather than failing; the host decides how to render or escalate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMessage {
    /// How serious the problem is.
    pub severity: Severity,

    /// Human-readable description.
    pub message: String,

    /// Source line the problem was observed at, when known.
    pub line: Option<usize>,
}

impl SystemMessage {
    /// Create a message at the given severity.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            line: None,
        }
    }

    /// Attach the source line the problem was observed at.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_new() {
        let node = Reference::new(":wlref:`Sin`", "Sin", "https://example.com/Sin");
        assert_eq!(node.rawsource, ":wlref:`Sin`");
        assert_eq!(node.text, "Sin");
        assert_eq!(node.refuri, "https://example.com/Sin");
        assert!(node.attributes.is_empty());
    }

    #[test]
    fn test_reference_with_attributes() {
        let mut attrs = Attributes::new();
        attrs.insert("classes".into(), json!(["external"]));

        let node = Reference::new("raw", "label", "https://example.com").with_attributes(attrs);
        assert_eq!(node.attributes.get("classes"), Some(&json!(["external"])));
    }

    #[test]
    fn test_node_from_reference() {
        let reference = Reference::new("raw", "label", "uri");
        let node = Node::from(reference.clone());
        assert_eq!(node.as_reference(), Some(&reference));
    }

    #[test]
    fn test_node_text_has_no_reference() {
        let node = Node::text("plain");
        assert!(node.as_reference().is_none());
    }

    #[test]
    fn test_node_serialization_tagged() {
        let node = Node::from(Reference::new("raw", "Sin", "https://example.com/Sin"));
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["kind"], "reference");
        assert_eq!(value["refuri"], "https://example.com/Sin");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Severe);
    }

    #[test]
    fn test_system_message_at_line() {
        let msg = SystemMessage::new(Severity::Warning, "unresolved token").at_line(42);
        assert_eq!(msg.severity, Severity::Warning);
        assert_eq!(msg.line, Some(42));
    }
}
