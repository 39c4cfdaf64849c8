//! Serialized document views
//!
//! The arena tree is projected into a nested, serde-friendly structure
//! before serialization, so consumers see parent/child nesting rather than
//! arena indices.

use serde::Serialize;

use crate::ast::{Document, NodeId, NodeKind};

/// Nested projection of one node, suitable for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeView>,
}

impl NodeView {
    /// Build the nested view of a whole document, rooted at the document
    /// node.
    pub fn from_document(doc: &Document) -> Self {
        Self::from_node(doc, doc.root())
    }

    fn from_node(doc: &Document, id: NodeId) -> Self {
        let node = doc.node(id);
        let (kind, level) = match node.kind() {
            NodeKind::Document => ("document", None),
            NodeKind::Heading { level } => ("heading", Some(level)),
            NodeKind::Paragraph => ("paragraph", None),
        };

        NodeView {
            kind,
            level,
            content: node.content().to_string(),
            children: doc
                .children(id)
                .iter()
                .map(|&child| Self::from_node(doc, child))
                .collect(),
        }
    }
}

/// Serialize a document to pretty-printed JSON.
pub fn to_json_str(doc: &Document) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&NodeView::from_document(doc))
}

/// Serialize a document to YAML.
pub fn to_yaml_str(doc: &Document) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&NodeView::from_document(doc))
}
