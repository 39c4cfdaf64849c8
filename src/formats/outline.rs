//! Outline formatter
//!
//! Renders a document's heading hierarchy as an indented, auto-numbered
//! outline: the document name on the first line, then one line per heading
//! with `level` leading spaces and a prefix from the level's numbering
//! family. Paragraphs carry body text, not structure, and are skipped.
//!
//! ```text
//! Successful Birds
//!  1. All About Birds
//!   A. Kinds of Birds
//!    I. The Finch
//!    II. The Swan
//! ```
//!
//! Callers that only want an outline when one exists should guard with
//! [`Document::has_outline`].

use std::io;

use crate::ast::{outline_prefix, Document, NodeId, NodeKind};

/// Render the outline to a string.
///
/// Pre-order walk over an explicit stack; children are pushed in reverse so
/// the LIFO pop order matches insertion order. Depth never touches the call
/// stack, so arbitrarily deep outlines are fine.
pub fn to_outline_str(doc: &Document) -> String {
    let mut out = String::new();
    let mut stack: Vec<NodeId> = vec![doc.root()];

    while let Some(id) = stack.pop() {
        let node = doc.node(id);
        match node.kind() {
            NodeKind::Document => {
                out.push_str(node.content());
                out.push('\n');
            }
            NodeKind::Heading { level } => {
                let position = doc.position(id).unwrap_or(0);
                out.push_str(&format!(
                    "{}{}. {}\n",
                    " ".repeat(level as usize),
                    outline_prefix(level, position),
                    node.content()
                ));
            }
            NodeKind::Paragraph => continue,
        }

        for &child in doc.children(id).iter().rev() {
            if !doc.node(child).kind().is_paragraph() {
                stack.push(child);
            }
        }
    }

    out
}

/// Write the rendered outline to an output stream, one line per visited
/// node.
pub fn write_outline<W: io::Write>(doc: &Document, mut out: W) -> io::Result<()> {
    out.write_all(to_outline_str(doc).as_bytes())
}
