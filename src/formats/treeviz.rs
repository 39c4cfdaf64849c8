//! Treeviz formatter
//!
//! One line per node with box-drawing connectors, paragraphs included.
//! Useful for inspecting exactly what the parser built, as opposed to the
//! outline view which only shows heading structure.
//!
//! ```text
//! ⧉ Successful Birds
//! └─ § All About Birds
//!    └─ § Kinds of Birds
//!       ├─ § The Finch
//!       │  └─ ¶ The true finches are small to med…
//!       └─ § The Swan
//! ```
//!
//! Icons: Document ⧉, Heading §, Paragraph ¶

use crate::ast::{Document, NodeId, NodeKind};

const LABEL_MAX_CHARS: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Document => "⧉",
        NodeKind::Heading { .. } => "§",
        NodeKind::Paragraph => "¶",
    }
}

/// Render the full tree, one line per node.
pub fn to_treeviz_str(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str(&format!("⧉ {}\n", doc.name()));

    let children = doc.children(doc.root());
    for (i, &child) in children.iter().enumerate() {
        append_node(doc, &mut result, child, "", i == children.len() - 1);
    }
    result
}

fn append_node(doc: &Document, result: &mut String, id: NodeId, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let node = doc.node(id);

    result.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        icon(node.kind()),
        truncate(node.content(), LABEL_MAX_CHARS)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
    let children = doc.children(id);
    for (i, &child) in children.iter().enumerate() {
        append_node(doc, result, child, &child_prefix, i == children.len() - 1);
    }
}
