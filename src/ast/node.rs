//! Document tree node definitions
//!
//! A parsed document is a single tree rooted at a document node. Nodes are
//! stored in an arena owned by [`Document`]; tree links are [`NodeId`]
//! handles into that arena. Children are owned (each id appears in exactly
//! one `children` list), while the parent link is a plain non-owning index
//! used for cursor walk-up and sibling-position lookup.
//!
//! The tree is grown during a parse run and only ever mutated in two ways:
//! attaching a new child and appending continuation text to a node's
//! content. There is no detach or delete; the whole tree is dropped as one.

/// Handle to a node stored in a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Discriminates the three node shapes a document tree can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of a parse run. Its content is the document's display name.
    Document,
    /// Structural heading at `level` (1-based).
    Heading { level: u32 },
    /// Body text. Always a leaf: the builder never attaches children here.
    Paragraph,
}

impl NodeKind {
    /// Nesting level used by the builder's ancestor walk. Paragraphs report
    /// `u32::MAX` so any level-based search passes over them.
    pub fn level(&self) -> u32 {
        match self {
            NodeKind::Document => 0,
            NodeKind::Heading { level } => *level,
            NodeKind::Paragraph => u32::MAX,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, NodeKind::Heading { .. })
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, NodeKind::Paragraph)
    }
}

/// A single tree node: kind, accumulated content, and tree links.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    content: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, content: String) -> Self {
        Self {
            kind,
            content,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn level(&self) -> u32 {
        self.kind.level()
    }
}

/// A parsed document: an arena of nodes rooted at the document node.
///
/// The root always exists (slot 0) and is created with the document's
/// display name as its content.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document, name.into())],
        }
    }

    /// Handle to the root document node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The document's display name (the root node's content).
    pub fn name(&self) -> &str {
        &self.nodes[0].content
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Children of `id` in insertion order. Order is meaningful: it defines
    /// the sibling index that outline prefixes are computed from.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Create a node and attach it as the last child of `parent`, wiring
    /// both the child list entry and the parent back-reference.
    pub fn attach_child(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        content: impl Into<String>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(kind, content.into());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append continuation text to a node's content, separated from what is
    /// already there by a single space.
    pub fn expand_content(&mut self, id: NodeId, text: &str) {
        let node = &mut self.nodes[id.0];
        node.content.push(' ');
        node.content.push_str(text);
    }

    /// Index of `id` among its siblings, or `None` for the root.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        let parent = self.nodes[id.0].parent?;
        self.nodes[parent.0]
            .children
            .iter()
            .position(|&child| child == id)
    }

    /// True when the document opens with a heading. Documents whose
    /// top-level content is only paragraphs, or which are empty, have no
    /// outline.
    pub fn has_outline(&self) -> bool {
        match self.nodes[0].children.first() {
            Some(&first) => self.nodes[first.0].kind.is_heading(),
            None => false,
        }
    }

    /// Total number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
