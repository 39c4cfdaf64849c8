//! Tree builder
//!
//! Consumes classified line records and grows the document tree. The
//! builder keeps an insertion cursor: new nodes attach under it, a new
//! heading advances it, and a heading whose level decreases walks it back
//! up the ancestor chain. A heading may deepen by at most one level at a
//! time; decreases of any magnitude are legal.
//!
//! All state lives in the builder value, one per parse run, so repeated or
//! concurrent parses cannot interfere.

use crate::ast::{Document, NodeId, NodeKind};
use crate::error::{ParseError, TokenizeReason};
use crate::lexer::classify::classify_line;
use crate::lexer::Record;

/// Incremental document builder. Constructed by the crate's parse entry
/// points; not constructible from outside the crate.
pub(crate) struct TreeBuilder {
    doc: Document,
    cursor: NodeId,
    last_node: Option<NodeId>,
    line: usize,
}

impl TreeBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        let doc = Document::new(name);
        let root = doc.root();
        Self {
            doc,
            cursor: root,
            last_node: None,
            line: 0,
        }
    }

    /// Number of lines consumed so far.
    pub(crate) fn lines_fed(&self) -> usize {
        self.line
    }

    /// Consume the next input line. Errors carry the line's 1-based number.
    pub(crate) fn feed_line(&mut self, raw: &str) -> Result<(), ParseError> {
        self.line += 1;
        let record = classify_line(raw).map_err(|reason| ParseError::Tokenization {
            line: self.line,
            reason,
        })?;

        match record {
            Record::Heading { level, text } => self.push_heading(level, text),
            Record::Paragraph { text } => {
                // Paragraphs stay leaves: the cursor does not advance.
                let id = self.doc.attach_child(self.cursor, NodeKind::Paragraph, text);
                self.last_node = Some(id);
                Ok(())
            }
            Record::Continuation { text } => match self.last_node {
                Some(id) => {
                    self.doc.expand_content(id, &text);
                    Ok(())
                }
                None => Err(ParseError::Tokenization {
                    line: self.line,
                    reason: TokenizeReason::OrphanContinuation,
                }),
            },
        }
    }

    fn push_heading(&mut self, level: u32, text: String) -> Result<(), ParseError> {
        if self.cursor != self.doc.root() {
            let cursor_level = self.doc.node(self.cursor).level();
            if level > cursor_level.saturating_add(1) {
                return Err(ParseError::LevelJump {
                    line: self.line,
                    cursor_level,
                    heading_level: level,
                });
            }
            // Siblings and shallower headings re-attach under the nearest
            // ancestor one level up. The walk stops at the root, which also
            // covers outlines whose first heading opened deeper than level 1.
            while self.doc.node(self.cursor).level() != level - 1 {
                match self.doc.parent(self.cursor) {
                    Some(parent) => self.cursor = parent,
                    None => break,
                }
            }
        }

        let id = self
            .doc
            .attach_child(self.cursor, NodeKind::Heading { level }, text);
        self.cursor = id;
        self.last_node = Some(id);
        Ok(())
    }

    pub(crate) fn finish(self) -> Document {
        self.doc
    }
}
