// Tree-sitter implementation of SyntaxTreeProvider
//
// Offsets are tree-sitter byte offsets. Comments are "extras" in every grammar we
// load, so they can hang off any node; walking is done from the root each time.

use super::{CommentSpan, SyntaxTreeProvider};
use crate::error::PhantomJumpError;
use crate::language::{get_tree_sitter_language, is_comment_kind};
use anyhow::Result;
use std::ops::Range;
use tree_sitter::{Node, Parser, Tree};

/// Parse `source` with the grammar registered for `language`
pub fn parse_source(source: &str, language: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    let tree_sitter_language = get_tree_sitter_language(language)?;

    parser
        .set_language(&tree_sitter_language)
        .map_err(|e| anyhow::anyhow!("Failed to set parser language for {}: {}", language, e))?;

    parser
        .parse(source, None)
        .ok_or_else(|| PhantomJumpError::ParseFailed(language.to_string()).into())
}

/// A parsed document: the tree plus the source it was parsed from
pub struct TreeSitterDocument<'a> {
    tree: &'a Tree,
    source: &'a str,
}

impl<'a> TreeSitterDocument<'a> {
    pub fn new(tree: &'a Tree, source: &'a str) -> Self {
        Self { tree, source }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Every comment in the document, in source order
    pub fn comment_spans(&self) -> Vec<CommentSpan> {
        let mut comments = Vec::new();
        self.collect_comments(self.tree.root_node(), &mut comments);
        comments
    }

    fn collect_comments(&self, node: Node<'a>, comments: &mut Vec<CommentSpan>) {
        if is_comment_kind(node.kind()) {
            comments.push(CommentSpan::new(self.text_of(node), node.start_byte()));
            return;
        }

        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                self.collect_comments(child, comments);
            }
        }
    }
}

impl<'a> SyntaxTreeProvider for TreeSitterDocument<'a> {
    type Node = Node<'a>;

    fn element_at(&self, offset: usize) -> Option<Node<'a>> {
        let root = self.tree.root_node();
        if offset < root.start_byte() || offset >= root.end_byte() {
            return None;
        }

        // Descend into the child covering [offset, offset + 1) until none does
        let mut node = root;
        'descend: loop {
            for i in 0..node.child_count() {
                if let Some(child) = node.child(i) {
                    if child.start_byte() <= offset && offset < child.end_byte() {
                        node = child;
                        continue 'descend;
                    }
                }
            }
            return Some(node);
        }
    }

    fn ancestor_of_kind(&self, node: Node<'a>, kind: &str) -> Option<Node<'a>> {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if candidate.kind().contains(kind) {
                return Some(candidate);
            }
            current = candidate.parent();
        }
        None
    }

    fn text_range_of(&self, node: Node<'a>) -> Range<usize> {
        node.start_byte()..node.end_byte()
    }

    fn text_of(&self, node: Node<'a>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}
