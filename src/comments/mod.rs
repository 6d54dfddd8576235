//! Comment span location
//!
//! Maps an absolute document offset to the comment that encloses it. The
//! locator only needs four queries from a syntax tree, captured by
//! [`SyntaxTreeProvider`]; [`TreeSitterDocument`] implements them over a
//! tree-sitter parse.

mod tree_sitter_provider;

pub use tree_sitter_provider::{parse_source, TreeSitterDocument};

use crate::error::{PhantomJumpError, Result};
use crate::symbols::{self, ResolvedSymbol, SymbolOccurrence};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Node kind family the locator searches the ancestor chain for
pub const COMMENT_KIND: &str = "comment";

/// The narrow view of a syntax tree that comment lookup needs
pub trait SyntaxTreeProvider {
    type Node: Copy;

    /// Smallest node whose range contains `offset`, if any
    fn element_at(&self, offset: usize) -> Option<Self::Node>;

    /// Nearest node of the given kind family on the ancestor chain, starting
    /// with `node` itself
    fn ancestor_of_kind(&self, node: Self::Node, kind: &str) -> Option<Self::Node>;

    /// Absolute byte range of a node
    fn text_range_of(&self, node: Self::Node) -> Range<usize>;

    fn text_of(&self, node: Self::Node) -> &str;
}

/// A comment's full text and where it starts in its document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSpan {
    pub text: String,
    /// Absolute byte offset of the first comment character
    pub start_offset: usize,
}

impl CommentSpan {
    pub fn new(text: impl Into<String>, start_offset: usize) -> Self {
        Self {
            text: text.into(),
            start_offset,
        }
    }

    /// Absolute offset one past the last comment byte
    pub fn end_offset(&self) -> usize {
        self.start_offset + self.text.len()
    }

    /// Translate an absolute offset into one relative to the comment start
    pub fn relative_offset(&self, absolute_offset: usize) -> Result<usize> {
        absolute_offset
            .checked_sub(self.start_offset)
            .filter(|relative| *relative <= self.text.len())
            .ok_or(PhantomJumpError::InvalidOffset {
                offset: absolute_offset,
                len: self.end_offset(),
            })
    }

    /// Identifier under an absolute cursor offset
    pub fn symbol_at(&self, absolute_offset: usize) -> Result<Option<String>> {
        symbols::find_at_offset(&self.text, self.relative_offset(absolute_offset)?)
    }

    /// Identifier and its kind under an absolute cursor offset
    pub fn resolve_at(&self, absolute_offset: usize) -> Result<Option<ResolvedSymbol>> {
        symbols::resolve_at_offset(&self.text, self.relative_offset(absolute_offset)?)
    }

    /// Every classified identifier in this comment
    pub fn classify(&self) -> Vec<SymbolOccurrence> {
        symbols::classify_all(&self.text)
    }
}

/// Find the comment enclosing `offset`
///
/// Returns `None` when no node covers the offset or none of its ancestors is a
/// comment. Both are ordinary outcomes (cursor in code or whitespace).
pub fn locate_comment<P>(provider: &P, offset: usize) -> Option<CommentSpan>
where
    P: SyntaxTreeProvider + ?Sized,
{
    let element = provider.element_at(offset)?;
    let comment = provider.ancestor_of_kind(element, COMMENT_KIND)?;
    let range = provider.text_range_of(comment);

    Some(CommentSpan::new(provider.text_of(comment), range.start))
}
