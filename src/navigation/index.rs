// Definition lookup for names found in comments
//
// `EmptySymbolIndex` mirrors a host with no project search. `DeclarationIndex`
// is a lexical stand-in: it records declaration nodes by name from documents
// handed to it, without any scope or type analysis.

use crate::comments::parse_source;
use crate::language::{
    detect_language_from_path, get_symbol_name_field, get_symbol_node_kinds, DeclarationFamily,
};
use crate::symbols::SymbolKind;
use crate::utils::offsets::is_identifier;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use tree_sitter::Node;

/// Where a symbol is declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionLocation {
    pub name: String,
    pub file_path: String,
    /// Tree-sitter node kind of the declaration (e.g. "method_declaration")
    pub node_kind: String,
    pub family: DeclarationFamily,
    /// Start line number (1-based)
    pub start_line: u32,
    /// Start column number (0-based)
    pub start_column: u32,
    pub start_byte: usize,
    pub end_byte: usize,
}

/// Resolves a symbol name to its definition sites
pub trait SymbolIndex: Send + Sync {
    /// All definitions of `name`, restricted to declarations compatible with
    /// `kind` when one is given
    fn find_definitions(&self, name: &str, kind: Option<SymbolKind>) -> Vec<DefinitionLocation>;
}

/// Index that never finds anything
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptySymbolIndex;

impl SymbolIndex for EmptySymbolIndex {
    fn find_definitions(&self, _name: &str, _kind: Option<SymbolKind>) -> Vec<DefinitionLocation> {
        Vec::new()
    }
}

/// Declaration family a lexical kind is expected to resolve to
fn family_for(kind: SymbolKind) -> DeclarationFamily {
    match kind {
        SymbolKind::Class => DeclarationFamily::Type,
        SymbolKind::Function => DeclarationFamily::Callable,
        SymbolKind::Variable | SymbolKind::Constant => DeclarationFamily::Binding,
    }
}

/// In-memory index of declarations across a set of documents
#[derive(Debug, Default)]
pub struct DeclarationIndex {
    definitions: HashMap<String, Vec<DefinitionLocation>>,
}

impl DeclarationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed definitions
    pub fn len(&self) -> usize {
        self.definitions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Parse a document and record its declarations
    ///
    /// Returns how many definitions were added.
    pub fn add_document(&mut self, file_path: &str, content: &str) -> Result<usize> {
        let language = detect_language_from_path(file_path)
            .with_context(|| format!("Cannot index {}: unsupported file type", file_path))?;
        let tree = parse_source(content, language)
            .with_context(|| format!("Cannot index {}", file_path))?;

        let node_kinds = get_symbol_node_kinds(language);
        let name_field = get_symbol_name_field(language);

        let mut found = Vec::new();
        collect_declarations(
            tree.root_node(),
            content,
            &node_kinds,
            name_field,
            file_path,
            &mut found,
        );

        let added = found.len();
        for location in found {
            self.definitions
                .entry(location.name.clone())
                .or_default()
                .push(location);
        }

        debug!(
            "Indexed {} declarations from {} file: {}",
            added, language, file_path
        );
        Ok(added)
    }
}

impl SymbolIndex for DeclarationIndex {
    fn find_definitions(&self, name: &str, kind: Option<SymbolKind>) -> Vec<DefinitionLocation> {
        let Some(candidates) = self.definitions.get(name) else {
            return Vec::new();
        };

        let wanted = kind.map(family_for);
        candidates
            .iter()
            .filter(|location| wanted.map_or(true, |family| location.family == family))
            .cloned()
            .collect()
    }
}

fn collect_declarations(
    node: Node,
    content: &str,
    node_kinds: &[(&'static str, DeclarationFamily)],
    name_field: Option<&str>,
    file_path: &str,
    found: &mut Vec<DefinitionLocation>,
) {
    if let Some((node_kind, family)) = node_kinds.iter().find(|(kind, _)| *kind == node.kind()) {
        if let Some(name) = declaration_name(node, content, name_field) {
            let position = node.start_position();
            found.push(DefinitionLocation {
                name,
                file_path: file_path.to_string(),
                node_kind: node_kind.to_string(),
                family: *family,
                start_line: position.row as u32 + 1,
                start_column: position.column as u32,
                start_byte: node.start_byte(),
                end_byte: node.end_byte(),
            });
        }
    }

    for child in node.children(&mut node.walk()) {
        collect_declarations(child, content, node_kinds, name_field, file_path, found);
    }
}

/// Name of a declaration node
///
/// Uses the grammar's name field when there is one, otherwise the first
/// identifier among the children (then grandchildren, for Kotlin properties).
fn declaration_name(node: Node, content: &str, name_field: Option<&str>) -> Option<String> {
    let name_node = name_field
        .and_then(|field| node.child_by_field_name(field))
        .or_else(|| find_identifier(node, 2))?;

    let text = name_node.utf8_text(content.as_bytes()).ok()?;
    // Destructuring patterns and computed names are not single identifiers
    is_identifier(text).then(|| text.to_string())
}

fn find_identifier(node: Node, depth: u32) -> Option<Node> {
    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();

    if let Some(identifier) = children
        .iter()
        .find(|child| child.kind().ends_with("identifier"))
    {
        return Some(*identifier);
    }

    if depth <= 1 {
        return None;
    }
    children
        .into_iter()
        .find_map(|child| find_identifier(child, depth - 1))
}
