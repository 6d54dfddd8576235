//! Language Support - Shared tree-sitter language configuration
//!
//! ALL language-specific tree-sitter configuration lives here: grammar lookup,
//! extension detection, and the node kinds the locator and the declaration index
//! care about.
//!
//! # Supported Languages
//!
//! **JVM**: Java, Kotlin
//! **Web**: JavaScript (and JSX), TypeScript, TSX

use crate::error::PhantomJumpError;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Every language id that has a grammar compiled in
pub const KNOWN_LANGUAGES: &[&str] = &["java", "kotlin", "javascript", "jsx", "typescript", "tsx"];

/// Get tree-sitter language parser for a given language name
///
/// This is the SINGLE SOURCE OF TRUTH for grammar lookup. Both the
/// comment locator and the declaration index parse through it.
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "java" => Ok(tree_sitter_java::LANGUAGE.into()),
        "kotlin" => Ok(tree_sitter_kotlin_ng::LANGUAGE.into()),
        "javascript" | "jsx" => Ok(tree_sitter_javascript::LANGUAGE.into()),
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        _ => Err(PhantomJumpError::UnsupportedLanguage(language.to_string()).into()),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "java" => Some("java"),
        "kt" | "kts" => Some("kotlin"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        "jsx" => Some("jsx"),
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("tsx"),
        _ => None,
    }
}

/// Detect language from a file path by its extension
pub fn detect_language_from_path(file_path: &str) -> Option<&'static str> {
    let extension = std::path::Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    detect_language_from_extension(extension)
}

/// Get AST node types that represent comments for a given language
///
/// Only used for documentation and tests; the locator itself treats any
/// kind containing "comment" as a comment so new grammars work unchanged.
pub fn get_comment_node_kinds(language: &str) -> Vec<&'static str> {
    match language {
        "java" | "kotlin" => vec!["line_comment", "block_comment"],
        "javascript" | "jsx" => vec!["comment", "html_comment"],
        "typescript" | "tsx" => vec!["comment", "html_comment"],
        _ => vec!["comment"], // Generic fallback
    }
}

/// Whether a node kind is a comment in any supported grammar
pub fn is_comment_kind(kind: &str) -> bool {
    kind.contains("comment")
}

/// Declaration families the index distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationFamily {
    Type,
    Callable,
    Binding,
}

/// Get AST node types that represent symbol definitions (classes, functions, variables)
///
/// Used by the declaration index to find definition sites for names
/// mentioned in comments.
pub fn get_symbol_node_kinds(language: &str) -> Vec<(&'static str, DeclarationFamily)> {
    use DeclarationFamily::*;
    match language {
        "java" => vec![
            ("class_declaration", Type),
            ("interface_declaration", Type),
            ("enum_declaration", Type),
            ("record_declaration", Type),
            ("annotation_type_declaration", Type),
            ("method_declaration", Callable),
            ("constructor_declaration", Callable),
            ("variable_declarator", Binding),
            ("enum_constant", Binding),
        ],
        "kotlin" => vec![
            ("class_declaration", Type),
            ("object_declaration", Type),
            ("type_alias", Type),
            ("function_declaration", Callable),
            ("property_declaration", Binding),
        ],
        "javascript" | "jsx" => vec![
            ("class_declaration", Type),
            ("function_declaration", Callable),
            ("generator_function_declaration", Callable),
            ("method_definition", Callable),
            ("variable_declarator", Binding),
        ],
        "typescript" | "tsx" => vec![
            ("class_declaration", Type),
            ("abstract_class_declaration", Type),
            ("interface_declaration", Type),
            ("type_alias_declaration", Type),
            ("enum_declaration", Type),
            ("function_declaration", Callable),
            ("generator_function_declaration", Callable),
            ("method_definition", Callable),
            ("method_signature", Callable),
            ("variable_declarator", Binding),
            ("public_field_definition", Binding),
        ],
        _ => Vec::new(),
    }
}

/// Get the field name used to extract symbol names from AST nodes
///
/// Kotlin's grammar exposes no name field; the index falls back to the
/// first identifier child there.
pub fn get_symbol_name_field(language: &str) -> Option<&'static str> {
    match language {
        "java" | "javascript" | "jsx" | "typescript" | "tsx" => Some("name"),
        _ => None,
    }
}
