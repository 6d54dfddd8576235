// API Functions - PyO3-exposed functions for Python
//
// These functions provide the public API for PhantomJump's comment lookup.

use super::{PyCommentSpan, PyCommentSymbols, PyResolvedSymbol, PySymbolOccurrence};
use crate::config::PhantomJumpConfig;
use crate::language::detect_language_from_path;
use crate::manager::PhantomJump;
use crate::symbols;
use crate::utils::offsets::char_to_byte_offset;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_byte_offset(text: &str, offset: usize) -> PyResult<usize> {
    char_to_byte_offset(text, offset).ok_or_else(|| {
        PyValueError::new_err(format!(
            "Offset {} is out of bounds for text of length {}",
            offset,
            text.chars().count()
        ))
    })
}

/// Find the identifier touching a cursor offset inside comment text
///
/// Args:
///     comment_text (str): Full text of the comment, delimiters included
///     offset (int): Cursor position relative to the comment start
///
/// Returns:
///     str | None: The identifier, or None when the cursor is between tokens
///
/// Raises:
///     ValueError: If offset is past the end of comment_text
#[pyfunction]
#[pyo3(signature = (comment_text, offset))]
pub fn find_symbol_at_offset(comment_text: &str, offset: usize) -> PyResult<Option<String>> {
    let byte_offset = to_byte_offset(comment_text, offset)?;
    symbols::find_at_offset(comment_text, byte_offset)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Classify every identifier in comment text
///
/// Returns:
///     list[SymbolOccurrence]: One entry per distinct name, in classification order
#[pyfunction]
#[pyo3(signature = (comment_text))]
pub fn classify_comment(comment_text: &str) -> Vec<PySymbolOccurrence> {
    symbols::classify_all(comment_text)
        .into_iter()
        .map(|occurrence| PySymbolOccurrence::from_occurrence(occurrence, comment_text))
        .collect()
}

/// Find the comment enclosing a cursor offset in a source file
///
/// Args:
///     content (str): Source code content
///     file_path (str): File path (language is detected from the extension)
///     offset (int): Cursor position in content
///
/// Returns:
///     CommentSpan | None: The enclosing comment, or None when not in a comment
///
/// Raises:
///     ValueError: If the language is not supported or offset is out of bounds
#[pyfunction]
#[pyo3(signature = (content, file_path, offset))]
pub fn locate_comment(
    content: &str,
    file_path: &str,
    offset: usize,
) -> PyResult<Option<PyCommentSpan>> {
    let byte_offset = to_byte_offset(content, offset)?;
    let span = PhantomJump::new()
        .locate_comment(file_path, content, byte_offset)
        .map_err(|e| PyValueError::new_err(format!("Comment lookup failed: {}", e)))?;

    Ok(span.map(|span| PyCommentSpan::from_span(span, content)))
}

/// Find the identifier under the cursor when the cursor is inside a comment
///
/// Args:
///     content (str): Source code content
///     file_path (str): File path (language is detected from the extension)
///     offset (int): Cursor position in content
///
/// Returns:
///     ResolvedSymbol | None: Offsets on the result are relative to the comment
#[pyfunction]
#[pyo3(signature = (content, file_path, offset))]
pub fn find_symbol_in_comment(
    content: &str,
    file_path: &str,
    offset: usize,
) -> PyResult<Option<PyResolvedSymbol>> {
    let byte_offset = to_byte_offset(content, offset)?;
    let jump = PhantomJump::new();

    let Some(comment) = jump
        .locate_comment(file_path, content, byte_offset)
        .map_err(|e| PyValueError::new_err(format!("Comment lookup failed: {}", e)))?
    else {
        return Ok(None);
    };
    let symbol = jump
        .find_symbol_in_comment(file_path, content, byte_offset)
        .map_err(|e| PyValueError::new_err(format!("Symbol lookup failed: {}", e)))?;

    Ok(symbol.map(|symbol| PyResolvedSymbol::from_resolved(symbol, &comment.text)))
}

/// Detect programming language from file extension
///
/// Returns:
///     str: Language name if detected, "text" for unknown extensions
#[pyfunction]
#[pyo3(signature = (file_path))]
pub fn detect_language(file_path: &str) -> String {
    detect_language_from_path(file_path)
        .unwrap_or("text")
        .to_string()
}

/// Get the languages the lookup is enabled for by default
#[pyfunction]
pub fn supported_languages() -> Vec<String> {
    PhantomJumpConfig::default().supported_languages
}

/// Scan the comments of multiple files in parallel
///
/// Releases the GIL while scanning. Files that cannot be scanned (unsupported
/// extension, parse failure) produce an empty list.
///
/// Args:
///     files (list[tuple[str, str]]): List of (file_path, content) tuples
///
/// Returns:
///     list[list[CommentSymbols]]: Results in the same order as input
#[pyfunction]
#[pyo3(signature = (files))]
pub fn scan_files_batch(py: Python<'_>, files: Vec<(String, String)>) -> Vec<Vec<PyCommentSymbols>> {
    // Release GIL for parallel processing
    let (files, scanned) = py.detach(move || {
        let scanned = PhantomJump::new().scan_files_batch(&files);
        (files, scanned)
    });

    files
        .iter()
        .zip(scanned)
        .map(|((_, content), comments)| {
            comments
                .into_iter()
                .map(|comment| PyCommentSymbols::from_comment_symbols(comment, content))
                .collect()
        })
        .collect()
}
