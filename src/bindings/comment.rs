// PyCommentSpan / PyCommentSymbols - PyO3 wrappers for located comments

use super::PySymbolOccurrence;
use crate::comments::CommentSpan;
use crate::manager::CommentSymbols;
use crate::utils::offsets::byte_to_char_offset;
use pyo3::prelude::*;

/// Python-accessible comment span
///
/// `start_offset` is a character offset into the document it was found in.
#[pyclass(name = "CommentSpan")]
pub struct PyCommentSpan {
    inner: CommentSpan,
    start_char: usize,
}

impl PyCommentSpan {
    pub fn from_span(span: CommentSpan, document: &str) -> Self {
        PyCommentSpan {
            start_char: byte_to_char_offset(document, span.start_offset),
            inner: span,
        }
    }
}

#[pymethods]
impl PyCommentSpan {
    #[getter]
    fn text(&self) -> String {
        self.inner.text.clone()
    }

    #[getter]
    fn start_offset(&self) -> usize {
        self.start_char
    }

    fn __repr__(&self) -> String {
        format!(
            "CommentSpan(start={}, len={})",
            self.start_char,
            self.inner.text.chars().count()
        )
    }
}

/// Python-accessible classified comment from a document scan
#[pyclass(name = "CommentSymbols")]
pub struct PyCommentSymbols {
    inner: CommentSymbols,
    start_char: usize,
}

impl PyCommentSymbols {
    pub fn from_comment_symbols(comment_symbols: CommentSymbols, document: &str) -> Self {
        PyCommentSymbols {
            start_char: byte_to_char_offset(document, comment_symbols.comment.start_offset),
            inner: comment_symbols,
        }
    }
}

#[pymethods]
impl PyCommentSymbols {
    #[getter]
    fn text(&self) -> String {
        self.inner.comment.text.clone()
    }

    #[getter]
    fn start_offset(&self) -> usize {
        self.start_char
    }

    #[getter]
    fn start_line(&self) -> u32 {
        self.inner.start_line
    }

    #[getter]
    fn symbols(&self) -> Vec<PySymbolOccurrence> {
        self.inner
            .symbols
            .iter()
            .map(|s| PySymbolOccurrence::from_occurrence(s.clone(), &self.inner.comment.text))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "CommentSymbols(line={}, symbols={})",
            self.inner.start_line,
            self.inner.symbols.len()
        )
    }
}
