// PySymbolOccurrence / PyResolvedSymbol - PyO3 wrappers for scanner results
//
// Offsets are stored as character offsets relative to the comment text.

use crate::symbols::{ResolvedSymbol, SymbolOccurrence};
use crate::utils::offsets::byte_to_char_offset;
use pyo3::prelude::*;

/// Python-accessible classified identifier
#[pyclass(name = "SymbolOccurrence")]
pub struct PySymbolOccurrence {
    inner: SymbolOccurrence,
    start_char: usize,
    end_char: usize,
}

impl PySymbolOccurrence {
    /// Wrap an occurrence found in `comment_text`
    pub fn from_occurrence(occurrence: SymbolOccurrence, comment_text: &str) -> Self {
        PySymbolOccurrence {
            start_char: byte_to_char_offset(comment_text, occurrence.start_offset),
            end_char: byte_to_char_offset(comment_text, occurrence.end_offset),
            inner: occurrence,
        }
    }
}

#[pymethods]
impl PySymbolOccurrence {
    #[getter]
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    #[getter]
    fn kind(&self) -> String {
        self.inner.kind.to_string()
    }

    #[getter]
    fn start_offset(&self) -> usize {
        self.start_char
    }

    #[getter]
    fn end_offset(&self) -> usize {
        self.end_char
    }

    fn __repr__(&self) -> String {
        format!(
            "SymbolOccurrence(name='{}', kind='{}', start={}, end={})",
            self.inner.name, self.inner.kind, self.start_char, self.end_char
        )
    }
}

/// Python-accessible identifier under a cursor
#[pyclass(name = "ResolvedSymbol")]
pub struct PyResolvedSymbol {
    inner: ResolvedSymbol,
    start_char: usize,
    end_char: usize,
}

impl PyResolvedSymbol {
    pub fn from_resolved(symbol: ResolvedSymbol, comment_text: &str) -> Self {
        PyResolvedSymbol {
            start_char: byte_to_char_offset(comment_text, symbol.start_offset),
            end_char: byte_to_char_offset(comment_text, symbol.end_offset),
            inner: symbol,
        }
    }
}

#[pymethods]
impl PyResolvedSymbol {
    #[getter]
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    /// None when no classifier pattern accepts the name
    #[getter]
    fn kind(&self) -> Option<String> {
        self.inner.kind.map(|kind| kind.to_string())
    }

    #[getter]
    fn start_offset(&self) -> usize {
        self.start_char
    }

    #[getter]
    fn end_offset(&self) -> usize {
        self.end_char
    }

    fn __repr__(&self) -> String {
        format!(
            "ResolvedSymbol(name='{}', kind={:?})",
            self.inner.name,
            self.inner.kind.map(|kind| kind.as_str())
        )
    }
}
