// PhantomJump Core - find and classify identifiers mentioned in source comments
//
// Given a document and a cursor offset, locate the enclosing comment (tree-sitter),
// pick out the identifier under the cursor, and hand it to a navigation sink.
// With the `python` feature this crate also builds as a PyO3 extension module.

pub mod comments;
pub mod config;
pub mod error;
pub mod language;
pub mod manager;
pub mod navigation;
pub mod symbols;
pub mod utils;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use comments::{locate_comment, CommentSpan, SyntaxTreeProvider, TreeSitterDocument};
pub use config::PhantomJumpConfig;
pub use error::PhantomJumpError;
pub use manager::{CommentSymbols, PhantomJump};
pub use navigation::{
    DeclarationIndex, DefinitionLocation, EmptySymbolIndex, IndexedSink, NavigationOutcome,
    NavigationSink, NotificationSink, SymbolIndex,
};
pub use symbols::{
    classify_all, find_at_offset, resolve_at_offset, ResolvedSymbol, SymbolKind, SymbolOccurrence,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// PhantomJump Python module
#[cfg(feature = "python")]
#[pymodule]
fn phantom_jump(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::find_symbol_at_offset, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::classify_comment, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::locate_comment, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::find_symbol_in_comment, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::detect_language, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::supported_languages, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::scan_files_batch, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PySymbolOccurrence>()?;
    m.add_class::<bindings::PyResolvedSymbol>()?;
    m.add_class::<bindings::PyCommentSpan>()?;
    m.add_class::<bindings::PyCommentSymbols>()?;

    Ok(())
}
