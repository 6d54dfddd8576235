// PyO3 Bindings Module
//
// Python bindings for the comment locator and symbol scanner.
// Python indexes strings by character, so every offset crossing this boundary is
// converted between character and UTF-8 byte offsets here.

mod api;
mod comment;
mod symbol;

// Re-export for lib.rs
pub use api::{
    classify_comment, detect_language, find_symbol_at_offset, find_symbol_in_comment,
    locate_comment, scan_files_batch, supported_languages,
};
pub use comment::{PyCommentSpan, PyCommentSymbols};
pub use symbol::{PyResolvedSymbol, PySymbolOccurrence};
