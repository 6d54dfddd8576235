//! PhantomJump - Public API for comment symbol lookup
//!
//! Handles language detection, parsing and comment location, then hands off to
//! the symbol scanner. This is the entry point hosts call with a file and a
//! cursor offset.

use crate::comments::{locate_comment, parse_source, CommentSpan, TreeSitterDocument};
use crate::config::PhantomJumpConfig;
use crate::error::PhantomJumpError;
use crate::language::detect_language_from_path;
use crate::navigation::{NavigationOutcome, NavigationSink, NotificationSink};
use crate::symbols::{ResolvedSymbol, SymbolOccurrence};
use crate::utils::{file_utils, offsets};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Classified identifiers of one comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSymbols {
    pub comment: CommentSpan,
    /// Line of the comment start (1-based)
    pub start_line: u32,
    pub symbols: Vec<SymbolOccurrence>,
}

/// Stateless entry point; holds only configuration
#[derive(Debug, Clone, Default)]
pub struct PhantomJump {
    config: PhantomJumpConfig,
}

impl PhantomJump {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PhantomJumpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PhantomJumpConfig {
        &self.config
    }

    /// Detected language of `file_path` if the action is enabled for it
    pub fn language_for(&self, file_path: &str) -> Option<&'static str> {
        detect_language_from_path(file_path).filter(|language| self.config.is_supported(language))
    }

    /// Whether the action should be offered for this file at all
    pub fn is_enabled_for(&self, file_path: &str) -> bool {
        self.language_for(file_path).is_some()
    }

    fn require_language(&self, file_path: &str) -> Result<&'static str> {
        let language = detect_language_from_path(file_path).ok_or_else(|| {
            let extension = Path::new(file_path)
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("");
            PhantomJumpError::UnsupportedExtension(extension.to_string())
        })?;

        if !self.config.is_supported(language) {
            return Err(PhantomJumpError::UnsupportedLanguage(language.to_string()).into());
        }
        Ok(language)
    }

    /// The comment enclosing `offset` in `content`, if any
    pub fn locate_comment(
        &self,
        file_path: &str,
        content: &str,
        offset: usize,
    ) -> Result<Option<CommentSpan>> {
        if offset > content.len() {
            return Err(PhantomJumpError::InvalidOffset {
                offset,
                len: content.len(),
            }
            .into());
        }

        let language = self.require_language(file_path)?;
        let tree = parse_source(content, language)
            .with_context(|| format!("Failed to parse file: {}", file_path))?;
        let document = TreeSitterDocument::new(&tree, content);

        let span = locate_comment(&document, offset);
        match &span {
            Some(comment) => debug!(
                "Offset {} in {} is inside a comment starting at {}",
                offset, file_path, comment.start_offset
            ),
            None => debug!("Offset {} in {} is not inside a comment", offset, file_path),
        }
        Ok(span)
    }

    /// Identifier under the cursor when the cursor is inside a comment
    pub fn find_symbol_in_comment(
        &self,
        file_path: &str,
        content: &str,
        offset: usize,
    ) -> Result<Option<ResolvedSymbol>> {
        let Some(comment) = self.locate_comment(file_path, content, offset)? else {
            return Ok(None);
        };

        let symbol = comment.resolve_at(offset)?;
        if let Some(found) = &symbol {
            debug!(
                "Found symbol '{}' ({:?}) in comment at {}",
                found.name, found.kind, comment.start_offset
            );
        }
        Ok(symbol)
    }

    /// Read `path` from disk and look up the identifier at `offset`
    pub fn find_symbol_in_file(&self, path: &Path, offset: usize) -> Result<Option<ResolvedSymbol>> {
        let content = file_utils::read_file_content(path)?;
        let file_path = path.to_string_lossy();
        self.find_symbol_in_comment(&file_path, &content, offset)
    }

    /// Full jump action: gate on language, find the symbol, hand it to `sink`
    ///
    /// Files the action is not enabled for yield `Ok(None)` without parsing.
    pub fn jump<S>(
        &self,
        file_path: &str,
        content: &str,
        offset: usize,
        sink: &S,
    ) -> Result<Option<NavigationOutcome>>
    where
        S: NavigationSink + ?Sized,
    {
        if !self.is_enabled_for(file_path) {
            debug!("PhantomJump is not enabled for {}", file_path);
            return Ok(None);
        }

        let symbol = self.find_symbol_in_comment(file_path, content, offset)?;
        Ok(symbol.map(|symbol| sink.navigate(&symbol)))
    }

    /// Sink that reports under the configured notification title
    pub fn notification_sink(&self) -> NotificationSink {
        NotificationSink::from(&self.config)
    }

    /// [`jump`](Self::jump) with the configured notification sink
    pub fn jump_and_notify(
        &self,
        file_path: &str,
        content: &str,
        offset: usize,
    ) -> Result<Option<NavigationOutcome>> {
        self.jump(file_path, content, offset, &self.notification_sink())
    }

    /// Classify the identifiers of every comment in a document
    pub fn scan_comments(&self, file_path: &str, content: &str) -> Result<Vec<CommentSymbols>> {
        let language = self.require_language(file_path)?;
        let tree = parse_source(content, language)
            .with_context(|| format!("Failed to parse file: {}", file_path))?;
        let document = TreeSitterDocument::new(&tree, content);

        let results: Vec<CommentSymbols> = document
            .comment_spans()
            .into_iter()
            .map(|comment| {
                let (start_line, _) = offsets::line_column(content, comment.start_offset);
                let symbols = comment.classify();
                CommentSymbols {
                    comment,
                    start_line,
                    symbols,
                }
            })
            .collect();

        debug!(
            "Scanned {} comments from {} file: {}",
            results.len(),
            language,
            file_path
        );
        Ok(results)
    }

    /// Scan many `(file_path, content)` pairs in parallel
    ///
    /// Results keep input order. A file that cannot be scanned is logged and
    /// yields an empty list rather than failing the batch.
    pub fn scan_files_batch(&self, files: &[(String, String)]) -> Vec<Vec<CommentSymbols>> {
        files
            .par_iter()
            .map(|(file_path, content)| {
                self.scan_comments(file_path, content).unwrap_or_else(|e| {
                    warn!("Failed to scan comments in {}: {}", file_path, e);
                    Vec::new()
                })
            })
            .collect()
    }
}
