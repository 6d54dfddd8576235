//! Symbol extraction and classification for comment text
//!
//! Two entry points share one tokenizer:
//! - [`find_at_offset`] answers "which identifier is under the cursor"
//! - [`classify_all`] lists every identifier in a comment with a [`SymbolKind`] hint
//!
//! Both are pure functions over the comment text. Offsets are byte offsets
//! relative to the start of the comment.

mod patterns;

use crate::error::{PhantomJumpError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;

/// Lexical classification of an identifier found in a comment
///
/// This is a hint derived from casing and call syntax, not a guarantee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Class,
    Function,
    Variable,
    Constant,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Class => "class",
            SymbolKind::Function => "function",
            SymbolKind::Variable => "variable",
            SymbolKind::Constant => "constant",
        }
    }

    /// Convert from string representation
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "class" => Some(SymbolKind::Class),
            "function" => Some(SymbolKind::Function),
            "variable" => Some(SymbolKind::Variable),
            "constant" => Some(SymbolKind::Constant),
            _ => None,
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified identifier inside a comment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolOccurrence {
    /// Identifier text, always `text[start_offset..end_offset]`
    pub name: String,
    pub kind: SymbolKind,
    /// Start byte offset relative to the comment start
    pub start_offset: usize,
    /// End byte offset (exclusive) relative to the comment start
    pub end_offset: usize,
}

impl SymbolOccurrence {
    pub fn range(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }
}

/// The identifier under a cursor, with the kind its name was classified as
///
/// `kind` is `None` for identifiers no classifier pattern accepts,
/// e.g. names with a leading underscore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedSymbol {
    pub name: String,
    pub kind: Option<SymbolKind>,
    pub start_offset: usize,
    pub end_offset: usize,
}

fn check_offset(text: &str, offset: usize) -> Result<()> {
    if offset > text.len() {
        return Err(PhantomJumpError::InvalidOffset {
            offset,
            len: text.len(),
        });
    }
    Ok(())
}

/// Find the identifier token whose range touches `offset`
///
/// A token `[start, end)` is hit when `start <= offset <= end`, so a cursor
/// sitting right after the last character still resolves to the token.
/// Returns `None` when the offset is in whitespace or punctuation between tokens.
pub fn find_at_offset(comment_text: &str, offset: usize) -> Result<Option<String>> {
    Ok(identifier_at(comment_text, offset)?.map(|range| comment_text[range].to_string()))
}

fn identifier_at(text: &str, offset: usize) -> Result<Option<Range<usize>>> {
    check_offset(text, offset)?;

    for m in patterns::IDENTIFIER_RE.find_iter(text) {
        if m.start() > offset {
            // Matches come in text order; nothing later can contain the offset
            break;
        }
        if offset <= m.end() {
            return Ok(Some(m.range()));
        }
    }
    Ok(None)
}

/// Enumerate every classified identifier in a comment
///
/// The four patterns (class, function, variable, constant) are applied in that
/// order over the whole text. A name keeps the kind of the first pattern that
/// matched it anywhere, so `FOO_BAR` is a class and `helper(x)` is a function.
/// Output order is pattern order, then text order; each name appears once.
pub fn classify_all(comment_text: &str) -> Vec<SymbolOccurrence> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut symbols = Vec::new();

    for (pattern, kind) in patterns::classifier_patterns() {
        for caps in pattern.captures_iter(comment_text) {
            let Some(group) = caps.get(1) else {
                continue;
            };
            if !seen.insert(group.as_str()) {
                continue;
            }
            symbols.push(SymbolOccurrence {
                name: group.as_str().to_string(),
                kind,
                start_offset: group.start(),
                end_offset: group.end(),
            });
        }
    }

    symbols
}

/// Point query that also reports the kind the name classifies as
///
/// The range is that of the token under the cursor; the kind is the
/// name-level classification from [`classify_all`].
pub fn resolve_at_offset(comment_text: &str, offset: usize) -> Result<Option<ResolvedSymbol>> {
    let Some(range) = identifier_at(comment_text, offset)? else {
        return Ok(None);
    };

    let name = &comment_text[range.clone()];
    let kind = classify_all(comment_text)
        .into_iter()
        .find(|symbol| symbol.name == name)
        .map(|symbol| symbol.kind);

    Ok(Some(ResolvedSymbol {
        name: name.to_string(),
        kind,
        start_offset: range.start,
        end_offset: range.end,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(String, SymbolKind)> {
        classify_all(text)
            .into_iter()
            .map(|s| (s.name, s.kind))
            .collect()
    }

    #[test]
    fn test_find_inside_token() {
        assert_eq!(
            find_at_offset("fooBar does x", 2).unwrap(),
            Some("fooBar".to_string())
        );
    }

    #[test]
    fn test_find_at_token_start_and_end() {
        assert_eq!(
            find_at_offset("fooBar does x", 0).unwrap(),
            Some("fooBar".to_string())
        );
        // Cursor right after the last character still counts
        assert_eq!(
            find_at_offset("fooBar does x", 6).unwrap(),
            Some("fooBar".to_string())
        );
    }

    #[test]
    fn test_find_in_whitespace_gap() {
        assert_eq!(find_at_offset("fooBar   baz", 7).unwrap(), None);
        assert_eq!(find_at_offset("fooBar   baz", 8).unwrap(), None);
        assert_eq!(
            find_at_offset("fooBar   baz", 9).unwrap(),
            Some("baz".to_string())
        );
    }

    #[test]
    fn test_find_prefers_earlier_token_on_shared_boundary() {
        // Offset 3 ends `Foo`; `bar` only starts after the dot
        assert_eq!(find_at_offset("Foo.bar", 3).unwrap(), Some("Foo".to_string()));
        assert_eq!(find_at_offset("Foo.bar", 4).unwrap(), Some("bar".to_string()));
    }

    #[test]
    fn test_find_end_of_text() {
        let text = "// see Helper";
        assert_eq!(
            find_at_offset(text, text.len()).unwrap(),
            Some("Helper".to_string())
        );
    }

    #[test]
    fn test_find_rejects_offset_past_end() {
        let err = find_at_offset("abc", 4).unwrap_err();
        assert_eq!(err, PhantomJumpError::InvalidOffset { offset: 4, len: 3 });
    }

    #[test]
    fn test_find_in_empty_text() {
        assert_eq!(find_at_offset("", 0).unwrap(), None);
    }

    #[test]
    fn test_find_ignores_digit_prefixed_runs() {
        assert_eq!(find_at_offset("// 42abc", 5).unwrap(), None);
    }

    #[test]
    fn test_find_underscore_identifier() {
        assert_eq!(
            find_at_offset("// uses _cache here", 5).unwrap(),
            Some("uses".to_string())
        );
        assert_eq!(
            find_at_offset("// uses _cache here", 10).unwrap(),
            Some("_cache".to_string())
        );
    }

    #[test]
    fn test_find_after_multibyte_text() {
        // "é" is two bytes; offsets are bytes
        let text = "// café Widget";
        let start = text.find("Widget").unwrap();
        assert_eq!(
            find_at_offset(text, start + 2).unwrap(),
            Some("Widget".to_string())
        );
        // ASCII boundary before the "é"
        assert_eq!(find_at_offset(text, 4).unwrap(), Some("caf".to_string()));
        let names: Vec<String> = classify_all(text).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Widget", "caf"]);
    }

    #[test]
    fn test_identifiers_glued_to_japanese_text() {
        assert_eq!(
            find_at_offset("// Fooクラスを参照", 4).unwrap(),
            Some("Foo".to_string())
        );
        let symbols = classify_all("// Fooクラスを参照");
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "Foo");
        assert_eq!(symbols[0].kind, SymbolKind::Class);
        assert_eq!(symbols[0].range(), 3..6);

        let text = "// 詳細はhelper()を見る";
        let start = text.find("helper").unwrap();
        assert_eq!(
            find_at_offset(text, start + 1).unwrap(),
            Some("helper".to_string())
        );
        let symbols = classify_all(text);
        assert_eq!(symbols[0].name, "helper");
        assert_eq!(symbols[0].kind, SymbolKind::Function);
    }

    #[test]
    fn test_ideographic_space_does_not_make_a_call() {
        let symbols = classify_all("// helper\u{3000}(x)");
        assert_eq!(symbols[0].name, "helper");
        assert_eq!(symbols[0].kind, SymbolKind::Variable);
    }

    #[test]
    fn test_containment_over_every_offset() {
        let text = "/* call Foo.bar(baz) then QUX_1 */";
        for offset in 0..=text.len() {
            let expected = patterns::IDENTIFIER_RE
                .find_iter(text)
                .find(|m| m.start() <= offset && offset <= m.end())
                .map(|m| m.as_str().to_string());
            assert_eq!(find_at_offset(text, offset).unwrap(), expected, "offset {}", offset);
        }
    }

    #[test]
    fn test_classify_all_caps_is_class() {
        assert_eq!(
            kinds("FOO_BAR is a Helper"),
            vec![
                ("FOO_BAR".to_string(), SymbolKind::Class),
                ("Helper".to_string(), SymbolKind::Class),
                ("is".to_string(), SymbolKind::Variable),
                ("a".to_string(), SymbolKind::Variable),
            ]
        );
    }

    #[test]
    fn test_classify_function_beats_variable() {
        assert_eq!(
            kinds("call helper(x)"),
            vec![
                ("helper".to_string(), SymbolKind::Function),
                ("call".to_string(), SymbolKind::Variable),
                ("x".to_string(), SymbolKind::Variable),
            ]
        );
    }

    #[test]
    fn test_classify_name_level_precedence() {
        // First mention is bare, second is a call: the name is still a function
        let symbols = classify_all("bar is set, then bar() runs");
        let bar = symbols.iter().find(|s| s.name == "bar").unwrap();
        assert_eq!(bar.kind, SymbolKind::Function);
        assert_eq!(bar.start_offset, 17);
        assert_eq!(symbols.iter().filter(|s| s.name == "bar").count(), 1);
    }

    #[test]
    fn test_classify_member_reference() {
        assert_eq!(
            kinds("// see Foo.bar() for details"),
            vec![
                ("Foo".to_string(), SymbolKind::Class),
                ("bar".to_string(), SymbolKind::Function),
                ("see".to_string(), SymbolKind::Variable),
                ("for".to_string(), SymbolKind::Variable),
                ("details".to_string(), SymbolKind::Variable),
            ]
        );
    }

    #[test]
    fn test_classify_empty_and_symbol_free() {
        assert!(classify_all("").is_empty());
        assert!(classify_all("// 123 -- ** 42").is_empty());
    }

    #[test]
    fn test_classify_skips_underscore_prefixed_names() {
        assert!(kinds("_cache").is_empty());
    }

    #[test]
    fn test_classify_offsets_slice_back_to_name() {
        let text = "/** Returns a Widget built by makeWidget (see DEFAULT_SIZE). */";
        for symbol in classify_all(text) {
            assert!(symbol.start_offset < symbol.end_offset);
            assert_eq!(&text[symbol.range()], symbol.name);
        }
    }

    #[test]
    fn test_classify_is_deduplicated_and_idempotent() {
        let text = "Foo calls foo(), Foo again, foo again, FOO";
        let first = classify_all(text);
        let second = classify_all(text);
        assert_eq!(first, second);

        let mut names: Vec<&str> = first.iter().map(|s| s.name.as_str()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_resolve_reports_kind() {
        let text = "// see Foo.bar() for details";
        let foo = resolve_at_offset(text, 8).unwrap().unwrap();
        assert_eq!(foo.name, "Foo");
        assert_eq!(foo.kind, Some(SymbolKind::Class));
        assert_eq!((foo.start_offset, foo.end_offset), (7, 10));

        let bar = resolve_at_offset(text, 12).unwrap().unwrap();
        assert_eq!(bar.name, "bar");
        assert_eq!(bar.kind, Some(SymbolKind::Function));
    }

    #[test]
    fn test_resolve_unclassified_identifier() {
        let resolved = resolve_at_offset("// _cache", 5).unwrap().unwrap();
        assert_eq!(resolved.name, "_cache");
        assert_eq!(resolved.kind, None);
    }

    #[test]
    fn test_resolve_in_gap() {
        assert_eq!(resolve_at_offset("a   b", 2).unwrap(), None);
    }

    #[test]
    fn test_symbol_kind_strings() {
        for kind in [
            SymbolKind::Class,
            SymbolKind::Function,
            SymbolKind::Variable,
            SymbolKind::Constant,
        ] {
            assert_eq!(SymbolKind::from_string(&kind.to_string()), Some(kind));
        }
        assert_eq!(SymbolKind::from_string("module"), None);
    }
}
