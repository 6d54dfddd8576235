// Compiled lexical patterns for identifiers inside comment text
//
// Every pattern is anchored on word boundaries so a match is always a whole
// token. Boundaries and whitespace are ASCII-only: a non-ASCII letter is not
// a word character, so `Fooクラス` still yields `Foo`. Capture group 1 is the
// identifier for the classifier patterns.

use super::SymbolKind;
use regex::Regex;
use std::sync::LazyLock;

/// Any identifier-shaped token
pub(super) static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)[a-zA-Z_][a-zA-Z0-9_]*(?-u:\b)").unwrap());

/// Starts with an uppercase letter
pub(super) static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)([A-Z][a-zA-Z0-9_]*)(?-u:\b)").unwrap());

/// Lowercase start, followed (after optional whitespace) by an opening paren
pub(super) static FUNCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)([a-z][a-zA-Z0-9_]*)(?-u:\s)*\(").unwrap());

/// Starts with a lowercase letter
pub(super) static VARIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)([a-z][a-zA-Z0-9_]*)(?-u:\b)").unwrap());

/// Uppercase letters, digits and underscores only
pub(super) static CONSTANT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)([A-Z][A-Z0-9_]*)(?-u:\b)").unwrap());

/// Classifier patterns in evaluation order. Earlier entries win on name clashes.
pub(super) fn classifier_patterns() -> [(&'static Regex, SymbolKind); 4] {
    [
        (&*CLASS_RE, SymbolKind::Class),
        (&*FUNCTION_RE, SymbolKind::Function),
        (&*VARIABLE_RE, SymbolKind::Variable),
        (&*CONSTANT_RE, SymbolKind::Constant),
    ]
}
