// Offset helpers
//
// Everything inside the crate works in UTF-8 byte offsets (tree-sitter's unit).
// Hosts that count characters (Python str indices) convert at the boundary.

/// Whether `text` is a single identifier: `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Byte offset of the `char_offset`-th character, or `None` past the end
///
/// `char_offset == text.chars().count()` maps to `text.len()`.
pub fn char_to_byte_offset(text: &str, char_offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .nth(char_offset)
}

/// Number of characters before `byte_offset`
///
/// Offsets inside a multi-byte character count that character as not yet reached.
pub fn byte_to_char_offset(text: &str, byte_offset: usize) -> usize {
    text.char_indices()
        .take_while(|(byte, _)| *byte < byte_offset)
        .count()
}

/// 1-based line and 0-based byte column of `byte_offset`
pub fn line_column(text: &str, byte_offset: usize) -> (u32, u32) {
    let clamped = byte_offset.min(text.len());
    let before = &text.as_bytes()[..clamped];
    let line = before.iter().filter(|b| **b == b'\n').count() as u32 + 1;
    let column = before
        .iter()
        .rposition(|b| *b == b'\n')
        .map_or(clamped, |newline| clamped - newline - 1) as u32;
    (line, column)
}
