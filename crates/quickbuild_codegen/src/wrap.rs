//! Comment wrapping for the output preamble.

/// Column limit for wrapped comment text, prefix excluded.
pub const WRAP_WIDTH: usize = 75;

/// Greedily wraps `text` into lines of at most `width` characters, each
/// prefixed with `prefix`.
///
/// Words longer than `width` are split. Empty text yields no lines.
#[must_use]
pub fn wrap_prefixed(prefix: &str, text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(width) {
            let piece_len = piece.len();
            if current_len > 0 && current_len + 1 + piece_len > width {
                lines.push(format!("{prefix}{current}"));
                current.clear();
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(piece);
            current_len += piece_len;
        }
    }
    if current_len > 0 {
        lines.push(format!("{prefix}{current}"));
    }
    lines
}
