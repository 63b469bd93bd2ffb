//! Character substitution tables.
//!
//! Two independent escapers live here:
//!
//! - [`escape_code`] protects literal text embedded in generated softcode so
//!   the interpreter's evaluator reproduces it byte for byte.
//! - [`escape_attr`] turns an arbitrary room or exit identifier into a name
//!   every supported server accepts as an attribute name.

/// Characters the softcode evaluator treats specially, with their escaped form.
///
/// Line breaks are not in this table; they collapse to `%r` in [`escape_code`].
pub const CODE_ESCAPES: &[(char, &str)] = &[
    ('\\', "\\\\"),
    ('$', "\\$"),
    ('%', "\\%"),
    ('(', "\\("),
    (')', "\\)"),
    (',', "\\,"),
    (';', "\\;"),
    ('[', "\\["),
    (']', "\\]"),
    ('^', "\\^"),
    ('{', "\\{"),
    ('}', "\\}"),
];

/// Characters that are invalid in attribute names on at least one server.
///
/// PennMUSH rejects `% ( ) : [ \ ] ^ { }`, TinyMUX rejects
/// `" % * , : ; [ \ ] { | }` and RhostMUSH rejects `" * , : ; [ \ ] { | }`.
/// This is their union; each is replaced by `$` and its lowercase hex code.
/// Space is handled separately and becomes `_`.
pub const BAD_ATTR_CHARS: &[char] = &[
    '"', '%', '(', ')', '*', ',', ':', ';', '[', '\\', ']', '^', '{', '|', '}',
];

/// Escapes literal text for embedding in softcode.
///
/// `\r\n`, `\n`, and `\r` each become a single `%r`.
#[must_use]
pub fn escape_code(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("%r");
            }
            '\n' => out.push_str("%r"),
            c => match CODE_ESCAPES.iter().find(|(bad, _)| *bad == c) {
                Some((_, replacement)) => out.push_str(replacement),
                None => out.push(c),
            },
        }
    }
    out
}

/// Rewrites an identifier into a portable attribute name.
///
/// The mapping is not guaranteed to be stable between releases; it only has
/// to be consistent within one compilation.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == ' ' {
            out.push('_');
        } else if BAD_ATTR_CHARS.contains(&c) {
            out.push('$');
            out.push_str(&format!("{:x}", u32::from(c)));
        } else {
            out.push(c);
        }
    }
    out
}
