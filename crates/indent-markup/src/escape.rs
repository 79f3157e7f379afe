//! XML escaping for element text, names and attribute values.

use std::borrow::Cow;

/// Escape text content, tag names and attribute names.
///
/// Replaces `&`, `<` and `>`. Returns the input unchanged when nothing needs
/// escaping.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape_xml(text, false)
}

/// Escape an attribute value for use inside double quotes.
///
/// In addition to the text escapes, replaces both quote characters and
/// encodes tab, newline and carriage return as character references so they
/// survive attribute-value normalization.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    escape_xml(value, true)
}

fn escape_xml(text: &str, attr: bool) -> Cow<'_, str> {
    let needs_escape = |ch: char| match ch {
        '&' | '<' | '>' => true,
        '"' | '\'' | '\n' | '\r' | '\t' => attr,
        _ => false,
    };
    if !text.contains(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if attr => result.push_str("&quot;"),
            '\'' if attr => result.push_str("&apos;"),
            '\n' if attr => result.push_str("&#10;"),
            '\r' if attr => result.push_str("&#13;"),
            '\t' if attr => result.push_str("&#9;"),
            _ => result.push(ch),
        }
    }
    Cow::Owned(result)
}
