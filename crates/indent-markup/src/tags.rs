//! HTML tag classes that change how elements are built and rendered.

/// HTML elements that never have children or a closing tag.
pub const HTML_VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "command", "hr", "img", "input", "keygen", "link", "meta",
    "param", "source",
];

/// HTML elements whose content is rendered inline, without added
/// indentation or line breaks.
pub const HTML_NO_INDENT_TAGS: &[&str] = &["pre", "textarea"];

/// Whether `tag` is an HTML void element.
#[must_use]
pub fn is_void_tag(tag: &str) -> bool {
    HTML_VOID_TAGS.contains(&tag)
}

/// Whether `tag` keeps its content verbatim in HTML mode.
#[must_use]
pub fn is_no_indent_tag(tag: &str) -> bool {
    HTML_NO_INDENT_TAGS.contains(&tag)
}
